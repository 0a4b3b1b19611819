//! Text normalization
//!
//! Every string that ends up in grid cells goes through [`normalize`] first.

/// Lowercase `text` and drop every character that is not a letter `a..z`
///
/// Applied to puzzle words and to the hidden message alike, so the grid only
/// ever holds lowercase ASCII letters.
///
/// # Examples
/// ```
/// use findthatword::core::normalize;
///
/// assert_eq!(normalize("Ice-Cream Van"), "icecreamvan");
/// assert_eq!(normalize("R2D2"), "rd");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_punctuation() {
        assert_eq!(normalize("hi there!"), "hithere");
        assert_eq!(normalize("don't panic"), "dontpanic");
    }

    #[test]
    fn lowercases_letters() {
        assert_eq!(normalize("CaT"), "cat");
    }

    #[test]
    fn drops_digits_and_non_ascii() {
        assert_eq!(normalize("3 blind mice"), "blindmice");
        assert_eq!(normalize("café"), "caf");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 -- !!"), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize("Mixed Case, With Punctuation.");
        assert_eq!(normalize(&once), once);
    }
}
