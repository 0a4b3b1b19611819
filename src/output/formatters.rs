//! Formatting utilities for terminal output

use crate::core::Placement;

/// Format a placement as `(x, y) →`, 1-based for display
#[must_use]
pub fn format_placement(placement: Option<Placement>) -> String {
    placement.map_or_else(
        || "unplaced".to_string(),
        |p| {
            format!(
                "({}, {}) {}",
                p.origin.x + 1,
                p.origin.y + 1,
                p.direction.arrow()
            )
        },
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
