//! Display functions for puzzles and command results

use super::formatters::{create_progress_bar, format_placement};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::core::Direction;
use crate::render::{CellView, RenderConfig, RenderView, Rgba};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

fn paint(text: &str, background: Rgba) -> ColoredString {
    let (r, g, b) = background.to_rgb8_over_white();
    text.black().on_truecolor(r, g, b)
}

fn cell_text(cell: CellView, config: &RenderConfig, color: bool) -> String {
    let letter = cell.letter.to_ascii_uppercase().to_string();
    if !color {
        return letter;
    }
    let highlight = if cell.selected {
        Some(config.selected_word)
    } else if cell.in_word && config.show_solution {
        Some(config.word)
    } else {
        None
    };
    match highlight {
        Some(background) => paint(&letter, background).to_string(),
        None => {
            let (r, g, b) = config.padding.to_rgb8_over_white();
            letter.truecolor(r, g, b).to_string()
        }
    }
}

/// Render a puzzle for the terminal
///
/// With `color` off the output is plain text and the solution, if shown, is
/// given as a location next to each clue.
#[must_use]
pub fn render_puzzle(view: &RenderView, config: &RenderConfig, color: bool) -> String {
    let mut out = String::new();

    if config.show_title {
        if !view.title.is_empty() {
            let title = if color {
                view.title.bright_cyan().bold().to_string()
            } else {
                view.title.clone()
            };
            let _ = writeln!(out, "{title}");
            let _ = writeln!(out, "{}", "═".repeat(view.title.chars().count().max(view.width * 2)));
        }
        if !view.narrative.is_empty() {
            let _ = writeln!(out, "{}\n", view.narrative);
        }
    }

    if config.show_grid {
        for y in 0..view.height {
            let row: Vec<String> = view
                .row(y)
                .iter()
                .map(|&cell| cell_text(cell, config, color))
                .collect();
            let _ = writeln!(out, "  {}", row.join(" "));
        }
        out.push('\n');
    }

    if config.show_words {
        for (i, entry) in view.entries.iter().enumerate() {
            let marker = if entry.selected { '▶' } else { ' ' };
            let mut line = format!("{marker}{:>3}. {}", i + 1, entry.clue);
            if config.show_solution {
                if entry.text != entry.clue {
                    let _ = write!(line, " [{}]", entry.text);
                }
                let _ = write!(line, "  {}", format_placement(entry.placement));
            }
            if color && entry.placement.is_none() {
                let _ = writeln!(out, "{}", line.red());
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
    }

    out
}

/// Print a puzzle to stdout
pub fn print_puzzle(view: &RenderView, config: &RenderConfig, color: bool) {
    print!("{}", render_puzzle(view, config, color));
}

/// Print the result of puzzle analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let stats = &result.stats;
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE ANALYSIS:".bright_cyan().bold(),
        result.title.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Layout:".bright_cyan().bold());
    println!(
        "   Grid:          {}x{} (optimum {})",
        stats.width, stats.height, stats.optimum_size
    );
    println!(
        "   Words:         {} placed of {}",
        format!("{}", stats.placed).green(),
        stats.words
    );
    println!("   Longest word:  {}", stats.longest_word);
    println!("   Letters:       {}", stats.total_letters);
    println!(
        "   Fill:          [{}] {}",
        create_progress_bar(stats.fill_ratio(), 1.0, 30).green(),
        format!("{:.1}%", stats.fill_ratio() * 100.0).bright_yellow()
    );
    println!(
        "   Shared cells:  {} (saves {} letters)",
        stats.shared_cells,
        stats.overlap_savings()
    );

    println!("\n🧭 {}", "Directions:".bright_cyan().bold());
    for direction in Direction::ALL {
        let count = stats.directions.get(&direction).copied().unwrap_or(0);
        println!(
            "   {} {:<10} {count:3}",
            direction.arrow(),
            direction.to_string()
        );
    }

    println!();
    if result.is_sound() {
        println!("{}", "✅ Every word reads back from the grid".green().bold());
    } else {
        for problem in &result.problems {
            println!("{}", format!("❌ {problem}").red());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles generated: {}", result.total_puzzles);
    println!(
        "   Success rate:      {}",
        format!("{:.1}%", result.success_rate()).bright_yellow().bold()
    );
    println!(
        "   Failed:            {}",
        format!("{}", result.failed).yellow()
    );
    println!("   Average growth:    {:.2}", result.average_growth);
    println!("   Max growth:        {}", result.max_growth);
    println!("   Average fill:      {:.1}%", result.average_fill * 100.0);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Grid widths:".bright_cyan().bold());
    let mut widths: Vec<_> = result.size_distribution.iter().collect();
    widths.sort_unstable();
    for (&width, &count) in widths {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {width:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
