//! Find That Word - CLI
//!
//! Generate, edit, inspect and export word search puzzles.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use findthatword::{
    commands::{
        BenchmarkConfig, EditAction, GenerateConfig, analyze_puzzle, apply_edit,
        generate_puzzle, run_benchmark,
    },
    core::MAX_GRID_SIDE,
    export::{ExportOptions, to_text},
    logging::init_logger,
    output::{print_analysis_result, print_benchmark_result, print_puzzle},
    puzzle::{MoveDirection, Puzzle},
    render::RenderConfig,
    storage,
    wordlists::{WORDS, WordEntry, loader::{entries_from_slice, load_from_file}},
};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "findthatword",
    about = "Word search puzzle generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Seed the random source for reproducible layouts
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a new puzzle from a word list
    Generate(GenerateArgs),

    /// Display a saved puzzle
    Show {
        file: PathBuf,

        #[command(flatten)]
        view: ViewArgs,

        /// Highlight the word at this list position (1-based)
        #[arg(long)]
        select: Option<usize>,
    },

    /// Export a saved puzzle as plain text
    Export {
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Change a saved puzzle in place
    Edit {
        file: PathBuf,

        #[command(subcommand)]
        action: EditCommand,
    },

    /// Report layout statistics for a saved puzzle
    Analyze { file: PathBuf },

    /// Generate many random puzzles and measure the placement search
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Words per puzzle
        #[arg(short = 'k', long, default_value = "12")]
        words: usize,

        /// Force the grid size, e.g. 12x10
        #[arg(long, value_parser = parse_size)]
        size: Option<(usize, usize)>,

        /// Word list file to sample from instead of the built-in list
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Words to hide, each optionally as `word|clue`
    words: Vec<String>,

    /// Read words from a file, one `word` or `word|clue` per line
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Add this many random words from the built-in sample list
    #[arg(long)]
    sample: Option<usize>,

    /// Force the grid size, e.g. 12x10
    #[arg(long, value_parser = parse_size)]
    size: Option<(usize, usize)>,

    /// Fill spare cells with a hidden message
    #[arg(long)]
    hidden: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    narrative: Option<String>,

    /// Save the puzzle as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a plain-text export
    #[arg(long)]
    text: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)] // Independent display switches
struct ViewArgs {
    /// Show where each word is hidden
    #[arg(long)]
    solution: bool,

    #[arg(long)]
    no_title: bool,

    #[arg(long)]
    no_grid: bool,

    #[arg(long)]
    no_words: bool,

    /// Disable colours
    #[arg(long)]
    plain: bool,
}

impl ViewArgs {
    fn render_config(self) -> RenderConfig {
        RenderConfig {
            show_title: !self.no_title,
            show_grid: !self.no_grid,
            show_words: !self.no_words,
            show_solution: self.solution,
            ..RenderConfig::default()
        }
    }

    const fn export_options(self) -> ExportOptions {
        ExportOptions {
            show_title: !self.no_title,
            show_grid: !self.no_grid,
            show_words: !self.no_words,
            show_solution: self.solution,
        }
    }
}

#[derive(Subcommand)]
enum EditCommand {
    /// Append a word
    Add {
        word: String,
        #[arg(long)]
        clue: Option<String>,
    },
    /// Remove the word at a list position (1-based)
    Delete { index: usize },
    /// Replace a word's text and clue
    Update {
        index: usize,
        word: String,
        #[arg(long)]
        clue: Option<String>,
    },
    /// Move a word up or down the list
    Move { index: usize, direction: Shift },
    /// Sort the word list alphabetically
    Sort,
    /// Force the grid size (e.g. 12x10), or `auto` for automatic sizing
    Resize { size: String },
    /// Hide a message in the spare cells; omit it for random letters
    Hidden { message: Option<String> },
    Title { title: String },
    Narrative { narrative: String },
    /// Lay out every word again
    Shuffle,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shift {
    Up,
    Down,
}

impl From<Shift> for MoveDirection {
    fn from(shift: Shift) -> Self {
        match shift {
            Shift::Up => Self::Up,
            Shift::Down => Self::Down,
        }
    }
}

/// Parse `WIDTHxHEIGHT`, each side at most `MAX_GRID_SIDE`
fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=MAX_GRID_SIDE).contains(n))
            .ok_or_else(|| format!("invalid dimension '{v}' (1 to {MAX_GRID_SIDE})"))
    };
    Ok((parse(w)?, parse(h)?))
}

/// Convert a 1-based list position to an index
fn list_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .context("word positions start at 1")
}

fn fresh_puzzle(seed: Option<u64>) -> Puzzle {
    seed.map_or_else(Puzzle::new, Puzzle::with_seed)
}

fn load_puzzle(path: &Path, seed: Option<u64>) -> Result<Puzzle> {
    storage::load_into(path, fresh_puzzle(seed))
        .with_context(|| format!("Failed to load {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    // Default to a small demo puzzle if no command given
    let command = cli.command.unwrap_or_else(|| {
        Commands::Generate(GenerateArgs {
            words: Vec::new(),
            file: None,
            sample: Some(10),
            size: None,
            hidden: None,
            title: Some("Sampler".to_string()),
            narrative: None,
            output: None,
            text: None,
            view: ViewArgs::default(),
        })
    });

    match command {
        Commands::Generate(args) => run_generate_command(args, cli.seed),
        Commands::Show { file, view, select } => {
            let puzzle = load_puzzle(&file, cli.seed)?;
            let selected = select.map(list_index).transpose()?;
            print_puzzle(
                &puzzle.render_view(selected),
                &view.render_config(),
                !view.plain,
            );
            Ok(())
        }
        Commands::Export { file, output, view } => {
            let puzzle = load_puzzle(&file, cli.seed)?;
            match output {
                Some(path) => write_text(&puzzle, &path, view.export_options()),
                None => {
                    print!("{}", to_text(&puzzle, &view.export_options()));
                    Ok(())
                }
            }
        }
        Commands::Edit { file, action } => run_edit_command(&file, action, cli.seed),
        Commands::Analyze { file } => {
            let puzzle = load_puzzle(&file, cli.seed)?;
            print_analysis_result(&analyze_puzzle(&puzzle));
            Ok(())
        }
        Commands::Benchmark {
            count,
            words,
            size,
            file,
        } => {
            let pool = match file {
                Some(path) => load_from_file(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => entries_from_slice(WORDS),
            };
            let config = BenchmarkConfig {
                puzzles: count,
                words_per_puzzle: words,
                size,
                seed: cli.seed,
                show_progress: true,
            };
            println!("🎯 Generating {count} puzzles of {words} words...");
            let result = run_benchmark(&config, &pool)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_generate_command(args: GenerateArgs, seed: Option<u64>) -> Result<()> {
    let GenerateArgs {
        words,
        file,
        sample,
        size,
        hidden,
        title,
        narrative,
        output,
        text,
        view,
    } = args;

    let mut entries: Vec<WordEntry> = words
        .iter()
        .map(String::as_str)
        .filter_map(WordEntry::parse)
        .collect();
    if let Some(path) = file {
        entries.extend(
            load_from_file(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        );
    }
    if let Some(count) = sample {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let pool = entries_from_slice(WORDS);
        entries.extend(pool.choose_multiple(&mut rng, count).cloned());
    }
    if entries.is_empty() {
        bail!("No words given; pass words, --file or --sample");
    }

    let config = GenerateConfig {
        entries,
        title,
        narrative,
        hidden_message: hidden,
        size,
        seed,
    };
    let result = generate_puzzle(config)?;
    if let Some(e) = &result.placement_error {
        warn!("{e}");
    }

    print_puzzle(
        &result.puzzle.render_view(None),
        &view.render_config(),
        !view.plain,
    );
    if let Some(path) = output {
        storage::save(&result.puzzle, &path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }
    if let Some(path) = text {
        write_text(&result.puzzle, &path, view.export_options())?;
    }
    Ok(())
}

fn write_text(puzzle: &Puzzle, path: &Path, options: ExportOptions) -> Result<()> {
    fs::write(path, to_text(puzzle, &options))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported puzzle to {}", path.display());
    Ok(())
}

fn run_edit_command(file: &Path, command: EditCommand, seed: Option<u64>) -> Result<()> {
    let mut puzzle = load_puzzle(file, seed)?;

    let action = match command {
        EditCommand::Add { word, clue } => EditAction::Add { text: word, clue },
        EditCommand::Delete { index } => EditAction::Delete {
            index: list_index(index)?,
        },
        EditCommand::Update { index, word, clue } => EditAction::Update {
            index: list_index(index)?,
            text: word,
            clue,
        },
        EditCommand::Move { index, direction } => EditAction::Move {
            index: list_index(index)?,
            direction: direction.into(),
        },
        EditCommand::Sort => EditAction::Sort,
        EditCommand::Resize { size } if size.eq_ignore_ascii_case("auto") => {
            EditAction::Resize { size: None }
        }
        EditCommand::Resize { size } => EditAction::Resize {
            size: Some(parse_size(&size).map_err(anyhow::Error::msg)?),
        },
        EditCommand::Hidden { message } => EditAction::HiddenMessage { message },
        EditCommand::Title { title } => EditAction::Title { title },
        EditCommand::Narrative { narrative } => EditAction::Narrative { narrative },
        EditCommand::Shuffle => EditAction::Shuffle,
    };

    let outcome = apply_edit(&mut puzzle, action)?;
    info!("{}", outcome.summary);
    if let Some(e) = &outcome.placement_error {
        warn!("{e}");
    }

    storage::save(&puzzle, file).with_context(|| format!("Failed to save {}", file.display()))?;
    Ok(())
}
