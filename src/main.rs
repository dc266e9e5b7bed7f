//! Command-line front end for building and checking slide decks.
//!
//! # Usage
//!
//! Build a built-in deck into the current directory:
//! ```sh
//! deckwright build pitch
//! ```
//!
//! Build every deck into a directory:
//! ```sh
//! deckwright build all -o decks/
//! ```
//!
//! Render a YAML outline and look at the result:
//! ```sh
//! deckwright render quarterly.yaml -o quarterly.pptx
//! deckwright inspect quarterly.pptx
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deckwright::decks::DeckKind;
use deckwright::inspect::DeckSummary;
use deckwright::outline::Outline;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Build fixed PowerPoint slide decks
#[derive(Parser, Debug)]
#[command(name = "deckwright", version, about)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a built-in deck
    Build {
        #[arg(value_enum)]
        deck: DeckArg,

        /// Output file; a directory when building all decks
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Render a YAML outline into a deck
    Render {
        #[arg(value_name = "OUTLINE")]
        outline: PathBuf,

        /// Output file (default: the outline's name with a .pptx extension)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print a summary of a .pptx file
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the built-in decks
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DeckArg {
    Demo,
    Pitch,
    All,
}

impl DeckArg {
    fn kinds(self) -> Vec<DeckKind> {
        match self {
            DeckArg::Demo => vec![DeckKind::Demo],
            DeckArg::Pitch => vec![DeckKind::Pitch],
            DeckArg::All => DeckKind::ALL.to_vec(),
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Where a deck goes: the given file, a file inside the given directory, or
/// the deck's default name in the current directory.
fn deck_output(kind: DeckKind, output: Option<&Path>, many: bool) -> PathBuf {
    match output {
        Some(path) if many || path.is_dir() => path.join(kind.default_file_name()),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(kind.default_file_name()),
    }
}

fn build(deck: DeckArg, output: Option<&Path>) -> Result<()> {
    let kinds = deck.kinds();
    let many = kinds.len() > 1;

    if many && let Some(dir) = output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    for kind in kinds {
        let path = deck_output(kind, output, many);
        let pres = kind
            .build()
            .with_context(|| format!("Failed to build deck '{}'", kind))?;
        pres.save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}

fn render(outline_path: &Path, output: Option<&Path>) -> Result<()> {
    let outline = Outline::load(outline_path)
        .with_context(|| format!("Failed to load outline {}", outline_path.display()))?;
    let pres = outline
        .render()
        .with_context(|| format!("Failed to render outline {}", outline_path.display()))?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| outline_path.with_extension("pptx"));
    pres.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved: {}", path.display());

    Ok(())
}

fn inspect(file: &Path) -> Result<()> {
    let summary =
        DeckSummary::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    print!("{}", summary);
    Ok(())
}

fn list() {
    for kind in DeckKind::ALL {
        println!("{:<8} {}", kind.name(), kind.description());
        println!("{:<8} -> {}", "", kind.default_file_name());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Build { deck, output } => build(deck, output.as_deref()),
        Command::Render { outline, output } => render(&outline, output.as_deref()),
        Command::Inspect { file } => inspect(&file),
        Command::List => {
            list();
            Ok(())
        },
    }
}
