//! tarot-mystic CLI
//!
//! Interactive tarot reader, plus one-shot commands for scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use tarot_mystic::config::{default_deck_path, load_deck, resolve_source};
use tarot_mystic::deck::Deck;
use tarot_mystic::draw::{draw_daily, draw_three};
use tarot_mystic::error::AppError;
use tarot_mystic::logging;
use tarot_mystic::report::{format_deck, format_spread};
use tarot_mystic::session::Session;
use tarot_mystic::tui;
use tarot_mystic::types::OutputFormat;

#[derive(Parser)]
#[command(name = "tarot-mystic")]
#[command(about = "Draw a daily card or a three-card spread")]
#[command(version)]
struct Cli {
    /// Deck file (JSON array of cards). Default: user config, then built-in
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive reader (default)
    Tui {
        /// Seed the random source for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the card of the day
    Daily {
        /// Date to read for, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Draw a past / present / future spread
    Three {
        /// Seed the random source
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List every card in the deck
    Deck {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Tui { seed: None });

    match &command {
        Commands::Tui { .. } => logging::init_tui(cli.verbose),
        _ => logging::init_stderr(cli.verbose),
    }

    let result = resolve_deck(cli.deck).and_then(|deck| match command {
        Commands::Tui { seed } => cmd_tui(deck, seed),
        Commands::Daily { date, format } => cmd_daily(&deck, date, format.into()),
        Commands::Three { seed, format } => cmd_three(&deck, seed, format.into()),
        Commands::Deck { format } => cmd_deck(&deck, format.into()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// EFFECT INJECTION
// ============================================================================

fn resolve_deck(explicit: Option<PathBuf>) -> Result<Deck, AppError> {
    let source = resolve_source(explicit, &default_deck_path());
    Ok(load_deck(&source)?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Seeded generator if asked for one, thread-local otherwise.
fn random_source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(deck: Deck, seed: Option<u64>) -> Result<(), AppError> {
    let session = Session::mount(&deck, today());
    let mut rng = random_source(seed);

    tui::run(tui::App::new(deck, session), &mut *rng)?;
    Ok(())
}

fn cmd_daily(deck: &Deck, date: Option<NaiveDate>, format: OutputFormat) -> Result<(), AppError> {
    let spread = draw_daily(deck, date.unwrap_or_else(today));
    print!("{}", format_spread(&spread, format));
    Ok(())
}

fn cmd_three(deck: &Deck, seed: Option<u64>, format: OutputFormat) -> Result<(), AppError> {
    let mut rng = random_source(seed);
    let spread = draw_three(deck, &mut *rng)?;
    print!("{}", format_spread(&spread, format));
    Ok(())
}

fn cmd_deck(deck: &Deck, format: OutputFormat) -> Result<(), AppError> {
    print!("{}", format_deck(deck, format));
    Ok(())
}
