//! Deck Analyzer CLI
//!
//! Diffs decklists, scans decks for tokens and emblems, and recommends basic
//! lands. Card data comes from Scryfall unless an offline card file is given.

use clap::{Parser, Subcommand};
use deck_analyzer::report::{DIFF_REPORT_FILE, TOKEN_REPORT_FILE};
use deck_analyzer::{
    format_analysis, format_diff_table, format_land_recommendation, format_token_table,
    diff_decks, load_decklist, write_report, AnalyzerConfig, DeckAnalyzer, DiffLayout,
    DuplicatePolicy, LandCounting, DEFAULT_TARGET_DECK_SIZE,
};
use mtg_common::{CardLookup, MemoryLookup, ScryfallClient, SCRYFALL_API_URL};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// MTG decklist analysis - deck diffs, token scans and basic land counts
#[derive(Parser, Debug)]
#[command(name = "deck_analyzer")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Sum quantities of repeated card names instead of keeping the last one
    #[arg(long, global = true, default_value_t = false)]
    accumulate_duplicates: bool,

    /// Weight mana symbols by card quantity and count every copy toward the
    /// deck size, instead of counting each card name once
    #[arg(long, global = true, default_value_t = false)]
    weight_by_quantity: bool,

    /// Offline card data (JSON array of card records) instead of Scryfall
    #[arg(long, global = true)]
    cards: Option<PathBuf>,

    /// Scryfall API base URL
    #[arg(long, global = true, default_value = SCRYFALL_API_URL)]
    api_url: String,

    /// Print results as JSON instead of tables
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which cards enter and leave between two decklists
    Diff {
        /// Previous version of the deck
        old: PathBuf,
        /// New version of the deck
        new: PathBuf,
        /// List every change instead of stopping at the shorter column
        #[arg(long, default_value_t = false)]
        pad: bool,
        /// Also save the table (default file: deck_changes.txt)
        #[arg(short, long, num_args = 0..=1, default_missing_value = DIFF_REPORT_FILE)]
        output: Option<PathBuf>,
    },
    /// List the tokens and emblems a deck creates
    Tokens {
        deck: PathBuf,
        /// Also save the table (default file: tokens.txt)
        #[arg(short, long, num_args = 0..=1, default_missing_value = TOKEN_REPORT_FILE)]
        output: Option<PathBuf>,
    },
    /// Recommend basic lands from the deck's colored mana symbols
    Lands {
        deck: PathBuf,
        /// Deck size to fill up with basic lands
        #[arg(long, default_value_t = DEFAULT_TARGET_DECK_SIZE)]
        target_size: u32,
    },
    /// Token scan and land recommendation with one card lookup per card
    Analyze {
        deck: PathBuf,
        /// Deck size to fill up with basic lands
        #[arg(long, default_value_t = DEFAULT_TARGET_DECK_SIZE)]
        target_size: u32,
        /// Also save the report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("Analysis failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> deck_analyzer::Result<()> {
    let policy = if args.accumulate_duplicates {
        DuplicatePolicy::Accumulate
    } else {
        DuplicatePolicy::Overwrite
    };

    let land_counting = if args.weight_by_quantity {
        LandCounting::PerCopy
    } else {
        LandCounting::PerName
    };

    match args.command {
        Command::Diff {
            old,
            new,
            pad,
            output,
        } => {
            let old = load_decklist(&old, policy)?;
            let new = load_decklist(&new, policy)?;
            let diff = diff_decks(&old, &new);
            let layout = if pad { DiffLayout::Pad } else { DiffLayout::Truncate };
            emit(args.json, &diff, format_diff_table(&diff, layout), output)
        }
        Command::Tokens { deck, output } => {
            let deck = load_decklist(&deck, policy)?;
            let lookup = card_lookup(args.cards.as_deref(), &args.api_url)?;
            let tokens = DeckAnalyzer::new(&*lookup).scan_tokens(&deck)?;
            emit(args.json, &tokens, format_token_table(&tokens), output)
        }
        Command::Lands { deck, target_size } => {
            let deck = load_decklist(&deck, policy)?;
            let lookup = card_lookup(args.cards.as_deref(), &args.api_url)?;
            let recommendation = DeckAnalyzer::new(&*lookup)
                .with_config(AnalyzerConfig {
                    target_deck_size: target_size,
                    land_counting,
                })
                .recommend_lands(&deck)?;
            emit(
                args.json,
                &recommendation,
                format_land_recommendation(&recommendation),
                None,
            )
        }
        Command::Analyze {
            deck,
            target_size,
            output,
        } => {
            let deck = load_decklist(&deck, policy)?;
            let lookup = card_lookup(args.cards.as_deref(), &args.api_url)?;
            let analysis = DeckAnalyzer::new(&*lookup)
                .with_config(AnalyzerConfig {
                    target_deck_size: target_size,
                    land_counting,
                })
                .analyze(&deck)?;
            emit(args.json, &analysis, format_analysis(&analysis), output)
        }
    }
}

/// Card data source: the offline file if given, Scryfall otherwise
fn card_lookup(
    cards: Option<&Path>,
    api_url: &str,
) -> deck_analyzer::Result<Box<dyn CardLookup>> {
    match cards {
        Some(path) => Ok(Box::new(MemoryLookup::from_file(path)?)),
        None => {
            log::info!("Using Scryfall at {}", api_url);
            Ok(Box::new(ScryfallClient::with_base_url(api_url)))
        }
    }
}

/// Print a result as JSON or as its rendered report, optionally saving it
fn emit<T: Serialize>(
    json: bool,
    value: &T,
    rendered: String,
    output: Option<PathBuf>,
) -> deck_analyzer::Result<()> {
    let text = if json {
        serde_json::to_string_pretty(value)? + "\n"
    } else {
        rendered
    };
    print!("{text}");
    if let Some(path) = output {
        write_report(&path, &text)?;
    }
    Ok(())
}
