//! Match simulator - plays many matches in memory with simulated guessing.
//!
//! Useful for checking how a target score, category selection and catalog
//! size play out: match length, how often the word pool recycles, and
//! whether going first is an advantage.

use std::path::PathBuf;
use std::sync::Arc;

use charades_engine::core::{GameRng, MatchConfig, TeamSlot};
use charades_engine::game::{MatchEngine, MatchResult};
use charades_engine::words::{Category, WordCatalog};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Play simulated charades matches and report outcomes")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "100")]
    games: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Chance each dealt word is guessed (0.0-1.0)
    #[arg(long, default_value = "0.6")]
    guess_rate: f64,

    /// Match config JSON file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word catalog JSON file; defaults to the bundled list
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override the target score
    #[arg(long)]
    target_score: Option<u32>,

    /// Override enabled categories with codes, e.g. "AOP"
    #[arg(long)]
    categories: Option<String>,

    /// Abandon a match after this many rounds
    #[arg(long, default_value = "500")]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Summary {
    wins: [u32; 2],
    draws: u32,
    abandoned: u32,
    total_rounds: u64,
    total_recycles: u64,
}

fn load_config(args: &Args) -> Result<MatchConfig, Box<dyn std::error::Error>> {
    let mut config: MatchConfig = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => MatchConfig::default(),
    };

    if let Some(target) = args.target_score {
        config.target_score = target;
    }
    if let Some(codes) = &args.categories {
        let categories = codes
            .chars()
            .map(|c| Category::from_code(c.to_ascii_uppercase()).ok_or_else(|| format!("unknown category code '{c}'")))
            .collect::<Result<Vec<_>, _>>()?;
        config = config.with_categories(categories);
    }

    config.validate()?;
    Ok(config)
}

fn load_catalog(args: &Args) -> Result<WordCatalog, Box<dyn std::error::Error>> {
    let catalog = match &args.catalog {
        Some(path) => WordCatalog::from_json(&std::fs::read_to_string(path)?)?,
        None => WordCatalog::builtin()?,
    };
    Ok(catalog)
}

/// Play one match to completion. Returns `None` if it hit `max_rounds`.
fn play_match(
    engine: &mut MatchEngine,
    guesser: &mut GameRng,
    guess_rate: f64,
    max_rounds: u32,
) -> Result<Option<MatchResult>, Box<dyn std::error::Error>> {
    while engine.state().round_number <= max_rounds {
        let dealt: Vec<_> = engine.start_turn()?.iter().map(|w| w.id).collect();
        let guessed: Vec<_> = dealt.into_iter().filter(|_| guesser.gen_bool(guess_rate)).collect();

        engine.end_turn()?;
        engine.submit_round(guessed)?;
        engine.advance_to_next_turn()?;

        if let Some(result) = engine.winner() {
            return Ok(Some(result));
        }
    }
    Ok(None)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if !(0.0..=1.0).contains(&args.guess_rate) {
        return Err(format!("guess rate {} is outside 0.0-1.0", args.guess_rate).into());
    }

    let config = load_config(&args)?;
    let catalog = Arc::new(load_catalog(&args)?);
    let pool = catalog.filtered(config.enabled_categories).count();
    info!(words = catalog.len(), pool, games = args.games, "starting simulation");

    let mut master = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut summary = Summary::default();

    for game in 0..args.games {
        let mut engine = MatchEngine::with_rng(Arc::clone(&catalog), config.clone(), master.fork())?;
        let mut guesser = master.fork();

        let outcome = play_match(&mut engine, &mut guesser, args.guess_rate, args.max_rounds)?;
        let state = engine.state();
        summary.total_rounds += u64::from(state.round_number);
        summary.total_recycles += u64::from(state.deck_recycles);

        match outcome {
            Some(MatchResult::Winner(team)) => summary.wins[team.index()] += 1,
            Some(MatchResult::Draw) => summary.draws += 1,
            None => {
                warn!(game, rounds = args.max_rounds, "match abandoned");
                summary.abandoned += 1;
            }
        }
        debug!(
            game,
            score_a = state.score(TeamSlot::A),
            score_b = state.score(TeamSlot::B),
            rounds = state.round_number,
            "match finished"
        );
    }

    let games = f64::from(args.games.max(1));
    println!("matches:        {}", args.games);
    println!("word pool:      {pool} of {}", catalog.len());
    for team in TeamSlot::ALL {
        println!("{:<15} {} wins", format!("{}:", config.team_name(team)), summary.wins[team.index()]);
    }
    println!("draws:          {}", summary.draws);
    println!("abandoned:      {}", summary.abandoned);
    println!("avg rounds:     {:.1}", summary.total_rounds as f64 / games);
    println!("avg recycles:   {:.2}", summary.total_recycles as f64 / games);

    Ok(())
}
