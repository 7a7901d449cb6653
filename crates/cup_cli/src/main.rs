//! Knockout Cup CLI
//!
//! Simulates a single fixture or a full 8-team knockout from a JSON team
//! file. Pass `--seed` for a reproducible run.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cup_core::api::TeamData;
use cup_core::{
    MatchEngine, MemoryStore, Stage, Team, TournamentBracket, TournamentRunner, TournamentStore,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cup_cli")]
#[command(about = "Simulate knockout-cup fixtures and tournaments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one fixture between two named teams
    Match {
        /// JSON file with the registered teams
        #[arg(long)]
        teams: PathBuf,

        /// Name of the first team
        #[arg(long)]
        team1: String,

        /// Name of the second team
        #[arg(long)]
        team2: String,

        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Print the commentary transcript
        #[arg(long, default_value = "false")]
        commentary: bool,
    },

    /// Run the full 8-team knockout
    Tournament {
        /// JSON file with at least 8 registered teams
        #[arg(long)]
        teams: PathBuf,

        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Rows to show in the top-scorer table
        #[arg(long, default_value = "5")]
        scorers: usize,
    },
}

fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read team file {}", path.display()))?;
    let entries: Vec<TeamData> =
        serde_json::from_str(&raw).with_context(|| format!("invalid team file {}", path.display()))?;
    Ok(entries.into_iter().map(TeamData::into_team).collect())
}

fn find_team<'a>(teams: &'a [Team], name: &str) -> Result<&'a Team> {
    teams
        .iter()
        .find(|t| t.name == name)
        .with_context(|| format!("team not found in file: {name}"))
}

fn effective_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

fn run_match(
    teams_path: &Path,
    team1: &str,
    team2: &str,
    seed: Option<u64>,
    commentary: bool,
) -> Result<()> {
    let teams = load_teams(teams_path)?;
    let team1 = find_team(&teams, team1)?;
    let team2 = find_team(&teams, team2)?;

    let seed = effective_seed(seed);
    let mut engine = MatchEngine::from_seed(seed);
    let result = engine.simulate(team1, team2, commentary);

    println!("seed: {seed}");
    println!("{} {} - {} {}", team1.name, result.team1_score, result.team2_score, team2.name);
    if let Some(shootout) = &result.penalty_shootout {
        println!(
            "decided on penalties: {} - {}",
            shootout.converted_team1, shootout.converted_team2
        );
    }
    let winner = if result.winner_id == team1.id { &team1.name } else { &team2.name };
    println!("winner: {winner}");
    if let Some(transcript) = &result.commentary {
        println!("\n{transcript}");
    }
    Ok(())
}

fn run_tournament(teams_path: &Path, seed: Option<u64>, scorers: usize) -> Result<()> {
    let teams = load_teams(teams_path)?;
    if teams.len() < cup_core::BRACKET_SIZE {
        bail!("tournament needs at least {} teams, file has {}", cup_core::BRACKET_SIZE, teams.len());
    }

    let seed = effective_seed(seed);
    println!("seed: {seed}");

    // Separate streams for the draw and the matches keep fixtures
    // reproducible even if the draw logic changes draw-count.
    let mut draw_rng = StdRng::seed_from_u64(seed);
    let mut bracket = TournamentBracket::generate(&teams, &mut draw_rng)?;

    let mut store = MemoryStore::with_teams(teams.clone());
    let mut runner = TournamentRunner::new(&mut store, MatchEngine::from_seed(seed.wrapping_add(1)));
    let champion = runner.run_tournament(&mut bracket, true)?;

    for stage in [Stage::QuarterFinal, Stage::SemiFinal, Stage::Final] {
        println!("\n== {} ==", stage.label());
        for fixture in bracket.matches_for(stage) {
            println!(
                "{} {} - {} {}   (winner: {})",
                fixture.team1_name.as_deref().unwrap_or("TBD"),
                fixture.team1_score,
                fixture.team2_score,
                fixture.team2_name.as_deref().unwrap_or("TBD"),
                fixture.winner_name().unwrap_or("TBD"),
            );
        }
    }

    let champion_name = teams
        .iter()
        .find(|t| t.id == champion)
        .map(|t| t.name.as_str())
        .unwrap_or("unknown");
    println!("\nCHAMPION: {champion_name}");

    let table = store.top_scorers(scorers);
    if !table.is_empty() {
        println!("\nTop scorers:");
        for (rank, entry) in table.iter().enumerate() {
            println!("{}. {} - {} goals", rank + 1, entry.player_name, entry.goals);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Match { teams, team1, team2, seed, commentary } => {
            run_match(&teams, &team1, &team2, seed, commentary)
        }
        Commands::Tournament { teams, seed, scorers } => run_tournament(&teams, seed, scorers),
    }
}
