//! penalty-cli: headless penalty shootout driver.
//!
//! Usage:
//!   penalty-cli play --seed 7 --matches 3 --difficulty hard
//!   penalty-cli play --config game.toml --read-probability 0.9
//!   penalty-cli config > game.toml

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::fmt;

use penalty_core::commands::PlayerCommand;
use penalty_core::config::GameConfig;
use penalty_core::enums::{AttemptOutcome, Difficulty, MatchPhase, MatchResult};
use penalty_core::events::GameEvent;
use penalty_sim::{ManualClock, SimConfig, SimulationEngine};

/// Frames allowed for one attempt before the run is declared stuck.
const MAX_FRAMES_PER_SHOT: usize = 10_000;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "penalty-cli", about = "Headless penalty shootout driver")]
struct Args {
    #[clap(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play seeded matches with synthetic drags and print a JSON summary.
    Play {
        #[clap(long, default_value = "42")]
        seed: u64,

        #[clap(long, default_value = "1")]
        matches: u32,

        /// Keeper preset; overrides the config file.
        #[clap(long)]
        difficulty: Option<Level>,

        /// Explicit keeper read probability in 0..=1; overrides --difficulty.
        #[clap(long)]
        read_probability: Option<f64>,

        /// TOML file with game settings.
        #[clap(long)]
        config: Option<PathBuf>,

        /// Simulated frame length in milliseconds.
        #[clap(long, default_value = "16")]
        frame_ms: f64,
    },
    /// Print the default game configuration as TOML.
    Config,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    difficulty: Difficulty,
    matches: Vec<MatchSummary>,
}

#[derive(Debug, Serialize)]
struct MatchSummary {
    player_score: u32,
    goalkeeper_score: u32,
    result: Option<MatchResult>,
    shots: Vec<ShotSummary>,
}

#[derive(Debug, Serialize)]
struct ShotSummary {
    power: f64,
    angle_degrees: f64,
    keeper_zone: String,
    read_correctly: bool,
    outcome: Option<AttemptOutcome>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = tracing::Level::from_str(&args.log_level)
        .with_context(|| format!("Invalid log level: {}", args.log_level))?;
    let subscriber = fmt::Subscriber::builder()
        .with_max_level(log_level)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global tracing subscriber")?;

    match args.command {
        Command::Play {
            seed,
            matches,
            difficulty,
            read_probability,
            config,
            frame_ms,
        } => {
            let mut game = match config {
                Some(path) => load_config(&path)?,
                None => GameConfig::default(),
            };
            if let Some(level) = difficulty {
                game.difficulty = level.into();
            }
            if let Some(p) = read_probability {
                game.difficulty = Difficulty::Custom(p);
            }
            game.validate().context("Invalid game configuration")?;
            if frame_ms.is_nan() || frame_ms <= 0.0 {
                bail!("--frame-ms must be positive, got {frame_ms}");
            }

            let summary = play(seed, matches, game, frame_ms)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Config => {
            print!("{}", GameConfig::default().to_toml_string()?);
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = GameConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn play(seed: u64, matches: u32, game: GameConfig, frame_ms: f64) -> Result<RunSummary> {
    let difficulty = game.difficulty;
    let mut engine = SimulationEngine::headless(SimConfig { seed, game })
        .context("Failed to build simulation")?;
    // Aiming draws come from their own stream so the keeper's stays intact.
    let mut aim_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let mut summaries = Vec::with_capacity(matches as usize);
    for index in 0..matches {
        engine.queue_command(PlayerCommand::StartMatch);
        engine.tick();
        if engine.phase() != MatchPhase::InProgress {
            bail!("match {index} did not start");
        }

        let mut shots = Vec::new();
        while engine.phase() == MatchPhase::InProgress {
            shots.push(play_shot(&mut engine, &mut aim_rng, frame_ms)?);
        }

        let status = engine.match_status();
        info!(
            index,
            player = status.player_score,
            keeper = status.goalkeeper_score,
            result = ?status.result,
            "match finished"
        );
        summaries.push(MatchSummary {
            player_score: status.player_score,
            goalkeeper_score: status.goalkeeper_score,
            result: status.result,
            shots,
        });
    }

    Ok(RunSummary {
        seed,
        difficulty,
        matches: summaries,
    })
}

/// Aim somewhere at the goal, shoot, and run until the next shot is
/// possible or the match ends.
fn play_shot(
    engine: &mut SimulationEngine<ManualClock>,
    aim_rng: &mut ChaCha8Rng,
    frame_ms: f64,
) -> Result<ShotSummary> {
    let origin = engine.layout().ball_origin;
    let max_drag = engine.config().max_drag_distance;
    let angle: f64 = aim_rng.gen_range(20.0..160.0);
    let power: f64 = aim_rng.gen_range(10.0..100.0);
    // Slingshot: pull opposite to the launch direction.
    let pull = max_drag * power / 100.0;
    let radians = angle.to_radians();
    let pointer_x = origin.x - pull * radians.cos();
    let pointer_y = origin.y + pull * radians.sin();
    debug!(angle, power, pointer_x, pointer_y, "aiming");

    engine.queue_commands([
        PlayerCommand::BeginDrag {
            x: origin.x,
            y: origin.y,
        },
        PlayerCommand::DragTo {
            x: pointer_x,
            y: pointer_y,
        },
        PlayerCommand::ReleaseDrag,
    ]);

    let mut summary: Option<ShotSummary> = None;
    for _ in 0..MAX_FRAMES_PER_SHOT {
        engine.clock_mut().advance(frame_ms);
        let snapshot = engine.tick();

        for event in &snapshot.events {
            let outcome = match event {
                GameEvent::Kick { power } => {
                    let decision = engine
                        .keeper_decision()
                        .context("keeper did not decide on a kick")?;
                    summary = Some(ShotSummary {
                        power: *power,
                        angle_degrees: angle,
                        keeper_zone: decision.target_zone.label().to_string(),
                        read_correctly: decision.read_correctly,
                        outcome: None,
                    });
                    continue;
                }
                GameEvent::Goal { .. } => AttemptOutcome::Goal,
                GameEvent::Save { .. } => AttemptOutcome::Save,
                GameEvent::Miss { .. } => AttemptOutcome::Miss,
                _ => continue,
            };
            if let Some(s) = summary.as_mut() {
                s.outcome = Some(outcome);
            }
        }

        let resolved = summary.as_ref().is_some_and(|s| s.outcome.is_some());
        if resolved && (snapshot.can_shoot || engine.phase() != MatchPhase::InProgress) {
            return summary.context("shot summary missing");
        }
    }
    bail!("shot did not resolve within {MAX_FRAMES_PER_SHOT} frames")
}
