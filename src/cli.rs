use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use countdown::expression::{GlyphRenderer, LatexRenderer, RowSink, TextRenderer, write_solution};
use countdown::{GameConfig, PoolKind, PuzzleState, Renderer, StepRecord};
use log::{info, warn};
use rayon::prelude::*;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How a solution transcript is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Latex,
    Glyphs,
}

/// Countdown - Generate numbers-round puzzles with a guaranteed solution
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Pick numbers, generate a reachable goal and show how to reach it")]
#[command(version)]
pub struct CliArgs {
    /// How many values to take from the big pool
    #[arg(short, long, default_value_t = 2)]
    pub big: usize,

    /// Seed for the random source (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of independent rounds to generate
    #[arg(short, long, default_value_t = 1)]
    pub rounds: usize,

    /// Smallest acceptable goal
    #[arg(long, default_value_t = 100)]
    pub min_goal: i64,

    /// Largest acceptable goal
    #[arg(long, default_value_t = 999)]
    pub max_goal: i64,

    /// Output format for the solution
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub game: GameConfig,
    pub big: usize,
    pub seed: u64,
    pub rounds: usize,
    pub format: OutputFormat,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

fn build_config(args: CliArgs) -> Result<CliConfig> {
    if args.min_goal > args.max_goal {
        bail!(
            "Invalid goal range: {} is greater than {}",
            args.min_goal,
            args.max_goal
        );
    }
    if args.rounds == 0 {
        bail!("At least one round is required");
    }

    let game = GameConfig {
        goal_range: args.min_goal..=args.max_goal,
        ..GameConfig::default()
    };
    validate_big_count(&game, args.big).context("Invalid --big value")?;

    Ok(CliConfig {
        game,
        big: args.big,
        seed: args.seed.unwrap_or_else(rand::random),
        rounds: args.rounds,
        format: args.format,
        log_level: args.log_level,
    })
}

fn validate_big_count(game: &GameConfig, big: usize) -> Result<()> {
    if big > game.big_pool.len() {
        bail!(
            "cannot take {} values from a big pool of {}",
            big,
            game.big_pool.len()
        );
    }
    if big > game.max_use {
        bail!("cannot take {} big values in a round of {}", big, game.max_use);
    }
    let small = game.max_use - big;
    if small > game.small_pool.len() {
        bail!(
            "cannot take {} values from a small pool of {}",
            small,
            game.small_pool.len()
        );
    }
    Ok(())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Play one round: select the tiles, search for a goal and describe it
pub fn play_round(
    game: &GameConfig,
    big: usize,
    seed: u64,
    format: OutputFormat,
) -> Result<String> {
    let mut generator = game
        .seeded(seed)
        .context("Failed to set up the generator")?;

    for index in 0..big {
        generator.choose_from(PoolKind::Big, index)?;
    }
    for index in 0..game.max_use - big {
        generator.choose_from(PoolKind::Small, index)?;
    }

    let selection = generator
        .selected()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if generator.randomize_goal()? != PuzzleState::Evaluating {
        warn!("Round with seed {} has no reachable goal", seed);
        return Ok(format!(
            "Numbers: {}\nGoal: {}\nNo reachable goal.",
            selection,
            render_error(format)
        ));
    }

    let goal = generator.goal()?;
    let transcript = render_transcript(generator.steps()?, format)?;
    Ok(format!(
        "Numbers: {}\nGoal: {}\n\n{}",
        selection, goal, transcript
    ))
}

fn render_error(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => Renderer::<i64>::error(&TextRenderer),
        OutputFormat::Latex => Renderer::<i64>::error(&LatexRenderer),
        OutputFormat::Glyphs => Renderer::<i64>::error(&GlyphRenderer).to_string(),
    }
}

fn render_transcript(steps: &[StepRecord<i64>], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => write_solution(&TextRenderer, &mut out, steps)?,
        OutputFormat::Latex => write_solution(&LatexRenderer, &mut out, steps)?,
        OutputFormat::Glyphs => {
            let mut rows = RowSink::new();
            write_solution(&GlyphRenderer, &mut rows, steps)?;
            out = rows
                .into_rows()
                .iter()
                .map(|row| row.iter().map(|node| node.to_string()).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
        }
    }
    Ok(out)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Generating {} round(s) from seed {} with {} big value(s)",
        config.rounds, config.seed, config.big
    );

    let rounds = (0..config.rounds)
        .into_par_iter()
        .map(|round| {
            let seed = config.seed.wrapping_add(round as u64);
            play_round(&config.game, config.big, seed, config.format)
                .with_context(|| format!("Round {} (seed {}) failed", round + 1, seed))
        })
        .collect::<Result<Vec<_>>>()?;

    for (round, output) in rounds.iter().enumerate() {
        if config.rounds > 1 {
            println!("Round {}", round + 1);
        }
        println!("{}", output);
        if round + 1 < rounds.len() {
            println!();
        }
    }
    Ok(())
}
