//! LottoForge command line.
//!
//! Usage:
//!   lottoforge generate --count 6 --range 1 60 --quantity 5 --sum 150 220
//!   lottoforge generate --count 15 --range 1 25 --preset odd-heavy-loto
//!   lottoforge presets --lottery megasena

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use thiserror::Error;

use lottoforge::{
    compute_stats, engine_from_config, Batch, Bounds, ConfigError, GameShape, GeneratorConfig,
    LottoError, RuleSet, CONFIG_FILE,
};

#[derive(Parser)]
#[command(
    name = "lottoforge",
    version,
    about = "Generate lottery lines that satisfy statistical constraints"
)]
struct Cli {
    /// Configuration file, TOML or YAML by extension (defaults to
    /// ./lottoforge.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of lines
    Generate(GenerateArgs),
    /// List available presets
    Presets {
        /// Only presets for this lottery
        #[arg(long)]
        lottery: Option<String>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Numbers per line
    #[arg(long)]
    count: usize,

    /// Lowest and highest drawable number
    #[arg(long, required = true, num_args = 2, value_names = ["MIN", "MAX"])]
    range: Vec<u32>,

    /// Lines to generate
    #[arg(long, default_value_t = 1)]
    quantity: usize,

    /// Start from the rules of a preset; explicit flags override them
    #[arg(long)]
    preset: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Attempt budget per line
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Inclusive bounds on the sum of a line
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    sum: Option<Vec<u64>>,

    /// Inclusive bounds on the number of even numbers
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    even: Option<Vec<usize>>,

    /// Inclusive bounds on the number of primes
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    primes: Option<Vec<usize>>,

    /// Longest allowed run of consecutive numbers
    #[arg(long)]
    max_consecutive: Option<usize>,

    /// Numbers every line must contain
    #[arg(long, value_delimiter = ',')]
    include: Vec<u32>,

    /// Numbers no line may contain
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<u32>,

    /// Most numbers a line may share with the reference draw
    #[arg(long)]
    max_repeated: Option<usize>,

    /// Reference draw for the overlap cap, replacing a preset's
    #[arg(long, value_delimiter = ',')]
    reference: Vec<u32>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Lotto(#[from] lottoforge::Error),

    #[error("{0}")]
    Usage(String),
}

impl From<LottoError> for CliError {
    fn from(err: LottoError) -> Self {
        CliError::Lotto(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Lotto(err.into())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        lottoforge::console::init();
    }

    let result = load_config(cli.config.as_ref()).and_then(|config| match &cli.command {
        Commands::Generate(args) => run_generate(&config, args),
        Commands::Presets { lottery } => {
            list_presets(&config, lottery.as_deref());
            Ok(())
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig, CliError> {
    match path {
        Some(path) => Ok(GeneratorConfig::load(path)?),
        None => Ok(GeneratorConfig::load_or_default(CONFIG_FILE)?),
    }
}

fn run_generate(config: &GeneratorConfig, args: &GenerateArgs) -> Result<(), CliError> {
    let shape = build_shape(args)?;
    let rules = build_rules(config, args)?;

    let mut config = config.clone();
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }

    let mut engine = engine_from_config(&config);
    let batch = engine.generate_batch(&shape, &rules, args.quantity)?;

    print_batch(&batch, &rules);
    if batch.is_partial() {
        eprintln!(
            "{} only {} of {} lines met the rules within {} attempts each",
            "warning:".yellow().bold(),
            batch.len(),
            batch.requested(),
            engine.max_attempts()
        );
    }
    Ok(())
}

fn build_shape(args: &GenerateArgs) -> Result<GameShape, CliError> {
    match args.range[..] {
        [min, max] => Ok(GameShape::new(args.count, min, max)?),
        _ => Err(CliError::Usage("--range takes MIN and MAX".to_string())),
    }
}

fn build_rules(config: &GeneratorConfig, args: &GenerateArgs) -> Result<RuleSet, CliError> {
    let mut rules = match &args.preset {
        Some(id) => config.preset(id)?.rules,
        None => RuleSet::new(),
    };

    if let Some(sum) = &args.sum {
        rules.sum_range = Some(bounds("--sum", sum)?);
    }
    if let Some(even) = &args.even {
        rules.even_odd_ratio = Some(bounds("--even", even)?);
    }
    if let Some(primes) = &args.primes {
        rules.prime_range = Some(bounds("--primes", primes)?);
    }
    if args.max_consecutive.is_some() {
        rules.max_consecutive = args.max_consecutive;
    }
    if !args.include.is_empty() {
        rules.include_numbers = args.include.clone();
    }
    if !args.exclude.is_empty() {
        rules.exclude_numbers = args.exclude.clone();
    }
    if args.max_repeated.is_some() {
        rules.max_repeated = args.max_repeated;
    }
    if !args.reference.is_empty() {
        rules.reference_numbers = args.reference.clone();
    }
    if args.max_repeated.is_some() && rules.reference_numbers.is_empty() {
        return Err(CliError::Usage(
            "--max-repeated needs --reference or a preset with reference numbers".to_string(),
        ));
    }

    rules.check_structure()?;
    Ok(rules)
}

fn bounds<T: PartialOrd + Copy>(flag: &str, values: &[T]) -> Result<Bounds<T>, CliError> {
    match values {
        [min, max] => Ok(Bounds::new(*min, *max)),
        _ => Err(CliError::Usage(format!("{} takes MIN and MAX", flag))),
    }
}

fn print_batch(batch: &Batch, rules: &RuleSet) {
    for (i, line) in batch.iter().enumerate() {
        let stats = compute_stats(line, rules.reference());
        let mut details = format!(
            "sum {:>4}  even {}/odd {}  primes {}  run {}  span {}",
            stats.sum,
            stats.even_count,
            stats.odd_count,
            stats.prime_count,
            stats.longest_consecutive_run,
            stats.range_span
        );
        if rules.reference().is_some() {
            details.push_str(&format!("  repeated {}", stats.repeated_count));
        }
        println!(
            "{:>3}. {}  {}",
            i + 1,
            line.bright_white().bold(),
            details.bright_black()
        );
    }
}

fn list_presets(config: &GeneratorConfig, lottery: Option<&str>) {
    let presets = match lottery {
        Some(lottery) => config.presets_for(lottery),
        None => config.all_presets(),
    };

    for preset in presets {
        println!(
            "{} {} ({})",
            preset.id.bright_cyan().bold(),
            preset.name,
            preset.lottery.bright_black()
        );
        let rules = lottoforge::ConstraintValidator::new(&preset.rules);
        for description in rules.describe() {
            println!("    - {}", description);
        }
        if !preset.rules.include_numbers.is_empty() {
            println!("    - always includes {:?}", preset.rules.include_numbers);
        }
        if !preset.rules.exclude_numbers.is_empty() {
            println!("    - never includes {:?}", preset.rules.exclude_numbers);
        }
    }
}
