#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;

use backfill::{
    BackdatedOverrides, Clock, Config, ConfigError, DefaultClock, DefaultFsOps, DefaultGitRunner,
    FsOps, PatternOverrides, Reporter, RunReport, create_backdated_commits,
    create_patterned_commits, load_config,
    output::{TabStyle, format_plan, format_summary, to_json},
    plan_backdated, plan_patterned,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Create git history with backdated commits.")]
struct Args {
    /// TOML file supplying defaults for any option not given on the command line
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every git invocation to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Print the per-day plan instead of touching the repository
    #[arg(long, global = true)]
    dry_run: bool,

    /// Summary format after a run: text (default) or json
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Table style used by --dry-run
    #[arg(long, value_enum, global = true, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed number of commits per day, each dated at noon
    Backdated {
        /// Directory holding the repository (created if missing)
        #[arg(long)]
        repo: Option<PathBuf>,

        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day (inclusive), YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        commits_per_day: Option<u32>,
    },
    /// Randomised activity over the last 365 days
    Pattern {
        #[arg(long)]
        repo: Option<PathBuf>,

        /// consistent, random or streaks; anything else commits nothing
        #[arg(long)]
        pattern: Option<String>,

        /// Seed for reproducible history
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<ExitCode, ConfigError> {
    let fs = DefaultFsOps;
    let config = match &args.config {
        Some(path) => load_config(&fs.expand_tilde(path))?,
        None => Config::default(),
    };
    let git = DefaultGitRunner;
    let clock = DefaultClock;

    let (report, kind) = match args.command {
        Command::Backdated {
            repo,
            start,
            end,
            commits_per_day,
        } => {
            let mut request = config.backdated_request(&BackdatedOverrides {
                repo,
                start,
                end,
                commits_per_day,
            })?;
            request.repo = fs.expand_tilde(&request.repo);
            if args.dry_run {
                let plan = plan_backdated(&request);
                println!("{}", format_plan(&plan, args.tab_style, "Backdated Plan"));
                return Ok(ExitCode::SUCCESS);
            }
            banner(args.output, "Creating backdated contributions...");
            let report =
                create_backdated_commits(&request, &fs, &git, &clock, &reporter(args.output));
            (report, "backdated")
        }
        Command::Pattern {
            repo,
            pattern,
            seed,
        } => {
            let (mut request, seed) = config.pattern_request(&PatternOverrides {
                repo,
                pattern,
                seed,
            });
            request.repo = fs.expand_tilde(&request.repo);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if args.dry_run {
                let plan = plan_patterned(&request.pattern, clock.now().date_naive(), &mut rng);
                let title = format!("Pattern Plan ({})", request.pattern);
                println!("{}", format_plan(&plan, args.tab_style, &title));
                return Ok(ExitCode::SUCCESS);
            }
            banner(
                args.output,
                &format!("Creating '{}' contribution pattern...", request.pattern),
            );
            let report = create_patterned_commits(
                &request,
                &fs,
                &git,
                &clock,
                &mut rng,
                &reporter(args.output),
            );
            (report, "pattern")
        }
    };

    print_report(&report, kind, args.output);
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Stdout carries only the JSON document when `--output json` is set.
fn banner(format: OutputFormat, text: &str) {
    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => eprintln!("{text}"),
    }
}

fn reporter(format: OutputFormat) -> Reporter {
    match format {
        OutputFormat::Text => Reporter::console(),
        OutputFormat::Json => Reporter::silent(),
    }
}

fn print_report(report: &RunReport, kind: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if report.is_success() {
                println!("{}", format_summary(report, kind));
            } else {
                eprintln!("{}", format_summary(report, kind));
            }
        }
        OutputFormat::Json => println!("{}", to_json(report)),
    }
}
