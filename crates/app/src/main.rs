use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_feedback_delay, parse_seed};
use services::{ConfigError, QuizConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn quiz_config(&self) -> QuizConfig {
        self.config
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--feedback-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  random seed, --feedback-ms 500");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SEED, QUIZ_FEEDBACK_MS, RUST_LOG");
}

enum Parsed {
    Run(QuizConfig),
    Help,
}

/// Flags override values already read from the environment.
fn parse_args(
    mut config: QuizConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Parsed, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = require_value(args, "--seed")?;
                config = config.with_seed(parse_seed(&value)?);
            }
            "--feedback-ms" => {
                let value = require_value(args, "--feedback-ms")?;
                config = config.with_feedback_delay(parse_feedback_delay(&value)?);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber was already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let env_config = QuizConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(env_config, &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(config) => config,
    };

    info!(
        seed = ?config.seed,
        feedback_ms = config.feedback_delay.as_millis(),
        "launching quiz"
    );

    let app = DesktopApp { config };
    let context = build_app_context(&app);

    // Some tao setups open an always-on-top window unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Edutainment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
