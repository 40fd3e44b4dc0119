//! CLI for pagegrab.

mod prompt;
mod render;
mod style;

use clap::{Parser, ValueEnum};
use pagegrab_core::config::{self, ColorChoice, PagegrabConfig};
use pagegrab_core::control::AbortToken;
use pagegrab_core::error::RunError;
use pagegrab_core::mirror::{Mirror, MirrorReport};
use pagegrab_core::progress::RunEvent;
use pagegrab_core::storage::OutputLayout;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use render::ConsoleRenderer;
use style::OutputStyle;

/// Exit status after a user interrupt (128 + SIGINT).
const EXIT_INTERRUPTED: u8 = 130;

/// Top-level CLI for pagegrab.
#[derive(Debug, Parser)]
#[command(name = "pagegrab", version)]
#[command(
    about = "Fetch a web page with its stylesheets, scripts and images into ~/Downloads/website_download",
    long_about = None
)]
pub struct Cli {
    /// Page URL. Prompted for on stdin when omitted.
    pub url: Option<String>,

    /// When to use colors on the console (overrides config.toml).
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// Parses arguments, runs one mirror and maps the outcome to an exit status.
pub fn run_from_args() -> ExitCode {
    let cli = Cli::parse();
    let cfg = config::load_or_init().unwrap_or_else(|err| {
        tracing::warn!("could not load config, using defaults: {:#}", err);
        PagegrabConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);

    let style = OutputStyle::resolve(cli.color.map(ColorChoice::from).unwrap_or(cfg.color));

    let target = match cli.url {
        Some(url) => url,
        None => match prompt::read_url(&mut std::io::stdin().lock(), &mut std::io::stdout()) {
            Ok(url) => url,
            Err(err) => {
                eprintln!("{}", style.red(&format!("An error occurred: {:#}", err)));
                return ExitCode::FAILURE;
            }
        },
    };

    let abort = AbortToken::new();
    let handler_token = abort.clone();
    if let Err(err) = ctrlc::set_handler(move || handler_token.request_abort()) {
        tracing::warn!("could not install Ctrl-C handler: {}", err);
    }

    match run(&target, &cfg, style, &abort) {
        Ok(_) => ExitCode::SUCCESS,
        Err(RunError::Aborted) => {
            tracing::info!("run cancelled by user");
            println!("{}", style.yellow("\nDownload cancelled by user."));
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            tracing::error!("run failed: {}", err);
            eprintln!("{}", style.red(&format!("Failed: {}", err)));
            ExitCode::FAILURE
        }
    }
}

/// Runs the mirror with console rendering on its own thread so drawing never
/// holds up a transfer.
fn run(
    target: &str,
    cfg: &PagegrabConfig,
    style: OutputStyle,
    abort: &AbortToken,
) -> Result<MirrorReport, RunError> {
    let layout = OutputLayout::default_location();
    let (tx, rx) = mpsc::channel::<RunEvent>();
    let renderer = thread::spawn(move || ConsoleRenderer::new(style).drain(rx));

    let result = Mirror {
        layout: &layout,
        http: &cfg.http,
        sink: &tx,
        abort,
    }
    .run(target);

    drop(tx);
    if renderer.join().is_err() {
        tracing::warn!("console renderer panicked");
    }
    result
}
