use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, CampaignApi, HttpCampaignApi};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    api: Arc<HttpCampaignApi>,
    poll_interval: Duration,
    page_size: u32,
    results_recheck_delay: Duration,
}

impl UiApp for DesktopApp {
    fn campaign_api(&self) -> Arc<dyn CampaignApi> {
        Arc::clone(&self.api) as Arc<dyn CampaignApi>
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn results_recheck_delay(&self) -> Duration {
        self.results_recheck_delay
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--poll-secs <n>] [--page-size <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::DEFAULT_API_URL);
    eprintln!("  --poll-secs {}", services::DEFAULT_POLL_SECS);
    eprintln!("  --page-size {}", services::DEFAULT_PAGE_SIZE);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MAILBOARD_API_URL, MAILBOARD_POLL_SECS, MAILBOARD_PAGE_SIZE");
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<ApiConfig, ArgsError> {
    // Flags override environment, environment overrides defaults.
    let mut config = ApiConfig::from_env();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidApiUrl { raw: value });
                }
                config.base_url = value;
            }
            "--poll-secs" => {
                let value = require_value(args, "--poll-secs")?;
                let secs: u64 = value.parse().map_err(|_| ArgsError::InvalidNumber {
                    flag: "--poll-secs",
                    raw: value.clone(),
                })?;
                if secs == 0 {
                    return Err(ArgsError::InvalidNumber {
                        flag: "--poll-secs",
                        raw: value,
                    });
                }
                config.poll_interval = Duration::from_secs(secs);
            }
            "--page-size" => {
                let value = require_value(args, "--page-size")?;
                let size: u32 = value.parse().map_err(|_| ArgsError::InvalidNumber {
                    flag: "--page-size",
                    raw: value.clone(),
                })?;
                if size == 0 {
                    return Err(ArgsError::InvalidNumber {
                        flag: "--page-size",
                        raw: value,
                    });
                }
                config.page_size = size;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = parse_args(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(
        api_url = %config.trimmed_base_url(),
        poll_secs = config.poll_interval.as_secs(),
        page_size = config.page_size,
        "starting mailboard"
    );

    let desktop_app = DesktopApp {
        poll_interval: config.poll_interval,
        page_size: config.page_size,
        results_recheck_delay: config.results_recheck_delay,
        api: Arc::new(HttpCampaignApi::new(config)),
    };
    let app: Arc<dyn UiApp> = Arc::new(desktop_app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Mailboard")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
