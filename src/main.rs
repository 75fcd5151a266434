//! Trippin command line client
//!
//! ```bash
//! trippin --location Paris --days 3 --budget 250
//! trippin -L Tokyo -d 2 -b 120 --theme dark
//! TRIPPIN_SERVICE__BASE_URL=https://trips.example.com trippin -L Lisbon
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trippin::config::LoggingConfig;
use trippin::{
    FormInput, ItineraryClient, ItineraryViewModel, RequestFormController, RequestState,
    Renderer, Theme, ThemeContext, TrippinConfig,
};

#[derive(Parser, Debug)]
#[command(name = "trippin")]
#[command(version)]
#[command(about = "Plan your perfect trip with personalized itineraries")]
struct Args {
    /// Destination, e.g. "Paris", "Tokyo", "New York"
    #[arg(short = 'L', long)]
    location: String,

    /// Number of days (1-30)
    #[arg(short, long, default_value = "1")]
    days: String,

    /// Budget in dollars
    #[arg(short, long, default_value = "100")]
    budget: String,

    /// Display theme (light or dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Flip the configured theme
    #[arg(long)]
    toggle_theme: bool,

    /// Itinerary service base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Print the raw itinerary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn parse_theme(s: &str) -> std::result::Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| e.user_message())
}

/// Configure logging from the config, `RUST_LOG` taking precedence
fn setup_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trippin={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let mut config = TrippinConfig::load_from_path(args.config.clone())
        .context("Failed to load configuration")?;
    if let Some(api_url) = &args.api_url {
        config.service.base_url = api_url.clone();
        config.apply_defaults();
        config.validate()?;
    }

    setup_logging(&config.logging, args.verbose);
    tracing::debug!("Parsed args: {:?}", args);
    tracing::debug!("Using itinerary service at {}", config.service.base_url);

    let mut theme = ThemeContext::new(args.theme.unwrap_or(config.display.theme));
    if args.toggle_theme {
        theme.toggle();
    }
    let renderer = Renderer::new(&theme, config.display.color && !args.no_color);

    let mut form = RequestFormController::new();
    form.apply_input(FormInput::Location, &args.location);
    form.apply_input(FormInput::Days, &args.days);
    form.apply_input(FormInput::Budget, &args.budget);

    let client = ItineraryClient::new(&config.service)?;
    let mut view_model = ItineraryViewModel::new(client);

    if let Err(err) = form.submit(&mut view_model).await {
        eprintln!("{}", err.user_message());
        return Ok(ExitCode::FAILURE);
    }

    match view_model.state() {
        RequestState::Success(itinerary) if args.json => {
            println!("{}", serde_json::to_string_pretty(itinerary)?);
        }
        state @ RequestState::Failure(_) => {
            eprint!("{}", renderer.render(state));
            return Ok(ExitCode::FAILURE);
        }
        state => print!("{}", renderer.render(state)),
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
