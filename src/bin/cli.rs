//! Vitals CLI
//!
//! Command-line interface for previewing the dashboard:
//! - Render the page in the terminal, optionally replaying clicks
//! - Print the sample chart series
//! - Generate a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitals::{
    generate_default_config, render_text, Config, Dashboard, DashboardEvent, Discovery,
    LoggingConfig, SeriesProvider,
};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Health metrics dashboard preview")]
#[command(long_about = "Vitals renders the health metrics dashboard.\nPreview it in the terminal, replay clicks, or dump the chart series.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard
    Show {
        /// Elements to click, in order (repeatable)
        #[arg(long = "click", value_enum)]
        clicks: Vec<ClickTarget>,
        /// Text typed into the search box
        #[arg(short, long)]
        search: Option<String>,
        /// Seed for the sample chart series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the chart series
    Chart {
        /// Seed for the sample chart series
        #[arg(long)]
        seed: Option<u64>,
        /// Number of points
        #[arg(short, long)]
        points: Option<usize>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Clickable elements of the page
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ClickTarget {
    /// Notification bell
    Bell,
    /// Header avatar
    Avatar,
    /// Search button
    Search,
    /// Footer call-to-action
    Footer,
}

impl From<ClickTarget> for DashboardEvent {
    fn from(target: ClickTarget) -> Self {
        match target {
            ClickTarget::Bell => DashboardEvent::ToggleNotifications,
            ClickTarget::Avatar => DashboardEvent::ToggleProfileMenu,
            ClickTarget::Search => DashboardEvent::SearchSubmit,
            ClickTarget::Footer => DashboardEvent::FooterCta,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let discovery = match &cli.config {
        Some(path) => Discovery {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::discover(&Config::default_paths()),
    };

    init_logging(&discovery.config.logging);
    tracing::debug!("Vitals v{}", env!("CARGO_PKG_VERSION"));
    discovery.log();
    let config = discovery.config;

    match cli.command {
        Commands::Show {
            clicks,
            search,
            seed,
        } => {
            let mut config = config;
            if seed.is_some() {
                config.chart.seed = seed;
            }

            let mut dashboard = Dashboard::from_config(config);
            if let Some(term) = search {
                dashboard.dispatch(DashboardEvent::Search(term));
            }
            for click in clicks {
                dashboard.dispatch(click.into());
            }

            let snapshot = dashboard.snapshot();
            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                _ => println!("{}", render_text(&snapshot)),
            }
        }

        Commands::Chart { seed, points } => {
            let mut series = config.chart.series();
            if seed.is_some() {
                series.seed = seed;
            }
            if let Some(n) = points {
                series.len = n;
            }
            let points = series.points();

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&points)?),
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    for point in &points {
                        writer.serialize(point)?;
                    }
                    writer.flush()?;
                }
                _ => {
                    println!("{:>4}  {:>6}", "x", "y");
                    for point in &points {
                        println!("{:>4}  {:>6}", point.x, point.y);
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    file.write_all(content.as_bytes())?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Default directive covering the library and this binary
fn default_directive(level: &str) -> String {
    format!("vitals={level},vitals_cli={level}")
}

/// Install the tracing subscriber; `RUST_LOG` wins over the config level
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
