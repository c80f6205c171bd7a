//! Headless command-line front end for manual checks.
//!
//! Each subcommand drives the library the way the guide's UI would and prints
//! the outcome as JSON on stdout. Logs go to `guide.log` in the data
//! directory, never to the terminal.
//!
//! ```text
//! devconnect-guide search palermo
//! devconnect-guide --simulate-search-error search eth
//! devconnect-guide trip
//! devconnect-guide wallet connect
//! ```

use clap::{Parser, Subcommand};
use devconnect_guide::app::{Event, KeyChord};
use devconnect_guide::search::{city_label, filter_by_city};
use devconnect_guide::trip::{devconnect_start, Countdown, EventCalendar};
use devconnect_guide::{initialize, observability, Config, GuideError, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devconnect-guide")]
#[command(about = "Devconnect Argentina city guide: search, trip plan and wallet session")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory for the session file and logs
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Make every search fail
    #[arg(long)]
    simulate_search_error: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query through the spotlight and print the result rows
    Search {
        /// Query words, joined with spaces
        #[arg(required = true)]
        query: Vec<String>,

        /// Only keep results located in this city slug, e.g. `buenos-aires`
        #[arg(long)]
        city: Option<String>,
    },

    /// Print the trip plan with its events bucketed by day
    Trip,

    /// Print the time left until Devconnect opens
    Countdown,

    /// Inspect or change the persisted wallet session
    Wallet {
        #[command(subcommand)]
        action: WalletCommand,
    },
}

#[derive(Subcommand)]
enum WalletCommand {
    Status,
    Connect,
    Disconnect,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };
        if self.data_dir.is_some() {
            config.data_dir.clone_from(&self.data_dir);
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        config.simulate_search_error |= self.simulate_search_error;
        Ok(config)
    }
}

#[derive(Serialize)]
struct TripReport<'a> {
    plan: &'a devconnect_guide::domain::TripPlan,
    duration_days: i64,
    days: Vec<(chrono::NaiveDate, Vec<&'a str>)>,
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GuideError::Output(e.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    observability::init_tracing(&config);
    let guide = initialize(&config)?;

    match cli.command {
        Commands::Search { query, city } => {
            if let Some(slug) = city.as_deref() {
                let label = city_label(slug)?;
                tracing::debug!(city = label, "filtering by city");
            }

            let mut spotlight = guide.spotlight();
            spotlight.dispatch(Event::Shortcut(KeyChord::ctrl('k')))?;
            spotlight.dispatch(Event::SetQuery(query.join(" ")))?;
            spotlight.settle().await?;

            if let Some(error) = &spotlight.state().error {
                eprintln!("search failed: {error}");
            }
            let results = filter_by_city(&spotlight.state().results, city.as_deref());
            print_json(&results)
        }
        Commands::Trip => {
            let plan = guide.trips.get_trip_plan().await?;
            let calendar = EventCalendar::new(&plan.events);
            let days = calendar
                .iter()
                .map(|(day, events)| (day, events.iter().map(|e| e.title.as_str()).collect()))
                .collect();
            print_json(&TripReport {
                plan: &plan,
                duration_days: plan.duration_days(),
                days,
            })
        }
        Commands::Countdown => {
            print_json(&Countdown::until(devconnect_start(), chrono::Utc::now()))
        }
        Commands::Wallet { action } => {
            match action {
                WalletCommand::Status => {}
                WalletCommand::Connect => {
                    guide.wallet.connect().await?;
                }
                WalletCommand::Disconnect => {
                    guide.wallet.disconnect().await?;
                }
            }
            for toast in guide.toasts.drain() {
                eprintln!("{}", toast.title);
            }
            print_json(&guide.wallet.state())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn unrenderable_value_is_an_output_error() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON object keys");

        assert!(matches!(render_json(&map), Err(GuideError::Output(_))));
        assert!(render_json(&["ok"]).unwrap().contains("\"ok\""));
    }

    #[test]
    fn city_flag_is_parsed_with_the_search() {
        let cli = Cli::parse_from(["devconnect-guide", "search", "steak", "house", "--city", "palermo"]);
        match cli.command {
            Commands::Search { query, city } => {
                assert_eq!(query.join(" "), "steak house");
                assert_eq!(city.as_deref(), Some("palermo"));
            }
            _ => panic!("expected the search subcommand"),
        }
    }
}
