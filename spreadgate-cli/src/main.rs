//! Spreadgate CLI — one-shot entry check and calendar inspection.
//!
//! Commands:
//! - `check` — fetch quotes, evaluate the filters, print the report
//! - `holidays` — list the configured holiday calendar

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use spreadgate_core::advisory::{evaluate_credit, CreditAdvisory};
use spreadgate_core::config::DashboardConfig;
use spreadgate_core::data::YahooProvider;
use spreadgate_core::filters::FilterDisplay;
use spreadgate_core::signal::SignalState;
use spreadgate_core::snapshot::Snapshot;

#[derive(Parser)]
#[command(
    name = "spreadgate",
    about = "Put-spread entry filter: quotes, filters, and the GREEN/WAITING/RED signal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch quotes, evaluate the four filters, and print the signal.
    Check {
        /// Index symbol to check (defaults to the configured one).
        #[arg(long)]
        symbol: Option<String>,

        /// Quoted $5-wide credit; adds the advisory line to the report.
        #[arg(long)]
        credit: Option<f64>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the configured holiday dates.
    Holidays {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            symbol,
            credit,
            config,
        } => run_check(symbol, credit, config),
        Commands::Holidays { config } => run_holidays(config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

fn run_check(symbol: Option<String>, credit: Option<f64>, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(symbol) = symbol {
        config.index_symbol = symbol;
    }

    let calendar = config.calendar();
    let clock = calendar.now();
    let provider = YahooProvider::new();

    let snapshot = match Snapshot::build(&provider, &config, &calendar, clock) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("data unavailable: {e}");
            eprintln!("re-run to retry; nothing was cached");
            std::process::exit(1);
        }
    };

    print_report(&snapshot, &config, credit);
    Ok(())
}

fn print_report(snapshot: &Snapshot, config: &DashboardConfig, credit: Option<f64>) {
    println!();
    println!("=== {} Put Spread Entry Check ===", config.index_symbol);
    println!(
        "As of:       {:02}:{:02} {} ({})",
        snapshot.clock.hour, snapshot.clock.minute, config.timezone, snapshot.clock.date
    );
    println!();
    println!(
        "{}:         ${:.2}  ({:+.2} vs {}-day MA ${:.2})",
        config.index_symbol,
        snapshot.index_quote.price,
        snapshot.price_delta(),
        config.ma_window,
        snapshot.moving_average
    );
    println!(
        "VIX:         {:.2}  ({:+.1} from cap {:.0})",
        snapshot.vix_quote.price,
        snapshot.vix_headroom(config.vix_cap),
        config.vix_cap
    );
    println!(
        "Holiday:     {}",
        if snapshot.holiday { "YES, skip" } else { "no" }
    );
    println!();
    println!("--- {}/4 filters pass ---", snapshot.pass_count());
    for filter in snapshot.filters.iter() {
        let tag = match filter.display {
            FilterDisplay::Pass => "PASS  ",
            FilterDisplay::Fail => "FAIL  ",
            FilterDisplay::Manual => "MANUAL",
        };
        println!("[{tag}] {}", filter.label);
    }
    println!();
    let verdict = match snapshot.signal {
        SignalState::Green => "GREEN: all filters pass, execute now",
        SignalState::Waiting => "WAITING: entry window is open, filters incomplete",
        SignalState::Red => "RED: skip today",
    };
    println!("Signal:      {verdict}");

    if let Some(credit) = credit {
        let line = match evaluate_credit(credit, config) {
            CreditAdvisory::Ok { target_profit } => {
                format!("OK, target profit ${target_profit:.0}")
            }
            CreditAdvisory::LowCredit => "low, try a $3-wide spread".to_string(),
            CreditAdvisory::TooLow => "too low, skip".to_string(),
        };
        println!("Credit:      {credit:.2} {line}");
    }
    println!();
}

fn run_holidays(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let calendar = config.calendar();

    println!("Configured holidays ({}):", config.holidays.len());
    for date in calendar.holidays() {
        println!("  {}", date.format("%Y-%m-%d %A"));
    }
    Ok(())
}
