use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spend_dashboard::config::DashboardConfig;
use spend_dashboard::logging::{self, LogTarget};
use spend_dashboard::report::PeriodSummary;
use spend_dashboard::stat::{Period, SelectionPolicy};
use spend_dashboard::tui::{run_tui, App};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "spend-dashboard", version, about = "Spending analytics dashboard")]
struct Cli {
    /// Period shown at start (daily, weekly, monthly, yearly)
    #[arg(long, global = true)]
    period: Option<Period>,

    /// What a period switch does to the highlighted category (retain, clear)
    #[arg(long, global = true)]
    selection_policy: Option<SelectionPolicy>,

    /// Push one message through the alert feed at start-up (dashboard only)
    #[arg(long, global = true)]
    alert: Option<String>,

    /// Verbose logging, honours RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive terminal dashboard (default)
    Tui,
    /// Print one period's dataset and exit
    Summary {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = DashboardConfig::from_env().context("invalid dashboard configuration")?;
    if let Some(period) = cli.period {
        cfg.initial_period = period;
    }
    if let Some(policy) = cli.selection_policy {
        cfg.selection_policy = policy;
    }
    cfg.debug |= cli.debug;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Summary { json } => {
            let _guard = logging::init(&cfg, LogTarget::Stderr)?;
            if cli.alert.is_some() {
                warn!("--alert only applies to the dashboard, ignored by summary");
            }
            let summary = PeriodSummary::new(cfg.initial_period);
            info!(period = %cfg.initial_period, json, "printing summary");
            if json {
                println!("{}", summary.to_json()?);
            } else {
                print!("{}", summary.render_text());
            }
        }
        Command::Tui => {
            fs::create_dir_all(&cfg.log_dir)
                .with_context(|| format!("cannot create log dir {}", cfg.log_dir.display()))?;
            let _guard = logging::init(&cfg, LogTarget::File(&cfg.log_dir))?;

            let app = App::from_config(&cfg);
            if let Some(message) = cli.alert {
                app.alert_sender().raise_alert(message)?;
            }
            run_tui(app, cfg.tick_rate)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["spend-dashboard", "tui", "--alert", "check Travel"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Tui)));
        assert_eq!(cli.alert.as_deref(), Some("check Travel"));
    }

    #[test]
    fn alert_is_accepted_before_subcommand() {
        let cli = Cli::try_parse_from(["spend-dashboard", "--alert", "hi", "summary", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Summary { json: true })));
        assert_eq!(cli.alert.as_deref(), Some("hi"));
    }

    #[test]
    fn period_and_alert_share_a_position() {
        let cli = Cli::try_parse_from([
            "spend-dashboard",
            "tui",
            "--period",
            "daily",
            "--alert",
            "x",
        ])
        .unwrap();
        assert_eq!(cli.period, Some(Period::Daily));
        assert_eq!(cli.alert.as_deref(), Some("x"));
    }
}
