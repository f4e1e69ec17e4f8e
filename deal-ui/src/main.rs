use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deal_core::calculations::parse_decimal_or_zero;
use deal_core::store::{FileStore, SnapshotStore};
use deal_ui::session::Session;
use deal_ui::summary;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Deal margin simulator: the effective hourly rate behind a freelance deal.
///
/// Loads the saved deal state, applies any overrides given on the command
/// line, prints the verdict and saves the updated state back.
///
/// Numeric options accept free-form text (`5000`, `$1,250.50`); anything
/// unparseable counts as 0.
#[derive(Debug, Parser)]
struct Cli {
    /// Path of the saved state document.
    #[arg(long, default_value = "deal-margin.toml")]
    state: PathBuf,

    /// Gross payment offered for the deal.
    #[arg(long)]
    deal_amount: Option<String>,

    /// Baseline labor hours (filming, editing, admin).
    #[arg(long)]
    hours: Option<String>,

    /// Revision rounds; each adds two hours.
    #[arg(long)]
    revisions: Option<String>,

    /// Direct costs always counted against the deal.
    #[arg(long)]
    expenses: Option<String>,

    /// Percentage of the gross withheld for taxes.
    #[arg(long)]
    tax_rate: Option<String>,

    /// Software subscription costs (counted in advanced mode only).
    #[arg(long)]
    software_costs: Option<String>,

    /// Agency fees (counted in advanced mode only).
    #[arg(long)]
    agency_fees: Option<String>,

    /// Minimum acceptable hourly rate.
    #[arg(long)]
    floor: Option<String>,

    /// Switch advanced-cost mode on.
    #[arg(long, conflicts_with = "basic")]
    advanced: bool,

    /// Switch advanced-cost mode off. Clears software costs and agency fees.
    #[arg(long)]
    basic: bool,

    /// Ignore saved state and start from defaults.
    #[arg(long)]
    reset: bool,

    /// Also print the copyable deal summary.
    #[arg(long)]
    summary: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── session assembly ────────────────────────────────────────────────────────

/// Applies the command-line overrides to the session. Field edits land
/// first, then the floor, then the mode toggle, so `--basic` clears
/// advanced costs even when they were set in the same invocation.
fn apply_overrides(
    session: &mut Session,
    cli: &Cli,
) {
    let inputs = session.inputs_mut();
    if let Some(v) = &cli.deal_amount {
        inputs.deal_amount = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.hours {
        inputs.estimated_hours = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.revisions {
        inputs.revisions = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.expenses {
        inputs.expenses = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.tax_rate {
        inputs.tax_rate = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.software_costs {
        inputs.software_costs = parse_decimal_or_zero(v);
    }
    if let Some(v) = &cli.agency_fees {
        inputs.agency_fees = parse_decimal_or_zero(v);
    }

    if let Some(v) = &cli.floor {
        session.set_minimum_floor(parse_decimal_or_zero(v));
    }
    if cli.advanced {
        session.set_advanced_costs(true);
    }
    if cli.basic {
        session.set_advanced_costs(false);
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = FileStore::new(&cli.state);

    let mut session = if cli.reset {
        Session::fresh()
    } else {
        store.load().map(Session::from_snapshot).unwrap_or_default()
    };
    debug!(state = %store.path().display(), "session loaded");

    apply_overrides(&mut session, &cli);
    let result = session.calculate();

    let mode = if session.advanced_costs_enabled() {
        "advanced costs"
    } else {
        "basic"
    };
    println!(
        "Effective hourly rate: {}/hr  ({mode})",
        summary::format_currency_cents(result.effective_rate)
    );
    println!(
        "Net revenue {}  |  Total hours {}  |  Floor {}/hr",
        summary::format_currency(result.net_revenue),
        summary::format_hours(result.total_hours),
        summary::format_currency(session.minimum_floor()),
    );
    println!(
        "{}",
        if result.is_approved {
            "DEAL APPROVED"
        } else {
            "REJECT DEAL"
        }
    );

    if cli.summary {
        println!();
        println!(
            "{}",
            summary::deal_summary(session.inputs(), session.minimum_floor(), &result)
        );
    }

    store.save(&session.snapshot());

    Ok(())
}
