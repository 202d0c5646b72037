// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stayops::{
    CalendarItem, CoreError, DEFAULT_PAGE_SIZE, FeedContext, FeedInputs, FeedStats, Locale,
    MaintenanceFeed, MaintenanceFilters, ObservedDiff, PaginatedFeed, PeriodPreset,
    PeriodSelection, PeriodWindow, build_calendar_items, build_maintenance_feed,
    diff_observed_ids, filter_tickets, observe_reservations, observe_tickets, page_budget,
    paginate_groups,
};
use stayops_domain::{
    Category, DEFAULT_TIMEZONE, DomainError, LocalDates, MaintenanceOverrides, Reservation,
    Ticket, TicketStatus, TicketType,
};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// StayOps - derive the maintenance feed from ticket and reservation snapshots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    snapshots: SnapshotArgs,

    #[command(flatten)]
    filters: FilterArgs,

    /// IANA timezone the console operates in
    #[arg(long, env = "STAYOPS_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Language of group labels (pt-BR or en-US)
    #[arg(long, env = "STAYOPS_LOCALE", default_value = "pt-BR")]
    locale: Locale,

    /// RFC 3339 instant used as "now". Defaults to the system clock.
    #[arg(long, env = "STAYOPS_NOW")]
    now: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the grouped feed, paginated
    #[command(visible_alias = "f")]
    Feed {
        /// Number of "load more" pages to reveal
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items revealed per page
        #[arg(long, env = "STAYOPS_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Print every group without pagination
        #[arg(long)]
        all: bool,
    },

    /// Print the filtered, sorted ticket list
    #[command(visible_alias = "t")]
    Tickets,

    /// Print the month-grid items for a month
    #[command(visible_alias = "c")]
    Calendar {
        /// Month to display, `YYYY-MM`. Defaults to the current month.
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,
    },

    /// Compare current ids against a previously observed set
    #[command(visible_alias = "d")]
    Diff {
        /// JSON file written by a previous run (`current` field of the output)
        #[arg(long)]
        previous: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug, Clone)]
struct SnapshotArgs {
    /// JSON array of tickets
    #[arg(long, env = "STAYOPS_TICKETS")]
    tickets: Option<PathBuf>,

    /// JSON array of reservations
    #[arg(long, env = "STAYOPS_RESERVATIONS")]
    reservations: Option<PathBuf>,

    /// JSON object of overrides keyed by item key
    #[arg(long, env = "STAYOPS_OVERRIDES")]
    overrides: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
struct FilterArgs {
    /// Ticket category (maintenance or concierge)
    #[arg(long, env = "STAYOPS_CATEGORY", default_value = "maintenance")]
    category: Category,

    /// Case-insensitive free-text search
    #[arg(long, env = "STAYOPS_SEARCH")]
    search: Option<String>,

    /// Ticket status, e.g. `Aberto` or `in-progress`
    #[arg(long, env = "STAYOPS_STATUS")]
    status: Option<TicketStatus>,

    /// Assignee name
    #[arg(long, env = "STAYOPS_ASSIGNEE")]
    assignee: Option<String>,

    /// Property code
    #[arg(long, env = "STAYOPS_PROPERTY")]
    property: Option<String>,

    /// Comma-separated ticket types (checkout, preventive, guest, regular)
    #[arg(long = "type", env = "STAYOPS_TYPES", value_delimiter = ',')]
    types: Vec<TicketType>,

    /// Period preset (all, today, 7days, 30days, thisMonth, custom)
    #[arg(long, env = "STAYOPS_PERIOD", default_value = "all")]
    period: PeriodPreset,

    /// First day of a custom period, `YYYY-MM-DD`
    #[arg(long, env = "STAYOPS_START")]
    start: Option<String>,

    /// Last day of a custom period, inclusive, `YYYY-MM-DD`
    #[arg(long, env = "STAYOPS_END")]
    end: Option<String>,
}

impl FilterArgs {
    fn to_filters(&self) -> MaintenanceFilters {
        MaintenanceFilters {
            category: self.category,
            search: self.search.clone().unwrap_or_default(),
            status: self.status,
            assignee: self.assignee.clone(),
            property: self.property.clone(),
            types: self.types.clone(),
            period: PeriodSelection {
                preset: self.period,
                custom_start_date: self.start.clone(),
                custom_end_date: self.end.clone(),
            },
        }
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The in-memory snapshots a run derives from.
#[derive(Debug, Default)]
struct Snapshots {
    tickets: Vec<Ticket>,
    reservations: Vec<Reservation>,
    overrides: MaintenanceOverrides,
}

impl Snapshots {
    fn load(args: &SnapshotArgs) -> Result<Self, CliError> {
        let snapshots: Self = Self {
            tickets: load_optional(args.tickets.as_deref())?,
            reservations: load_optional(args.reservations.as_deref())?,
            overrides: load_optional(args.overrides.as_deref())?,
        };
        info!(
            tickets = snapshots.tickets.len(),
            reservations = snapshots.reservations.len(),
            overrides = snapshots.overrides.len(),
            "Loaded snapshots"
        );
        Ok(snapshots)
    }

    fn inputs(&self) -> FeedInputs<'_> {
        FeedInputs {
            tickets: &self.tickets,
            reservations: &self.reservations,
            overrides: &self.overrides,
        }
    }
}

/// Ids observed in one run, in the shape `diff --previous` reads back.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ObservedSnapshot {
    tickets: BTreeSet<String>,
    reservations: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedOutput {
    window: PeriodWindow,
    stats: FeedStats,
    #[serde(flatten)]
    page: PaginatedFeed,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DiffOutput {
    tickets: ObservedDiff,
    reservations: ObservedDiff,
    current: ObservedSnapshot,
}

fn load_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, CliError> {
    path.map_or_else(|| Ok(T::default()), load_json)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_month(raw: &str) -> Result<NaiveDate, String> {
    let raw: &str = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .map_err(|e| format!("expected YYYY-MM, got '{raw}': {e}"))
}

/// Runs `command` and returns the JSON document to print.
fn run(
    command: &Command,
    snapshots: &Snapshots,
    filters: &MaintenanceFilters,
    ctx: &FeedContext,
) -> Result<serde_json::Value, CliError> {
    let inputs: FeedInputs<'_> = snapshots.inputs();
    let value: serde_json::Value = match command {
        Command::Feed {
            page,
            page_size,
            all,
        } => {
            let feed: MaintenanceFeed = build_maintenance_feed(inputs, filters, ctx)?;
            let budget: usize = if *all {
                usize::MAX
            } else {
                page_budget(*page, *page_size)
            };
            serde_json::to_value(FeedOutput {
                window: feed.window,
                stats: feed.stats,
                page: paginate_groups(&feed.groups, budget),
            })?
        }
        Command::Tickets => serde_json::to_value(filter_tickets(inputs, filters, ctx)?)?,
        Command::Calendar { month } => {
            let displayed: NaiveDate = month.unwrap_or(ctx.today);
            let items: Vec<CalendarItem> = build_calendar_items(inputs, filters, ctx, displayed)?;
            serde_json::to_value(items)?
        }
        Command::Diff { previous } => {
            let previous: ObservedSnapshot = load_optional(previous.as_deref())?;
            let current: ObservedSnapshot = ObservedSnapshot {
                tickets: observe_tickets(&snapshots.tickets),
                reservations: observe_reservations(&snapshots.reservations)?,
            };
            serde_json::to_value(DiffOutput {
                tickets: diff_observed_ids(&current.tickets, &previous.tickets),
                reservations: diff_observed_ids(&current.reservations, &previous.reservations),
                current,
            })?
        }
    };
    Ok(value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dates: LocalDates = LocalDates::new(&args.timezone)?;
    let now: DateTime<Utc> = args.now.unwrap_or_else(Utc::now);
    let ctx: FeedContext = FeedContext::at(dates, now, args.locale);
    debug!(today = %ctx.today, timezone = %args.timezone, "Resolved feed context");

    let snapshots: Snapshots = Snapshots::load(&args.snapshots)?;
    let filters: MaintenanceFilters = args.filters.to_filters();
    let output: serde_json::Value = run(&args.command, &snapshots, &filters, &ctx)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output).map_err(CliError::from)?;
    writeln!(stdout).map_err(CliError::from)?;

    Ok(())
}
