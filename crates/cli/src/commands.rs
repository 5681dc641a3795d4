use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use stockroom_core::{parse_amount, parse_count, DomainError, ItemId, Money, UserId};
use stockroom_inventory::{
    aggregate_counts, apply_count, build_shopping_list, cash_variance, count_by_priority,
    reorder_alerts, CashStatus, CountSubmission, CountTotals, InventoryItem, Priority, ReorderAlert,
    StockUpdate,
};

use crate::snapshot::{find_item, load_counts, load_items};

#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Reorder alerts, shopping lists, and count reconciliation over an inventory snapshot")]
#[command(version)]
pub struct Cli {
    /// JSON array of inventory documents exported from the store
    #[arg(long, global = true, env = "STOCKROOM_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List items at or below their reorder point, most urgent first
    Reorder,

    /// Print a shopping list for the selected items
    ShoppingList {
        /// Item ids to include (default: every item needing reorder)
        #[arg(long = "item", value_name = "ID")]
        items: Vec<String>,
    },

    /// Reconcile a physical count against recorded stock
    Count {
        /// JSON object mapping item id to the entered count
        #[arg(long)]
        counts: PathBuf,

        /// Cash counted in the drawer
        #[arg(long)]
        cash: Option<String>,

        /// Who performed the count
        #[arg(long, env = "STOCKROOM_ACTOR", default_value = "cli")]
        actor: String,

        /// Free-text note recorded on every adjustment
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Execute a parsed command and return what should be printed.
pub fn run(cli: Cli) -> anyhow::Result<String> {
    let snapshot = cli
        .snapshot
        .context("no snapshot given (use --snapshot or STOCKROOM_SNAPSHOT)")?;
    let items = load_items(&snapshot)?;

    match cli.command {
        Command::Reorder => Ok(reorder_report(&items)),
        Command::ShoppingList { items: ids } => Ok(shopping_list(&items, &ids)?),
        Command::Count {
            counts,
            cash,
            actor,
            notes,
        } => {
            let entries = load_counts(&counts)?;
            let actor = UserId::new(actor)?;
            let report = count_report(&items, &entries, cash.as_deref(), &actor, Utc::now(), notes)?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Human-readable reorder alerts, most urgent first.
pub fn reorder_report(items: &[InventoryItem]) -> String {
    let alerts = reorder_alerts(items);
    if alerts.is_empty() {
        return "All items are above their reorder point.\n".to_string();
    }

    let counts = count_by_priority(&alerts);
    let breakdown: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format!("{} {p}", counts.get(*p)))
        .collect();
    let mut out = format!(
        "{} item(s) need reordering: {}\n",
        counts.total(),
        breakdown.join(", ")
    );
    for alert in &alerts {
        out.push_str(&format!(
            "[{:<8}] {}: {} {} on hand, reorder point {}, order {}\n",
            alert.priority,
            alert.item.name,
            alert.item.current_quantity,
            alert.item.unit_label(),
            alert.item.reorder_point,
            alert.item.reorder_quantity,
        ));
    }
    out
}

/// Shopping list for `ids`, or for every reorder alert when `ids` is empty.
pub fn shopping_list(items: &[InventoryItem], ids: &[String]) -> Result<String, DomainError> {
    let selected: Vec<ReorderAlert> = if ids.is_empty() {
        reorder_alerts(items)
    } else {
        let mut selected = Vec::with_capacity(ids.len());
        for raw in ids {
            let id = ItemId::new(raw.as_str())?;
            let item = find_item(items, &id)?;
            let alert = ReorderAlert::for_item(item).ok_or_else(|| {
                DomainError::validation(format!("item {id} is above its reorder point"))
            })?;
            selected.push(alert);
        }
        selected
    };
    build_shopping_list(&selected)
}

/// Cash side of a count session.
#[derive(Debug, Clone, Serialize)]
pub struct CashReport {
    pub actual_cash: Money,
    pub expected_revenue: Money,
    pub variance: Money,
    pub status: CashStatus,
}

/// Everything produced by a count session, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct CountReport {
    pub submissions: Vec<CountSubmission>,
    pub totals: CountTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<CashReport>,
    pub updates: Vec<StockUpdate>,
}

/// Parse the entered counts, reconcile them, and build update payloads.
///
/// Any bad entry (unknown id, non-numeric or negative count, bad cash amount)
/// aborts the whole session before anything is computed.
pub fn count_report(
    items: &[InventoryItem],
    entries: &BTreeMap<String, String>,
    cash: Option<&str>,
    actor: &UserId,
    occurred_at: DateTime<Utc>,
    notes: Option<String>,
) -> Result<CountReport, DomainError> {
    if entries.is_empty() {
        return Err(DomainError::empty_selection("no counts were entered"));
    }
    let actual_cash = cash.map(parse_amount).transpose()?;

    let mut submissions = Vec::with_capacity(entries.len());
    for (raw_id, text) in entries {
        let id = ItemId::new(raw_id.as_str())?;
        let item = find_item(items, &id)?;
        let actual = parse_count(text).map_err(|e| match e {
            DomainError::InvalidInput(msg) => {
                DomainError::invalid_input(format!("{}: {msg}", item.name))
            }
            other => other,
        })?;
        submissions.push(apply_count(item, actual)?);
    }

    let totals = aggregate_counts(&submissions);
    let cash = actual_cash.map(|actual_cash| {
        let variance = cash_variance(actual_cash, totals.total_expected_revenue);
        CashReport {
            actual_cash,
            expected_revenue: totals.total_expected_revenue,
            variance,
            status: CashStatus::classify(variance),
        }
    });
    let updates = submissions
        .iter()
        .map(|s| s.stock_update(actor, occurred_at, notes.clone()))
        .collect();

    if let Some(cash) = &cash {
        tracing::info!(
            items_counted = totals.items_counted,
            variance = %cash.variance,
            status = %cash.status,
            "count session reconciled"
        );
    }

    Ok(CountReport {
        submissions,
        totals,
        cash,
        updates,
    })
}
