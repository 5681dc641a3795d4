//! End-to-end command tests against snapshot files on disk.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use stockroom_cli::{run, Cli};

fn write_json(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{value}").expect("write temp file");
    file
}

fn snapshot() -> NamedTempFile {
    write_json(&json!([
        {
            "id": "paper",
            "name": "Printer Paper",
            "category": "Office",
            "unit": "reams",
            "current_quantity": 2,
            "reorder_point": 10,
            "reorder_quantity": 20,
            "unit_cost": 1.5,
            "supplier": "Office Depot",
            "supplier_sku": "OD-778"
        },
        {
            "id": "chips",
            "name": "Chips",
            "current_quantity": 0,
            "reorder_point": 6,
            "reorder_quantity": 12,
            "charge_price": 1.0,
            "is_for_sale": true
        },
        {
            "id": "pens",
            "name": "pens",
            "current_quantity": 40,
            "reorder_point": 10,
            "reorder_quantity": 50
        }
    ]))
}

fn run_args(snapshot: &Path, args: &[&str]) -> anyhow::Result<String> {
    let snapshot = snapshot.to_str().expect("utf-8 path");
    let mut argv = vec!["stockroom", "--snapshot", snapshot];
    argv.extend_from_slice(args);
    run(Cli::try_parse_from(argv)?)
}

#[test]
fn reorder_lists_critical_before_urgent() {
    let snap = snapshot();
    let out = run_args(snap.path(), &["reorder"]).unwrap();

    let chips = out.find("Chips").unwrap();
    let paper = out.find("Printer Paper").unwrap();
    assert!(chips < paper);
    assert!(out.contains("1 critical, 1 urgent, 0 low"));
    assert!(!out.contains("pens"));
}

#[test]
fn shopping_list_for_selected_item() {
    let snap = snapshot();
    let out = run_args(snap.path(), &["shopping-list", "--item", "paper"]).unwrap();

    assert!(out.contains("URGENT (Very Low)"));
    assert!(out.contains("Est. cost: $30.00"));
    assert!(out.contains("Total items: 1"));
    assert!(!out.contains("Chips"));
}

#[test]
fn shopping_list_defaults_to_every_alert() {
    let snap = snapshot();
    let out = run_args(snap.path(), &["shopping-list"]).unwrap();

    assert!(out.contains("CRITICAL (Out of Stock)"));
    assert!(out.contains("Total items: 2"));
    assert!(out.contains("Total estimated cost: $30.00"));
}

#[test]
fn count_session_reports_overage_and_cash() {
    let snap = snapshot();
    let counts = write_json(&json!({ "chips": "3", "paper": 2 }));
    let counts_path = counts.path().to_str().unwrap();

    let out = run_args(
        snap.path(),
        &["count", "--counts", counts_path, "--cash", "0", "--actor", "clerk"],
    )
    .unwrap();
    let report: Value = serde_json::from_str(&out).unwrap();

    let chips = report["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["item_id"] == "chips")
        .unwrap();
    assert_eq!(chips["items_sold"], -3);
    assert_eq!(chips["variance"], 3);
    assert_eq!(chips["expected_revenue"], "-3.00");

    assert_eq!(report["totals"]["items_counted"], 2);
    assert_eq!(report["totals"]["total_overage"], 3);
    assert_eq!(report["cash"]["variance"], "3.00");
    assert_eq!(report["cash"]["status"], "over");

    let updates = report["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 2);
    assert!(updates.iter().all(|u| u["transaction"]["actor"] == "clerk"));
    assert!(updates
        .iter()
        .all(|u| u["transaction"]["kind"] == "count_adjustment"));
}

#[test]
fn exact_cash_on_decimal_prices_is_perfect() {
    let snap = write_json(&json!([
        { "id": "gum", "name": "Gum", "current_quantity": 1, "reorder_point": 0,
          "reorder_quantity": 5, "charge_price": 0.1, "is_for_sale": true },
        { "id": "mints", "name": "Mints", "current_quantity": 1, "reorder_point": 0,
          "reorder_quantity": 5, "charge_price": 0.2, "is_for_sale": true }
    ]));
    let counts = write_json(&json!({ "gum": "0", "mints": "0" }));

    let out = run_args(
        snap.path(),
        &["count", "--counts", counts.path().to_str().unwrap(), "--cash", "0.30"],
    )
    .unwrap();
    let report: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(report["totals"]["total_expected_revenue"], "0.30");
    assert_eq!(report["cash"]["variance"], "0.00");
    assert_eq!(report["cash"]["status"], "perfect");
}

#[test]
fn count_session_rejects_non_numeric_entry() {
    let snap = snapshot();
    let counts = write_json(&json!({ "chips": "abc" }));
    let err = run_args(
        snap.path(),
        &["count", "--counts", counts.path().to_str().unwrap()],
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("invalid input"));
}

#[test]
fn invalid_snapshot_record_is_reported() {
    let snap = write_json(&json!([
        { "id": "x", "name": "X", "current_quantity": 1, "reorder_point": 2, "reorder_quantity": 0 }
    ]));
    let err = run_args(snap.path(), &["reorder"]).unwrap_err();
    assert!(format!("{err:#}").contains("reorder_quantity must be positive"));
}
