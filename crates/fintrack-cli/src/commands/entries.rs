//! Transaction mutation and listing commands.

use chrono::{DateTime, Local, NaiveDate};

use fintrack_core::{NewTransaction, Transaction};

use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, EditArgs, ListArgs};
use crate::helpers::{resolve_transaction_id, validate_amount, validate_date};
use crate::output::transactions_json;
use crate::ui::format::{format_signed_amount, short_id, truncate};
use crate::ui::{simple_table, Column};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let amount = validate_amount(args.amount)?;
    let date = match &args.date {
        Some(value) => validate_date(value)?,
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    let mut ledger = ctx.open_ledger()?;
    let created = ledger.add(NewTransaction::new(
        args.kind.into(),
        amount,
        args.description.clone(),
        date,
        args.category.clone(),
    ))?;

    if !ctx.quiet {
        println!(
            "Added {} {} \"{}\" ({})",
            created.kind,
            format_signed_amount(created.amount, created.kind, &ctx.currency, false),
            created.description,
            short_id(&created.id)
        );
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;

    let Some(id) = resolve_transaction_id(ledger.transactions(), &args.id)? else {
        // Stale ids are a soft miss, not a crash
        eprintln!("Transaction \"{}\" not found; nothing changed", args.id);
        return Ok(());
    };
    let Some(mut edited) = ledger.get(&id).cloned() else {
        eprintln!("Transaction \"{}\" not found; nothing changed", args.id);
        return Ok(());
    };

    if let Some(amount) = args.amount {
        edited.amount = validate_amount(amount)?;
    }
    if let Some(description) = &args.description {
        edited.description = description.clone();
    }
    if let Some(date) = &args.date {
        edited.date = validate_date(date)?;
    }
    if let Some(category) = &args.category {
        edited.category = category.clone();
    }
    if let Some(kind) = args.kind {
        edited.kind = kind.into();
    }

    ledger.update(edited)?;
    if !ctx.quiet {
        println!("Updated transaction {}", short_id(&id));
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;

    let Some(id) = resolve_transaction_id(ledger.transactions(), &args.id)? else {
        eprintln!("Transaction \"{}\" not found; nothing changed", args.id);
        return Ok(());
    };

    ledger.delete(&id)?;
    if !ctx.quiet {
        println!("Deleted transaction {}", short_id(&id));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    let mut sorted: Vec<Transaction> = ledger.transactions().to_vec();
    sorted.sort_by(|a, b| sort_date(b).cmp(&sort_date(a)));
    if let Some(limit) = args.limit {
        sorted.truncate(limit);
    }

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&transactions_json(&sorted))?
        );
        return Ok(());
    }

    if sorted.is_empty() {
        println!("No transactions yet");
        return Ok(());
    }

    let columns = [
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("KIND"),
        Column::new("CATEGORY"),
        Column::new("DESCRIPTION"),
        Column::new("AMOUNT"),
    ];
    let rows: Vec<Vec<String>> = sorted
        .iter()
        .map(|t| {
            vec![
                short_id(&t.id),
                t.date.clone(),
                t.kind.to_string(),
                truncate(&t.category, 20),
                truncate(&t.description, 40),
                format_signed_amount(t.amount, t.kind, &ctx.currency, ui.color),
            ]
        })
        .collect();
    println!("{}", simple_table(&ui, &columns, &rows));
    Ok(())
}

/// Display ordering key: parsed date, newest first; unparseable dates sort
/// last. Storage order is not a guarantee, sorting is a display concern.
fn sort_date(t: &Transaction) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(&t.date, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(&t.date)
        .ok()
        .map(|dt| dt.date_naive())
}
