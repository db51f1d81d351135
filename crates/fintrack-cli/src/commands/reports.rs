//! Derived-metrics report commands: the dashboard's cards and charts.

use owo_colors::OwoColorize;

use fintrack_core::metrics;

use crate::app::AppContext;
use crate::cli::{CategoriesArgs, MonthlyArgs, SummaryArgs};
use crate::helpers::parse_reference_date;
use crate::ui::format::format_amount;
use crate::ui::{bordered_table, Column};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let reference = parse_reference_date(args.date.as_deref())?;
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, None);

    let totals = metrics::totals(ledger.transactions());
    let monthly = metrics::monthly_expenses(ledger.transactions(), reference);

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "balance": totals.balance,
            "income": totals.income,
            "expenses": totals.expenses,
            "monthly_expenses": monthly,
            "reference_month": reference.format("%Y-%m").to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let balance = format_amount(totals.balance, &ctx.currency);
    let balance = if !ui.color {
        balance
    } else if totals.balance >= 0.0 {
        balance.green().to_string()
    } else {
        balance.red().to_string()
    };

    println!("Current Balance   {}", balance);
    println!("Total Income      {}", format_amount(totals.income, &ctx.currency));
    println!("Total Expenses    {}", format_amount(totals.expenses, &ctx.currency));
    println!(
        "Monthly Expenses  {}  ({})",
        format_amount(monthly, &ctx.currency),
        reference.format("%b %Y")
    );
    Ok(())
}

pub fn handle_categories(ctx: &AppContext, args: &CategoriesArgs) -> anyhow::Result<()> {
    let reference = parse_reference_date(args.date.as_deref())?;
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, None);

    let breakdown = metrics::category_breakdown(ledger.transactions(), reference);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    if breakdown.is_empty() {
        println!("No expense data for this month");
        return Ok(());
    }

    let columns = [
        Column::new("CATEGORY"),
        Column::new("AMOUNT"),
        Column::new("SHARE"),
    ];
    let rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|slice| {
            vec![
                slice.category.clone(),
                format_amount(slice.amount, &ctx.currency),
                format!("{}%", slice.percentage),
            ]
        })
        .collect();
    println!("{}", bordered_table(&ui, &columns, &rows));
    Ok(())
}

pub fn handle_monthly(ctx: &AppContext, args: &MonthlyArgs) -> anyhow::Result<()> {
    let reference = parse_reference_date(args.date.as_deref())?;
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, None);

    let series = metrics::monthly_series(ledger.transactions(), reference, args.months);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    let columns = [
        Column::new("MONTH"),
        Column::new("INCOME"),
        Column::new("EXPENSES"),
    ];
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|month| {
            vec![
                format!("{} {}", month.label, month.year),
                format_amount(month.income, &ctx.currency),
                format_amount(month.expenses, &ctx.currency),
            ]
        })
        .collect();
    println!("{}", bordered_table(&ui, &columns, &rows));
    Ok(())
}
