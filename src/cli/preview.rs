use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::encoding::decode_ledger_bytes;
use crate::error::Result;
use crate::fmt::yen;
use crate::models::TransactionType;
use crate::preview::{preview_ledger_csv, PreviewResult};
use crate::settings::{get_data_dir, load_settings};
use crate::store::SqliteTransactionStore;

pub fn run(file: &str, org: i64, cash_account: Option<&str>, json: bool) -> Result<()> {
    let settings = load_settings();
    let label = cash_account.unwrap_or(&settings.cash_account_label);

    let store = SqliteTransactionStore::open(&get_data_dir().join("shiwake.db"))?;

    let bytes = std::fs::read(file)?;
    let text = decode_ledger_bytes(&bytes)?;

    let result = preview_ledger_csv(&store, label, &text, org);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_preview(&result));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting (preview data → String)
// ---------------------------------------------------------------------------

fn format_preview(result: &PreviewResult) -> String {
    if result.transactions.is_empty() {
        return "No transactions to preview.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "No", "Date", "Type", "Debit", "Credit", "Amount", "Category", "Status",
    ]);
    for t in &result.transactions {
        let draft = &t.draft;
        let amount = match draft.transaction_type {
            TransactionType::Income => yen(draft.debit_amount).green().to_string(),
            TransactionType::Expense => yen(draft.credit_amount).red().to_string(),
            TransactionType::Unclassified => yen(draft.debit_amount),
        };
        let status = if !t.validation_errors.is_empty() {
            t.validation_errors.join("; ").red().to_string()
        } else if t.is_duplicate {
            "duplicate".yellow().to_string()
        } else {
            "ok".to_string()
        };
        table.add_row(vec![
            Cell::new(blank_as_dash(&draft.transaction_no)),
            Cell::new(blank_as_dash(&draft.transaction_date_raw)),
            Cell::new(draft.transaction_type.key()),
            Cell::new(&draft.debit_account),
            Cell::new(&draft.credit_account),
            Cell::new(amount),
            Cell::new(&draft.friendly_category),
            Cell::new(status),
        ]);
    }

    let s = &result.summary;
    let mut out = format!("Preview ({} rows)\n{table}\n", s.total_count);
    out.push_str(&format!(
        "\nValid: {}  Duplicates: {}  Invalid: {}\n",
        s.valid_count, s.duplicate_count, s.invalid_count
    ));
    out.push_str(&format!(
        "Income total: {}  Expense total: {}\n",
        yen(s.income_total).green(),
        yen(s.expense_total).red()
    ));

    let stats = &result.statistics;
    if !stats.income_by_account.is_empty() {
        let mut itable = Table::new();
        itable.set_header(vec!["Account", "Count", "Total"]);
        for (account, stat) in &stats.income_by_account {
            itable.add_row(vec![
                Cell::new(account),
                Cell::new(stat.count),
                Cell::new(yen(stat.total)),
            ]);
        }
        out.push_str(&format!("\nIncome by Account\n{itable}\n"));
    }
    if !stats.expense_by_account.is_empty() {
        let mut etable = Table::new();
        etable.set_header(vec!["Account", "Count", "Total"]);
        for (account, stat) in &stats.expense_by_account {
            etable.add_row(vec![
                Cell::new(account),
                Cell::new(stat.count),
                Cell::new(yen(stat.total)),
            ]);
        }
        out.push_str(&format!("\nExpense by Account\n{etable}\n"));
    }
    if !stats.by_friendly_category.is_empty() {
        let mut ctable = Table::new();
        ctable.set_header(vec!["Category", "Count", "Total"]);
        for (category, stat) in &stats.by_friendly_category {
            ctable.add_row(vec![
                Cell::new(blank_as_dash(category)),
                Cell::new(stat.count),
                Cell::new(yen(stat.total)),
            ]);
        }
        out.push_str(&format!("\nBy Category\n{ctable}\n"));
    }

    out
}

fn blank_as_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}
