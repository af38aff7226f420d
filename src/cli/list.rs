use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::yen;
use crate::settings::get_data_dir;
use crate::store::{list_transactions, StoredTransaction};

pub fn run(org: Option<i64>, transaction_type: Option<&str>, year: Option<i32>) -> Result<()> {
    let db_path = get_data_dir().join("shiwake.db");

    if !db_path.exists() {
        println!("Database not found. Run `shiwake init` to set up.");
        return Ok(());
    }

    let conn = get_connection(&db_path)?;
    let rows = list_transactions(&conn, org, transaction_type, year)?;
    println!("{}", format_list(&rows));
    Ok(())
}

fn format_list(rows: &[StoredTransaction]) -> String {
    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "No", "Date", "Type", "Debit", "Credit", "Amount", "Description",
    ]);
    for r in rows {
        let amount = if r.transaction_type == "expense" {
            r.credit_amount
        } else {
            r.debit_amount
        };
        table.add_row(vec![
            Cell::new(&r.transaction_no),
            Cell::new(r.transaction_date.as_deref().unwrap_or("\u{2014}")),
            Cell::new(&r.transaction_type),
            Cell::new(&r.debit_account),
            Cell::new(&r.credit_account),
            Cell::new(yen(amount)),
            Cell::new(r.description.as_deref().unwrap_or("")),
        ]);
    }
    format!("Transactions ({})\n{table}", rows.len())
}
