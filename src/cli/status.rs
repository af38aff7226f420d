use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("shiwake.db");

    println!("Data dir:      {}", data_dir.display());
    println!("Database:      {}", db_path.display());
    println!("Cash account:  {}", settings.cash_account_label);

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:       {}", format_bytes(size));

        let conn = get_connection(&db_path)?;

        let transactions: i64 =
            conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?;
        let organizations: i64 = conn.query_row(
            "SELECT count(DISTINCT political_organization_id) FROM transactions",
            [],
            |r| r.get(0),
        )?;

        println!();
        println!("Transactions:   {transactions}");
        println!("Organizations:  {organizations}");
    } else {
        println!();
        println!("Database not found. Run `shiwake init` to set up.");
    }

    Ok(())
}
