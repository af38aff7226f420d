use std::path::PathBuf;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(data_dir: Option<String>, cash_account: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    if let Some(label) = cash_account {
        settings.cash_account_label = label;
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    let conn = get_connection(&resolved.join("shiwake.db"))?;
    init_db(&conn)?;

    println!("Initialized shiwake at {}", resolved.display());
    println!("Cash account: {}", settings.cash_account_label);
    Ok(())
}
