use std::path::Path;

use rusqlite::Connection;

use crate::db;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Duplicate lookup
// ---------------------------------------------------------------------------

/// Key of a transaction already persisted for an organization.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingTransactionRef {
    pub political_organization_id: i64,
    pub transaction_no: String,
}

/// Lookup seam for the preview pipeline, so duplicate detection can run
/// against any backing store.
pub trait TransactionStore {
    fn find_by_transaction_nos(
        &self,
        transaction_nos: &[String],
        political_organization_id: i64,
    ) -> Result<Vec<ExistingTransactionRef>>;
}

pub struct SqliteTransactionStore {
    conn: Connection,
}

impl SqliteTransactionStore {
    /// Opens (and if needed creates) the database at `db_path`. A store
    /// opened on a fresh path starts empty, so nothing is a duplicate.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = db::get_connection(db_path)?;
        db::init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl TransactionStore for SqliteTransactionStore {
    fn find_by_transaction_nos(
        &self,
        transaction_nos: &[String],
        political_organization_id: i64,
    ) -> Result<Vec<ExistingTransactionRef>> {
        if transaction_nos.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (0..transaction_nos.len())
            .map(|i| format!("?{}", i + 2))
            .collect();
        let sql = format!(
            "SELECT political_organization_id, transaction_no FROM transactions \
             WHERE political_organization_id = ?1 AND transaction_no IN ({})",
            placeholders.join(", ")
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut param_values: Vec<&dyn rusqlite::types::ToSql> = vec![&political_organization_id];
        for no in transaction_nos {
            param_values.push(no);
        }
        let rows = stmt
            .query_map(param_values.as_slice(), |row| {
                Ok(ExistingTransactionRef {
                    political_organization_id: row.get(0)?,
                    transaction_no: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Register queries
// ---------------------------------------------------------------------------

pub struct StoredTransaction {
    pub transaction_no: String,
    pub transaction_date: Option<String>,
    pub transaction_type: String,
    pub debit_account: String,
    pub credit_account: String,
    pub debit_amount: i64,
    pub credit_amount: i64,
    pub financial_year: Option<i32>,
    pub description: Option<String>,
}

pub fn list_transactions(
    conn: &Connection,
    political_organization_id: Option<i64>,
    transaction_type: Option<&str>,
    financial_year: Option<i32>,
) -> Result<Vec<StoredTransaction>> {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    if let Some(org) = political_organization_id {
        params.push(Box::new(org));
        clauses.push(format!("political_organization_id = ?{}", params.len()));
    }
    if let Some(kind) = transaction_type {
        params.push(Box::new(kind.to_string()));
        clauses.push(format!("transaction_type = ?{}", params.len()));
    }
    if let Some(year) = financial_year {
        params.push(Box::new(year));
        clauses.push(format!("financial_year = ?{}", params.len()));
    }
    let clause = if clauses.is_empty() {
        "1=1".to_string()
    } else {
        clauses.join(" AND ")
    };

    let sql = format!(
        "SELECT transaction_no, transaction_date, transaction_type, \
                debit_account, credit_account, debit_amount, credit_amount, \
                financial_year, description \
         FROM transactions WHERE {clause} ORDER BY transaction_date, id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let param_values: Vec<&dyn rusqlite::types::ToSql> =
        params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt
        .query_map(param_values.as_slice(), |row| {
            Ok(StoredTransaction {
                transaction_no: row.get(0)?,
                transaction_date: row.get(1)?,
                transaction_type: row.get(2)?,
                debit_account: row.get(3)?,
                credit_account: row.get(4)?,
                debit_amount: row.get(5)?,
                credit_amount: row.get(6)?,
                financial_year: row.get(7)?,
                description: row.get(8)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
