use chrono::NaiveDate;
use serde::Serialize;

/// One data line of a journal export after header mapping. Every column is
/// kept as the raw string from the file; columns missing from a short row
/// are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCsvRecord {
    pub transaction_no: String,
    pub transaction_date: String,
    pub debit_account: String,
    pub debit_sub_account: String,
    pub debit_department: String,
    pub debit_partner: String,
    pub debit_tax_category: String,
    pub debit_invoice: String,
    pub debit_amount: String,
    pub credit_account: String,
    pub credit_sub_account: String,
    pub credit_department: String,
    pub credit_partner: String,
    pub credit_tax_category: String,
    pub credit_invoice: String,
    pub credit_amount: String,
    pub description: String,
    pub tags: String,
    pub memo: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    #[default]
    Unclassified,
}

impl TransactionType {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Unclassified => "unclassified",
        }
    }
}

/// Canonical transaction built from one raw record. Conversion never fails:
/// amounts that do not parse become 0 and dates that do not parse become
/// None, so every CSV row yields exactly one draft.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionDraft {
    pub political_organization_id: i64,
    pub transaction_no: String,
    pub transaction_date: Option<NaiveDate>,
    pub transaction_date_raw: String,
    pub financial_year: Option<i32>,
    pub transaction_type: TransactionType,
    pub debit_account: String,
    pub debit_sub_account: String,
    pub debit_department: String,
    pub debit_partner: String,
    pub debit_tax_category: String,
    pub debit_invoice: String,
    pub debit_amount: i64,
    pub credit_account: String,
    pub credit_sub_account: String,
    pub credit_department: String,
    pub credit_partner: String,
    pub credit_tax_category: String,
    pub credit_invoice: String,
    pub credit_amount: i64,
    pub description: String,
    pub friendly_category: String,
    pub memo: String,
}

/// A draft plus its review outcome. Duplicates are informational; a row is
/// only invalid when `validation_errors` is non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewTransaction {
    #[serde(flatten)]
    pub draft: TransactionDraft,
    pub is_duplicate: bool,
    pub validation_errors: Vec<String>,
}
