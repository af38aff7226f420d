use chrono::{Datelike, NaiveDate};

use crate::models::{RawCsvRecord, TransactionDraft, TransactionType};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an amount column into non-negative integer yen. Commas are
/// stripped; anything other than a plain digit string becomes 0.
pub fn parse_amount(raw: &str) -> i64 {
    let s = raw.replace(',', "");
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    s.parse().unwrap_or(0)
}

/// Parse a transaction date in the export's `YYYY/M/D` form.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let y: i32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let d: u32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Financial year of a raw transaction date. Political-fund reports run on
/// the calendar year, so this is the year component of the parsed date.
pub fn extract_financial_year(raw: &str) -> Option<i32> {
    parse_transaction_date(raw).map(|date| date.year())
}

// ---------------------------------------------------------------------------
// RecordConverter
// ---------------------------------------------------------------------------

/// Builds canonical drafts from raw records. The designated cash account
/// decides classification: money entering it is income and money leaving
/// it is expense. A row that touches it on neither side stays unclassified.
pub struct RecordConverter {
    cash_account_label: String,
}

impl RecordConverter {
    pub fn new(cash_account_label: &str) -> Self {
        Self {
            cash_account_label: cash_account_label.to_string(),
        }
    }

    // Debit wins when both sides name the cash account.
    fn classify(&self, record: &RawCsvRecord) -> TransactionType {
        if record.debit_account == self.cash_account_label {
            TransactionType::Income
        } else if record.credit_account == self.cash_account_label {
            TransactionType::Expense
        } else {
            TransactionType::Unclassified
        }
    }

    /// Convert one raw record into a draft. Never fails.
    pub fn convert_row(
        &self,
        record: &RawCsvRecord,
        political_organization_id: i64,
    ) -> TransactionDraft {
        TransactionDraft {
            political_organization_id,
            transaction_no: record.transaction_no.clone(),
            transaction_date: parse_transaction_date(&record.transaction_date),
            transaction_date_raw: record.transaction_date.clone(),
            financial_year: extract_financial_year(&record.transaction_date),
            transaction_type: self.classify(record),
            debit_account: record.debit_account.clone(),
            debit_sub_account: record.debit_sub_account.clone(),
            debit_department: record.debit_department.clone(),
            debit_partner: record.debit_partner.clone(),
            debit_tax_category: record.debit_tax_category.clone(),
            debit_invoice: record.debit_invoice.clone(),
            debit_amount: parse_amount(&record.debit_amount),
            credit_account: record.credit_account.clone(),
            credit_sub_account: record.credit_sub_account.clone(),
            credit_department: record.credit_department.clone(),
            credit_partner: record.credit_partner.clone(),
            credit_tax_category: record.credit_tax_category.clone(),
            credit_invoice: record.credit_invoice.clone(),
            credit_amount: parse_amount(&record.credit_amount),
            description: record.description.clone(),
            friendly_category: record.tags.clone(),
            memo: record.memo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASH: &str = "普通預金";

    fn mock_record() -> RawCsvRecord {
        RawCsvRecord {
            transaction_no: "1".to_string(),
            transaction_date: "2025/6/6".to_string(),
            debit_account: "テスト借方".to_string(),
            debit_amount: "1000".to_string(),
            credit_account: "テスト貸方".to_string(),
            credit_amount: "1000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500000"), 1500000);
        assert_eq!(parse_amount("1,500,000"), 1500000);
        assert_eq!(parse_amount("0"), 0);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("invalid"), 0);
        assert_eq!(parse_amount("abc123"), 0);
        assert_eq!(parse_amount("123abc"), 0);
    }

    #[test]
    fn test_parse_amount_rejects_signs_and_decimals() {
        assert_eq!(parse_amount("-500"), 0);
        assert_eq!(parse_amount("+500"), 0);
        assert_eq!(parse_amount("1500.50"), 0);
    }

    #[test]
    fn test_parse_amount_overflow_degrades_to_zero() {
        assert_eq!(parse_amount("99999999999999999999999999"), 0);
    }

    #[test]
    fn test_parse_transaction_date() {
        assert_eq!(
            parse_transaction_date("2025/6/6"),
            NaiveDate::from_ymd_opt(2025, 6, 6)
        );
        assert_eq!(
            parse_transaction_date("2025/12/31"),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert_eq!(parse_transaction_date("2025-06-06"), None);
        assert_eq!(parse_transaction_date("2025/2/30"), None);
        assert_eq!(parse_transaction_date(""), None);
    }

    #[test]
    fn test_extract_financial_year_is_calendar_year() {
        assert_eq!(extract_financial_year("2025/1/1"), Some(2025));
        assert_eq!(extract_financial_year("2025/3/31"), Some(2025));
        assert_eq!(extract_financial_year("2025/6/15"), Some(2025));
        assert_eq!(extract_financial_year("2025/12/31"), Some(2025));
        assert_eq!(extract_financial_year("not a date"), None);
    }

    #[test]
    fn test_convert_row_parses_amounts() {
        let mut record = mock_record();
        record.debit_amount = "1,500,000".to_string();
        record.credit_amount = "500,000".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.debit_amount, 1500000);
        assert_eq!(draft.credit_amount, 500000);
        assert_eq!(draft.transaction_type, TransactionType::Unclassified);
    }

    #[test]
    fn test_convert_row_degrades_bad_amounts_to_zero() {
        let mut record = mock_record();
        record.debit_amount = "invalid".to_string();
        record.credit_amount = String::new();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.debit_amount, 0);
        assert_eq!(draft.credit_amount, 0);
    }

    #[test]
    fn test_convert_row_debit_cash_is_income() {
        let mut record = mock_record();
        record.debit_account = "普通預金".to_string();
        record.credit_account = "寄附金".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_convert_row_credit_cash_is_expense() {
        let mut record = mock_record();
        record.debit_account = "事務費".to_string();
        record.credit_account = "普通預金".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.transaction_type, TransactionType::Expense);
    }

    #[test]
    fn test_convert_row_debit_wins_when_both_are_cash() {
        let mut record = mock_record();
        record.debit_account = "普通預金".to_string();
        record.credit_account = "普通預金".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_convert_row_respects_configured_label() {
        let mut record = mock_record();
        record.debit_account = "現金".to_string();

        let draft = RecordConverter::new("現金").convert_row(&record, 1);

        assert_eq!(draft.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_convert_row_degrades_bad_date_to_none() {
        let mut record = mock_record();
        record.transaction_date = "6月6日".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 1);

        assert_eq!(draft.transaction_date, None);
        assert_eq!(draft.financial_year, None);
        assert_eq!(draft.transaction_date_raw, "6月6日");
    }

    #[test]
    fn test_convert_row_preserves_all_other_fields() {
        let mut record = mock_record();
        record.transaction_no = "123".to_string();
        record.transaction_date = "2025/12/31".to_string();
        record.debit_account = "普通預金".to_string();
        record.debit_sub_account = "テスト銀行".to_string();
        record.tags = "テストタグ".to_string();
        record.memo = "テストメモ".to_string();

        let draft = RecordConverter::new(CASH).convert_row(&record, 42);

        assert_eq!(draft.political_organization_id, 42);
        assert_eq!(draft.transaction_no, "123");
        assert_eq!(draft.transaction_date, NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(draft.financial_year, Some(2025));
        assert_eq!(draft.debit_account, "普通預金");
        assert_eq!(draft.debit_sub_account, "テスト銀行");
        assert_eq!(draft.friendly_category, "テストタグ");
        assert_eq!(draft.memo, "テストメモ");
    }
}
