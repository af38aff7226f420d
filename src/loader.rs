use crate::error::{Result, ShiwakeError};
use crate::models::RawCsvRecord;

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Column headers of the journal export, in file order.
const EXPECTED_HEADERS: &[&str] = &[
    "取引No",
    "取引日",
    "借方勘定科目",
    "借方補助科目",
    "借方部門",
    "借方取引先",
    "借方税区分",
    "借方インボイス",
    "借方金額",
    "貸方勘定科目",
    "貸方補助科目",
    "貸方部門",
    "貸方取引先",
    "貸方税区分",
    "貸方インボイス",
    "貸方金額",
    "摘要",
    "タグ",
    "メモ",
];

fn assign_column(record: &mut RawCsvRecord, header: &str, value: String) -> bool {
    match header {
        "取引No" => record.transaction_no = value,
        "取引日" => record.transaction_date = value,
        "借方勘定科目" => record.debit_account = value,
        "借方補助科目" => record.debit_sub_account = value,
        "借方部門" => record.debit_department = value,
        "借方取引先" => record.debit_partner = value,
        "借方税区分" => record.debit_tax_category = value,
        "借方インボイス" => record.debit_invoice = value,
        "借方金額" => record.debit_amount = value,
        "貸方勘定科目" => record.credit_account = value,
        "貸方補助科目" => record.credit_sub_account = value,
        "貸方部門" => record.credit_department = value,
        "貸方取引先" => record.credit_partner = value,
        "貸方税区分" => record.credit_tax_category = value,
        "貸方インボイス" => record.credit_invoice = value,
        "貸方金額" => record.credit_amount = value,
        "摘要" => record.description = value,
        "タグ" => record.tags = value,
        "メモ" => record.memo = value,
        _ => return false,
    }
    true
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Split one CSV line on commas, honoring double quotes.
///
/// Quote characters toggle the quoting state and are never emitted into
/// field values, so a doubled quote inside a field produces nothing. A line
/// that ends while still inside quotes is malformed.
pub fn split_csv_line(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if in_quotes {
        return Err(ShiwakeError::MalformedLine(line.to_string()));
    }
    fields.push(current);
    Ok(fields)
}

// ---------------------------------------------------------------------------
// load_ledger_csv
// ---------------------------------------------------------------------------

/// Parse a whole journal CSV into raw records, in input order.
///
/// Empty or whitespace-only input is an empty batch, not an error. The
/// header row must contain at least one recognized column. Data rows
/// shorter than the header are padded with empty strings and unknown
/// columns are ignored, so every record carries all 19 fields. Any
/// malformed line aborts the load.
pub fn load_ledger_csv(text: &str) -> Result<Vec<RawCsvRecord>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = trimmed.lines();
    let header_line = lines.next().unwrap_or_default();
    let headers = split_csv_line(header_line)?;
    if !headers.iter().any(|h| EXPECTED_HEADERS.contains(&h.as_str())) {
        return Err(ShiwakeError::InvalidFormat(
            "no recognized headers found".to_string(),
        ));
    }

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values = split_csv_line(line)?;
        let mut record = RawCsvRecord::default();
        for (i, header) in headers.iter().enumerate() {
            let value = values.get(i).cloned().unwrap_or_default();
            assign_column(&mut record, header, value);
        }
        records.push(record);
    }
    Ok(records)
}
