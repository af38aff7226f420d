use serde::Serialize;

use crate::converter::RecordConverter;
use crate::error::Result;
use crate::loader;
use crate::models::PreviewTransaction;
use crate::stats::{self, PreviewStatistics, PreviewSummary};
use crate::store::TransactionStore;
use crate::validator;

/// Everything the preview of one uploaded file produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewResult {
    pub transactions: Vec<PreviewTransaction>,
    pub summary: PreviewSummary,
    pub statistics: PreviewStatistics,
}

impl PreviewResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Previews `csv_text` for one organization without persisting anything.
///
/// This never fails: an unreadable file or a store error degrades to an
/// empty result, and per-row problems surface as validation findings on
/// the rows themselves.
pub fn preview_ledger_csv(
    store: &dyn TransactionStore,
    cash_account_label: &str,
    csv_text: &str,
    political_organization_id: i64,
) -> PreviewResult {
    match try_preview(store, cash_account_label, csv_text, political_organization_id) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("preview failed, returning empty result: {e}");
            PreviewResult::empty()
        }
    }
}

fn try_preview(
    store: &dyn TransactionStore,
    cash_account_label: &str,
    csv_text: &str,
    political_organization_id: i64,
) -> Result<PreviewResult> {
    let records = loader::load_ledger_csv(csv_text)?;
    if records.is_empty() {
        return Ok(PreviewResult::empty());
    }

    // Duplicate lookup keys off the file's transaction numbers; rows
    // without one can never match and are reported by the validator.
    let transaction_nos: Vec<String> = records
        .iter()
        .filter(|record| !record.transaction_no.is_empty())
        .map(|record| record.transaction_no.clone())
        .collect();
    let existing = store.find_by_transaction_nos(&transaction_nos, political_organization_id)?;

    let converter = RecordConverter::new(cash_account_label);
    let drafts: Vec<_> = records
        .iter()
        .map(|record| converter.convert_row(record, political_organization_id))
        .collect();

    let transactions = validator::validate_previews(drafts, &existing);
    let summary = stats::preview_summary(&transactions);
    let statistics = stats::preview_statistics(&transactions);

    Ok(PreviewResult {
        transactions,
        summary,
        statistics,
    })
}
