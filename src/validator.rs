use std::collections::HashSet;

use crate::models::{PreviewTransaction, TransactionDraft};
use crate::store::ExistingTransactionRef;

/// Check drafts against the already-stored ledger, producing one preview
/// per draft in input order. Rows are never dropped: a duplicate
/// transaction number is informational, and structural findings are
/// collected as display strings on the row.
pub fn validate_previews(
    drafts: Vec<TransactionDraft>,
    existing: &[ExistingTransactionRef],
) -> Vec<PreviewTransaction> {
    let existing_nos: HashSet<(i64, &str)> = existing
        .iter()
        .map(|e| (e.political_organization_id, e.transaction_no.as_str()))
        .collect();

    drafts
        .into_iter()
        .map(|draft| {
            let mut validation_errors = Vec::new();
            if draft.transaction_no.is_empty() {
                validation_errors.push("取引Noが空です".to_string());
            }
            if draft.transaction_date.is_none() {
                validation_errors
                    .push(format!("取引日が不正です: {}", draft.transaction_date_raw));
            }
            let is_duplicate = existing_nos.contains(&(
                draft.political_organization_id,
                draft.transaction_no.as_str(),
            ));
            PreviewTransaction {
                draft,
                is_duplicate,
                validation_errors,
            }
        })
        .collect()
}
