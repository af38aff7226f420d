use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{PreviewTransaction, TransactionType};

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Batch totals shown above the preview table. The all-zero default is also
/// what a failed or empty preview reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewSummary {
    pub total_count: usize,
    pub valid_count: usize,
    pub duplicate_count: usize,
    pub invalid_count: usize,
    pub income_total: i64,
    pub expense_total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketStat {
    pub count: usize,
    pub total: i64,
}

/// Per-label breakdown of the classified rows. Unclassified rows appear in
/// no bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewStatistics {
    pub income_by_account: BTreeMap<String, BucketStat>,
    pub expense_by_account: BTreeMap<String, BucketStat>,
    pub by_friendly_category: BTreeMap<String, BucketStat>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

pub fn preview_summary(previews: &[PreviewTransaction]) -> PreviewSummary {
    let mut summary = PreviewSummary {
        total_count: previews.len(),
        ..Default::default()
    };
    for preview in previews {
        let invalid = !preview.validation_errors.is_empty();
        if preview.is_duplicate {
            summary.duplicate_count += 1;
        }
        if invalid {
            summary.invalid_count += 1;
        }
        if !preview.is_duplicate && !invalid {
            summary.valid_count += 1;
        }
        match preview.draft.transaction_type {
            TransactionType::Income => summary.income_total += preview.draft.debit_amount,
            TransactionType::Expense => summary.expense_total += preview.draft.credit_amount,
            TransactionType::Unclassified => {}
        }
    }
    summary
}

pub fn preview_statistics(previews: &[PreviewTransaction]) -> PreviewStatistics {
    let mut stats = PreviewStatistics::default();
    for preview in previews {
        let draft = &preview.draft;
        match draft.transaction_type {
            // An income row enters the cash account, so the informative
            // label is the credit side; for an expense it is the debit side.
            TransactionType::Income => {
                bump(&mut stats.income_by_account, &draft.credit_account, draft.debit_amount);
                bump(&mut stats.by_friendly_category, &draft.friendly_category, draft.debit_amount);
            }
            TransactionType::Expense => {
                bump(&mut stats.expense_by_account, &draft.debit_account, draft.credit_amount);
                bump(&mut stats.by_friendly_category, &draft.friendly_category, draft.credit_amount);
            }
            TransactionType::Unclassified => {}
        }
    }
    stats
}

fn bump(buckets: &mut BTreeMap<String, BucketStat>, label: &str, amount: i64) {
    let entry = buckets.entry(label.to_string()).or_default();
    entry.count += 1;
    entry.total += amount;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;

    fn row(
        transaction_type: TransactionType,
        debit_account: &str,
        credit_account: &str,
        amount: i64,
        friendly_category: &str,
    ) -> PreviewTransaction {
        PreviewTransaction {
            draft: TransactionDraft {
                transaction_type,
                debit_account: debit_account.to_string(),
                credit_account: credit_account.to_string(),
                debit_amount: amount,
                credit_amount: amount,
                friendly_category: friendly_category.to_string(),
                ..Default::default()
            },
            is_duplicate: false,
            validation_errors: Vec::new(),
        }
    }

    #[test]
    fn test_empty_input_equals_default() {
        assert_eq!(preview_summary(&[]), PreviewSummary::default());
        assert_eq!(preview_statistics(&[]), PreviewStatistics::default());
    }

    #[test]
    fn test_summary_counts() {
        let mut duplicate = row(TransactionType::Income, "普通預金", "寄附金", 1000, "");
        duplicate.is_duplicate = true;
        let mut invalid = row(TransactionType::Unclassified, "a", "b", 0, "");
        invalid.validation_errors.push("取引Noが空です".to_string());
        let valid = row(TransactionType::Expense, "事務費", "普通預金", 300, "");

        let summary = preview_summary(&[duplicate, invalid, valid]);

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.duplicate_count, 1);
        assert_eq!(summary.invalid_count, 1);
    }

    #[test]
    fn test_summary_totals_are_type_filtered_sums() {
        let rows = [
            row(TransactionType::Income, "普通預金", "寄附金", 1500000, ""),
            row(TransactionType::Income, "普通預金", "党費", 3000, ""),
            row(TransactionType::Expense, "事務費", "普通預金", 50000, ""),
            row(TransactionType::Unclassified, "a", "b", 999, ""),
        ];
        let summary = preview_summary(&rows);
        assert_eq!(summary.income_total, 1503000);
        assert_eq!(summary.expense_total, 50000);
    }

    #[test]
    fn test_duplicate_rows_still_count_into_totals() {
        let mut duplicate = row(TransactionType::Income, "普通預金", "寄附金", 1000, "");
        duplicate.is_duplicate = true;
        let summary = preview_summary(&[duplicate]);
        assert_eq!(summary.income_total, 1000);
    }

    #[test]
    fn test_statistics_bucket_by_opposite_account() {
        let rows = [
            row(TransactionType::Income, "普通預金", "寄附金", 1000, "寄附"),
            row(TransactionType::Income, "普通預金", "寄附金", 500, "寄附"),
            row(TransactionType::Expense, "事務費", "普通預金", 300, "経常経費"),
        ];
        let stats = preview_statistics(&rows);

        let donations = &stats.income_by_account["寄附金"];
        assert_eq!(donations.count, 2);
        assert_eq!(donations.total, 1500);

        let office = &stats.expense_by_account["事務費"];
        assert_eq!(office.count, 1);
        assert_eq!(office.total, 300);

        assert_eq!(stats.by_friendly_category["寄附"].total, 1500);
        assert_eq!(stats.by_friendly_category["経常経費"].total, 300);
    }

    #[test]
    fn test_statistics_skip_unclassified_rows() {
        let rows = [row(TransactionType::Unclassified, "a", "b", 999, "x")];
        let stats = preview_statistics(&rows);
        assert_eq!(stats, PreviewStatistics::default());
    }

    #[test]
    fn test_statistics_keep_empty_labels() {
        let rows = [row(TransactionType::Income, "普通預金", "寄附金", 100, "")];
        let stats = preview_statistics(&rows);
        assert_eq!(stats.by_friendly_category[""].count, 1);
    }
}
