use tracing::debug;

use super::stats::{group_by_first_seen, mean_present};
use crate::dataset::{Dataset, columns};
use crate::error::EngineError;
use crate::models::{CategoryBreakdown, CategoryStats};

/// Literal `Completed Type` value counted as a breach. Compared exactly.
pub const OUTSIDE_SLA: &str = "outside sla";

/// Per-category totals over the whole table, largest first, cut to `top_n`.
pub fn summarize(dataset: &Dataset, top_n: usize) -> Result<CategoryBreakdown, EngineError> {
    dataset.require_numeric(columns::TIME_TAKEN_MINUTES)?;

    let groups = group_by_first_seen(dataset.records(), |record| {
        record.main_category.clone().unwrap_or_default()
    });
    let total_categories = groups.len();

    let mut summary: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(category, records)| CategoryStats {
            total_tickets: records.len(),
            sla_breaches: records
                .iter()
                .filter(|record| record.completed_type.as_deref() == Some(OUTSIDE_SLA))
                .count(),
            avg_resolution_minutes: mean_present(
                records.iter().map(|record| record.time_taken_minutes),
            ),
            category,
        })
        .collect();

    // Stable: equal totals keep first-encounter order.
    summary.sort_by(|left, right| right.total_tickets.cmp(&left.total_tickets));
    summary.truncate(top_n);

    debug!(
        total_categories,
        returned = summary.len(),
        top_n,
        "summarized tickets by category"
    );

    Ok(CategoryBreakdown {
        summary,
        total_categories,
    })
}
