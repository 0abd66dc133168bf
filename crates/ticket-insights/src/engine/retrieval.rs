use time::PrimitiveDateTime;

use crate::dataset::{Dataset, TicketRecord};
use crate::error::EngineError;
use crate::models::{FetchParams, TicketRows};
use crate::utils::time::look_back_cutoff;

/// Conjunction of the active retrieval filters.
#[derive(Debug, Clone, PartialEq)]
struct TicketFilter {
    window: Option<DateWindow>,
    category: Option<String>,
    sla_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DateWindow {
    Since(PrimitiveDateTime),
    /// Cutoff earlier than the calendar can express: any dated ticket passes.
    AnyDate,
    /// Cutoff later than the calendar can express: nothing passes.
    NoDate,
}

impl TicketFilter {
    fn from_params(params: &FetchParams, now: PrimitiveDateTime) -> Self {
        let window = params
            .active_days()
            .map(|days| match look_back_cutoff(now, days) {
                Some(cutoff) => DateWindow::Since(cutoff),
                None if days > 0 => DateWindow::AnyDate,
                None => DateWindow::NoDate,
            });

        Self {
            window,
            category: params.active_category().map(str::to_lowercase),
            sla_status: params.active_sla_status().map(str::to_lowercase),
        }
    }

    fn matches(&self, record: &TicketRecord) -> bool {
        let in_window = match self.window {
            None => true,
            Some(DateWindow::Since(cutoff)) => {
                record.request_date.is_some_and(|date| date >= cutoff)
            }
            Some(DateWindow::AnyDate) => record.request_date.is_some(),
            Some(DateWindow::NoDate) => false,
        };

        in_window
            && matches_folded(self.category.as_deref(), record.main_category.as_deref())
            && matches_folded(self.sla_status.as_deref(), record.completed_type.as_deref())
    }
}

fn matches_folded(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.is_some_and(|value| value.to_lowercase() == wanted),
    }
}

/// Filters the table and returns matching rows in source order.
pub fn fetch(
    dataset: &Dataset,
    params: &FetchParams,
    now: PrimitiveDateTime,
) -> Result<TicketRows, EngineError> {
    let filter = TicketFilter::from_params(params, now);
    let rows: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| record.cells.clone())
        .collect();

    let count = rows.len();
    Ok(TicketRows {
        columns: dataset.columns().to_vec(),
        rows,
        count,
        summary: Some(describe(params, count)),
    })
}

/// One-line description of the active filters and match count.
#[must_use]
pub fn describe(params: &FetchParams, count: usize) -> String {
    let mut summary = format!("Retrieved {count} tickets");
    if let Some(days) = params.active_days() {
        summary.push_str(&format!(" from the last {days} days"));
    }
    if let Some(category) = params.active_category() {
        summary.push_str(&format!(" in category '{category}'"));
    }
    if let Some(sla_status) = params.active_sla_status() {
        summary.push_str(&format!(" with SLA status '{sla_status}'"));
    }
    summary
}
