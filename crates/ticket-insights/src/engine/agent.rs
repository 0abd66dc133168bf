use tracing::debug;

use super::stats::{group_by_first_seen, mean_present, percentage};
use crate::dataset::{Dataset, columns};
use crate::error::EngineError;
use crate::models::{AgentBreakdown, AgentStats};

/// Literal `Completed Type` value counted as compliant. Compared exactly.
pub const WITHIN_SLA: &str = "within sla";

/// Per-agent workload and SLA compliance, busiest agents first.
///
/// Placeholder assignees (`Ghost`, `UnAssigned`, blank) are dropped before
/// grouping. Compliance is measured against every ticket the agent holds,
/// including tickets with no recorded completion type.
pub fn summarize(dataset: &Dataset) -> Result<AgentBreakdown, EngineError> {
    dataset.require_numeric(columns::TIME_TAKEN_MINUTES)?;

    let assigned: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| record.has_human_agent())
        .collect();
    let excluded = dataset.len() - assigned.len();

    let groups = group_by_first_seen(assigned.iter().copied(), |record| {
        record.agent_name.clone().unwrap_or_default()
    });

    let mut summary: Vec<AgentStats> = groups
        .into_iter()
        .map(|(agent, records)| {
            let within_sla = records
                .iter()
                .filter(|record| record.completed_type.as_deref() == Some(WITHIN_SLA))
                .count();
            AgentStats {
                tickets_resolved: records.len(),
                avg_resolution_minutes: mean_present(
                    records.iter().map(|record| record.time_taken_minutes),
                ),
                sla_compliance_pct: percentage(within_sla, records.len()),
                agent,
            }
        })
        .collect();

    summary.sort_by(|left, right| right.tickets_resolved.cmp(&left.tickets_resolved));

    debug!(
        agents = summary.len(),
        excluded_placeholder_tickets = excluded,
        "summarized tickets by agent"
    );

    Ok(AgentBreakdown { summary })
}
