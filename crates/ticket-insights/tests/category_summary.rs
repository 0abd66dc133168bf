use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use ticket_insights::models::{CategorySummaryParams, ErrorCode, ResponseStatus};
use ticket_insights::{DatasetSource, TicketQueryEngine};

const HEADER: &str = "Req ID,Request Date,Resolution Date,Main category,Completed Type,Time Taken in Minutes,Agent name,Issue Reported";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{nanos}"))
}

fn engine_for(prefix: &str, rows: &[&str]) -> TicketQueryEngine {
    let dir = unique_temp_dir(prefix);
    std::fs::create_dir_all(&dir).expect("fixture dir should be creatable");
    let path = dir.join("Support_Metrics.csv");
    let mut contents = format!("{HEADER}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(&path, contents).expect("fixture csv should be writable");
    TicketQueryEngine::new(DatasetSource::new(path))
}

fn top(top_n: usize) -> CategorySummaryParams {
    CategorySummaryParams { top_n }
}

#[test]
fn counts_tickets_and_exact_breaches_per_category() {
    let engine = engine_for(
        "ticket-insights-category-scenario",
        &[
            "1,2025-01-01,,Bug,within sla,10,Alice,a",
            "2,2025-01-02,,Bug,outside sla,20,Alice,b",
            "3,2025-01-03,,Config,within sla,30,Bob,c",
            "4,2025-01-04,,Bug,outside sla,30,Bob,d",
            "5,2025-01-05,,Config,outside sla,,Bob,e",
        ],
    );
    let response = engine.get_category_summary(&CategorySummaryParams::default());

    assert_eq!(response.status, ResponseStatus::Success);
    assert_eq!(response.data.total_categories, 2);

    let summary = &response.data.summary;
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].category, "Bug");
    assert_eq!(summary[0].total_tickets, 3);
    assert_eq!(summary[0].sla_breaches, 2);
    assert_eq!(summary[0].avg_resolution_minutes, Some(20.0));
    assert_eq!(summary[1].category, "Config");
    assert_eq!(summary[1].total_tickets, 2);
    assert_eq!(summary[1].sla_breaches, 2);
    assert_eq!(summary[1].avg_resolution_minutes, Some(30.0));
}

#[test]
fn serializes_with_report_column_names() {
    let engine = engine_for(
        "ticket-insights-category-json",
        &["1,2025-01-01,,Offline,outside sla,15,Alice,a"],
    );
    let response = engine.get_category_summary(&top(5));
    let encoded = serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(
        encoded,
        json!({
            "status": "success",
            "summary": [{
                "Category": "Offline",
                "Total Tickets": 1,
                "SLA Breaches": 1,
                "Avg Resolution Time (min)": 15.0
            }],
            "total_categories": 1
        })
    );
}

#[test]
fn breach_comparison_is_case_sensitive() {
    let engine = engine_for(
        "ticket-insights-category-case",
        &[
            "1,2025-01-01,,Bug,Outside SLA,10,Alice,a",
            "2,2025-01-02,,Bug,OUTSIDE SLA,10,Alice,b",
            "3,2025-01-03,,Bug,outside sla,10,Alice,c",
        ],
    );
    let response = engine.get_category_summary(&top(20));

    assert_eq!(response.data.summary[0].sla_breaches, 1);
}

#[test]
fn category_without_durations_has_null_average() {
    let engine = engine_for(
        "ticket-insights-category-null-mean",
        &[
            "1,2025-01-01,,Duplicate,within sla,,Alice,a",
            "2,2025-01-02,,Duplicate,within sla,,Bob,b",
            "3,2025-01-03,,Bug,within sla,12,Bob,c",
        ],
    );
    let response = engine.get_category_summary(&top(20));
    let encoded = serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(response.data.summary[0].category, "Duplicate");
    assert_eq!(response.data.summary[0].avg_resolution_minutes, None);
    assert_eq!(
        encoded["summary"][0]["Avg Resolution Time (min)"],
        json!(null)
    );
}

#[test]
fn truncation_keeps_the_largest_groups_with_stable_ties() {
    let rows = [
        "1,,,A,within sla,1,x,a",
        "2,,,B,within sla,1,x,a",
        "3,,,C,within sla,1,x,a",
        "4,,,A,within sla,1,x,a",
        "5,,,D,within sla,1,x,a",
        "6,,,C,within sla,1,x,a",
        "7,,,E,within sla,1,x,a",
        "8,,,A,within sla,1,x,a",
        "9,,,D,within sla,1,x,a",
        "10,,,C,within sla,1,x,a",
        "11,,,D,within sla,1,x,a",
        "12,,,A,within sla,1,x,a",
        "13,,,E,within sla,1,x,a",
    ];
    let engine = engine_for("ticket-insights-category-top", &rows);

    let full = engine.get_category_summary(&top(usize::MAX));
    let truncated = engine.get_category_summary(&top(3));

    let names: Vec<&str> = truncated
        .data
        .summary
        .iter()
        .map(|stats| stats.category.as_str())
        .collect();
    assert_eq!(names, vec!["A", "C", "D"]);
    assert_eq!(truncated.data.summary, full.data.summary[..3].to_vec());
    assert_eq!(truncated.data.total_categories, 5);
    assert_eq!(full.data.total_categories, 5);

    let total: usize = full
        .data
        .summary
        .iter()
        .map(|stats| stats.total_tickets)
        .sum();
    assert_eq!(total, rows.len());
    assert!(
        full.data
            .summary
            .iter()
            .all(|stats| stats.sla_breaches <= stats.total_tickets)
    );
}

#[test]
fn zero_top_n_returns_no_groups_but_counts_categories() {
    let engine = engine_for(
        "ticket-insights-category-zero",
        &["1,,,Bug,within sla,1,x,a", "2,,,Config,within sla,1,x,a"],
    );
    let response = engine.get_category_summary(&top(0));

    assert_eq!(response.status, ResponseStatus::Success);
    assert!(response.data.summary.is_empty());
    assert_eq!(response.data.total_categories, 2);
}

#[test]
fn blank_category_forms_its_own_group() {
    let engine = engine_for(
        "ticket-insights-category-blank",
        &["1,,,,within sla,1,x,a", "2,,,Bug,within sla,1,x,a"],
    );
    let response = engine.get_category_summary(&top(20));

    let total: usize = response
        .data
        .summary
        .iter()
        .map(|stats| stats.total_tickets)
        .sum();
    assert_eq!(total, 2);
    assert!(response.data.summary.iter().any(|stats| stats.category.is_empty()));
}

#[test]
fn non_numeric_durations_are_a_query_error() {
    let engine = engine_for(
        "ticket-insights-category-non-numeric",
        &["1,,,Bug,within sla,slow,x,a"],
    );
    let response = engine.get_category_summary(&top(20));

    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.error_code, Some(ErrorCode::QueryError));
    assert!(
        response
            .message
            .as_deref()
            .is_some_and(|message| message.contains("Time Taken in Minutes"))
    );
}

#[test]
fn infinite_durations_are_skipped_in_averages() {
    let engine = engine_for(
        "ticket-insights-category-infinite",
        &[
            "1,,,Bug,within sla,10,x,a",
            "2,,,Bug,outside sla,inf,x,b",
            "3,,,Bug,within sla,30,x,c",
        ],
    );
    let response = engine.get_category_summary(&top(20));

    assert_eq!(response.status, ResponseStatus::Success);
    assert_eq!(response.data.summary[0].total_tickets, 3);
    assert_eq!(response.data.summary[0].avg_resolution_minutes, Some(20.0));
}

#[test]
fn missing_source_returns_zeroed_error_payload() {
    let path = unique_temp_dir("ticket-insights-category-missing").join("Support_Metrics.csv");
    let engine = TicketQueryEngine::new(DatasetSource::new(path));
    let response = engine.get_category_summary(&top(20));
    let encoded = serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(encoded["status"], json!("error"));
    assert_eq!(encoded["error_code"], json!("source_not_found"));
    assert!(
        encoded["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Error generating summary: "))
    );
    assert_eq!(encoded["summary"], json!([]));
    assert_eq!(encoded["total_categories"], json!(0));
}

#[test]
fn repeated_calls_are_identical() {
    let engine = engine_for(
        "ticket-insights-category-idempotent",
        &[
            "1,,,Bug,within sla,1,x,a",
            "2,,,Config,outside sla,2,x,a",
            "3,,,Offline,outside sla,3,x,a",
        ],
    );
    assert_eq!(
        engine.get_category_summary(&top(20)),
        engine.get_category_summary(&top(20))
    );
}
