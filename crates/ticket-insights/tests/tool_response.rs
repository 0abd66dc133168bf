use serde_json::json;
use ticket_insights::error::EngineError;
use ticket_insights::models::{
    AgentBreakdown, CATALOG_SCHEMA_VERSION, CategoryBreakdown, ErrorCode, ResponseStatus,
    TicketRows, ToolName, ToolResponse, tool_catalog,
};

#[test]
fn success_response_flattens_data_beside_status() {
    let response = ToolResponse::success(CategoryBreakdown {
        summary: Vec::new(),
        total_categories: 0,
    });
    let encoded = serde_json::to_value(&response).expect("response should serialize");

    let object = encoded.as_object().expect("response JSON should be object");
    assert_eq!(object.get("status"), Some(&json!("success")));
    assert!(object.contains_key("summary"));
    assert!(object.contains_key("total_categories"));
    assert!(!object.contains_key("message"));
    assert!(!object.contains_key("error_code"));
    assert!(response.is_success());
}

#[test]
fn error_response_carries_message_code_and_empty_data() {
    let response: ToolResponse<TicketRows> =
        ToolResponse::error(ErrorCode::MalformedSource, "header row is empty");
    let encoded = serde_json::to_value(&response).expect("response should serialize");

    assert!(!response.is_success());
    assert_eq!(
        encoded,
        json!({
            "status": "error",
            "message": "header row is empty",
            "error_code": "malformed_source",
            "columns": [],
            "rows": [],
            "count": 0
        })
    );
}

#[test]
fn engine_errors_map_to_codes_with_context_prefix() {
    let response: ToolResponse<AgentBreakdown> = ToolResponse::from_result(
        Err(EngineError::Query("boom".to_string())),
        "Error generating agent performance",
    );

    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.error_code, Some(ErrorCode::QueryError));
    assert_eq!(
        response.message.as_deref(),
        Some("Error generating agent performance: query failed: boom")
    );
}

#[test]
fn catalog_lists_the_three_operations() {
    let catalog = tool_catalog();
    assert_eq!(catalog.schema_version, CATALOG_SCHEMA_VERSION);

    let names: Vec<&str> = catalog.tools.iter().map(|tool| tool.name).collect();
    assert_eq!(
        names,
        vec![
            "fetch_tickets",
            "get_category_summary",
            "get_agent_performance"
        ]
    );
    assert!(catalog.tools.iter().all(|tool| !tool.description.is_empty()));
}

#[test]
fn fetch_parameters_schema_names_its_filters() {
    let schema = ToolName::FetchTickets.parameters_schema();
    let properties = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .expect("parameters schema should declare properties");

    assert!(properties.contains_key("days"));
    assert!(properties.contains_key("category"));
    assert!(properties.contains_key("sla_status"));
}

#[test]
fn response_schemas_expose_status() {
    for tool in ToolName::ALL {
        let schema = tool.response_schema();
        let properties = schema
            .get("properties")
            .and_then(|value| value.as_object())
            .unwrap_or_else(|| panic!("{} schema should declare properties", tool.as_str()));
        assert!(
            properties.contains_key("status"),
            "{} schema lacks status",
            tool.as_str()
        );
    }
}
