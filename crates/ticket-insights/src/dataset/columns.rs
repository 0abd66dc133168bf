use std::collections::HashMap;

pub const REQ_ID: &str = "Req ID";
pub const REQUEST_DATE: &str = "Request Date";
pub const RESOLUTION_DATE: &str = "Resolution Date";
pub const MAIN_CATEGORY: &str = "Main category";
pub const COMPLETED_TYPE: &str = "Completed Type";
pub const TIME_TAKEN_MINUTES: &str = "Time Taken in Minutes";
pub const AGENT_NAME: &str = "Agent name";
pub const ISSUE_REPORTED: &str = "Issue Reported";

/// Columns every ticket source must carry. Anything else is passed through.
pub const REQUIRED: &[&str] = &[
    REQ_ID,
    REQUEST_DATE,
    RESOLUTION_DATE,
    MAIN_CATEGORY,
    COMPLETED_TYPE,
    TIME_TAKEN_MINUTES,
    AGENT_NAME,
    ISSUE_REPORTED,
];

/// Columns parsed as timestamps instead of being type-inferred.
pub const DATE_COLUMNS: &[&str] = &[REQUEST_DATE, RESOLUTION_DATE];

/// Maps trimmed header names to their position in a CSV record.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<String, usize>,
    headers: Vec<String>,
}

impl ColumnMap {
    #[must_use]
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut indices = HashMap::new();
        let mut header_list = Vec::with_capacity(headers.len());
        for (index, field) in headers.iter().enumerate() {
            let name = field.trim_start_matches('\u{feff}').trim().to_string();
            indices.entry(name.clone()).or_insert(index);
            header_list.push(name);
        }
        Self {
            indices,
            headers: header_list,
        }
    }

    #[must_use]
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indices.get(column).copied()
    }

    #[must_use]
    pub fn has(&self, column: &str) -> bool {
        self.indices.contains_key(column)
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Required columns absent from the header, in declaration order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED
            .iter()
            .copied()
            .filter(|column| !self.has(column))
            .collect()
    }
}
