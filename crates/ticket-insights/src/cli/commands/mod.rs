pub mod agents;
pub mod catalog;
pub mod categories;
pub mod fetch;
pub mod schema;

use std::fmt::{Display, Formatter};

use anyhow::{Context, Error, Result};
use serde::Serialize;

use crate::models::{ErrorCode, ToolResponse};

/// Raised after an operation printed a `status: error` payload.
#[derive(Debug, Clone)]
pub struct ToolCommandFailure {
    tool: String,
    code: Option<ErrorCode>,
    message: String,
}

impl ToolCommandFailure {
    #[must_use]
    pub fn new(
        tool: impl Into<String>,
        code: Option<ErrorCode>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }
}

impl Display for ToolCommandFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = self.code.map_or("unknown", ErrorCode::as_str);
        write!(f, "{} returned an error ({code}): {}", self.tool, self.message)
    }
}

impl std::error::Error for ToolCommandFailure {}

pub(crate) fn encode_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.context("failed to encode JSON output")
}

/// Prints the response on stdout and turns an error payload into
/// [`ToolCommandFailure`].
pub(crate) fn emit_response<T: Serialize>(
    tool: &str,
    response: &ToolResponse<T>,
    pretty: bool,
) -> Result<()> {
    println!("{}", encode_json(response, pretty)?);
    if response.is_success() {
        return Ok(());
    }

    Err(Error::new(ToolCommandFailure::new(
        tool,
        response.error_code,
        response.message.clone().unwrap_or_default(),
    )))
}
