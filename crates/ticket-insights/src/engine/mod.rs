//! The three read-only ticket queries and the engine that serves them.
//!
//! Every public operation returns a [`ToolResponse`]; engine failures are
//! folded into `status: error` payloads and never escape as `Err`.

pub mod agent;
pub mod category;
pub mod retrieval;
pub mod stats;

use std::sync::{Arc, OnceLock};

use time::PrimitiveDateTime;
use tracing::{info, warn};

use crate::dataset::{Dataset, DatasetSource};
use crate::error::EngineError;
use crate::models::{
    AgentPerformanceResponse, CategorySummaryParams, CategorySummaryResponse, FetchParams,
    FetchTicketsResponse, ToolResponse,
};
use crate::utils::time::wall_clock_now;

#[derive(Debug)]
pub struct TicketQueryEngine {
    source: DatasetSource,
    snapshot: Option<OnceLock<Arc<Dataset>>>,
}

impl TicketQueryEngine {
    /// Engine that re-reads the source on every call.
    #[must_use]
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            snapshot: None,
        }
    }

    /// Engine that loads the source once and shares that snapshot between
    /// calls. A failed load is not remembered; the next call retries.
    #[must_use]
    pub fn with_snapshot(source: DatasetSource) -> Self {
        Self {
            source,
            snapshot: Some(OnceLock::new()),
        }
    }

    #[must_use]
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn dataset(&self) -> Result<Arc<Dataset>, EngineError> {
        let Some(snapshot) = &self.snapshot else {
            return self.source.load().map(Arc::new);
        };
        if let Some(dataset) = snapshot.get() {
            return Ok(Arc::clone(dataset));
        }

        let loaded = Arc::new(self.source.load()?);
        // A concurrent caller may have published first.
        Ok(Arc::clone(snapshot.get_or_init(|| loaded)))
    }

    pub fn fetch_tickets(&self, params: &FetchParams) -> FetchTicketsResponse {
        self.fetch_tickets_as_of(params, wall_clock_now())
    }

    /// `fetch_tickets` with an explicit "now" for the look-back window.
    pub fn fetch_tickets_as_of(
        &self,
        params: &FetchParams,
        now: PrimitiveDateTime,
    ) -> FetchTicketsResponse {
        let result = self
            .dataset()
            .and_then(|dataset| retrieval::fetch(&dataset, params, now));
        respond("fetch_tickets", result, "Error reading ticket dataset")
    }

    pub fn get_category_summary(&self, params: &CategorySummaryParams) -> CategorySummaryResponse {
        let result = self
            .dataset()
            .and_then(|dataset| category::summarize(&dataset, params.top_n));
        respond("get_category_summary", result, "Error generating summary")
    }

    pub fn get_agent_performance(&self) -> AgentPerformanceResponse {
        let result = self.dataset().and_then(|dataset| agent::summarize(&dataset));
        respond(
            "get_agent_performance",
            result,
            "Error generating agent performance",
        )
    }
}

fn respond<T: Default>(
    tool: &str,
    result: Result<T, EngineError>,
    context: &str,
) -> ToolResponse<T> {
    match &result {
        Ok(_) => info!(tool, "query succeeded"),
        Err(error) => warn!(tool, code = error.code().as_str(), %error, "query failed"),
    }
    ToolResponse::from_result(result, context)
}
