use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOK_BACK_DAYS: i64 = 90;
pub const DEFAULT_TOP_N: usize = 20;

/// Arguments of `fetch_tickets`. Omitted fields take their defaults; an
/// explicit `null` for `days` disables the look-back window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FetchParams {
    /// Number of days to look back from now. `0` or `null` returns every date.
    pub days: Option<i64>,

    /// Main category to keep, matched case-insensitively (e.g. "Bug", "Config").
    pub category: Option<String>,

    /// Completed Type to keep, matched case-insensitively ("within sla" or "outside sla").
    pub sla_status: Option<String>,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            days: Some(DEFAULT_LOOK_BACK_DAYS),
            category: None,
            sla_status: None,
        }
    }
}

impl FetchParams {
    /// Look-back window in effect, if any.
    #[must_use]
    pub fn active_days(&self) -> Option<i64> {
        self.days.filter(|days| *days != 0)
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn active_sla_status(&self) -> Option<&str> {
        self.sla_status.as_deref().filter(|value| !value.is_empty())
    }
}

/// Arguments of `get_category_summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CategorySummaryParams {
    /// Number of largest categories to return.
    pub top_n: usize,
}

impl Default for CategorySummaryParams {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// `get_agent_performance` takes no arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AgentPerformanceParams {}
