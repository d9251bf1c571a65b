use serde::{Deserialize, Serialize};

use crate::domain::a002_item::Metadata;

/// One `data:` payload of the bulk import event stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImportEvent {
    /// URLs were read from the file
    Start { total: u32 },

    /// A row was scraped and stored
    Progress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current: Option<u32>,
        total: u32,
        success: u32,
        failed: u32,
        /// 0..=100, two decimals
        #[serde(default)]
        progress: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<ImportedItem>,
    },

    /// A row failed; the run continues
    ErrorItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<u32>,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        success: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        failed: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<f64>,
    },

    /// The scraped site refused further requests; rows from `index` on were not processed
    Blocked {
        index: u32,
        message: String,
        total: u32,
        success: u32,
        failed: u32,
        #[serde(default)]
        remaining_urls: Vec<RemainingUrl>,
    },

    /// Final counts
    Complete { total: u32, success: u32, failed: u32 },

    /// The run could not start or aborted
    Error { message: String },
}

impl ImportEvent {
    /// `complete` and `error` end the stream
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }
}

/// Item created for a row, as echoed in `progress` events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedItem {
    pub id: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// CSV row (1-based) that was not processed because of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingUrl {
    pub row: u32,
    pub url: String,
}
