use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAffordanceContext {
    pub module_id: i64,
    pub back_url: String,
    pub has_entries: bool,
    /// Entries made by the current user.
    #[serde(default)]
    pub num_entries: Option<u64>,
    #[serde(default)]
    pub max_entries: Option<u64>,
    pub can_manage_entries: bool,
    pub can_export: bool,
    /// Opaque to the resolver and copied verbatim into the decision.
    #[serde(default)]
    pub url_select: Option<Value>,
}

impl EntryAffordanceContext {
    /// An unset count or limit means no limit is configured.
    pub fn entry_limit_reached(&self) -> bool {
        match (self.num_entries, self.max_entries) {
            (Some(num_entries), Some(max_entries)) => {
                max_entries > 0 && num_entries >= max_entries
            }
            _ => false,
        }
    }
}
