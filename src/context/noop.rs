use std::collections::{BTreeMap, BTreeSet};

use crate::context::ports::{CapabilityPort, LocalizationPort, SessionTokenPort};

/// Grants a fixed set of capabilities regardless of context.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilities {
    granted: BTreeSet<String>,
}

impl StaticCapabilities {
    pub fn new(granted: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }
}

impl CapabilityPort for StaticCapabilities {
    fn has_capability(&self, capability: &str, _context_ref: &str) -> bool {
        self.granted.contains(capability)
    }
}

pub const CORE_COMPONENT: &str = "core";

/// String table keyed by `(component, key)`; the core table uses [`CORE_COMPONENT`].
#[derive(Debug, Clone, Default)]
pub struct StaticStrings {
    strings: BTreeMap<(String, String), String>,
}

impl StaticStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(
        mut self,
        component: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.strings
            .insert((component.into(), key.into()), text.into());
        self
    }

    /// Builds a table from `{component: {key: text}}`.
    pub fn from_tables(tables: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let strings = tables
            .into_iter()
            .flat_map(|(component, entries)| {
                entries
                    .into_iter()
                    .map(move |(key, text)| ((component.clone(), key), text))
            })
            .collect();
        Self { strings }
    }
}

impl LocalizationPort for StaticStrings {
    fn string_exists(&self, key: &str, component: &str) -> bool {
        self.strings
            .contains_key(&(component.to_string(), key.to_string()))
    }

    fn get_string(&self, key: &str, component: Option<&str>) -> String {
        let component = component.unwrap_or(CORE_COMPONENT);
        self.strings
            .get(&(component.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| format!("[[{key}]]"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixedSessionToken(pub String);

impl SessionTokenPort for FixedSessionToken {
    fn session_token(&self) -> String {
        self.0.clone()
    }
}
