use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    affordance::{descriptor::export_template_context, types::AffordanceDecision},
    config::Config,
    context::{
        facade::{ContextFacade, CourseFormatFacts, DatabaseActivityFacts},
        noop::{FixedSessionToken, StaticCapabilities, StaticStrings},
    },
    entry::resolver::resolve_entry_affordances,
    section::resolver::resolve_section_affordances,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum SurfaceFacts {
    Section { facts: CourseFormatFacts },
    Entry { facts: DatabaseActivityFacts },
}

/// A request snapshot: page facts plus the collaborator state the facade
/// would normally read from the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(flatten)]
    pub surface: SurfaceFacts,
    #[serde(default)]
    pub granted_capabilities: Vec<String>,
    /// `{component: {key: text}}`; the core table is `"core"`.
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub session_token: String,
}

impl ResolveRequest {
    pub fn load(request_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(request_path)
            .with_context(|| format!("failed to read {}", request_path.display()))?;
        let value: Value = json5::from_str(&content)
            .with_context(|| format!("failed to parse request {}", request_path.display()))?;
        serde_json::from_value(value).context("failed to deserialize resolve request")
    }

    /// Resolves the request and returns `{ "links": [...], "template": {...} }`.
    pub fn resolve(&self, config: &Config) -> Result<Value> {
        let capabilities = StaticCapabilities::new(self.granted_capabilities.iter().cloned());
        let strings = StaticStrings::from_tables(self.strings.clone());
        let session = FixedSessionToken(self.session_token.clone());
        let facade = ContextFacade::new(config, &capabilities, &strings, &session);

        let decision: AffordanceDecision = match &self.surface {
            SurfaceFacts::Section { facts } => {
                resolve_section_affordances(&facade.section_context(facts))
                    .with_context(|| format!("failed to resolve course {}", facts.course_id))?
            }
            SurfaceFacts::Entry { facts } => {
                resolve_entry_affordances(&facade.entry_context(facts))
                    .with_context(|| format!("failed to resolve module {}", facts.module_id))?
            }
        };

        let links = facade.resolve_links(&decision);
        tracing::info!(
            target: "request",
            link_count = links.len(),
            "request_resolved"
        );

        Ok(json!({
            "links": links,
            "template": export_template_context(&decision),
        }))
    }
}
