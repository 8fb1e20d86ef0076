use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ParamMap = BTreeMap<String, ParamValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceKind {
    Increase,
    Decrease,
    AddSections,
    AddEntry,
    ImportEntries,
    ExportEntries,
}

impl AffordanceKind {
    pub fn target_action(self) -> TargetAction {
        match self {
            Self::Increase | Self::Decrease | Self::AddSections => TargetAction::ChangeNumSections,
            Self::AddEntry => TargetAction::EditEntry,
            Self::ImportEntries => TargetAction::ImportEntries,
            Self::ExportEntries => TargetAction::ExportEntries,
        }
    }

    /// Key used for this affordance in the exported template context.
    pub fn template_key(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::AddSections => "addsections",
            Self::AddEntry => "addentrybutton",
            Self::ImportEntries => "importentriesbutton",
            Self::ExportEntries => "exportentriesbutton",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAction {
    ChangeNumSections,
    EditEntry,
    ImportEntries,
    ExportEntries,
}

impl TargetAction {
    /// Whether the renderer must attach the session token before linking here.
    pub fn requires_session_token(self) -> bool {
        matches!(self, Self::ChangeNumSections)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HttpMethod {
    #[default]
    Get,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A localization key picked by the resolver; text is looked up by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl Label {
    pub fn core(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component: None,
        }
    }

    pub fn component(key: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component: Some(component.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordance {
    pub kind: AffordanceKind,
    pub params: ParamMap,
    pub label: Label,
    #[serde(default)]
    pub primary: bool,
}

impl Affordance {
    pub fn new(kind: AffordanceKind, label: Label) -> Self {
        Self {
            kind,
            params: ParamMap::new(),
            label,
            primary: false,
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AffordanceDecision {
    #[serde(default)]
    pub affordances: BTreeMap<AffordanceKind, Affordance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_select: Option<Value>,
}

impl AffordanceDecision {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, affordance: Affordance) {
        self.affordances.insert(affordance.kind, affordance);
    }

    pub fn get(&self, kind: AffordanceKind) -> Option<&Affordance> {
        self.affordances.get(&kind)
    }

    pub fn contains(&self, kind: AffordanceKind) -> bool {
        self.affordances.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.affordances.is_empty()
    }

    pub fn show_add_section(&self) -> bool {
        !self.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = AffordanceKind> + '_ {
        self.affordances.keys().copied()
    }
}
