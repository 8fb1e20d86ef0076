use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::affordance::types::{
    Affordance, AffordanceDecision, AffordanceKind, HttpMethod, Label, ParamMap, TargetAction,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub kind: AffordanceKind,
    pub target_action: TargetAction,
    pub parameters: ParamMap,
    pub label: Label,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub primary: bool,
}

pub fn build_descriptor(affordance: &Affordance) -> LinkDescriptor {
    LinkDescriptor {
        kind: affordance.kind,
        target_action: affordance.kind.target_action(),
        parameters: affordance.params.clone(),
        label: affordance.label.clone(),
        method: HttpMethod::Get,
        primary: affordance.primary,
    }
}

/// Descriptors for every present affordance, in `AffordanceKind` order.
pub fn build_descriptors(decision: &AffordanceDecision) -> Vec<LinkDescriptor> {
    decision.affordances.values().map(build_descriptor).collect()
}

/// Flattens a decision into the key/value map a template layer consumes.
///
/// Absent affordances are absent keys. `showaddsection` is only emitted when
/// a section affordance is present.
pub fn export_template_context(decision: &AffordanceDecision) -> Value {
    let mut context = Map::new();

    if let Some(url_select) = &decision.url_select {
        context.insert("urlselect".to_string(), url_select.clone());
    }

    for descriptor in build_descriptors(decision) {
        context.insert(
            descriptor.kind.template_key().to_string(),
            json!({
                "target_action": descriptor.target_action,
                "parameters": descriptor.parameters,
                "label": descriptor.label,
                "method": descriptor.method,
                "primary": descriptor.primary,
            }),
        );
    }

    let has_section_affordance = decision.kinds().any(|kind| {
        matches!(
            kind,
            AffordanceKind::Increase | AffordanceKind::Decrease | AffordanceKind::AddSections
        )
    });
    if has_section_affordance {
        context.insert("showaddsection".to_string(), Value::Bool(true));
    }

    Value::Object(context)
}
