use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    affordance::{
        descriptor::{LinkDescriptor, build_descriptors},
        types::{AffordanceDecision, AffordanceKind, HttpMethod, Label, ParamMap, ParamValue},
    },
    config::Config,
    context::ports::{CapabilityPort, LocalizationPort, SessionTokenPort},
    entry::types::EntryAffordanceContext,
    section::types::SectionAffordanceContext,
};

const ADD_SECTIONS_KEY: &str = "addsections";
const SESSION_TOKEN_PARAM: &str = "sesskey";

/// What the host page knows about the course format being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFormatFacts {
    pub course_id: i64,
    pub format: String,
    #[serde(default)]
    pub has_num_sections_option: bool,
    #[serde(default)]
    pub course_num_sections: Option<i64>,
    #[serde(default)]
    pub last_section_number: Option<i64>,
    #[serde(default)]
    pub max_sections: Option<i64>,
    #[serde(default)]
    pub uses_sections: bool,
    /// Section shown on a single-section page, if any.
    #[serde(default)]
    pub section_number: Option<i64>,
    pub show_editor: bool,
}

/// What the host page knows about a database activity view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseActivityFacts {
    pub module_id: i64,
    pub context_ref: String,
    pub page_url: String,
    #[serde(default)]
    pub url_select: Option<Value>,
    pub has_entries: bool,
    #[serde(default)]
    pub num_entries: Option<u64>,
    #[serde(default)]
    pub max_entries: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub kind: AffordanceKind,
    pub path: String,
    pub parameters: ParamMap,
    pub text: String,
    pub method: HttpMethod,
    pub primary: bool,
}

/// Snapshots collaborator state into resolver contexts and turns decisions
/// back into localized, routed links.
pub struct ContextFacade<'a> {
    config: &'a Config,
    capabilities: &'a dyn CapabilityPort,
    localization: &'a dyn LocalizationPort,
    session: &'a dyn SessionTokenPort,
}

impl<'a> ContextFacade<'a> {
    pub fn new(
        config: &'a Config,
        capabilities: &'a dyn CapabilityPort,
        localization: &'a dyn LocalizationPort,
        session: &'a dyn SessionTokenPort,
    ) -> Self {
        Self {
            config,
            capabilities,
            localization,
            session,
        }
    }

    pub fn section_context(&self, facts: &CourseFormatFacts) -> SectionAffordanceContext {
        let format_component = format!("format_{}", facts.format);
        let format_add_sections_label = self
            .localization
            .string_exists(ADD_SECTIONS_KEY, &format_component)
            .then(|| Label::component(ADD_SECTIONS_KEY, format_component));

        SectionAffordanceContext {
            course_id: facts.course_id,
            last_section_number: facts.last_section_number,
            max_sections: facts.max_sections,
            num_sections_option_enabled: facts.has_num_sections_option,
            current_num_sections: facts.course_num_sections,
            current_section_number: facts.section_number,
            format_add_sections_label,
            uses_sections: facts.uses_sections,
            editing_enabled: facts.show_editor,
        }
    }

    pub fn entry_context(&self, facts: &DatabaseActivityFacts) -> EntryAffordanceContext {
        let names = &self.config.capabilities;
        let can_manage_entries = self
            .capabilities
            .has_capability(&names.manage_entries, &facts.context_ref);
        let can_export = self
            .capabilities
            .has_capability(&names.export_entries, &facts.context_ref);

        tracing::debug!(
            target: "context",
            module_id = facts.module_id,
            can_manage_entries,
            can_export,
            "entry_capabilities_snapshotted"
        );

        EntryAffordanceContext {
            module_id: facts.module_id,
            back_url: facts.page_url.clone(),
            has_entries: facts.has_entries,
            num_entries: facts.num_entries,
            max_entries: facts.max_entries,
            can_manage_entries,
            can_export,
            url_select: facts.url_select.clone(),
        }
    }

    pub fn resolve_links(&self, decision: &AffordanceDecision) -> Vec<ResolvedLink> {
        build_descriptors(decision)
            .into_iter()
            .map(|descriptor| self.resolve_link(descriptor))
            .collect()
    }

    fn resolve_link(&self, descriptor: LinkDescriptor) -> ResolvedLink {
        let mut parameters = descriptor.parameters;
        if descriptor.target_action.requires_session_token() {
            parameters.insert(
                SESSION_TOKEN_PARAM.to_string(),
                ParamValue::Text(self.session.session_token()),
            );
        }

        let text = self.localization.get_string(
            &descriptor.label.key,
            descriptor.label.component.as_deref(),
        );

        ResolvedLink {
            kind: descriptor.kind,
            path: self
                .config
                .routes
                .path_for(descriptor.target_action)
                .to_string(),
            parameters,
            text,
            method: descriptor.method,
            primary: descriptor.primary,
        }
    }
}
