use crate::{
    affordance::{
        error::AffordanceError,
        types::{Affordance, AffordanceDecision, AffordanceKind, Label},
    },
    entry::types::EntryAffordanceContext,
};

const COMPONENT: &str = "mod_data";

pub fn resolve_entry_affordances(
    context: &EntryAffordanceContext,
) -> Result<AffordanceDecision, AffordanceError> {
    let mut decision = AffordanceDecision {
        url_select: context.url_select.clone(),
        ..AffordanceDecision::default()
    };

    let add_entry_suppressed = !context.can_manage_entries && context.entry_limit_reached();
    if !add_entry_suppressed {
        decision.insert(
            entry_affordance(context, AffordanceKind::AddEntry, "add").with_primary(true),
        );
    }

    if context.can_manage_entries {
        decision.insert(entry_affordance(
            context,
            AffordanceKind::ImportEntries,
            "importentries",
        ));
    }

    if context.can_export && context.has_entries {
        decision.insert(entry_affordance(
            context,
            AffordanceKind::ExportEntries,
            "exportentries",
        ));
    }

    tracing::debug!(
        target: "affordance",
        module_id = context.module_id,
        affordances = ?decision.kinds().collect::<Vec<_>>(),
        add_entry_suppressed,
        "entry_affordances_resolved"
    );

    Ok(decision)
}

fn entry_affordance(
    context: &EntryAffordanceContext,
    kind: AffordanceKind,
    label_key: &str,
) -> Affordance {
    Affordance::new(kind, Label::component(label_key, COMPONENT))
        .with_param("moduleId", context.module_id)
        .with_param("backUrl", context.back_url.as_str())
}
