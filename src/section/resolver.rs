use crate::{
    affordance::{
        error::{AffordanceError, require},
        types::{Affordance, AffordanceDecision, AffordanceKind, Label},
    },
    section::types::SectionAffordanceContext,
};

const GENERIC_ADD_SECTIONS_KEY: &str = "addsections";

pub fn resolve_section_affordances(
    context: &SectionAffordanceContext,
) -> Result<AffordanceDecision, AffordanceError> {
    let mut decision = AffordanceDecision::empty();

    if !context.editing_enabled {
        tracing::debug!(
            target: "affordance",
            course_id = context.course_id,
            "section_affordances_skipped_editing_disabled"
        );
        return Ok(decision);
    }

    if context.num_sections_option_enabled {
        resolve_num_sections_controls(context, &mut decision)?;
    } else if context.uses_sections {
        resolve_add_sections(context, &mut decision)?;
    }

    tracing::debug!(
        target: "affordance",
        course_id = context.course_id,
        affordances = ?decision.kinds().collect::<Vec<_>>(),
        show_add_section = decision.show_add_section(),
        "section_affordances_resolved"
    );

    Ok(decision)
}

fn resolve_num_sections_controls(
    context: &SectionAffordanceContext,
    decision: &mut AffordanceDecision,
) -> Result<(), AffordanceError> {
    let last_section = require(context.last_section_number, "last_section_number")?;
    let max_sections = require(context.max_sections, "max_sections")?;
    let current_num_sections = require(context.current_num_sections, "current_num_sections")?;

    if last_section < max_sections {
        decision.insert(
            Affordance::new(AffordanceKind::Increase, Label::core("increasesections"))
                .with_param("courseId", context.course_id)
                .with_param("increase", true),
        );
    }

    if current_num_sections > 0 {
        decision.insert(
            Affordance::new(AffordanceKind::Decrease, Label::core("reducesections"))
                .with_param("courseId", context.course_id)
                .with_param("increase", false),
        );
    }

    Ok(())
}

fn resolve_add_sections(
    context: &SectionAffordanceContext,
    decision: &mut AffordanceDecision,
) -> Result<(), AffordanceError> {
    let last_section = require(context.last_section_number, "last_section_number")?;
    let max_sections = require(context.max_sections, "max_sections")?;

    if last_section >= max_sections {
        return Ok(());
    }

    let label = context
        .format_add_sections_label
        .clone()
        .unwrap_or_else(|| Label::core(GENERIC_ADD_SECTIONS_KEY));

    let mut affordance = Affordance::new(AffordanceKind::AddSections, label)
        .with_param("courseId", context.course_id)
        .with_param("insertAt", 0_i64)
        .with_param("remainingSlots", max_sections.saturating_sub(last_section));

    if let Some(section_return) = context.current_section_number.filter(|number| *number != 0) {
        affordance = affordance.with_param("sectionReturn", section_return);
    }

    decision.insert(affordance);
    Ok(())
}
