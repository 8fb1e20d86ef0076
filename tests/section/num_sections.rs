use affordance_resolver::{
    affordance::{AffordanceErrorKind, AffordanceKind, ParamValue},
    section::{SectionAffordanceContext, resolve_section_affordances},
};

use super::num_sections_context;

#[test]
fn given_num_sections_option_when_below_max_then_increase_is_offered() {
    let decision =
        resolve_section_affordances(&num_sections_context(3, 52, 0)).expect("should resolve");

    let increase = decision
        .get(AffordanceKind::Increase)
        .expect("increase should be present");
    assert_eq!(increase.params.get("courseId"), Some(&ParamValue::Int(42)));
    assert_eq!(increase.params.get("increase"), Some(&ParamValue::Bool(true)));
    assert!(!decision.contains(AffordanceKind::Decrease));
    assert!(!decision.contains(AffordanceKind::AddSections));
}

#[test]
fn given_num_sections_option_when_increase_rule_varies_then_it_tracks_only_the_section_limit() {
    let cases = [(0, 1, true), (51, 52, true), (52, 52, false), (60, 52, false)];

    for (last_section, max_sections, expected) in cases {
        for current_num_sections in [0, 5] {
            for uses_sections in [true, false] {
                let context = SectionAffordanceContext {
                    uses_sections,
                    current_section_number: Some(2),
                    ..num_sections_context(last_section, max_sections, current_num_sections)
                };
                let decision = resolve_section_affordances(&context).expect("should resolve");
                assert_eq!(
                    decision.contains(AffordanceKind::Increase),
                    expected,
                    "last={last_section} max={max_sections} num={current_num_sections}",
                );
            }
        }
    }
}

#[test]
fn given_num_sections_option_when_course_has_sections_then_decrease_is_offered() {
    for (current_num_sections, expected) in [(0, false), (1, true), (12, true)] {
        let decision = resolve_section_affordances(&num_sections_context(
            52,
            52,
            current_num_sections,
        ))
        .expect("should resolve");

        assert_eq!(decision.contains(AffordanceKind::Decrease), expected);
        if let Some(decrease) = decision.get(AffordanceKind::Decrease) {
            assert_eq!(decrease.params.get("increase"), Some(&ParamValue::Bool(false)));
        }
    }
}

#[test]
fn given_num_sections_option_when_nothing_applies_then_show_add_section_is_false() {
    let decision =
        resolve_section_affordances(&num_sections_context(52, 52, 0)).expect("should resolve");
    assert!(decision.is_empty());
    assert!(!decision.show_add_section());

    let decision =
        resolve_section_affordances(&num_sections_context(10, 52, 10)).expect("should resolve");
    assert_eq!(decision.affordances.len(), 2);
    assert!(decision.show_add_section());
}

#[test]
fn given_num_sections_option_when_current_count_missing_then_configuration_error_is_returned() {
    let context = SectionAffordanceContext {
        current_num_sections: None,
        ..num_sections_context(3, 52, 0)
    };

    let err = resolve_section_affordances(&context).expect_err("current count is required");
    assert_eq!(err.kind, AffordanceErrorKind::Configuration);
    assert!(err.message.contains("current_num_sections"));
}
