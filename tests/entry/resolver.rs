use affordance_resolver::{
    affordance::{AffordanceKind, Label, ParamValue},
    entry::{EntryAffordanceContext, resolve_entry_affordances},
};

use super::student_context;

#[test]
fn given_entry_limit_reached_when_user_cannot_manage_then_add_entry_is_suppressed() {
    let decision = resolve_entry_affordances(&student_context()).expect("should resolve");

    assert!(!decision.contains(AffordanceKind::AddEntry));
    assert!(!decision.contains(AffordanceKind::ImportEntries));
    assert!(!decision.contains(AffordanceKind::ExportEntries));
}

#[test]
fn given_entry_limit_reached_when_user_can_manage_then_add_entry_and_import_are_offered() {
    let context = EntryAffordanceContext {
        can_manage_entries: true,
        ..student_context()
    };

    let decision = resolve_entry_affordances(&context).expect("should resolve");

    let add = decision
        .get(AffordanceKind::AddEntry)
        .expect("add entry should be present");
    assert!(add.primary);
    assert_eq!(add.label, Label::component("add", "mod_data"));
    assert_eq!(add.params.get("moduleId"), Some(&ParamValue::Int(7)));
    assert_eq!(
        add.params.get("backUrl"),
        Some(&ParamValue::Text(
            "https://lms.example/mod/data/view.php?d=7".to_string()
        ))
    );

    let import = decision
        .get(AffordanceKind::ImportEntries)
        .expect("import should be present");
    assert!(!import.primary);
    assert_eq!(import.params, add.params);
}

#[test]
fn given_entries_below_limit_when_resolving_then_add_entry_is_offered() {
    let context = EntryAffordanceContext {
        num_entries: Some(4),
        ..student_context()
    };

    let decision = resolve_entry_affordances(&context).expect("should resolve");
    assert!(decision.contains(AffordanceKind::AddEntry));
}

#[test]
fn given_zero_max_entries_when_resolving_then_limit_is_not_applied() {
    let context = EntryAffordanceContext {
        num_entries: Some(100),
        max_entries: Some(0),
        ..student_context()
    };

    let decision = resolve_entry_affordances(&context).expect("should resolve");
    assert!(decision.contains(AffordanceKind::AddEntry));
}

#[test]
fn given_unset_count_or_limit_when_resolving_then_limit_is_unbounded() {
    let contexts = [
        EntryAffordanceContext {
            num_entries: None,
            ..student_context()
        },
        EntryAffordanceContext {
            max_entries: None,
            ..student_context()
        },
        EntryAffordanceContext {
            num_entries: None,
            max_entries: None,
            ..student_context()
        },
    ];

    for context in contexts {
        let decision = resolve_entry_affordances(&context).expect("should resolve");
        assert!(decision.contains(AffordanceKind::AddEntry));
    }
}

#[test]
fn given_export_capability_when_entries_exist_then_export_is_offered() {
    let without_entries = EntryAffordanceContext {
        can_export: true,
        has_entries: false,
        ..student_context()
    };
    let decision = resolve_entry_affordances(&without_entries).expect("should resolve");
    assert!(!decision.contains(AffordanceKind::ExportEntries));

    let with_entries = EntryAffordanceContext {
        has_entries: true,
        ..without_entries
    };
    let decision = resolve_entry_affordances(&with_entries).expect("should resolve");
    let export = decision
        .get(AffordanceKind::ExportEntries)
        .expect("export should be present");
    assert_eq!(export.label, Label::component("exportentries", "mod_data"));
}

#[test]
fn given_url_select_when_resolving_then_it_is_passed_through_unchanged() {
    let url_select = serde_json::json!({
        "id": "url_select_test",
        "options": [{"name": "List view", "value": "/mod/data/view.php?d=7"}],
    });
    let context = EntryAffordanceContext {
        url_select: Some(url_select.clone()),
        ..student_context()
    };

    let decision = resolve_entry_affordances(&context).expect("should resolve");
    assert_eq!(decision.url_select, Some(url_select));
}

#[test]
fn given_same_context_when_resolving_twice_then_decisions_are_identical() {
    let context = EntryAffordanceContext {
        can_manage_entries: true,
        can_export: true,
        ..student_context()
    };

    let first = resolve_entry_affordances(&context).expect("should resolve");
    let second = resolve_entry_affordances(&context).expect("should resolve");
    assert_eq!(first, second);
}
