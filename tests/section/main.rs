mod num_sections;

use affordance_resolver::section::SectionAffordanceContext;

pub fn add_sections_context(last_section: i64, max_sections: i64) -> SectionAffordanceContext {
    SectionAffordanceContext {
        course_id: 42,
        last_section_number: Some(last_section),
        max_sections: Some(max_sections),
        num_sections_option_enabled: false,
        current_num_sections: None,
        current_section_number: None,
        format_add_sections_label: None,
        uses_sections: true,
        editing_enabled: true,
    }
}

pub fn num_sections_context(
    last_section: i64,
    max_sections: i64,
    current_num_sections: i64,
) -> SectionAffordanceContext {
    SectionAffordanceContext {
        num_sections_option_enabled: true,
        current_num_sections: Some(current_num_sections),
        ..add_sections_context(last_section, max_sections)
    }
}
