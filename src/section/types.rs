use serde::{Deserialize, Serialize};

use crate::affordance::types::Label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAffordanceContext {
    pub course_id: i64,
    #[serde(default)]
    pub last_section_number: Option<i64>,
    #[serde(default)]
    pub max_sections: Option<i64>,
    pub num_sections_option_enabled: bool,
    #[serde(default)]
    pub current_num_sections: Option<i64>,
    #[serde(default)]
    pub current_section_number: Option<i64>,
    #[serde(default)]
    pub format_add_sections_label: Option<Label>,
    pub uses_sections: bool,
    pub editing_enabled: bool,
}
