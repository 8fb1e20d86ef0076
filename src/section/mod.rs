pub mod resolver;
pub mod types;

pub use resolver::resolve_section_affordances;
pub use types::SectionAffordanceContext;
