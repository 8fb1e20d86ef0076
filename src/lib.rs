pub mod affordance;
pub mod cli;
pub mod config;
pub mod context;
pub mod entry;
pub mod logging;
pub mod request;
pub mod section;

pub use affordance::{
    AffordanceDecision, AffordanceError, AffordanceKind, LinkDescriptor, build_descriptors,
    export_template_context,
};
pub use entry::{EntryAffordanceContext, resolve_entry_affordances};
pub use section::{SectionAffordanceContext, resolve_section_affordances};
