pub mod resolver;
pub mod types;

pub use resolver::resolve_entry_affordances;
pub use types::EntryAffordanceContext;
