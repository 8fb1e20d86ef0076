pub mod facade;
pub mod noop;
pub mod ports;

pub use facade::{ContextFacade, CourseFormatFacts, DatabaseActivityFacts, ResolvedLink};
pub use noop::{CORE_COMPONENT, FixedSessionToken, StaticCapabilities, StaticStrings};
pub use ports::{CapabilityPort, LocalizationPort, SessionTokenPort};
