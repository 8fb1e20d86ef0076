pub mod descriptor;
pub mod error;
pub mod types;

pub use descriptor::{LinkDescriptor, build_descriptor, build_descriptors, export_template_context};
pub use error::{AffordanceError, AffordanceErrorKind, configuration_error};
pub use types::{
    Affordance, AffordanceDecision, AffordanceKind, HttpMethod, Label, ParamMap, ParamValue,
    TargetAction,
};
