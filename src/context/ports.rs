pub trait CapabilityPort: Send + Sync {
    fn has_capability(&self, capability: &str, context_ref: &str) -> bool;
}

pub trait LocalizationPort: Send + Sync {
    fn string_exists(&self, key: &str, component: &str) -> bool;

    /// `component` of `None` means the core string table.
    fn get_string(&self, key: &str, component: Option<&str>) -> String;
}

pub trait SessionTokenPort: Send + Sync {
    fn session_token(&self) -> String;
}
