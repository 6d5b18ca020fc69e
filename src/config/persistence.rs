//! On-disk persistence configuration

pub struct PersistenceConfig {
    /// Bincode snapshot of the full dashboard bundle.
    pub bundle_path: &'static str,
    /// Bumped whenever the serialized layout changes; a mismatched cache is
    /// discarded and regenerated.
    pub bundle_version: u32,
    /// egui window/app state.
    pub app_state_path: &'static str,
    /// Cached bundles older than this are ignored.
    pub bundle_acceptable_age_secs: i64,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    bundle_path: "cot_bundle.bin",
    bundle_version: 1,
    app_state_path: "app_state.json",
    bundle_acceptable_age_secs: 6 * 24 * 60 * 60, // COT reports are weekly; refresh within the week
};
