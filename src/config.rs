// src/config.rs

/// Knobs for table discovery and key normalization. Passed explicitly to
/// the locator and normalizer; there is no process-wide default state.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Column names that identify the stats table. A table is selected as
    /// soon as any of its rows contains one of these cell texts.
    pub marker_headers: Vec<String>,
    /// Field name for columns whose header canonicalizes to nothing
    /// (unlabeled rank/index columns).
    pub fallback_field: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker_headers: vec!["Player".into(), "Team".into()],
            fallback_field: "rank".into(),
        }
    }
}
