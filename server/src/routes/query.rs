use serde::Deserialize;

/// The catalog filter controls, as query parameters. Both default to
/// the unfiltered state when absent.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}
