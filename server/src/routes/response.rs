use serde::Serialize;

use crate::contact::Receipt;

/// The successful response bodies that are not page documents.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Healthz {
        revision: Option<&'a str>,
        timestamp: Option<&'a str>,
        version: &'a str,
    },
    Submitted(Receipt),
}
