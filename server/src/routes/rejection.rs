use serde::Serialize;
use warp::reject;

use crate::errors::HubError;

#[derive(Debug)]
pub struct Rejection {
    pub(crate) context: Context,
    pub(crate) error: HubError,
}

impl Rejection {
    pub fn new(context: Context, error: HubError) -> Self {
        Rejection { context, error }
    }

    pub fn flatten(&self) -> FlattenedRejection {
        FlattenedRejection {
            context: self.context.clone(),
            message: format!("{}", self.error),
        }
    }
}

impl reject::Reject for Rejection {}

#[derive(Debug, Serialize)]
pub struct FlattenedRejection {
    #[serde(flatten)]
    pub(crate) context: Context,
    pub(crate) message: String,
}

/// Which operation a request was rejected from. Every variant is a
/// struct variant so the untagged form always flattens to a map.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Context {
    ClassContent { search: String, category: String },
    Contact {},
    Scheduling {},
    Resource { collection: String, id: String },
    Lookup { segment: String },
}

impl Context {
    pub fn class_content(search: &str, category: &str) -> Context {
        Context::ClassContent {
            search: search.to_owned(),
            category: category.to_owned(),
        }
    }

    pub fn contact() -> Context {
        Context::Contact {}
    }

    pub fn scheduling() -> Context {
        Context::Scheduling {}
    }

    pub fn resource(collection: &str, id: &str) -> Context {
        Context::Resource {
            collection: collection.to_owned(),
            id: id.to_owned(),
        }
    }

    pub fn lookup(segment: &str) -> Context {
        Context::Lookup {
            segment: segment.to_owned(),
        }
    }
}
