use url::Url;

use crate::catalog::{Id, ResourceKind};

/// Convenience wrapper for URL generation functions.
#[derive(Clone)]
pub struct Urls {
    /// Top-level URL, including trailing slash.
    base: Url,

    /// Path for all resource-retrieval actions.
    pub(crate) resources_path: String,

    /// Prefix for all resource-retrieval actions.
    pub(crate) resources_prefix: String,
}

impl Urls {
    /// Create a new instance. `resources_prefix` should *not* include a trailing slash.
    pub fn new(base: impl AsRef<str>, resources_prefix: impl Into<String>) -> Self {
        let base =
            Url::parse(base.as_ref()).unwrap_or_else(|_| panic!("parse {} as URL", base.as_ref()));
        let resources_path = resources_prefix.into();
        let resources_prefix = format!("{}/", resources_path);

        Urls {
            base,
            resources_path,
            resources_prefix,
        }
    }

    pub fn resources(&self) -> Url {
        self.base
            .join(&self.resources_prefix)
            .expect("get resources URL")
    }

    /// The download URL for a single resource.
    pub fn resource(&self, kind: ResourceKind, id: Id) -> Url {
        let path = format!("{}/{}", kind.path_segment(), id);
        self.resources()
            .join(&path)
            .unwrap_or_else(|_| panic!("get URL for resource {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::Urls;
    use crate::catalog::ResourceKind;

    #[test]
    fn resource_urls_include_the_collection_segment() {
        let urls = Urls::new("http://localhost:3030/", "resources");

        assert_eq!(
            urls.resource(ResourceKind::Worksheet, 1).as_str(),
            "http://localhost:3030/resources/worksheets/1"
        );
        assert_eq!(
            urls.resource(ResourceKind::ColoringSheet, 4).as_str(),
            "http://localhost:3030/resources/coloring-sheets/4"
        );
    }
}
