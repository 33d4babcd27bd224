use lazy_static::lazy_static;
use serde::Serialize;

/// The reserved category key that matches every resource.
pub const WILDCARD_CATEGORY: &str = "all";

/// An ID in the catalog.
pub type Id = u32;

/// Which of the two fixed collections a resource belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceKind {
    Worksheet,
    ColoringSheet,
}

impl ResourceKind {
    /// The path segment used for download URLs and retrieval routes.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Worksheet => "worksheets",
            ResourceKind::ColoringSheet => "coloring-sheets",
        }
    }

    /// The tab title on the catalog page, without the count.
    pub fn tab_title(self) -> &'static str {
        match self {
            ResourceKind::Worksheet => "Worksheets",
            ResourceKind::ColoringSheet => "Coloring Sheets",
        }
    }

    /// The placeholder shown when a filtered panel comes up empty.
    pub fn empty_state(self) -> &'static str {
        match self {
            ResourceKind::Worksheet => "No worksheets found matching your criteria.",
            ResourceKind::ColoringSheet => "No coloring sheets found matching your criteria.",
        }
    }
}

/// The difficulty rating carried by worksheets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// The complexity rating carried by coloring sheets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// The kind-specific rating of a resource. A worksheet carries a
/// difficulty, a coloring sheet a complexity; never both.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Difficulty(Difficulty),
    Complexity(Complexity),
}

impl Tier {
    /// The label shown on the resource card badge.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Difficulty(Difficulty::Beginner) => "Beginner",
            Tier::Difficulty(Difficulty::Intermediate) => "Intermediate",
            Tier::Difficulty(Difficulty::Advanced) => "Advanced",
            Tier::Complexity(Complexity::Simple) => "Simple",
            Tier::Complexity(Complexity::Medium) => "Medium",
            Tier::Complexity(Complexity::Complex) => "Complex",
        }
    }
}

/// A single downloadable resource. Defined at process start, never
/// mutated.
#[derive(Clone, Debug, Serialize)]
pub struct Resource {
    /// The ID of the resource, unique within its collection.
    pub(crate) id: Id,

    /// The title shown on the card. Search terms match against this
    /// field only.
    pub(crate) title: String,

    pub(crate) description: String,

    /// The key of the category it falls into. Must be registered.
    pub(crate) category: String,

    pub(crate) age_group: String,

    /// The kind-specific rating.
    #[serde(flatten)]
    pub(crate) tier: Tier,

    /// The rating out of five.
    pub(crate) rating: u8,

    /// The number of times it has been downloaded.
    pub(crate) downloads: u32,
}

impl Resource {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Id,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        age_group: impl Into<String>,
        tier: Tier,
        rating: u8,
        downloads: u32,
    ) -> Self {
        Resource {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            age_group: age_group.into(),
            tier,
            rating,
            downloads,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A single entry in the category registry.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryEntry {
    /// The key used for filtering. Unique.
    pub(crate) key: String,

    /// The label shown in the filter control.
    pub(crate) label: String,
}

impl CategoryEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        CategoryEntry {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

lazy_static! {
    /// The registry of filterable categories, wildcard first.
    pub static ref CATEGORIES: Vec<CategoryEntry> = vec![
        CategoryEntry::new(WILDCARD_CATEGORY, "All Categories"),
        CategoryEntry::new("math", "Math"),
        CategoryEntry::new("reading", "Reading"),
        CategoryEntry::new("science", "Science"),
        CategoryEntry::new("writing", "Writing"),
        CategoryEntry::new("fantasy", "Fantasy"),
        CategoryEntry::new("nature", "Nature"),
        CategoryEntry::new("space", "Space"),
        CategoryEntry::new("patterns", "Patterns"),
    ];
}

/// Returns whether `key` names a registered category. The wildcard
/// counts as registered.
pub fn is_registered(key: &str) -> bool {
    CATEGORIES.iter().any(|c| c.key == key)
}

/// Filters `resources` down to those in the selected category whose
/// title contains the search term, case-insensitively. The original
/// relative order is preserved. The wildcard category matches every
/// resource; an unregistered key silently matches none. An empty
/// search term matches every title.
pub fn filter_resources(
    resources: &[Resource],
    search_term: &str,
    selected_category: &str,
) -> Vec<Resource> {
    let needle = search_term.to_lowercase();

    resources
        .iter()
        .filter(|r| selected_category == WILDCARD_CATEGORY || r.category == selected_category)
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> Vec<Resource> {
        vec![
            Resource::new(
                1,
                "Math Adventures",
                "Fun math problems.",
                "math",
                "6-8 years",
                Tier::Difficulty(Difficulty::Beginner),
                5,
                1250,
            ),
            Resource::new(
                2,
                "Ocean Adventures",
                "Underwater scenes.",
                "nature",
                "5-12 years",
                Tier::Complexity(Complexity::Medium),
                5,
                1800,
            ),
            Resource::new(
                3,
                "Space Exploration",
                "Rockets and planets.",
                "space",
                "6-12 years",
                Tier::Complexity(Complexity::Medium),
                4,
                1450,
            ),
        ]
    }

    #[test]
    fn empty_search_and_wildcard_return_everything() {
        let resources = sample();
        let filtered = filter_resources(&resources, "", WILDCARD_CATEGORY);

        assert_eq!(filtered.len(), resources.len());
        let ids: Vec<Id> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let filtered = filter_resources(&sample(), "OCEAN", WILDCARD_CATEGORY);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Ocean Adventures");
    }

    #[test]
    fn category_and_search_are_combined() {
        let filtered = filter_resources(&sample(), "adventures", "math");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn unregistered_category_matches_nothing() {
        assert!(!is_registered("dinosaurs"));
        assert!(filter_resources(&sample(), "", "dinosaurs").is_empty());
    }

    #[test]
    fn wildcard_is_always_recognized() {
        assert!(is_registered(WILDCARD_CATEGORY));
        assert!(CATEGORIES.iter().filter(|c| c.key == WILDCARD_CATEGORY).count() == 1);
    }

    #[test]
    fn registry_keys_are_unique() {
        for entry in CATEGORIES.iter() {
            assert_eq!(
                CATEGORIES.iter().filter(|c| c.key == entry.key).count(),
                1,
                "duplicate key {}",
                entry.key
            );
        }
    }

    proptest! {
        #[test]
        fn filtering_yields_an_order_preserving_subsequence(
            search in ".{0,12}",
            category in "[a-z]{0,10}",
        ) {
            let resources = sample();
            let filtered = filter_resources(&resources, &search, &category);

            let needle = search.to_lowercase();
            let mut last_position = None;

            for resource in &filtered {
                prop_assert!(
                    category == WILDCARD_CATEGORY || resource.category == category,
                    "{} slipped past the category filter",
                    resource.title
                );
                prop_assert!(
                    resource.title.to_lowercase().contains(&needle),
                    "{} does not contain {:?}",
                    resource.title,
                    search
                );

                let position = resources
                    .iter()
                    .position(|r| r.id == resource.id)
                    .expect("filtered resource came from the input");

                if let Some(last) = last_position {
                    prop_assert!(position > last, "original order not preserved");
                }

                last_position = Some(position);
            }
        }
    }
}
