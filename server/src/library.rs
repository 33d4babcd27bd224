use futures::future::BoxFuture;

use crate::catalog::{CategoryEntry, Id, Resource, ResourceKind};
use crate::errors::HubError;
use crate::scheduling::Session;

/// The data source behind the site. Everything is read-only; a real
/// deployment would back this with a database.
pub trait Library {
    fn worksheets(&self) -> BoxFuture<Result<Vec<Resource>, HubError>>;

    fn coloring_sheets(&self) -> BoxFuture<Result<Vec<Resource>, HubError>>;

    fn categories(&self) -> BoxFuture<Result<Vec<CategoryEntry>, HubError>>;

    fn sessions(&self) -> BoxFuture<Result<Vec<Session>, HubError>>;

    fn resource(&self, kind: ResourceKind, id: Id)
        -> BoxFuture<Result<Option<Resource>, HubError>>;
}

pub use self::fixed::*;

mod fixed {
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use lazy_static::lazy_static;
    use time::macros::date;

    use crate::catalog::{
        CategoryEntry, Complexity, Difficulty, Id, Resource, ResourceKind, Tier, CATEGORIES,
    };
    use crate::errors::HubError;
    use crate::scheduling::{Session, SessionType};

    lazy_static! {
        static ref WORKSHEETS: Vec<Resource> = vec![
            Resource::new(
                1,
                "Math Adventures: Addition & Subtraction",
                "Fun math problems with colorful illustrations to make numbers exciting.",
                "math",
                "6-8 years",
                Tier::Difficulty(Difficulty::Beginner),
                5,
                1250,
            ),
            Resource::new(
                2,
                "Reading Comprehension: Animal Stories",
                "Engaging stories about animals with comprehension questions.",
                "reading",
                "7-10 years",
                Tier::Difficulty(Difficulty::Intermediate),
                5,
                980,
            ),
            Resource::new(
                3,
                "Science Explorers: Weather Patterns",
                "Learn about different weather phenomena through interactive activities.",
                "science",
                "8-12 years",
                Tier::Difficulty(Difficulty::Intermediate),
                4,
                756,
            ),
            Resource::new(
                4,
                "Creative Writing: Story Starters",
                "Prompts and templates to inspire young writers.",
                "writing",
                "9-12 years",
                Tier::Difficulty(Difficulty::Advanced),
                5,
                642,
            ),
        ];

        static ref COLORING_SHEETS: Vec<Resource> = vec![
            Resource::new(
                1,
                "Magical Unicorns",
                "Beautiful unicorn designs perfect for creative expression.",
                "fantasy",
                "4-10 years",
                Tier::Complexity(Complexity::Simple),
                5,
                2100,
            ),
            Resource::new(
                2,
                "Ocean Adventures",
                "Underwater scenes with fish, dolphins, and sea creatures.",
                "nature",
                "5-12 years",
                Tier::Complexity(Complexity::Medium),
                5,
                1800,
            ),
            Resource::new(
                3,
                "Space Exploration",
                "Rockets, planets, and astronauts for future space explorers.",
                "space",
                "6-12 years",
                Tier::Complexity(Complexity::Medium),
                4,
                1450,
            ),
            Resource::new(
                4,
                "Mandala Patterns",
                "Intricate mandala designs for relaxation and focus.",
                "patterns",
                "10+ years",
                Tier::Complexity(Complexity::Complex),
                5,
                890,
            ),
        ];

        static ref SESSIONS: Vec<Session> = vec![
            Session::new(
                1,
                "Creative Art & Craft Session",
                date!(2024 - 08 - 25),
                "10:00 AM - 12:00 PM",
                8,
                12,
                "5-10 years",
                SessionType::Craft,
                "Join us for a fun-filled morning of painting, drawing, and creative crafts!",
                "All materials provided",
                "$25",
            ),
            Session::new(
                2,
                "Science Discovery Play Date",
                date!(2024 - 08 - 28),
                "2:00 PM - 4:00 PM",
                5,
                10,
                "6-12 years",
                SessionType::Science,
                "Explore the wonders of science through hands-on experiments and discovery games.",
                "Safety goggles provided",
                "$30",
            ),
            Session::new(
                3,
                "Storytelling & Drama Workshop",
                date!(2024 - 09 - 02),
                "11:00 AM - 1:00 PM",
                10,
                15,
                "4-8 years",
                SessionType::Drama,
                "Bring stories to life through creative storytelling and fun dramatic activities.",
                "Costume props included",
                "$20",
            ),
            Session::new(
                4,
                "Nature Exploration Adventure",
                date!(2024 - 09 - 05),
                "9:00 AM - 11:30 AM",
                12,
                16,
                "5-11 years",
                SessionType::Nature,
                "Discover the outdoors with nature scavenger hunts and outdoor learning activities.",
                "Weather-appropriate clothing recommended",
                "$28",
            ),
        ];
    }

    /// The compiled-in collections. Stands in for a database.
    #[derive(Default)]
    pub struct StaticLibrary;

    impl StaticLibrary {
        pub fn new() -> Self {
            StaticLibrary
        }
    }

    impl super::Library for StaticLibrary {
        fn worksheets(&self) -> BoxFuture<Result<Vec<Resource>, HubError>> {
            async move { Ok(WORKSHEETS.clone()) }.boxed()
        }

        fn coloring_sheets(&self) -> BoxFuture<Result<Vec<Resource>, HubError>> {
            async move { Ok(COLORING_SHEETS.clone()) }.boxed()
        }

        fn categories(&self) -> BoxFuture<Result<Vec<CategoryEntry>, HubError>> {
            async move { Ok(CATEGORIES.clone()) }.boxed()
        }

        fn sessions(&self) -> BoxFuture<Result<Vec<Session>, HubError>> {
            async move { Ok(SESSIONS.clone()) }.boxed()
        }

        fn resource(
            &self,
            kind: ResourceKind,
            id: Id,
        ) -> BoxFuture<Result<Option<Resource>, HubError>> {
            let collection = match kind {
                ResourceKind::Worksheet => &*WORKSHEETS,
                ResourceKind::ColoringSheet => &*COLORING_SHEETS,
            };
            let found = collection.iter().find(|r| r.id() == id).cloned();

            async move { Ok(found) }.boxed()
        }
    }

}
