use serde::Serialize;
use url::Url;

use crate::catalog::{CategoryEntry, Id, Resource, ResourceKind};
use crate::pages::{BookingInfo, PageMeta};
use crate::scheduling::{AvailabilityTier, Session, SessionType};
use crate::urls::Urls;

/// The number of stars a rating is drawn out of.
const MAX_RATING: u8 = 5;

/// The catalog page document: the filter control's options plus the
/// two tab panels computed from the current search and category.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogPage {
    pub(crate) meta: PageMeta,
    pub(crate) categories: Vec<CategoryEntry>,
    pub(crate) worksheets: TabPanel,
    pub(crate) coloring_sheets: TabPanel,
}

impl CatalogPage {
    pub fn new(
        meta: PageMeta,
        categories: Vec<CategoryEntry>,
        worksheets: Vec<Resource>,
        coloring_sheets: Vec<Resource>,
        urls: &Urls,
    ) -> Self {
        CatalogPage {
            meta,
            categories,
            worksheets: TabPanel::new(ResourceKind::Worksheet, worksheets, urls),
            coloring_sheets: TabPanel::new(ResourceKind::ColoringSheet, coloring_sheets, urls),
        }
    }
}

/// One tab panel: a labeled, counted grid of cards, or an empty-state
/// placeholder when nothing matched the filter.
#[derive(Clone, Debug, Serialize)]
pub struct TabPanel {
    /// The tab label, count included ("Worksheets (4)").
    pub(crate) label: String,

    pub(crate) count: usize,

    pub(crate) cards: Vec<ResourceCard>,

    /// Placeholder message, present only when `cards` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) empty_state: Option<String>,
}

impl TabPanel {
    pub fn new(kind: ResourceKind, resources: Vec<Resource>, urls: &Urls) -> Self {
        let cards: Vec<ResourceCard> = resources
            .iter()
            .map(|r| ResourceCard::new(kind, r, urls))
            .collect();
        let count = cards.len();

        let empty_state = if cards.is_empty() {
            Some(kind.empty_state().to_owned())
        } else {
            None
        };

        TabPanel {
            label: format!("{} ({})", kind.tab_title(), count),
            count,
            cards,
            empty_state,
        }
    }
}

/// A single card in a tab panel.
#[derive(Clone, Debug, Serialize)]
pub struct ResourceCard {
    pub(crate) id: Id,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) rating: u8,

    /// The rating drawn as star glyphs.
    pub(crate) stars: String,

    /// The age-group and tier badges, in display order.
    pub(crate) badges: Vec<String>,

    /// The download count, as displayed ("1,250 downloads").
    pub(crate) downloads: String,

    pub(crate) download_url: Url,

    /// All resources are served as PDFs.
    pub(crate) media_type: String,
}

impl ResourceCard {
    pub fn new(kind: ResourceKind, resource: &Resource, urls: &Urls) -> Self {
        ResourceCard {
            id: resource.id,
            title: resource.title.clone(),
            description: resource.description.clone(),
            rating: resource.rating,
            stars: stars(resource.rating),
            badges: vec![resource.age_group.clone(), resource.tier.label().to_owned()],
            downloads: format_downloads(resource.downloads),
            download_url: urls.resource(kind, resource.id),
            media_type: mime::APPLICATION_PDF.to_string(),
        }
    }
}

/// The scheduling page document.
#[derive(Clone, Debug, Serialize)]
pub struct SchedulingPage {
    pub(crate) meta: PageMeta,
    pub(crate) session_types: Vec<SessionTypeBadge>,
    pub(crate) sessions: Vec<SessionCard>,
    pub(crate) booking_info: BookingInfo,
}

impl SchedulingPage {
    pub fn new(meta: PageMeta, sessions: Vec<Session>, booking_info: BookingInfo) -> Self {
        SchedulingPage {
            meta,
            session_types: SessionType::all()
                .iter()
                .map(|&t| SessionTypeBadge {
                    session_type: t,
                    color: t.color(),
                })
                .collect(),
            sessions: sessions.iter().map(SessionCard::new).collect(),
            booking_info,
        }
    }
}

/// One entry in the session-type legend.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SessionTypeBadge {
    #[serde(rename = "type")]
    pub(crate) session_type: SessionType,
    pub(crate) color: &'static str,
}

/// A single session card with its derived availability state.
#[derive(Clone, Debug, Serialize)]
pub struct SessionCard {
    #[serde(flatten)]
    pub(crate) session: Session,

    /// The date spelled out ("Sunday, August 25, 2024").
    pub(crate) long_date: String,

    /// The fill label ("8/12 spots filled").
    pub(crate) spots: String,

    pub(crate) availability: AvailabilityTier,

    pub(crate) availability_color: &'static str,

    pub(crate) type_color: &'static str,

    pub(crate) booking: BookingAction,
}

impl SessionCard {
    pub fn new(session: &Session) -> Self {
        let availability = session.availability();

        SessionCard {
            long_date: session.long_date(),
            spots: format!(
                "{}/{} spots filled",
                session.booked_spots, session.capacity
            ),
            availability,
            availability_color: availability.color(),
            type_color: session.session_type.color(),
            booking: BookingAction::new(session),
            session: session.clone(),
        }
    }
}

/// The book button's state. Clicking it mutates nothing; booking is
/// out of scope until a real backend exists.
#[derive(Clone, Debug, Serialize)]
pub struct BookingAction {
    pub(crate) enabled: bool,
    pub(crate) label: &'static str,
}

impl BookingAction {
    fn new(session: &Session) -> Self {
        if session.can_book() {
            BookingAction {
                enabled: true,
                label: "Book Now",
            }
        } else {
            BookingAction {
                enabled: false,
                label: "Full",
            }
        }
    }
}

/// Draws a 1–5 rating as filled and hollow stars.
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));

    let mut out = String::new();
    out.extend(std::iter::repeat('★').take(filled));
    out.extend(std::iter::repeat('☆').take(usize::from(MAX_RATING) - filled));
    out
}

/// Formats a download count with thousands separators, the way the
/// cards display it.
fn format_downloads(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out.push_str(" downloads");
    out
}
