use serde::Serialize;
use time::macros::format_description;
use time::Date;

/// An ID in the session registry.
pub type Id = u32;

/// The fill-level classification derived from booked spots against
/// capacity. Drives the availability color on the scheduling page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityTier {
    Low,
    Medium,
    High,
}

impl AvailabilityTier {
    /// The display color for this tier. A high fill renders as a
    /// warning color.
    pub fn color(self) -> &'static str {
        match self {
            AvailabilityTier::Low => "green",
            AvailabilityTier::Medium => "yellow",
            AvailabilityTier::High => "red",
        }
    }
}

/// Classifies how full a session is: at least 80% booked is high fill,
/// 60–79% medium, anything below low.
pub fn availability_tier(booked: u16, capacity: u16) -> AvailabilityTier {
    if capacity == 0 {
        // a session nobody can book renders as full
        return AvailabilityTier::High;
    }

    let percentage = f64::from(booked) / f64::from(capacity) * 100.0;

    if percentage >= 80.0 {
        AvailabilityTier::High
    } else if percentage >= 60.0 {
        AvailabilityTier::Medium
    } else {
        AvailabilityTier::Low
    }
}

/// The kind of activity a session offers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SessionType {
    Craft,
    Science,
    Drama,
    Nature,
}

impl SessionType {
    /// The badge color for this type in the scheduling legend.
    pub fn color(self) -> &'static str {
        match self {
            SessionType::Craft => "purple",
            SessionType::Science => "green",
            SessionType::Drama => "blue",
            SessionType::Nature => "yellow",
        }
    }

    /// Every type shown in the legend, in display order.
    pub fn all() -> &'static [SessionType] {
        &[
            SessionType::Craft,
            SessionType::Science,
            SessionType::Drama,
            SessionType::Nature,
        ]
    }
}

/// A single bookable session. Defined at process start, never mutated;
/// the booking action is a display-only stub.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    /// The ID of the session.
    pub(crate) id: Id,

    pub(crate) title: String,

    /// The calendar date it takes place on.
    pub(crate) date: Date,

    /// The time window, as displayed ("10:00 AM - 12:00 PM").
    pub(crate) time_range: String,

    /// The number of spots already taken. Never exceeds `capacity`.
    pub(crate) booked_spots: u16,

    pub(crate) capacity: u16,

    pub(crate) age_range: String,

    #[serde(rename = "type")]
    pub(crate) session_type: SessionType,

    pub(crate) description: String,

    pub(crate) materials_note: String,

    /// The price, as displayed ("$25").
    pub(crate) price: String,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Id,
        title: impl Into<String>,
        date: Date,
        time_range: impl Into<String>,
        booked_spots: u16,
        capacity: u16,
        age_range: impl Into<String>,
        session_type: SessionType,
        description: impl Into<String>,
        materials_note: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Session {
            id,
            title: title.into(),
            date,
            time_range: time_range.into(),
            booked_spots,
            capacity,
            age_range: age_range.into(),
            session_type,
            description: description.into(),
            materials_note: materials_note.into(),
            price: price.into(),
        }
    }

    /// Whether every spot is taken.
    pub fn is_full(&self) -> bool {
        self.booked_spots >= self.capacity
    }

    /// Whether the booking action is enabled.
    pub fn can_book(&self) -> bool {
        !self.is_full()
    }

    pub fn availability(&self) -> AvailabilityTier {
        availability_tier(self.booked_spots, self.capacity)
    }

    /// The date the way the scheduling page renders it, e.g.
    /// "Sunday, August 25, 2024".
    pub fn long_date(&self) -> String {
        let format = format_description!("[weekday], [month repr:long] [day padding:none], [year]");

        self.date.format(&format).expect("format session date")
    }
}
