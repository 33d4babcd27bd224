use serde::Serialize;

/// The title and description a page renders for discovery.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PageMeta {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

impl PageMeta {
    const fn new(title: &'static str, description: &'static str) -> Self {
        PageMeta { title, description }
    }
}

pub fn home_meta() -> PageMeta {
    PageMeta::new(
        "Creative Learning Hub - Independent Teaching & Resources",
        "Discover engaging worksheets, coloring sheets, and online classes designed to make learning fun and creative.",
    )
}

pub fn class_content_meta() -> PageMeta {
    PageMeta::new(
        "Class Content & Resources - Creative Learning Hub",
        "Browse our collection of educational worksheets, coloring sheets, and learning resources for all ages.",
    )
}

pub fn about_meta() -> PageMeta {
    PageMeta::new(
        "About Me - Creative Learning Hub",
        "Learn about my passion for education and how I create engaging learning experiences for children.",
    )
}

pub fn contact_meta() -> PageMeta {
    PageMeta::new(
        "Contact Me - Creative Learning Hub",
        "Get in touch with questions, suggestions, or to discuss custom educational resources for your child.",
    )
}

pub fn scheduling_meta() -> PageMeta {
    PageMeta::new(
        "Play & Craft Date Scheduling - Creative Learning Hub",
        "Join our interactive play and craft sessions designed to inspire creativity, learning, and fun!",
    )
}

pub fn not_found_meta() -> PageMeta {
    PageMeta::new(
        "Page Not Found - Creative Learning Hub",
        "The page you are looking for does not exist.",
    )
}

/// A titled blurb used across the static pages.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Blurb {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

impl Blurb {
    const fn new(title: &'static str, description: &'static str) -> Self {
        Blurb { title, description }
    }
}

/// A credential listed on the about page.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Credential {
    pub(crate) title: &'static str,
    pub(crate) institution: &'static str,
    pub(crate) year: &'static str,
    pub(crate) description: &'static str,
}

/// A way of getting in touch, listed beside the contact form.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ContactChannel {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) contact: &'static str,
}

/// A question and answer on the contact page.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FaqItem {
    pub(crate) question: &'static str,
    pub(crate) answer: &'static str,
}

/// The home page document.
#[derive(Clone, Debug, Serialize)]
pub struct HomePage {
    pub(crate) meta: PageMeta,
    pub(crate) features: Vec<Blurb>,
    pub(crate) testimonials: Vec<Testimonial>,
}

/// A testimonial shown on the home page.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub(crate) name: &'static str,
    pub(crate) text: &'static str,
    pub(crate) rating: u8,
}

pub fn home_page() -> HomePage {
    HomePage {
        meta: home_meta(),
        features: vec![
            Blurb::new(
                "Educational Worksheets",
                "Engaging worksheets designed to make learning fun and interactive for all ages.",
            ),
            Blurb::new(
                "Creative Coloring Sheets",
                "Beautiful coloring pages that spark creativity and provide hours of entertainment.",
            ),
            Blurb::new(
                "Instant Downloads",
                "Get immediate access to all resources with easy-to-download PDF formats.",
            ),
            Blurb::new(
                "Play & Craft Dates",
                "Join our scheduled play and craft sessions for hands-on learning experiences.",
            ),
        ],
        testimonials: vec![
            Testimonial {
                name: "Sarah M.",
                text: "The worksheets are amazing! My kids love them and I can see real improvement in their learning.",
                rating: 5,
            },
            Testimonial {
                name: "Mike D.",
                text: "Great resources for homeschooling. The variety and quality are outstanding.",
                rating: 5,
            },
            Testimonial {
                name: "Lisa K.",
                text: "The craft dates are so much fun! My daughter looks forward to them every week.",
                rating: 5,
            },
        ],
    }
}

/// The about page document.
#[derive(Clone, Debug, Serialize)]
pub struct AboutPage {
    pub(crate) meta: PageMeta,
    pub(crate) qualifications: Vec<Credential>,
    pub(crate) specialties: Vec<Blurb>,
    pub(crate) achievements: Vec<&'static str>,
}

pub fn about_page() -> AboutPage {
    AboutPage {
        meta: about_meta(),
        qualifications: vec![
            Credential {
                title: "Bachelor of Education",
                institution: "University of Education",
                year: "2018",
                description: "Specialized in Elementary Education with focus on creative learning methods",
            },
            Credential {
                title: "Child Development Certificate",
                institution: "Child Development Institute",
                year: "2019",
                description: "Advanced training in age-appropriate learning strategies",
            },
            Credential {
                title: "Art Therapy Certification",
                institution: "Creative Arts Academy",
                year: "2020",
                description: "Combining art and learning for therapeutic educational experiences",
            },
        ],
        specialties: vec![
            Blurb::new(
                "Interactive Learning",
                "Creating worksheets that engage multiple learning styles and keep children excited about education.",
            ),
            Blurb::new(
                "Creative Problem Solving",
                "Teaching children to think outside the box and approach challenges with creativity and confidence.",
            ),
            Blurb::new(
                "Social Learning",
                "Facilitating group activities and play dates that build social skills while learning.",
            ),
            Blurb::new(
                "Emotional Development",
                "Supporting children's emotional growth through art, play, and meaningful conversations.",
            ),
        ],
        achievements: vec![
            "500+ Happy Students",
            "1000+ Resources Created",
            "50+ Successful Workshops",
            "5 Years Teaching Experience",
        ],
    }
}

/// The contact page document (the form itself lives on the client).
#[derive(Clone, Debug, Serialize)]
pub struct ContactPage {
    pub(crate) meta: PageMeta,
    pub(crate) contact_info: Vec<ContactChannel>,
    pub(crate) faq: Vec<FaqItem>,
}

pub fn contact_page() -> ContactPage {
    ContactPage {
        meta: contact_meta(),
        contact_info: vec![
            ContactChannel {
                title: "Email Me",
                description: "Send me a message anytime",
                contact: "hello@creativelearninghub.com",
            },
            ContactChannel {
                title: "Quick Response",
                description: "I typically respond within",
                contact: "24 hours",
            },
            ContactChannel {
                title: "Best Times to Reach Me",
                description: "Monday - Friday",
                contact: "9 AM - 5 PM EST",
            },
        ],
        faq: vec![
            FaqItem {
                question: "How do I download the worksheets?",
                answer: "After browsing our Class Content section, simply click the download button on any resource. All materials are provided as PDF files for easy printing.",
            },
            FaqItem {
                question: "Can you create custom worksheets for my child?",
                answer: "Absolutely! I love creating personalized learning materials. Contact me with your specific needs, your child age, and learning goals.",
            },
            FaqItem {
                question: "Are the materials suitable for homeschooling?",
                answer: "Yes! All resources are designed to be parent-friendly with clear instructions and can easily be incorporated into any homeschool curriculum.",
            },
            FaqItem {
                question: "How often do you add new content?",
                answer: "I add new worksheets and coloring sheets weekly. Follow along to stay updated on the latest additions to our resource library.",
            },
        ],
    }
}

/// The lists shown under "Booking Information" on the scheduling page.
#[derive(Clone, Debug, Serialize)]
pub struct BookingInfo {
    pub(crate) what_to_expect: Vec<&'static str>,
    pub(crate) booking_policy: Vec<&'static str>,
}

pub fn booking_info() -> BookingInfo {
    BookingInfo {
        what_to_expect: vec![
            "Interactive, hands-on learning activities",
            "Age-appropriate content and materials",
            "Small group sizes for personalized attention",
            "Safe, supervised environment",
        ],
        booking_policy: vec![
            "Payment required to secure spot",
            "24-hour cancellation policy",
            "Makeup sessions available for illness",
            "Parent/guardian supervision required for ages 4-5",
        ],
    }
}

/// The not-found fallback document.
#[derive(Clone, Debug, Serialize)]
pub struct NotFoundPage {
    pub(crate) meta: PageMeta,
    pub(crate) path: String,
}

pub fn not_found_page(path: impl Into<String>) -> NotFoundPage {
    NotFoundPage {
        meta: not_found_meta(),
        path: path.into(),
    }
}

/// The kind of identifier the catch-all route recognizes in a path
/// segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Profile,
    Note,
    Address,
    Event,
}

/// Classifies a catch-all path segment by its identifier prefix.
/// Anything unrecognized falls through to the not-found page.
pub fn classify_identifier(segment: &str) -> Option<IdentifierKind> {
    if segment.starts_with("npub1") || segment.starts_with("nprofile1") {
        Some(IdentifierKind::Profile)
    } else if segment.starts_with("note1") {
        Some(IdentifierKind::Note)
    } else if segment.starts_with("naddr1") {
        Some(IdentifierKind::Address)
    } else if segment.starts_with("nevent1") {
        Some(IdentifierKind::Event)
    } else {
        None
    }
}

/// The identifier-lookup page document.
#[derive(Clone, Debug, Serialize)]
pub struct LookupPage {
    pub(crate) identifier: String,
    pub(crate) kind: IdentifierKind,
}

pub fn lookup_page(identifier: impl Into<String>, kind: IdentifierKind) -> LookupPage {
    LookupPage {
        identifier: identifier.into(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prefixes_are_recognized() {
        assert_eq!(
            classify_identifier("npub1sn0wdenkukak0d9dfczzeacvhkrgz92ak56egt7vdgzn8pv2wfqqhrjdv9"),
            Some(IdentifierKind::Profile)
        );
        assert_eq!(
            classify_identifier("nprofile1qqsrhuxx8l9ex335q7he0f09aej04zpazpl0ne2cgukyawd24mayt8g"),
            Some(IdentifierKind::Profile)
        );
        assert_eq!(classify_identifier("note1abcdef"), Some(IdentifierKind::Note));
        assert_eq!(classify_identifier("naddr1xyz"), Some(IdentifierKind::Address));
        assert_eq!(classify_identifier("nevent1xyz"), Some(IdentifierKind::Event));
    }

    #[test]
    fn arbitrary_segments_are_not_identifiers() {
        assert_eq!(classify_identifier("pricing"), None);
        assert_eq!(classify_identifier("note"), None);
        assert_eq!(classify_identifier(""), None);
    }

    #[test]
    fn page_titles_match_their_routes() {
        assert_eq!(
            home_meta().title,
            "Creative Learning Hub - Independent Teaching & Resources"
        );
        assert_eq!(
            class_content_meta().title,
            "Class Content & Resources - Creative Learning Hub"
        );
        assert_eq!(about_meta().title, "About Me - Creative Learning Hub");
        assert_eq!(contact_meta().title, "Contact Me - Creative Learning Hub");
    }

    #[test]
    fn static_page_documents_are_populated() {
        assert_eq!(home_page().features.len(), 4);
        assert_eq!(home_page().testimonials.len(), 3);
        assert_eq!(about_page().qualifications.len(), 3);
        assert_eq!(about_page().specialties.len(), 4);
        assert_eq!(contact_page().contact_info.len(), 3);
        assert_eq!(contact_page().faq.len(), 4);
        assert_eq!(booking_info().what_to_expect.len(), 4);
        assert_eq!(booking_info().booking_policy.len(), 4);
    }
}
