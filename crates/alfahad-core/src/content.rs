//! Compiled-in site content for Mosjid Al Fahad
//!
//! Everything the app displays lives here: the daily prayer schedule,
//! the services catalog, upcoming events with their long-form details,
//! and the photo gallery. Nothing is loaded from disk or network; the
//! prayer schedule is the only piece the user can replace at runtime
//! (wholesale, via the edit flow), and edits live in process memory only.

/// A named daily prayer with its display time.
///
/// `time` keeps the human-readable "HH:MM AM/PM" form it is shown and
/// edited in; the scheduler parses it at the point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTime {
    /// Prayer name (e.g. "Fajr")
    pub name: String,
    /// Display time in "HH:MM AM/PM" form
    pub time: String,
    /// Short devotional description shown in the detail dialog
    pub description: String,
}

impl PrayerTime {
    pub fn new(
        name: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            description: description.into(),
        }
    }
}

/// A service the mosque offers (classes, support programs, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Stable slug used as the element key
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon name resolved by the UI (BookOpen fallback)
    pub icon: String,
    pub image_url: String,
}

/// An upcoming event shown on the events board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Stable slug, also the key into [`event_details`]
    pub id: String,
    pub title: String,
    /// Display date (e.g. "Feb 27, 2026"); purely presentational
    pub date: String,
    pub description: String,
    pub image_url: String,
}

/// Category a gallery photo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Services,
    Events,
    Architecture,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Services => "Services",
            GalleryCategory::Events => "Events",
            GalleryCategory::Architecture => "Architecture",
        }
    }

    pub fn all() -> &'static [GalleryCategory] {
        &[
            GalleryCategory::Services,
            GalleryCategory::Events,
            GalleryCategory::Architecture,
        ]
    }
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photo in the gallery section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    pub image_url: String,
    pub category: GalleryCategory,
}

/// The built-in daily prayer schedule (eight entries).
///
/// Sunrise and Sunset are solar markers rather than congregational
/// prayers, and Jummah replaces Dhuhr on Fridays only; all three are
/// listed for display but excluded from next-prayer rotation (see
/// [`crate::schedule`]).
pub fn prayer_schedule() -> Vec<PrayerTime> {
    vec![
        PrayerTime::new(
            "Fajr",
            "05:15 AM",
            "The dawn prayer, performed before sunrise. It signifies the beginning of the day and spiritual awakening.",
        ),
        PrayerTime::new(
            "Sunrise",
            "06:45 AM",
            "The time when the sun begins to appear. While not a prayer itself, it marks the end of the Fajr prayer time.",
        ),
        PrayerTime::new(
            "Dhuhr",
            "12:30 PM",
            "The noon prayer, performed after the sun passes its zenith. It provides a spiritual break during the busy workday.",
        ),
        PrayerTime::new(
            "Asr",
            "03:45 PM",
            "The afternoon prayer. It is a time for reflection and gratitude as the day progresses towards evening.",
        ),
        PrayerTime::new(
            "Sunset",
            "06:15 PM",
            "The time when the sun disappears below the horizon, marking the beginning of the Maghrib prayer time.",
        ),
        PrayerTime::new(
            "Maghrib",
            "06:20 PM",
            "The evening prayer, performed just after sunset. It is often a time for families to gather and break their fast.",
        ),
        PrayerTime::new(
            "Isha",
            "07:45 PM",
            "The night prayer, performed after twilight has disappeared. It is the final prayer of the day before rest.",
        ),
        PrayerTime::new(
            "Jummah",
            "01:15 PM",
            "The Friday congregational prayer. It replaces Dhuhr on Fridays and includes a sermon (Khutbah) to guide the community.",
        ),
    ]
}

/// The services catalog (five entries).
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "quran-classes".to_string(),
            title: "Quran Classes".to_string(),
            description: "Structured learning for all ages to master Tajweed and Hifz. Our qualified instructors provide personalized guidance to help students connect deeply with the Holy Quran, ensuring correct pronunciation and memorization techniques.".to_string(),
            icon: "BookOpen".to_string(),
            image_url: "https://picsum.photos/seed/quran/800/600".to_string(),
        },
        Service {
            id: "community-support".to_string(),
            title: "Community Support".to_string(),
            description: "Providing counseling, financial aid, and moral support to families in our neighborhood. We offer a range of programs designed to help those facing hardships, ensuring that no one in our community feels alone or unsupported.".to_string(),
            icon: "Heart".to_string(),
            image_url: "https://picsum.photos/seed/support/800/600".to_string(),
        },
        Service {
            id: "social-activities".to_string(),
            title: "Social Activities".to_string(),
            description: "Youth programs and community gatherings to strengthen bonds. From sports tournaments to educational seminars, we provide a vibrant space for social interaction and growth within an Islamic framework.".to_string(),
            icon: "Users".to_string(),
            image_url: "https://picsum.photos/seed/social/800/600".to_string(),
        },
        Service {
            id: "maktab-classes".to_string(),
            title: "Maktab Classes".to_string(),
            description: "After-school Islamic education for children focusing on basic tenets of faith, history, and ethics. We aim to nurture a strong Islamic identity in the younger generation through engaging and age-appropriate lessons.".to_string(),
            icon: "BookOpen".to_string(),
            image_url: "https://picsum.photos/seed/maktab/800/600".to_string(),
        },
        Service {
            id: "food-distribution".to_string(),
            title: "Friday Food Distribution".to_string(),
            description: "Weekly meals shared with those in need after Jummah. Our volunteers prepare and distribute nutritious food, embodying the spirit of charity and brotherhood that defines our faith.".to_string(),
            icon: "Utensils".to_string(),
            image_url: "https://picsum.photos/seed/food/800/600".to_string(),
        },
    ]
}

/// The upcoming-events board (three entries).
pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event {
            id: "khutbah-patience".to_string(),
            title: "Friday Khutbah: Patience in Trials".to_string(),
            date: "Feb 27, 2026".to_string(),
            description: "Join us for an inspiring talk on navigating life's challenges.".to_string(),
            image_url: "https://picsum.photos/seed/khutbah/800/600".to_string(),
        },
        Event {
            id: "tajweed-workshop".to_string(),
            title: "Quran Tajweed Workshop".to_string(),
            date: "Mar 05, 2026".to_string(),
            description: "A 3-day intensive workshop for beginners and intermediates.".to_string(),
            image_url: "https://picsum.photos/seed/tajweed/800/600".to_string(),
        },
        Event {
            id: "community-iftar".to_string(),
            title: "Community Iftar Dinner".to_string(),
            date: "Mar 15, 2026".to_string(),
            description: "Breaking fast together as one community. All are welcome.".to_string(),
            image_url: "https://picsum.photos/seed/iftar/800/600".to_string(),
        },
    ]
}

/// Long-form detail text (markdown) for an event, keyed by event id.
pub fn event_details(id: &str) -> Option<&'static str> {
    match id {
        "khutbah-patience" => Some(
            "This week's Khutbah will be delivered by Sheikh Ahmad, focusing on the Quranic \
             perspective of **Sabr** (patience). We will explore how the Prophets handled \
             adversity and how we can apply these lessons to our modern lives. The session \
             will include a Q&A after the prayer.",
        ),
        "tajweed-workshop" => Some(
            "Master the art of Quranic recitation. This workshop covers the fundamental rules \
             of Tajweed, including articulation points (*Makharij*) and characteristics of \
             letters (*Sifaat*). Participants will receive a digital handbook and personalized \
             feedback from our qualified instructors.",
        ),
        "community-iftar" => Some(
            "Join us for a warm evening of fellowship and food. The menu includes traditional \
             dishes from around the Muslim world. We will start with dates and water at sunset, \
             followed by Maghrib prayer and a full buffet dinner. Please RSVP for catering \
             purposes.",
        ),
        _ => None,
    }
}

/// The photo gallery (seven entries).
pub fn gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            title: "Main Prayer Hall".to_string(),
            image_url: "https://picsum.photos/seed/mosque1/800/600".to_string(),
            category: GalleryCategory::Architecture,
        },
        GalleryItem {
            title: "Quran Class".to_string(),
            image_url: "https://picsum.photos/seed/mosque2/800/600".to_string(),
            category: GalleryCategory::Services,
        },
        GalleryItem {
            title: "Community Service".to_string(),
            image_url: "https://picsum.photos/seed/mosque3/800/600".to_string(),
            category: GalleryCategory::Services,
        },
        GalleryItem {
            title: "Youth Program".to_string(),
            image_url: "https://picsum.photos/seed/mosque4/800/600".to_string(),
            category: GalleryCategory::Events,
        },
        GalleryItem {
            title: "Eid Celebration".to_string(),
            image_url: "https://picsum.photos/seed/mosque5/800/600".to_string(),
            category: GalleryCategory::Events,
        },
        GalleryItem {
            title: "Garden Area".to_string(),
            image_url: "https://picsum.photos/seed/mosque6/800/600".to_string(),
            category: GalleryCategory::Architecture,
        },
        GalleryItem {
            title: "Maktab".to_string(),
            image_url: "https://picsum.photos/seed/mosque7/800/600".to_string(),
            category: GalleryCategory::Services,
        },
    ]
}

/// The "Our Story" prose for the about section (markdown).
pub fn about_story() -> &'static str {
    "Mosjid Al Fahad stands as a beacon of spiritual guidance and community strength. \
     More than just a place of prayer, it is a sanctuary where individuals from all walks \
     of life come together to find peace and purpose.\n\n\
     Our mission is to foster an environment of learning, compassion, and unity. Through \
     our various programs and services, we strive to support our community, nurture the \
     youth, and provide a welcoming space for all who seek to connect with their faith \
     and fellow neighbors."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_has_eight_entries() {
        let schedule = prayer_schedule();
        assert_eq!(schedule.len(), 8);

        let names: Vec<&str> = schedule.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Fajr", "Sunrise", "Dhuhr", "Asr", "Sunset", "Maghrib", "Isha", "Jummah"]
        );
    }

    #[test]
    fn test_every_event_has_details() {
        for event in upcoming_events() {
            assert!(
                event_details(&event.id).is_some(),
                "missing details for {}",
                event.id
            );
        }
    }

    #[test]
    fn test_unknown_event_has_no_details() {
        assert!(event_details("annual-bake-sale").is_none());
    }

    #[test]
    fn test_gallery_covers_every_category() {
        let gallery = gallery();
        assert_eq!(gallery.len(), 7);
        for category in GalleryCategory::all() {
            assert!(
                gallery.iter().any(|item| item.category == *category),
                "no gallery item in {category}"
            );
        }
    }

    #[test]
    fn test_category_display_matches_as_str() {
        for category in GalleryCategory::all() {
            assert_eq!(format!("{category}"), category.as_str());
        }
    }
}
