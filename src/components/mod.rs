//! UI components for the Mosjid Al Fahad site.
//!
//! One module per section of the page, plus the small shared pieces
//! (icons, markdown, toast, donation banner).

mod about;
mod donate_cta;
mod events;
mod footer;
mod gallery;
mod hero;
mod icon;
mod markdown;
mod nav_header;
mod prayer_times;
mod scroll_top;
mod search_overlay;
mod services;
mod toast;

pub use about::AboutSection;
pub use donate_cta::DonateCta;
pub use events::EventsSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use icon::{Icon, MosqueLogo};
pub use markdown::MarkdownRenderer;
pub use nav_header::{HomeSection, NavHeader};
pub use prayer_times::PrayerTimesSection;
pub use scroll_top::ScrollTopButton;
pub use search_overlay::SearchOverlay;
pub use services::ServicesSection;
pub use toast::InquiryToast;
