//! Theme for the Mosjid Al Fahad desktop app.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
