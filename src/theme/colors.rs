//! Color constants for the Mosjid Al Fahad palette
//!
//! Emerald and gold over warm stone neutrals.

#![allow(dead_code)]

// === EMERALD (Brand, Headers, Prayer Section) ===
pub const EMERALD_DEEP: &str = "#064e3b";
pub const EMERALD: &str = "#065f46";
pub const EMERALD_SOFT: &str = "#059669";
pub const EMERALD_TINT: &str = "#d1fae5";

// === GOLD (Accents, Calls to Action) ===
pub const GOLD: &str = "#d97706";
pub const GOLD_BRIGHT: &str = "#f59e0b";
pub const GOLD_TINT: &str = "#fef3c7";

// === STONE (Backgrounds) ===
pub const CREAM: &str = "#fafaf9";
pub const SAND: &str = "#f5f5f4";
pub const INK: &str = "#1c1917";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#292524";
pub const TEXT_SECONDARY: &str = "#57534e";
pub const TEXT_MUTED: &str = "#a8a29e";
pub const TEXT_ON_DARK: &str = "rgba(255, 255, 255, 0.92)";

// === SEMANTIC ===
pub const DANGER: &str = "#dc2626";
pub const SUCCESS: &str = "#16a34a";
