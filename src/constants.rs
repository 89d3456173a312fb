//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the backend API (the service the page proxies to)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Path of the single data endpoint, relative to the base URL
pub const API_DATA_PATH: &str = "/api/data";

/// Fallback shown when the fetch failed or returned no payload
pub const NO_DATA_MESSAGE: &str = "No data available from API";

/// Application name
pub const APP_NAME: &str = "East End";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hero section copy
pub const HERO_TITLE: &str = "Welcome to East End";
pub const HERO_SUBTITLE: &str = "Experience the perfect blend of modern technology and \
seamless user experience with our terminal-native platform.";

/// Feature cards: (icon, title, description)
pub const FEATURES: &[(&str, &str, &str)] = &[
    (
        "[>]",
        "Terminal Native",
        "Rendered with Ratatui and optimized for performance",
    ),
    (
        "[#]",
        "Type-Safe Core",
        "Strongly typed fetch state with a single transition",
    ),
    (
        "[~]",
        "Live API Data",
        "Seamless backend communication and data fetching",
    ),
];

/// Spinner frames for the indefinite loading indicator
pub const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];
