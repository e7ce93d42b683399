//! User interface layer for Rove
//!
//! Everything here is a pure function of the session identity: the theme is
//! derived from the [`storage::ExperienceMode`], and the main navigator only
//! mounts once both the mode and the [`storage::AccountKind`] are known.
//!
//! Two modes are supported:
//! - Project Green - cool blue-gray palette (#B7CBDF)
//! - Project Thread - soft rose palette (#EEBECE)
//!
//! # Modules
//!
//! - [`theme`] - Theme resolver and color palettes
//! - [`tokens`] - Design tokens (spacing, radius, tab bar metrics)
//! - [`icons`] - Tab bar icon lookups
//! - [`navigation`] - Main tab navigator and route validation
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Destination, MainNavigator, RouteParams};
//!
//! let nav = MainNavigator::mount(&RouteParams::new("green", "individual")).unwrap();
//! assert_eq!(nav.screens().len(), 6);
//! assert_eq!(nav.focused(), Destination::Feed);
//!
//! assert!(MainNavigator::mount(&RouteParams::default()).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod icons;
pub mod navigation;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    base_theme, resolve, resolve_shared, BorderRadius, Color, FontStack, Spacing, ThemeColors,
    ThemeConfig, ThemeFonts,
};

pub use tokens::{radius, spacing, tab_bar};

pub use icons::TabIcon;

pub use navigation::{
    Destination, MainNavigator, MountToken, MountedScreen, NavigationError, RouteParams,
    ScreenProps, TabBarStyle, TabItem,
};
