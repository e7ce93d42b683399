//! Theme resolver for Rove
//!
//! Each [`ExperienceMode`] owns one fixed palette. [`resolve`] turns a mode
//! into an immutable [`ThemeConfig`], widening every font slot into a
//! fallback chain so a missing font asset degrades to the system UI font
//! instead of unstyled text.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::resolve;
//! use storage::ExperienceMode;
//!
//! let theme = resolve(ExperienceMode::Thread);
//! assert_eq!(theme.colors.primary, "#EEBECE");
//! assert_eq!(theme.fonts.regular.primary, "Quicksand-Regular");
//! ```

use crate::tokens::{radius, spacing};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use storage::ExperienceMode;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Named color slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Brand color; active tab tint
    pub primary: Color,
    /// Secondary accent
    pub secondary: Color,
    /// Tertiary accent
    pub tertiary: Color,
    /// Screen background
    pub background: Color,
    /// Cards and bars
    pub surface: Color,
    /// Alternate surface
    pub surface_variant: Color,
    /// Content on primary
    pub on_primary: Color,
    /// Content on secondary
    pub on_secondary: Color,
    /// Content on background
    pub on_background: Color,
    /// Content on surface
    pub on_surface: Color,
    /// Borders and dividers
    pub outline: Color,
    /// Shadow color
    pub shadow: Color,
    /// Error state
    pub error: Color,
    /// Warning state
    pub warning: Color,
    /// Success state
    pub success: Color,
}

impl ThemeColors {
    /// All slots with their names, in declaration order
    pub fn slots(&self) -> [(&'static str, &str); 15] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("tertiary", self.tertiary.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("surfaceVariant", self.surface_variant.as_str()),
            ("onPrimary", self.on_primary.as_str()),
            ("onSecondary", self.on_secondary.as_str()),
            ("onBackground", self.on_background.as_str()),
            ("onSurface", self.on_surface.as_str()),
            ("outline", self.outline.as_str()),
            ("shadow", self.shadow.as_str()),
            ("error", self.error.as_str()),
            ("warning", self.warning.as_str()),
            ("success", self.success.as_str()),
        ]
    }
}

// =============================================================================
// Fonts
// =============================================================================

/// Generic families tried after a named font, in order
pub const SYSTEM_FALLBACKS: [&str; 4] =
    ["system font", "-apple-system", "BlinkMacSystemFont", "sans-serif"];

/// Font faces bundled with the app that get a fallback chain
const BUNDLED_FONTS: [&str; 4] =
    ["Quicksand-Regular", "Quicksand-Medium", "Quicksand-Bold", "Quicksand-Light"];

/// Ordered font fallback chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStack {
    /// Preferred font family
    pub primary: String,
    /// Fallback fonts
    pub fallbacks: Vec<String>,
}

impl FontStack {
    /// A stack with a single font and no fallbacks
    pub fn single(primary: impl Into<String>) -> Self {
        Self { primary: primary.into(), fallbacks: Vec::new() }
    }

    /// Widen a stack with the system fallbacks
    ///
    /// Only bundled font faces are widened; anything else passes through
    /// unchanged.
    pub fn with_fallbacks(self) -> Self {
        if !self.fallbacks.is_empty() || !BUNDLED_FONTS.contains(&self.primary.as_str()) {
            return self;
        }
        Self {
            primary: self.primary,
            fallbacks: SYSTEM_FALLBACKS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Iterate fonts in the order they are tried
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.fallbacks.iter().map(String::as_str))
    }

    /// Font-family string with every entry joined by ", "
    pub fn to_css(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

/// Named font slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    /// Body text
    pub regular: FontStack,
    /// Labels and emphasis
    pub medium: FontStack,
    /// Headings
    pub bold: FontStack,
    /// De-emphasized text
    pub light: FontStack,
}

impl ThemeFonts {
    fn quicksand() -> Self {
        Self {
            regular: FontStack::single("Quicksand-Regular"),
            medium: FontStack::single("Quicksand-Medium"),
            bold: FontStack::single("Quicksand-Bold"),
            light: FontStack::single("Quicksand-Light"),
        }
    }

    fn with_fallbacks(self) -> Self {
        Self {
            regular: self.regular.with_fallbacks(),
            medium: self.medium.with_fallbacks(),
            bold: self.bold.with_fallbacks(),
            light: self.light.with_fallbacks(),
        }
    }
}

// =============================================================================
// Scales
// =============================================================================

/// Spacing scale, mirroring [`spacing`]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: spacing::SPACE_XS,
            sm: spacing::SPACE_SM,
            md: spacing::SPACE_MD,
            lg: spacing::SPACE_LG,
            xl: spacing::SPACE_XL,
            xxl: spacing::SPACE_XXL,
        }
    }
}

/// Border radius scale, mirroring [`radius`]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub full: f32,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self { sm: radius::SM, md: radius::MD, lg: radius::LG, full: radius::FULL }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete, immutable theme for one experience mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Mode this theme was resolved for
    pub mode: ExperienceMode,
    /// Color slots
    pub colors: ThemeColors,
    /// Font slots
    pub fonts: ThemeFonts,
    /// Spacing scale
    pub spacing: Spacing,
    /// Border radius scale
    pub border_radius: BorderRadius,
}

fn green_theme() -> ThemeConfig {
    ThemeConfig {
        mode: ExperienceMode::Green,
        colors: ThemeColors {
            primary: "#B7CBDF".into(),
            secondary: "#F9FAFB".into(),
            tertiary: "#8FA8C4".into(),
            background: "#F9FAFB".into(),
            surface: "#FFFFFF".into(),
            surface_variant: "#F1F5F9".into(),
            on_primary: "#FFFFFF".into(),
            on_secondary: "#1F2937".into(),
            on_background: "#1F2937".into(),
            on_surface: "#374151".into(),
            outline: "#E2E8F0".into(),
            shadow: "#000000".into(),
            error: "#EF4444".into(),
            warning: "#F59E0B".into(),
            success: "#10B981".into(),
        },
        fonts: ThemeFonts::quicksand(),
        spacing: Spacing::default(),
        border_radius: BorderRadius::default(),
    }
}

fn thread_theme() -> ThemeConfig {
    ThemeConfig {
        mode: ExperienceMode::Thread,
        colors: ThemeColors {
            primary: "#EEBECE".into(),
            secondary: "#FCF8F9".into(),
            tertiary: "#E8A5C0".into(),
            background: "#FCF8F9".into(),
            surface: "#FFFFFF".into(),
            surface_variant: "#F9F5F6".into(),
            on_primary: "#FFFFFF".into(),
            on_secondary: "#1F2937".into(),
            on_background: "#1F2937".into(),
            on_surface: "#374151".into(),
            outline: "#F3E8EA".into(),
            shadow: "#000000".into(),
            error: "#EF4444".into(),
            warning: "#F59E0B".into(),
            success: "#10B981".into(),
        },
        fonts: ThemeFonts::quicksand(),
        spacing: Spacing::default(),
        border_radius: BorderRadius::default(),
    }
}

// =============================================================================
// Theme Resolver
// =============================================================================

/// The hardcoded palette for a mode, fonts not yet widened
pub fn base_theme(mode: ExperienceMode) -> ThemeConfig {
    match mode {
        ExperienceMode::Green => green_theme(),
        ExperienceMode::Thread => thread_theme(),
    }
}

/// Resolve the theme for a mode
pub fn resolve(mode: ExperienceMode) -> ThemeConfig {
    let base = base_theme(mode);
    ThemeConfig { fonts: base.fonts.with_fallbacks(), ..base }
}

/// Resolve a shared theme, computed at most once per mode
pub fn resolve_shared(mode: ExperienceMode) -> Arc<ThemeConfig> {
    static GREEN: OnceLock<Arc<ThemeConfig>> = OnceLock::new();
    static THREAD: OnceLock<Arc<ThemeConfig>> = OnceLock::new();

    let cell = match mode {
        ExperienceMode::Green => &GREEN,
        ExperienceMode::Thread => &THREAD,
    };
    Arc::clone(cell.get_or_init(|| Arc::new(resolve(mode))))
}
