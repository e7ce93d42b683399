//! Design tokens for Rove
//!
//! Spacing and radius scales shared by both experience modes, plus the
//! fixed tab bar metrics.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 16px - Medium
    pub const SPACE_MD: f32 = 16.0;
    /// 24px - Large
    pub const SPACE_LG: f32 = 24.0;
    /// 32px - Extra large
    pub const SPACE_XL: f32 = 32.0;
    /// 48px - 2x large
    pub const SPACE_XXL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "xxl" => Some(SPACE_XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (16px)
    pub const LG: f32 = 16.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Tab Bar Tokens
// =============================================================================

/// Bottom tab bar metrics
pub mod tab_bar {
    /// Bar height (60px)
    pub const HEIGHT: f32 = 60.0;
    /// Top and bottom padding (8px)
    pub const PADDING_Y: f32 = 8.0;
    /// Label font size (12px)
    pub const LABEL_SIZE: f32 = 12.0;
    /// Gap below the label (4px)
    pub const LABEL_MARGIN_BOTTOM: f32 = 4.0;
    /// Icon size (24px)
    pub const ICON_SIZE: f32 = 24.0;
}
