//! Main app navigation
//!
//! The main navigator mounts a fixed set of tab destinations, each carrying
//! the session identity (experience mode and account kind) and the theme
//! resolved for that mode. It is entered with [`RouteParams`], which are
//! validated up front: a missing or out-of-domain value is a configuration
//! error and nothing is mounted.

use crate::icons::{self, TabIcon};
use crate::theme::{self, Color, FontStack, ThemeConfig};
use crate::tokens::tab_bar;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use storage::{AccountKind, ExperienceMode, SessionParams};
use tracing::{debug, error, info};

// =============================================================================
// Destinations
// =============================================================================

/// Top-level tab destinations, in tab bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Home feed
    Feed,
    /// Search, optionally scoped to an interest
    Search,
    /// Challenges
    Challenges,
    /// Circles (groups)
    Circles,
    /// Rooms
    Rooms,
    /// Own profile
    Profile,
}

impl Destination {
    /// All destinations in tab bar order
    pub fn all() -> [Destination; 6] {
        [
            Destination::Feed,
            Destination::Search,
            Destination::Challenges,
            Destination::Circles,
            Destination::Rooms,
            Destination::Profile,
        ]
    }

    /// Route name
    pub fn name(&self) -> &'static str {
        match self {
            Destination::Feed => "Feed",
            Destination::Search => "Search",
            Destination::Challenges => "Challenges",
            Destination::Circles => "Circles",
            Destination::Rooms => "Rooms",
            Destination::Profile => "Profile",
        }
    }

    /// Tab label; the same in both modes
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Feed => "Home",
            other => other.name(),
        }
    }

    /// Tab icon for a mode and focus state
    pub fn icon(&self, mode: ExperienceMode, focused: bool) -> TabIcon {
        icons::tab_icon(*self, mode, focused)
    }
}

// =============================================================================
// Route parameters
// =============================================================================

/// Configuration error raised when the navigator is entered with bad params
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// One or both parameters were not supplied
    #[error("missing required navigation parameters: experienceType={experience_type:?}, accountType={account_type:?}")]
    MissingParameters {
        /// Supplied experience type, if any
        experience_type: Option<String>,
        /// Supplied account type, if any
        account_type: Option<String>,
    },

    /// Experience type outside {green, thread}
    #[error("invalid experienceType: {0:?}")]
    InvalidExperienceType(String),

    /// Account type outside {individual, entity}
    #[error("invalid accountType: {0:?}")]
    InvalidAccountType(String),
}

/// Untyped entry parameters, as a router would hand them over
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// Wire form of the experience mode
    #[serde(default)]
    pub experience_type: Option<String>,
    /// Wire form of the account kind
    #[serde(default)]
    pub account_type: Option<String>,
}

impl RouteParams {
    /// Build route params from strings
    pub fn new(experience_type: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            experience_type: Some(experience_type.into()),
            account_type: Some(account_type.into()),
        }
    }

    /// Validate into typed session params
    ///
    /// Missing parameters are reported before out-of-domain values, and the
    /// experience type is checked before the account type.
    pub fn validate(&self) -> Result<SessionParams, NavigationError> {
        let (Some(experience), Some(account)) = (&self.experience_type, &self.account_type) else {
            return Err(NavigationError::MissingParameters {
                experience_type: self.experience_type.clone(),
                account_type: self.account_type.clone(),
            });
        };

        let mode = experience
            .parse::<ExperienceMode>()
            .map_err(|_| NavigationError::InvalidExperienceType(experience.clone()))?;
        let kind = account
            .parse::<AccountKind>()
            .map_err(|_| NavigationError::InvalidAccountType(account.clone()))?;

        Ok(SessionParams::new(mode, kind))
    }
}

impl From<SessionParams> for RouteParams {
    fn from(params: SessionParams) -> Self {
        Self::new(params.mode.as_str(), params.kind.as_str())
    }
}

impl TryFrom<RouteParams> for SessionParams {
    type Error = NavigationError;

    fn try_from(params: RouteParams) -> Result<Self, Self::Error> {
        params.validate()
    }
}

// =============================================================================
// Mount lifetime
// =============================================================================

/// Shared flag telling async work whether its screen is still mounted
#[derive(Debug, Clone)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Check if the owning navigator is still mounted
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Pass a late result through only if the screen is still mounted
    pub fn apply<T>(&self, value: T) -> Option<T> {
        if self.is_mounted() {
            Some(value)
        } else {
            None
        }
    }

    fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

// =============================================================================
// Screens
// =============================================================================

/// Props every mounted screen receives
#[derive(Debug, Clone)]
pub struct ScreenProps {
    /// Experience mode
    pub mode: ExperienceMode,
    /// Account kind
    pub kind: AccountKind,
    /// Theme resolved for `mode`
    pub theme: Arc<ThemeConfig>,
    /// Mount lifetime of the navigator
    pub mount: MountToken,
}

impl ScreenProps {
    /// Session identity carried by these props
    pub fn session(&self) -> SessionParams {
        SessionParams::new(self.mode, self.kind)
    }
}

/// A destination mounted with its props
#[derive(Debug, Clone)]
pub struct MountedScreen {
    /// Which destination
    pub destination: Destination,
    /// Props handed to the screen
    pub props: ScreenProps,
}

/// Tab bar appearance derived from the theme
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarStyle {
    /// Tint of the focused tab
    pub active_tint: Color,
    /// Tint of unfocused tabs
    pub inactive_tint: Color,
    /// Bar background
    pub background: Color,
    /// Top border color
    pub border: Color,
    /// Bar height
    pub height: f32,
    /// Top and bottom padding
    pub padding_y: f32,
    /// Label font
    pub label_font: FontStack,
    /// Label size
    pub label_size: f32,
    /// Gap below the label
    pub label_margin_bottom: f32,
}

impl TabBarStyle {
    /// Inactive tint for a mode
    pub fn inactive_tint_for(mode: ExperienceMode) -> &'static str {
        match mode {
            ExperienceMode::Green => "#888888",
            ExperienceMode::Thread => "#AAAAAA",
        }
    }

    /// Build the style for a resolved theme
    pub fn for_theme(theme: &ThemeConfig) -> Self {
        Self {
            active_tint: theme.colors.primary.clone(),
            inactive_tint: Self::inactive_tint_for(theme.mode).to_string(),
            background: theme.colors.surface.clone(),
            border: theme.colors.outline.clone(),
            height: tab_bar::HEIGHT,
            padding_y: tab_bar::PADDING_Y,
            label_font: theme.fonts.medium.clone(),
            label_size: tab_bar::LABEL_SIZE,
            label_margin_bottom: tab_bar::LABEL_MARGIN_BOTTOM,
        }
    }

    /// Tint for a tab given its focus state
    pub fn tint(&self, focused: bool) -> &str {
        if focused {
            &self.active_tint
        } else {
            &self.inactive_tint
        }
    }
}

/// One rendered tab bar entry
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    /// Destination behind the tab
    pub destination: Destination,
    /// Label text
    pub label: &'static str,
    /// Icon
    pub icon: TabIcon,
    /// Whether this tab is focused
    pub focused: bool,
}

// =============================================================================
// Navigator
// =============================================================================

/// Tab navigator for the main app
#[derive(Debug)]
pub struct MainNavigator {
    session: SessionParams,
    theme: Arc<ThemeConfig>,
    screens: Vec<MountedScreen>,
    focused: Destination,
    search_interest: Option<String>,
    mount: MountToken,
}

impl MainNavigator {
    /// Validate route params and mount every destination
    ///
    /// On error nothing is mounted.
    pub fn mount(params: &RouteParams) -> Result<Self, NavigationError> {
        match params.validate() {
            Ok(session) => Ok(Self::new(session)),
            Err(e) => {
                error!(
                    experience_type = ?params.experience_type,
                    account_type = ?params.account_type,
                    "refusing to mount main navigator: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Mount every destination for an already validated session
    pub fn new(session: SessionParams) -> Self {
        let theme = theme::resolve_shared(session.mode);
        let mount = MountToken::new();
        let screens = Destination::all()
            .into_iter()
            .map(|destination| MountedScreen {
                destination,
                props: ScreenProps {
                    mode: session.mode,
                    kind: session.kind,
                    theme: Arc::clone(&theme),
                    mount: mount.clone(),
                },
            })
            .collect();

        info!(mode = %session.mode, kind = %session.kind, "main navigator mounted");

        Self {
            session,
            theme,
            screens,
            focused: Destination::Feed,
            search_interest: None,
            mount,
        }
    }

    /// Session identity this navigator was mounted with
    pub fn session(&self) -> SessionParams {
        self.session
    }

    /// Theme shared by every screen
    pub fn theme(&self) -> &Arc<ThemeConfig> {
        &self.theme
    }

    /// Mounted screens in tab bar order
    pub fn screens(&self) -> &[MountedScreen] {
        &self.screens
    }

    /// Props for one destination
    pub fn screen(&self, destination: Destination) -> Option<&ScreenProps> {
        self.screens
            .iter()
            .find(|s| s.destination == destination)
            .map(|s| &s.props)
    }

    /// Focused destination
    pub fn focused(&self) -> Destination {
        self.focused
    }

    /// Focus a destination
    ///
    /// Leaving Search clears its interest parameter.
    pub fn select(&mut self, destination: Destination) {
        if destination != Destination::Search {
            self.search_interest = None;
        }
        debug!(from = self.focused.name(), to = destination.name(), "tab selected");
        self.focused = destination;
    }

    /// Focus Search, optionally scoped to an interest tag
    pub fn open_search(&mut self, interest_tag: Option<&str>) {
        self.select(Destination::Search);
        self.search_interest = interest_tag.map(str::to_string);
    }

    /// Interest tag Search was opened with
    pub fn search_interest(&self) -> Option<&str> {
        self.search_interest.as_deref()
    }

    /// Tab bar style for the mounted theme
    pub fn tab_bar_style(&self) -> TabBarStyle {
        TabBarStyle::for_theme(&self.theme)
    }

    /// Tab bar entries reflecting the current focus
    pub fn tab_items(&self) -> Vec<TabItem> {
        Destination::all()
            .into_iter()
            .map(|destination| {
                let focused = destination == self.focused;
                TabItem {
                    destination,
                    label: destination.label(),
                    icon: destination.icon(self.session.mode, focused),
                    focused,
                }
            })
            .collect()
    }

    /// Check if the navigator is still mounted
    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Tear down; outstanding [`MountToken`]s stop accepting results
    pub fn unmount(&mut self) {
        if self.mount.is_mounted() {
            self.mount.revoke();
            self.screens.clear();
            info!("main navigator unmounted");
        }
    }
}

impl Drop for MainNavigator {
    fn drop(&mut self) {
        self.mount.revoke();
    }
}
