//! Onboarding selection flow
//!
//! A linear state machine: account kind, then experience mode, then
//! interests. Entity accounts leave the flow for verification after the first
//! step. Nothing here touches storage except through [`ModeStore`], and every
//! write completes before the next one starts.
//!
//! ```text
//! Start -> ChoosingExperience -> ChoosingInterests -> Complete
//!    \
//!     -> VerificationPending
//! ```

use crate::interests::{self, CATALOG, MIN_INTERESTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use storage::{AccountKind, ExperienceMode, InterestSet, KvError, ModeStore, SessionParams};
use tracing::{debug, info, warn};

/// Input the user can fix and retry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Confirm pressed with no mode picked
    #[error("no experience mode selected")]
    NoExperienceSelected,

    /// Not enough interests picked
    #[error("select at least {required} interests ({selected} selected)")]
    TooFewInterests {
        /// How many are selected
        selected: usize,
        /// How many are needed
        required: usize,
    },

    /// Tag outside the catalog
    #[error("unknown interest: {0}")]
    UnknownInterest(String),
}

/// Errors returned by the selection flow
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    /// User input was rejected; the flow state is unchanged
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation not allowed in the current state
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        /// State the flow was in
        state: FlowState,
        /// Rejected operation
        action: &'static str,
    },

    /// A write did not complete; the flow state is unchanged and the step can be retried
    #[error("storage error: {0}")]
    Storage(#[from] KvError),
}

/// Result type for onboarding operations
pub type Result<T> = std::result::Result<T, OnboardingError>;

/// Where the user is in onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowState {
    /// Nothing chosen yet
    Start,
    /// Individual account, picking a mode
    ChoosingExperience,
    /// Mode confirmed, picking interests
    ChoosingInterests,
    /// Entity account, handed off to verification
    VerificationPending,
    /// Everything persisted
    Complete,
}

impl FlowState {
    /// Check if the flow has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::VerificationPending | FlowState::Complete)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowState::Start => "at start",
            FlowState::ChoosingExperience => "choosing experience",
            FlowState::ChoosingInterests => "choosing interests",
            FlowState::VerificationPending => "pending verification",
            FlowState::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Symbolic choice offered on the experience screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// The axe, for Project Green
    Axe,
    /// The net, for Project Thread
    Net,
}

impl Symbol {
    /// Mode this symbol stands for
    pub fn mode(&self) -> ExperienceMode {
        match self {
            Symbol::Axe => ExperienceMode::Green,
            Symbol::Net => ExperienceMode::Thread,
        }
    }
}

/// Interest counter shown on the interest screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Interests selected
    pub selected: usize,
    /// Minimum required
    pub required: usize,
    /// Size of the catalog
    pub total: usize,
}

/// Onboarding state machine
#[derive(Debug)]
pub struct SelectionFlow {
    store: Arc<ModeStore>,
    state: FlowState,
    kind: Option<AccountKind>,
    mode: Option<ExperienceMode>,
    interests: InterestSet,
}

impl SelectionFlow {
    /// Start a fresh flow
    pub fn new(store: Arc<ModeStore>) -> Self {
        Self {
            store,
            state: FlowState::Start,
            kind: None,
            mode: None,
            interests: InterestSet::new(),
        }
    }

    /// Enter the flow at the interest step with only an account kind known
    ///
    /// The experience mode is taken from the store when [`complete`](Self::complete) runs.
    pub fn resume_at_interests(store: Arc<ModeStore>, kind: AccountKind) -> Self {
        Self {
            store,
            state: FlowState::ChoosingInterests,
            kind: Some(kind),
            mode: None,
            interests: InterestSet::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Chosen account kind
    pub fn account_kind(&self) -> Option<AccountKind> {
        self.kind
    }

    /// Selected experience mode, if any
    pub fn selected_experience(&self) -> Option<ExperienceMode> {
        self.mode
    }

    /// Selected interests
    pub fn interests(&self) -> &InterestSet {
        &self.interests
    }

    fn expect_state(&self, expected: FlowState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(OnboardingError::InvalidTransition { state: self.state, action })
        }
    }

    /// Pick the account kind
    pub fn choose_account_kind(&mut self, kind: AccountKind) -> Result<FlowState> {
        self.expect_state(FlowState::Start, "choose account kind")?;

        self.kind = Some(kind);
        self.state = match kind {
            AccountKind::Individual => FlowState::ChoosingExperience,
            AccountKind::Entity => FlowState::VerificationPending,
        };
        debug!(kind = %kind, state = ?self.state, "account kind chosen");
        Ok(self.state)
    }

    /// Highlight a mode; may be changed until confirmed
    pub fn select_experience(&mut self, mode: ExperienceMode) -> Result<()> {
        self.expect_state(FlowState::ChoosingExperience, "select experience")?;
        self.mode = Some(mode);
        Ok(())
    }

    /// Highlight a mode through its symbol
    pub fn select_symbol(&mut self, symbol: Symbol) -> Result<ExperienceMode> {
        let mode = symbol.mode();
        self.select_experience(mode)?;
        Ok(mode)
    }

    /// Persist the highlighted mode and move on to interests
    pub async fn confirm_experience(&mut self) -> Result<ExperienceMode> {
        self.expect_state(FlowState::ChoosingExperience, "confirm experience")?;
        let mode = self.mode.ok_or(ValidationError::NoExperienceSelected)?;

        self.store.set_experience_mode(mode).await?;
        self.store.set_account_kind(AccountKind::Individual).await?;

        self.state = FlowState::ChoosingInterests;
        info!(mode = %mode, "experience mode confirmed");
        Ok(mode)
    }

    /// Flip an interest, returns whether it is now selected
    pub fn toggle_interest(&mut self, id: &str) -> Result<bool> {
        self.expect_state(FlowState::ChoosingInterests, "toggle interest")?;
        if !interests::is_known(id) {
            return Err(ValidationError::UnknownInterest(id.to_string()).into());
        }
        Ok(self.interests.toggle(id))
    }

    /// Interest counter
    pub fn progress(&self) -> Progress {
        Progress {
            selected: self.interests.len(),
            required: MIN_INTERESTS,
            total: CATALOG.len(),
        }
    }

    /// Check if enough interests are selected to finish
    pub fn can_complete(&self) -> bool {
        self.state == FlowState::ChoosingInterests && self.interests.len() >= MIN_INTERESTS
    }

    /// Persist every selection and finish onboarding
    ///
    /// Writes the experience mode, account kind, interests and completion
    /// flag in that order. If no mode was chosen in this flow, the stored mode
    /// is used, falling back to [`ExperienceMode::Green`]. On a storage error
    /// the flow stays at the interest step and calling this again rewrites
    /// every key.
    pub async fn complete(&mut self) -> Result<SessionParams> {
        self.expect_state(FlowState::ChoosingInterests, "complete onboarding")?;

        let selected = self.interests.len();
        if selected < MIN_INTERESTS {
            return Err(ValidationError::TooFewInterests { selected, required: MIN_INTERESTS }.into());
        }

        let mode = match self.mode {
            Some(mode) => {
                self.store.set_experience_mode(mode).await?;
                mode
            }
            None => {
                let mode = self.store.resolve_experience_mode().await?;
                warn!(mode = %mode, "experience mode was not chosen in this flow, using stored value");
                self.mode = Some(mode);
                mode
            }
        };

        let kind = self.kind.unwrap_or(AccountKind::Individual);
        self.store.set_account_kind(kind).await?;
        self.store.set_interests(&self.interests).await?;
        self.store.mark_onboarding_complete().await?;

        self.state = FlowState::Complete;
        info!(mode = %mode, kind = %kind, interests = selected, "onboarding complete");
        Ok(SessionParams::new(mode, kind))
    }
}
