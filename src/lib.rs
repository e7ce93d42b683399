//! Rove client core
//!
//! Ties the member crates together: at launch the persisted session decides
//! whether the user lands in onboarding or in the main navigator, and a
//! completed onboarding flow hands its [`SessionParams`] straight to the
//! navigator.
//!
//! ```rust
//! use rove::{launch, Launch};
//! use std::sync::Arc;
//! use storage::{MemoryStore, ModeStore};
//!
//! # async fn example() {
//! let store = Arc::new(ModeStore::new(Arc::new(MemoryStore::new())));
//! match launch(store).await {
//!     Launch::Onboarding(flow) => println!("onboarding at {}", flow.state()),
//!     Launch::Main(nav) => println!("welcome back, {}", nav.session().mode),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use api_client;
pub use app_core;
pub use app_ui;
pub use storage;

use app_core::{OnboardingError, SelectionFlow};
use app_ui::MainNavigator;
use std::sync::Arc;
use storage::{ModeStore, SessionParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global log subscriber
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Where the app starts
#[derive(Debug)]
pub enum Launch {
    /// No completed session; run the selection flow
    Onboarding(SelectionFlow),
    /// Session restored; the main navigator is mounted
    Main(MainNavigator),
}

/// Decide the entry point from the persisted session
pub async fn launch(store: Arc<ModeStore>) -> Launch {
    match store.restore_session().await {
        Some(session) => {
            info!(mode = %session.mode, kind = %session.kind, "restored session");
            Launch::Main(MainNavigator::new(session))
        }
        None => Launch::Onboarding(SelectionFlow::new(store)),
    }
}

/// Finish onboarding and mount the main navigator with the result
///
/// On error the flow is left where it was so the caller can retry.
pub async fn complete_onboarding(
    flow: &mut SelectionFlow,
) -> Result<(SessionParams, MainNavigator), OnboardingError> {
    let session = flow.complete().await?;
    Ok((session, MainNavigator::new(session)))
}
