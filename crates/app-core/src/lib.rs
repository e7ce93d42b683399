//! Core application logic for Rove
//!
//! This crate contains the onboarding selection flow and the interest
//! catalog it draws from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod interests;
pub mod onboarding;

pub use interests::{Interest, CATALOG, MIN_INTERESTS};
pub use onboarding::{
    FlowState, OnboardingError, Progress, SelectionFlow, Symbol, ValidationError,
};
