//! Storage layer for Rove
//!
//! This crate provides the async key-value interface, a durable sled-backed
//! store, and the Mode Store that persists the onboarding choices.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_state;
pub mod kv;
pub mod mode_store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app_state::{AccountKind, ExperienceMode, InterestSet, ParseValueError, SessionParams};
pub use kv::{KeyValueStore, KvConfig, KvError, KvStore, MemoryStore};
pub use mode_store::{keys, ModeStore};
