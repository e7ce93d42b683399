//! Persisted session state schema
//!
//! Domain values the Mode Store persists: the experience mode, the account
//! kind, and the interest selection. Each is stored under its own key in its
//! own wire form, never as one combined record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored or routed string is outside an enum's domain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseValueError {
    /// Which value was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Experience mode chosen once during onboarding
///
/// Exactly two variants exist; an absent value must be resolved to
/// [`ExperienceMode::Green`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceMode {
    /// Project Green
    #[default]
    Green,
    /// Project Thread
    Thread,
}

impl ExperienceMode {
    /// Wire form stored under the experience-mode key
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceMode::Green => "green",
            ExperienceMode::Thread => "thread",
        }
    }

    /// Both modes, in declaration order
    pub fn all() -> [ExperienceMode; 2] {
        [ExperienceMode::Green, ExperienceMode::Thread]
    }
}

impl fmt::Display for ExperienceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(ExperienceMode::Green),
            "thread" => Ok(ExperienceMode::Thread),
            _ => Err(ParseValueError { kind: "experience mode", value: s.to_string() }),
        }
    }
}

/// Whether an account belongs to a person or an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Personal account; goes through the full onboarding flow
    Individual,
    /// Organizations, brands, creators; goes through verification instead
    Entity,
}

impl AccountKind {
    /// Wire form stored under the account-kind key
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Individual => "individual",
            AccountKind::Entity => "entity",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(AccountKind::Individual),
            "entity" => Ok(AccountKind::Entity),
            _ => Err(ParseValueError { kind: "account kind", value: s.to_string() }),
        }
    }
}

/// Interest tags picked during onboarding
///
/// Ordered and duplicate-free. Serialized as a JSON array of tag ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSet(BTreeSet<String>);

impl InterestSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a tag is selected
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag, returns false if it was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Flip a tag's membership, returns whether it is now selected
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.0.remove(tag) {
            false
        } else {
            self.0.insert(tag.to_string());
            true
        }
    }

    /// Iterate tags in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Identity every main-app screen requires
///
/// Created when the selection flow completes and handed to navigation by
/// value. Each field is persisted separately for independent recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParams {
    /// Resolved experience mode
    #[serde(rename = "experienceType")]
    pub mode: ExperienceMode,
    /// Account kind
    #[serde(rename = "accountType")]
    pub kind: AccountKind,
}

impl SessionParams {
    /// Create session params
    pub fn new(mode: ExperienceMode, kind: AccountKind) -> Self {
        Self { mode, kind }
    }
}
