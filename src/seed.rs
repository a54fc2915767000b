// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Loading and typed representation of quest seed documents.
//!
//! A seed document is a JSON object with three optional top-level lists:
//!
//! - `quests`: standalone quest records
//! - `quest_chains`: chains, each holding an ordered list of quest `steps`
//! - `bosses`: boss records
//!
//! Unknown keys are ignored. A key with the wrong shape (for example
//! `"bosses": {}`) is a parse error, so a document is either accepted as a
//! whole or rejected before anything is sent to the tracker.
//!
//! # Example
//!
//! ```
//! use quest2gh::seed::{Scalar, parse_seed};
//!
//! let json = r#"{
//!     "quest_chains": [{ "name": "Onboarding", "steps": [{ "title": "Read the docs" }] }],
//!     "bosses": [{ "name": "Drift King", "threat_level": 5 }]
//! }"#;
//!
//! let seed = parse_seed(json).unwrap();
//! assert_eq!(seed.quest_chains[0].steps.len(), 1);
//! assert_eq!(seed.bosses[0].name, Some(Scalar::from("Drift King")));
//! ```

use serde::Deserialize;
use snafu::prelude::*;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Error type for JSON parsing failures.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// The content is not valid JSON or does not match the seed layout.
    #[snafu(display("{source}"))]
    Json {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
    },
}

/// Error type for reading a seed document from disk.
#[derive(Debug, Snafu)]
pub enum LoadError {
    /// The seed path does not exist.
    #[snafu(display("could not find file '{}'", path.display()))]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The seed path exists but could not be read.
    #[snafu(display("failed to read '{}': {source}", path.display()))]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file was read but its content is not a valid seed document.
    #[snafu(display("invalid JSON format in '{}': {source}", path.display()))]
    Parse {
        /// The path that was requested.
        path: PathBuf,
        /// The parser diagnostic.
        source: ParseError,
    },
}

/// A field that seed authors write either as a string or a number.
///
/// Rendered exactly as written: strings verbatim, numbers in their JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON string.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON boolean.
    Flag(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// The root of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedDocument {
    /// Quests that become issues as written.
    #[serde(default)]
    pub quests: Vec<QuestRecord>,

    /// Quest chains whose steps each become an issue.
    #[serde(default)]
    pub quest_chains: Vec<QuestChain>,

    /// Bosses, each becoming a `boss` issue.
    #[serde(default)]
    pub bosses: Vec<BossRecord>,
}

impl SeedDocument {
    /// Returns `true` if the document holds nothing that would become an issue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
            && self.bosses.is_empty()
            && self.quest_chains.iter().all(|chain| chain.steps.is_empty())
    }
}

/// An ordered group of quests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestChain {
    /// Display name of the chain. Only used for logging.
    pub name: Option<String>,

    /// The chain's steps in play order.
    #[serde(default)]
    pub steps: Vec<QuestRecord>,
}

/// A single quest, either standalone or a chain step.
///
/// Every field is optional; presence matters because the quest card only
/// renders sections whose source field was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestRecord {
    /// Issue title.
    pub title: Option<Scalar>,

    /// Literal issue body. When present it replaces the rendered card.
    pub body: Option<String>,

    /// Quest type, e.g. "quest" or "Side Quest". Also used as a label.
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,

    /// Minimum rank needed to take the quest.
    pub rank_required: Option<Scalar>,

    /// Difficulty level.
    pub quest_level: Option<Scalar>,

    /// How the quest relates to others, e.g. "Independent" or "Sequential".
    pub dependency_type: Option<Scalar>,

    /// Identifiers of quests that must be completed first.
    pub depends_on: Option<Vec<Scalar>>,

    /// Free-form unlock condition.
    pub unlock_condition: Option<Scalar>,

    /// What the quest achieves.
    pub goal: Option<Scalar>,

    /// Steps the player takes.
    pub player_steps: Option<Vec<Scalar>>,

    /// Completion checklist.
    pub done_when: Option<Vec<Scalar>>,

    /// Due date, in whatever format the seed author uses.
    pub due_date: Option<Scalar>,

    /// Artifacts that prove completion.
    pub proof_required: Option<Vec<Scalar>>,

    /// Experience reward.
    pub xp: Option<Scalar>,

    /// Flavor name of the class, e.g. "Rune Sage".
    pub class_fantasy: Option<Scalar>,

    /// Underlying class identifier.
    pub class: Option<Scalar>,

    /// Issue labels.
    pub labels: Option<Vec<String>>,
}

/// A boss: a large objective tracked through checkpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BossRecord {
    /// Boss name. The issue title is `Boss: <name>`.
    pub name: Option<Scalar>,

    /// Threat level, 1-5 by convention.
    pub threat_level: Option<Scalar>,

    /// Lifecycle status, e.g. "active" or "defeated".
    pub status: Option<Scalar>,

    /// What defeating the boss means.
    pub description: Option<Scalar>,

    /// Checkpoints that chip away at the boss.
    pub hp_tasks: Option<Vec<Scalar>>,

    /// Conditions under which the boss counts as defeated.
    pub kill_criteria: Option<Vec<Scalar>>,

    /// Deadline, in whatever format the seed author uses.
    pub deadline: Option<Scalar>,

    /// Artifacts that prove the kill.
    pub proof_required: Option<Vec<Scalar>>,

    /// What to do if the attempt goes wrong.
    pub rollback_plan: Option<Scalar>,

    /// Issue labels.
    pub labels: Option<Vec<String>>,
}

/// Parses a seed document from a JSON string.
///
/// # Errors
///
/// Returns [`ParseError::Json`] if the input is not valid JSON or does not
/// match the seed layout.
pub fn parse_seed(json_str: &str) -> Result<SeedDocument, ParseError> {
    serde_json::from_str(json_str).context(JsonSnafu)
}

/// Reads and parses the seed document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the path does not exist,
/// [`LoadError::Read`] for other I/O failures, and [`LoadError::Parse`] if
/// the content is not a valid seed document.
pub fn load_seed(path: &Path) -> Result<SeedDocument, LoadError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return NotFoundSnafu { path }.fail();
        }
        Err(err) => return Err(err).context(ReadSnafu { path }),
    };
    tracing::debug!(path = %path.display(), bytes = json.len(), "read seed file");
    parse_seed(&json).context(ParseSnafu { path })
}
