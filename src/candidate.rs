// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Flattening a seed document into issue candidates.
//!
//! Candidates are produced in a fixed order: standalone quests, then every
//! chain's steps (chain order, then step order), then bosses. The whole list
//! is built in memory before anything is submitted.

use crate::card::{render_boss_card, render_quest_card};
use crate::seed::{BossRecord, QuestRecord, SeedDocument};

/// Type given to quests that do not declare one, and to every chain step.
pub const QUEST_KIND: &str = "quest";

/// Type given to every boss.
pub const BOSS_KIND: &str = "boss";

/// An issue ready to be created in the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCandidate {
    /// Issue title.
    pub title: String,

    /// Markdown issue body.
    pub body: String,

    /// Labels to apply. Always contains `kind`.
    pub labels: Vec<String>,

    /// Candidate type, e.g. `quest` or `boss`.
    pub kind: String,
}

impl IssueCandidate {
    /// The capitalized type shown in progress output, e.g. `Boss`.
    #[must_use]
    pub fn category(&self) -> String {
        category(&self.kind)
    }
}

/// Builds the ordered candidate list for a seed document.
#[must_use]
pub fn collect_candidates(seed: &SeedDocument) -> Vec<IssueCandidate> {
    let mut candidates: Vec<IssueCandidate> = seed
        .quests
        .iter()
        .enumerate()
        .map(|(idx, quest)| from_quest(quest, idx + 1))
        .collect();

    for chain in &seed.quest_chains {
        tracing::debug!(
            chain = chain.name.as_deref().unwrap_or("<unnamed>"),
            steps = chain.steps.len(),
            "expanding quest chain"
        );
        candidates.extend(chain.steps.iter().map(from_chain_step));
    }

    candidates.extend(seed.bosses.iter().map(from_boss));
    candidates
}

/// Returns `labels` with duplicates removed and `kind` appended if missing.
///
/// Always returns a fresh list so candidates never share label storage.
#[must_use]
pub fn label_set(labels: &[String], kind: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len() + 1);
    for label in labels.iter().map(String::as_str).chain([kind]) {
        if !out.iter().any(|existing| existing == label) {
            out.push(label.to_owned());
        }
    }
    out
}

/// Upper-cases the first character of `kind` and lower-cases the rest.
#[must_use]
pub fn category(kind: &str) -> String {
    let mut chars = kind.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn from_quest(quest: &QuestRecord, position: usize) -> IssueCandidate {
    let kind = quest
        .kind
        .as_ref()
        .map_or_else(|| QUEST_KIND.to_owned(), ToString::to_string);
    IssueCandidate {
        title: quest
            .title
            .as_ref()
            .map_or_else(|| format!("Untitled Quest {position}"), ToString::to_string),
        body: render_quest_card(quest),
        labels: label_set(quest.labels.as_deref().unwrap_or_default(), &kind),
        kind,
    }
}

fn from_chain_step(step: &QuestRecord) -> IssueCandidate {
    IssueCandidate {
        title: step
            .title
            .as_ref()
            .map_or_else(|| "Untitled Quest".to_owned(), ToString::to_string),
        body: render_quest_card(step),
        labels: label_set(step.labels.as_deref().unwrap_or_default(), QUEST_KIND),
        kind: QUEST_KIND.to_owned(),
    }
}

fn from_boss(boss: &BossRecord) -> IssueCandidate {
    IssueCandidate {
        title: match &boss.name {
            Some(name) => format!("Boss: {name}"),
            None => "Boss: Unknown".to_owned(),
        },
        body: render_boss_card(boss),
        labels: label_set(boss.labels.as_deref().unwrap_or_default(), BOSS_KIND),
        kind: BOSS_KIND.to_owned(),
    }
}
