// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Markdown issue bodies for quests and bosses.
//!
//! Quest and boss records are rendered as "cards": a short header, a block of
//! `- **Field**: `value`` lines that always appear (with defaults), followed
//! by optional sections that only appear when their source field is present.
//!
//! # Example
//!
//! ```
//! use quest2gh::card::render_boss_card;
//! use quest2gh::seed::BossRecord;
//!
//! let boss = BossRecord {
//!     name: Some("Drift King".into()),
//!     hp_tasks: Some(vec!["Phase 1".into()]),
//!     ..Default::default()
//! };
//!
//! let body = render_boss_card(&boss);
//! assert!(body.starts_with("### Boss Card\n"));
//! assert!(body.contains("- [ ] Phase 1"));
//! ```

use crate::seed::{BossRecord, QuestRecord, Scalar};
use std::fmt::{Display, Write};

/// How the items of a list section are bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListStyle {
    /// `- item`
    Plain,
    /// `- [ ] item`
    Checklist,
    /// ``- `item` ``
    Code,
}

/// Renders the issue body for a quest.
///
/// A literal `body` on the record is returned unchanged and every other
/// field is ignored.
#[must_use]
pub fn render_quest_card(quest: &QuestRecord) -> String {
    if let Some(body) = &quest.body {
        return body.clone();
    }

    let mut out = String::from("### Quest Card\n");
    field(&mut out, "Type", scalar_or(quest.kind.as_ref(), "Quest"));
    field(
        &mut out,
        "Rank Required",
        scalar_or(quest.rank_required.as_ref(), "Iron"),
    );
    field(
        &mut out,
        "Quest Level",
        scalar_or(quest.quest_level.as_ref(), "1"),
    );
    field(
        &mut out,
        "Dependency Type",
        scalar_or(quest.dependency_type.as_ref(), "Independent"),
    );

    let depends_on = match quest.depends_on.as_deref() {
        Some(deps) if !deps.is_empty() => deps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        _ => "none".to_owned(),
    };
    field(&mut out, "Depends On", depends_on);
    field(
        &mut out,
        "Unlock Condition",
        scalar_or(quest.unlock_condition.as_ref(), "n/a"),
    );
    out.push('\n');

    if let Some(goal) = &quest.goal {
        paragraph(&mut out, "Goal", goal);
    }
    if let Some(steps) = &quest.player_steps {
        list(&mut out, "Steps", steps, ListStyle::Plain);
    }
    if let Some(done_when) = &quest.done_when {
        list(&mut out, "Done When", done_when, ListStyle::Checklist);
    }
    if let Some(due) = &quest.due_date {
        writeln!(out, "**Due Date**: `{due}`\n").unwrap();
    }
    if let Some(proof) = &quest.proof_required {
        list(&mut out, "Proof Required", proof, ListStyle::Code);
    }
    if let Some(xp) = &quest.xp {
        writeln!(out, "**Reward**: {xp} XP").unwrap();
    }
    if let Some(fantasy) = &quest.class_fantasy {
        let class = scalar_or(quest.class.as_ref(), "");
        writeln!(out, "**Class**: {fantasy} ({class})").unwrap();
    }

    out
}

/// Renders the issue body for a boss.
///
/// Unlike quests, bosses have no literal body override; the card is always
/// rendered from the record's fields.
#[must_use]
pub fn render_boss_card(boss: &BossRecord) -> String {
    let mut out = String::from("### Boss Card\n");
    field(&mut out, "Type", "Boss");
    field(
        &mut out,
        "Threat Level",
        scalar_or(boss.threat_level.as_ref(), "4"),
    );
    field(&mut out, "Status", scalar_or(boss.status.as_ref(), "active"));
    out.push('\n');

    if let Some(description) = &boss.description {
        paragraph(&mut out, "Goal", description);
    }
    if let Some(tasks) = &boss.hp_tasks {
        list(&mut out, "Checkpoints (HP)", tasks, ListStyle::Checklist);
    }
    if let Some(criteria) = &boss.kill_criteria {
        list(
            &mut out,
            "Done When (Kill Criteria)",
            criteria,
            ListStyle::Checklist,
        );
    }
    if let Some(deadline) = &boss.deadline {
        writeln!(out, "**Due Date**: `{deadline}`\n").unwrap();
    }
    if let Some(proof) = &boss.proof_required {
        list(&mut out, "Proof Required", proof, ListStyle::Code);
    }
    if let Some(plan) = &boss.rollback_plan {
        writeln!(out, "**Rollback Plan**: {plan}").unwrap();
    }

    out
}

fn scalar_or(value: Option<&Scalar>, default: &str) -> String {
    value.map_or_else(|| default.to_owned(), ToString::to_string)
}

fn field(out: &mut String, name: &str, value: impl Display) {
    writeln!(out, "- **{name}**: `{value}`").unwrap();
}

fn paragraph(out: &mut String, name: &str, text: &Scalar) {
    writeln!(out, "**{name}**: {text}\n").unwrap();
}

fn list(out: &mut String, heading: &str, items: &[Scalar], style: ListStyle) {
    writeln!(out, "**{heading}**:").unwrap();
    for item in items {
        match style {
            ListStyle::Plain => writeln!(out, "- {item}").unwrap(),
            ListStyle::Checklist => writeln!(out, "- [ ] {item}").unwrap(),
            ListStyle::Code => writeln!(out, "- `{item}`").unwrap(),
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest_with_title(title: &str) -> QuestRecord {
        QuestRecord {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[test]
    fn renders_quest_defaults() {
        let body = render_quest_card(&quest_with_title("Bare"));

        assert_eq!(
            body,
            "### Quest Card\n\
             - **Type**: `Quest`\n\
             - **Rank Required**: `Iron`\n\
             - **Quest Level**: `1`\n\
             - **Dependency Type**: `Independent`\n\
             - **Depends On**: `none`\n\
             - **Unlock Condition**: `n/a`\n\n"
        );
    }

    #[test]
    fn literal_body_wins_over_fields() {
        let quest = QuestRecord {
            body: Some("Just do it.".into()),
            goal: Some("ignored".into()),
            xp: Some(Scalar::from(100_u64)),
            player_steps: Some(vec!["ignored".into()]),
            ..Default::default()
        };

        assert_eq!(render_quest_card(&quest), "Just do it.");
    }

    #[test]
    fn empty_literal_body_is_still_literal() {
        let quest = QuestRecord {
            body: Some(String::new()),
            goal: Some("ignored".into()),
            ..Default::default()
        };

        assert_eq!(render_quest_card(&quest), "");
    }

    #[test]
    fn joins_dependencies() {
        let quest = QuestRecord {
            depends_on: Some(vec!["q-1".into(), "q-2".into()]),
            ..Default::default()
        };

        assert!(render_quest_card(&quest).contains("- **Depends On**: `q-1, q-2`\n"));
    }

    #[test]
    fn empty_dependencies_render_as_none() {
        let quest = QuestRecord {
            depends_on: Some(vec![]),
            ..Default::default()
        };

        assert!(render_quest_card(&quest).contains("- **Depends On**: `none`\n"));
    }

    #[test]
    fn renders_quest_sections_in_order() {
        let quest = QuestRecord {
            kind: Some("Side Quest".into()),
            quest_level: Some(Scalar::from(3_u64)),
            goal: Some("Ship it".into()),
            player_steps: Some(vec!["Build".into(), "Deploy".into()]),
            done_when: Some(vec!["Page loads".into()]),
            due_date: Some(Scalar::from("2025-01-31")),
            proof_required: Some(vec!["screenshot.png".into()]),
            xp: Some(Scalar::from(250_u64)),
            class_fantasy: Some("Rune Sage".into()),
            class: Some("backend".into()),
            ..Default::default()
        };
        let body = render_quest_card(&quest);

        assert!(body.contains("- **Type**: `Side Quest`\n"));
        assert!(body.contains("- **Quest Level**: `3`\n"));
        assert!(body.contains("**Goal**: Ship it\n\n"));
        assert!(body.contains("**Steps**:\n- Build\n- Deploy\n\n"));
        assert!(body.contains("**Done When**:\n- [ ] Page loads\n\n"));
        assert!(body.contains("**Due Date**: `2025-01-31`\n\n"));
        assert!(body.contains("**Proof Required**:\n- `screenshot.png`\n\n"));
        assert!(body.ends_with("**Reward**: 250 XP\n**Class**: Rune Sage (backend)\n"));

        let order = [
            "**Goal**",
            "**Steps**",
            "**Done When**",
            "**Due Date**",
            "**Proof Required**",
            "**Reward**",
            "**Class**",
        ];
        let positions: Vec<usize> = order.iter().map(|s| body.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn omits_absent_quest_sections() {
        let body = render_quest_card(&quest_with_title("Bare"));

        for section in ["**Goal**", "**Steps**", "**Done When**", "**Reward**", "**Class**"] {
            assert!(!body.contains(section), "unexpected {section}");
        }
    }

    #[test]
    fn class_line_without_class_id() {
        let quest = QuestRecord {
            class_fantasy: Some("Rune Sage".into()),
            ..Default::default()
        };

        assert!(render_quest_card(&quest).contains("**Class**: Rune Sage ()\n"));
    }

    #[test]
    fn class_id_alone_is_not_rendered() {
        let quest = QuestRecord {
            class: Some("backend".into()),
            ..Default::default()
        };

        assert!(!render_quest_card(&quest).contains("**Class**"));
    }

    #[test]
    fn renders_boss_defaults() {
        let body = render_boss_card(&BossRecord::default());

        assert_eq!(
            body,
            "### Boss Card\n\
             - **Type**: `Boss`\n\
             - **Threat Level**: `4`\n\
             - **Status**: `active`\n\n"
        );
    }

    #[test]
    fn renders_boss_sections_in_order() {
        let boss = BossRecord {
            name: Some("Drift King".into()),
            threat_level: Some(Scalar::from(5_u64)),
            status: Some("stabilizing".into()),
            description: Some("Stop config drift".into()),
            hp_tasks: Some(vec!["Phase 1".into(), "Phase 2".into()]),
            kill_criteria: Some(vec!["No drift for a week".into()]),
            deadline: Some(Scalar::from("2025-03-01")),
            proof_required: Some(vec!["audit.log".into()]),
            rollback_plan: Some("Revert the pipeline".into()),
            labels: None,
        };
        let body = render_boss_card(&boss);

        assert!(body.starts_with("### Boss Card\n- **Type**: `Boss`\n"));
        assert!(body.contains("- **Threat Level**: `5`\n"));
        assert!(body.contains("- **Status**: `stabilizing`\n"));
        assert!(body.contains("**Goal**: Stop config drift\n\n"));
        assert!(body.contains("**Checkpoints (HP)**:\n- [ ] Phase 1\n- [ ] Phase 2\n\n"));
        assert!(body.contains("**Done When (Kill Criteria)**:\n- [ ] No drift for a week\n\n"));
        assert!(body.contains("**Due Date**: `2025-03-01`\n\n"));
        assert!(body.contains("**Proof Required**:\n- `audit.log`\n\n"));
        assert!(body.ends_with("**Rollback Plan**: Revert the pipeline\n"));

        let hp = body.find("Checkpoints (HP)").unwrap();
        let kill = body.find("Kill Criteria").unwrap();
        let rollback = body.find("Rollback Plan").unwrap();
        assert!(hp < kill && kill < rollback);
    }

    #[test]
    fn renders_numeric_text_fields() {
        let quest = QuestRecord {
            kind: Some(Scalar::from(2_u64)),
            goal: Some(Scalar::from(42_u64)),
            player_steps: Some(vec![Scalar::from(1_u64), Scalar::from("two")]),
            depends_on: Some(vec![Scalar::from(7_u64), Scalar::from("q-8")]),
            class_fantasy: Some("Rune Sage".into()),
            class: Some(Scalar::from(7_u64)),
            ..Default::default()
        };
        let body = render_quest_card(&quest);

        assert!(body.contains("- **Type**: `2`\n"));
        assert!(body.contains("- **Depends On**: `7, q-8`\n"));
        assert!(body.contains("**Goal**: 42\n\n"));
        assert!(body.contains("**Steps**:\n- 1\n- two\n\n"));
        assert!(body.contains("**Class**: Rune Sage (7)\n"));

        let boss = BossRecord {
            status: Some(Scalar::from(3_u64)),
            kill_criteria: Some(vec![Scalar::from(0_u64)]),
            ..Default::default()
        };
        let body = render_boss_card(&boss);

        assert!(body.contains("- **Status**: `3`\n"));
        assert!(body.contains("**Done When (Kill Criteria)**:\n- [ ] 0\n\n"));
    }

    #[test]
    fn empty_list_still_renders_heading() {
        let boss = BossRecord {
            hp_tasks: Some(vec![]),
            ..Default::default()
        };

        assert!(render_boss_card(&boss).contains("**Checkpoints (HP)**:\n\n"));
    }
}
