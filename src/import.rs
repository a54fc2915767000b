// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! The import loop and its operator-facing output.
//!
//! Candidates are submitted strictly in order, one request at a time. A
//! failed candidate is reported and skipped; it never stops the run.
//!
//! # Example
//!
//! ```
//! use quest2gh::candidate::IssueCandidate;
//! use quest2gh::github::{CreatedIssue, IssueTracker, NewIssue, SubmitError};
//! use quest2gh::import::{Reporter, run_import};
//!
//! struct AlwaysOk;
//!
//! impl IssueTracker for AlwaysOk {
//!     fn create_issue(&self, _: &NewIssue<'_>) -> Result<CreatedIssue, SubmitError> {
//!         Ok(CreatedIssue { html_url: "https://github.com/o/r/issues/1".into(), number: Some(1) })
//!     }
//! }
//!
//! let candidates = vec![IssueCandidate {
//!     title: "Read the docs".into(),
//!     body: String::new(),
//!     labels: vec!["quest".into()],
//!     kind: "quest".into(),
//! }];
//!
//! let mut out = Vec::new();
//! let summary = run_import(&candidates, &AlwaysOk, &mut Reporter::new(&mut out, false)).unwrap();
//! assert_eq!(summary.succeeded, 1);
//! ```

use crate::candidate::IssueCandidate;
use crate::github::{CreatedIssue, IssueTracker, NewIssue, SubmitError};
use std::io::{self, Write};

/// Outcome counts of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Candidates submitted.
    pub attempted: usize,
    /// Candidates confirmed as created.
    pub succeeded: usize,
}

impl ImportSummary {
    /// Candidates that were not confirmed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    /// Returns `true` if every attempted candidate was confirmed.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.attempted == self.succeeded
    }
}

/// Writes progress, results and the final summary.
pub struct Reporter<W> {
    out: W,
    quiet: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter. With `quiet`, only failures and the summary are
    /// written.
    pub const fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    /// Reports an empty seed document.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn nothing_to_import(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "No quests or bosses found in the JSON file. Nothing to import."
        )
    }

    /// Announces the run before the first request.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn found(&mut self, total: usize, target: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "Found {total} quests/bosses. Connecting to GitHub ({target})..."
        )
    }

    fn progress(
        &mut self,
        position: usize,
        total: usize,
        candidate: &IssueCandidate,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "→ Creating {} [{position}/{total}]: {}",
            candidate.category(),
            candidate.title
        )
    }

    fn success(&mut self, created: &CreatedIssue) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "  [✓] Success! URL: {}", created.html_url)
    }

    fn failure(
        &mut self,
        position: usize,
        total: usize,
        candidate: &IssueCandidate,
        err: &SubmitError,
    ) -> io::Result<()> {
        if self.quiet {
            self.progress(position, total, candidate)?;
        }
        writeln!(self.out, "  [!] {err}")?;
        writeln!(self.out, "  [X] Failed.")
    }

    /// Writes the final tally.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn summary(&mut self, summary: &ImportSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "\nImport Complete! {}/{} imported successfully.",
            summary.succeeded, summary.attempted
        )
    }

    /// Prints what would be submitted, without contacting the tracker.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn preview(&mut self, candidates: &[IssueCandidate]) -> io::Result<()> {
        let total = candidates.len();
        for (idx, candidate) in candidates.iter().enumerate() {
            writeln!(
                self.out,
                "→ Would create {} [{}/{total}]: {}",
                candidate.category(),
                idx + 1,
                candidate.title
            )?;
            writeln!(self.out, "  Labels: {}", candidate.labels.join(", "))?;
            if !self.quiet {
                writeln!(self.out, "\n{}\n---", candidate.body.trim_end())?;
            }
        }
        writeln!(self.out, "\nDry run: {total} issue(s) would be created.")
    }
}

/// Submits every candidate in order and reports each result.
///
/// Per-candidate failures are reported and counted; they do not stop the
/// loop. The final summary is written before returning.
///
/// # Errors
///
/// Returns an error only if writing to the reporter fails.
pub fn run_import<T, W>(
    candidates: &[IssueCandidate],
    tracker: &T,
    reporter: &mut Reporter<W>,
) -> io::Result<ImportSummary>
where
    T: IssueTracker + ?Sized,
    W: Write,
{
    let total = candidates.len();
    let mut summary = ImportSummary::default();

    for (idx, candidate) in candidates.iter().enumerate() {
        let position = idx + 1;
        if !reporter.quiet {
            reporter.progress(position, total, candidate)?;
        }

        summary.attempted += 1;
        match tracker.create_issue(&NewIssue::from(candidate)) {
            Ok(created) => {
                summary.succeeded += 1;
                tracing::debug!(url = %created.html_url, number = ?created.number, "issue created");
                reporter.success(&created)?;
            }
            Err(err) => {
                tracing::warn!(
                    position,
                    title = %candidate.title,
                    error = %err,
                    "issue not created"
                );
                reporter.failure(position, total, candidate, &err)?;
            }
        }
    }

    reporter.summary(&summary)?;
    Ok(summary)
}
