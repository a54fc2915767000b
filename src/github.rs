// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Issue creation against the GitHub REST API.
//!
//! [`IssueTracker`] is the seam between the import loop and the network;
//! [`GitHubClient`] is the blocking HTTP implementation used by the binary.

use crate::candidate::IssueCandidate;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Media type requested from the API.
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// User agent sent with every request.
pub const USER_AGENT: &str = "WebHatchery-Quest-Importer";

/// Why a single issue could not be confirmed as created.
#[derive(Debug, Snafu)]
pub enum SubmitError {
    /// The API answered with a non-2xx status.
    #[snafu(display("GitHub API Error ({code}): {body}"))]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as sent by the server.
        body: String,
    },

    /// The request never produced an HTTP response.
    #[snafu(display("Network Error: {message}"))]
    Transport {
        /// Transport diagnostic.
        message: String,
    },

    /// A 2xx response whose body could not be read as JSON.
    #[snafu(display("could not decode GitHub response: {source}"))]
    Decode {
        /// The underlying read/decode error.
        source: std::io::Error,
    },

    /// A 2xx response without an `html_url`. The issue may still exist.
    #[snafu(display("GitHub response did not include an issue URL"))]
    MissingUrl,
}

/// Request payload for issue creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue<'a> {
    /// Issue title.
    pub title: &'a str,
    /// Markdown body.
    pub body: &'a str,
    /// Labels to apply.
    pub labels: &'a [String],
}

impl<'a> From<&'a IssueCandidate> for NewIssue<'a> {
    fn from(candidate: &'a IssueCandidate) -> Self {
        Self {
            title: &candidate.title,
            body: &candidate.body,
            labels: &candidate.labels,
        }
    }
}

/// A confirmed issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Browser URL of the new issue.
    pub html_url: String,
    /// Issue number, when reported.
    pub number: Option<u64>,
}

#[derive(Deserialize)]
struct IssueResponse {
    html_url: Option<String>,
    number: Option<u64>,
}

impl IssueResponse {
    fn into_created(self) -> Result<CreatedIssue, SubmitError> {
        let html_url = self.html_url.context(MissingUrlSnafu)?;
        Ok(CreatedIssue {
            html_url,
            number: self.number,
        })
    }
}

/// Something that can create issues, one at a time.
pub trait IssueTracker {
    /// Creates one issue and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] describing why the issue could not be
    /// confirmed as created.
    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<CreatedIssue, SubmitError>;
}

/// Blocking client for `POST /repos/{owner}/{repo}/issues`.
pub struct GitHubClient {
    agent: ureq::Agent,
    token: String,
    issues_url: String,
}

impl GitHubClient {
    /// Creates a client for the repository named in `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            agent: ureq::Agent::new(),
            token: config.token.clone(),
            issues_url: config.issues_url(),
        }
    }
}

impl IssueTracker for GitHubClient {
    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<CreatedIssue, SubmitError> {
        tracing::debug!(url = %self.issues_url, title = issue.title, "creating issue");

        let result = self
            .agent
            .post(&self.issues_url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", ACCEPT)
            .set("User-Agent", USER_AGENT)
            .send_json(issue);

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
                return StatusSnafu { code, body }.fail();
            }
            Err(ureq::Error::Transport(transport)) => {
                return TransportSnafu {
                    message: transport.to_string(),
                }
                .fail();
            }
        };

        tracing::debug!(status = response.status(), "issue request answered");
        let parsed: IssueResponse = response.into_json().context(DecodeSnafu)?;
        parsed.into_created()
    }
}
