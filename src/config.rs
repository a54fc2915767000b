// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Tracker credentials and target repository, read from the environment.

use snafu::prelude::*;

/// Personal access token used as a bearer token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Owner (user or organization) of the target repository.
pub const OWNER_VAR: &str = "REPO_OWNER";

/// Name of the target repository.
pub const REPO_VAR: &str = "REPO_NAME";

/// Optional API root, for GitHub Enterprise hosts.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// API root used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Error type for missing configuration.
#[derive(Debug, Snafu)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[snafu(display("missing required environment variable '{name}'"))]
    MissingVar {
        /// The variable name.
        name: &'static str,
    },
}

/// Settings needed to create issues.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer token.
    pub token: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// API root without a trailing slash.
    pub api_url: String,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] for the first required variable
    /// that is unset or empty, checked in the order token, owner, repo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .context(MissingVarSnafu { name })
        };

        let token = required(TOKEN_VAR)?;
        let owner = required(OWNER_VAR)?;
        let repo = required(REPO_VAR)?;
        let api_url = lookup(API_URL_VAR)
            .filter(|value| !value.is_empty())
            .map_or_else(
                || DEFAULT_API_URL.to_owned(),
                |url| url.trim_end_matches('/').to_owned(),
            );

        Ok(Self {
            token,
            owner,
            repo,
            api_url,
        })
    }

    /// The `owner/repo` slug.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// URL of the repository's issue-creation endpoint.
    #[must_use]
    pub fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_url, self.owner, self.repo)
    }
}
