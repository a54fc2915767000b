// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Create GitHub issues from a quest and boss seed file.
//!
//! A seed file describes standalone quests, quest chains and bosses. This
//! crate flattens it into issue candidates, renders a Markdown "card" for
//! each one, and submits them to the GitHub Issues API one at a time.
//!
//! # Overview
//!
//! 1. [`seed`] loads the JSON document into typed records
//! 2. [`candidate`] flattens the records into an ordered list of issues
//! 3. [`card`] renders issue bodies from structured quest and boss fields
//! 4. [`github`] creates each issue over HTTP
//! 5. [`import`] drives the submission loop and reports the results
//!
//! # Example
//!
//! ```no_run
//! use quest2gh::candidate::collect_candidates;
//! use quest2gh::config::Config;
//! use quest2gh::github::GitHubClient;
//! use quest2gh::import::{Reporter, run_import};
//! use quest2gh::seed::load_seed;
//!
//! let config = Config::from_env().unwrap();
//! let seed = load_seed("quest_seed.json".as_ref()).unwrap();
//! let candidates = collect_candidates(&seed);
//!
//! let client = GitHubClient::new(&config);
//! let summary = run_import(&candidates, &client, &mut Reporter::new(std::io::stdout(), false)).unwrap();
//! println!("{}/{} created", summary.succeeded, summary.attempted);
//! ```
//!
//! # Modules
//!
//! - [`seed`]: seed document types and loading
//! - [`candidate`]: flattening records into issue candidates
//! - [`card`]: Markdown bodies for quests and bosses
//! - [`config`]: credentials and target repository from the environment
//! - [`github`]: the issue tracker seam and its GitHub implementation
//! - [`import`]: the sequential import loop and its output

#![deny(missing_docs)]

pub mod candidate;
pub mod card;
pub mod config;
pub mod github;
pub mod import;
pub mod seed;
