// Copyright 2026 Fedisnap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fedisnap library — pull public data from Mastodon-family instances and
//! flatten it into spreadsheet workbooks.
//!
//! Two pipelines, exposed as the `instance` and `timeline` subcommands of
//! the `fedisnap` binary:
//! - instance snapshot export: three REST endpoints, one workbook with
//!   three sheets;
//! - timeline scrape: a browser scrolls a public timeline, posts are
//!   extracted from the rendered HTML, enriched with engagement counts,
//!   and written as one sheet.

pub mod api;
pub mod cli;
pub mod renderer;
pub mod tabular;
pub mod timeline;
pub mod workbook;
