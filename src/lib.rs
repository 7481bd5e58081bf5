//! Editorial quality scoring for blog post drafts.
//!
//! The scoring engine lives in [`domain::editorial`]; [`application`] wires it
//! to the caller-side fallbacks (meta description from excerpt, rich text to
//! plain text) and [`presentation::http`] exposes it over HTTP.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
