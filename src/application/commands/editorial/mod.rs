// src/application/commands/editorial/mod.rs
mod draft_fields;
mod evaluate;
mod keywords;
mod prepare;
mod service;

pub use draft_fields::DraftFields;
pub use evaluate::EvaluateDraftCommand;
pub use keywords::{EditKeywordsCommand, KeywordEdit};
pub use prepare::PrepareDraftCommand;
pub use service::EditorialCommandService;
