// src/application/queries/editorial/mod.rs
mod rules;
mod service;

pub use service::EditorialQueryService;
