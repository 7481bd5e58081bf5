// src/application/ports/util.rs

/// Turns a draft title into a URL path segment.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
