// tests/support/builders.rs
use serde_json::{Value, json};

/// Builds editor request bodies; defaults to a draft that scores 100.
pub struct DraftBuilder {
    title: String,
    excerpt: String,
    content: String,
    meta_description: Option<String>,
    banner_image: Option<String>,
    keywords: Vec<String>,
    read_time: Option<u32>,
    slug: Option<String>,
}

pub fn words(n: usize) -> String {
    vec!["lorem"; n].join(" ")
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self {
            title: "A practical guide to comparing personal loans in 2024".into(),
            excerpt: "e".repeat(140),
            content: format!("<p>personal loans</p><p>{}</p>", words(798)),
            meta_description: None,
            banner_image: Some("https://example.com/banner.jpg".into()),
            keywords: vec!["personal loans".into(), "interest".into(), "credit".into()],
            read_time: None,
            slug: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            meta_description: None,
            banner_image: None,
            keywords: Vec::new(),
            read_time: None,
            slug: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn meta_description(mut self, meta: impl Into<String>) -> Self {
        self.meta_description = Some(meta.into());
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn read_time(mut self, minutes: u32) -> Self {
        self.read_time = Some(minutes);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({
            "title": self.title,
            "excerpt": self.excerpt,
            "content": self.content,
            "keywords": self.keywords,
        });
        if let Some(meta) = self.meta_description {
            body["metaDescription"] = json!(meta);
        }
        if let Some(banner) = self.banner_image {
            body["bannerImage"] = json!(banner);
        }
        if let Some(minutes) = self.read_time {
            body["readTime"] = json!(minutes);
        }
        if let Some(slug) = self.slug {
            body["slug"] = json!(slug);
        }
        body
    }
}
