// src/domain/editorial/rules.rs
//! The scoring rule table.
//!
//! Each rule measures one quantity of a draft and maps it onto an ordered list
//! of bands; the first band whose condition holds decides the points and the
//! issue text. Rules run in table order, which is also the order issues are
//! reported in.

use crate::domain::draft::{Draft, text::word_count};
use crate::domain::editorial::result::RuleCheck;
use crate::domain::editorial::thresholds::{InclusiveRange, ScoringThresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    TitleLength,
    ContentLength,
    MetaDescriptionLength,
    BannerImage,
    KeywordCount,
    PrimaryKeywordInTitle,
    PrimaryKeywordInContent,
}

impl RuleId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::TitleLength => "title_length",
            RuleId::ContentLength => "content_length",
            RuleId::MetaDescriptionLength => "meta_description_length",
            RuleId::BannerImage => "banner_image",
            RuleId::KeywordCount => "keyword_count",
            RuleId::PrimaryKeywordInTitle => "primary_keyword_in_title",
            RuleId::PrimaryKeywordInContent => "primary_keyword_in_content",
        }
    }
}

/// What a rule measured: a quantity, plus the term it was about when the
/// rule concerns a specific keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub quantity: usize,
    pub subject: Option<String>,
}

impl Measurement {
    fn of(quantity: usize) -> Self {
        Self {
            quantity,
            subject: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Zero,
    AtLeast(usize),
    Within(InclusiveRange),
    Otherwise,
}

impl Condition {
    fn holds(&self, quantity: usize) -> bool {
        match self {
            Condition::Zero => quantity == 0,
            Condition::AtLeast(min) => quantity >= *min,
            Condition::Within(range) => range.contains(quantity),
            Condition::Otherwise => true,
        }
    }
}

/// Issue text with `{n}` (measured quantity) and `{kw}` (subject) slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTemplate(String);

impl IssueTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[must_use]
    pub fn render(&self, measurement: &Measurement) -> String {
        let text = self.0.replace("{n}", &measurement.quantity.to_string());
        match &measurement.subject {
            Some(subject) => text.replace("{kw}", subject),
            None => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub condition: Condition,
    pub points: u32,
    pub issue: Option<IssueTemplate>,
}

impl Band {
    fn new(condition: Condition, points: u32) -> Self {
        Self {
            condition,
            points,
            issue: None,
        }
    }

    fn with_issue(mut self, template: impl Into<String>) -> Self {
        self.issue = Some(IssueTemplate::new(template));
        self
    }
}

/// `None` means the rule does not apply to this draft and is skipped.
pub type Measure = fn(&Draft) -> Option<Measurement>;

#[derive(Debug, Clone)]
pub struct Rule {
    pub id: RuleId,
    pub measure: Measure,
    pub bands: Vec<Band>,
}

impl Rule {
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.bands.iter().map(|band| band.points).max().unwrap_or(0)
    }

    #[must_use]
    pub fn apply(&self, draft: &Draft) -> Option<RuleCheck> {
        let measurement = (self.measure)(draft)?;
        let band = self
            .bands
            .iter()
            .find(|band| band.condition.holds(measurement.quantity));

        Some(match band {
            Some(band) => RuleCheck {
                rule: self.id,
                points: band.points,
                max_points: self.max_points(),
                issue: band.issue.as_ref().map(|issue| issue.render(&measurement)),
            },
            // A table without a catch-all band awards nothing silently.
            None => RuleCheck {
                rule: self.id,
                points: 0,
                max_points: self.max_points(),
                issue: None,
            },
        })
    }
}

fn title_length(draft: &Draft) -> Option<Measurement> {
    Some(Measurement::of(draft.title.chars().count()))
}

fn content_length(draft: &Draft) -> Option<Measurement> {
    Some(Measurement::of(word_count(&draft.content)))
}

fn meta_description_length(draft: &Draft) -> Option<Measurement> {
    let meta = draft.meta_description.as_deref().unwrap_or_default();
    Some(Measurement::of(meta.chars().count()))
}

fn banner_image(draft: &Draft) -> Option<Measurement> {
    let present = draft
        .banner_image
        .as_deref()
        .is_some_and(|url| !url.is_empty());
    Some(Measurement::of(usize::from(present)))
}

fn keyword_count(draft: &Draft) -> Option<Measurement> {
    Some(Measurement::of(draft.keywords.len()))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn keyword_placement(draft: &Draft, haystack: &str) -> Option<Measurement> {
    let keyword = draft.primary_keyword()?;
    Some(Measurement {
        quantity: usize::from(contains_ignore_case(haystack, keyword)),
        subject: Some(keyword.to_string()),
    })
}

fn primary_keyword_in_title(draft: &Draft) -> Option<Measurement> {
    keyword_placement(draft, &draft.title)
}

fn primary_keyword_in_content(draft: &Draft) -> Option<Measurement> {
    keyword_placement(draft, &draft.content)
}

/// Build the ordered rule table for the given thresholds.
#[must_use]
pub fn rule_table(thresholds: &ScoringThresholds) -> Vec<Rule> {
    let w = &thresholds.weights;
    let title = thresholds.title_chars;
    let meta = thresholds.meta_description_chars;
    let keywords = thresholds.keyword_count;

    vec![
        Rule {
            id: RuleId::TitleLength,
            measure: title_length,
            bands: vec![
                Band::new(Condition::Zero, 0).with_issue("Title is missing"),
                Band::new(Condition::Within(title), w.title_ideal),
                Band::new(Condition::Otherwise, w.title_present).with_issue(format!(
                    "Title length ({{n}} chars) - ideal is {title} characters"
                )),
            ],
        },
        Rule {
            id: RuleId::ContentLength,
            measure: content_length,
            bands: vec![
                Band::new(Condition::Zero, 0).with_issue("Content is missing"),
                Band::new(
                    Condition::AtLeast(thresholds.content_ideal_words),
                    w.content_ideal,
                ),
                Band::new(
                    Condition::AtLeast(thresholds.content_min_words),
                    w.content_good,
                )
                .with_issue(format!(
                    "Content length ({{n}} words) is good - {}+ words is ideal",
                    thresholds.content_ideal_words
                )),
                Band::new(Condition::Otherwise, w.content_short).with_issue(format!(
                    "Content is too short ({{n}} words) - aim for at least {} words",
                    thresholds.content_min_words
                )),
            ],
        },
        Rule {
            id: RuleId::MetaDescriptionLength,
            measure: meta_description_length,
            bands: vec![
                Band::new(Condition::Zero, 0).with_issue("Meta description is missing"),
                Band::new(Condition::Within(meta), w.meta_ideal),
                Band::new(Condition::Otherwise, w.meta_present).with_issue(format!(
                    "Meta description length ({{n}} chars) - ideal is {meta} characters"
                )),
            ],
        },
        Rule {
            id: RuleId::BannerImage,
            measure: banner_image,
            bands: vec![
                Band::new(Condition::Zero, 0).with_issue("Banner image is missing"),
                Band::new(Condition::Otherwise, w.banner_image),
            ],
        },
        Rule {
            id: RuleId::KeywordCount,
            measure: keyword_count,
            bands: vec![
                Band::new(Condition::Zero, 0).with_issue("Keywords are missing"),
                Band::new(Condition::Within(keywords), w.keywords_ideal),
                Band::new(Condition::Otherwise, w.keywords_present).with_issue(format!(
                    "Keyword count ({{n}}) - ideal is {keywords} keywords"
                )),
            ],
        },
        Rule {
            id: RuleId::PrimaryKeywordInTitle,
            measure: primary_keyword_in_title,
            bands: vec![
                Band::new(Condition::AtLeast(1), w.keyword_in_title),
                Band::new(Condition::Otherwise, 0)
                    .with_issue("Primary keyword \"{kw}\" is not in the title"),
            ],
        },
        Rule {
            id: RuleId::PrimaryKeywordInContent,
            measure: primary_keyword_in_content,
            bands: vec![
                Band::new(Condition::AtLeast(1), w.keyword_in_content),
                Band::new(Condition::Otherwise, 0)
                    .with_issue("Primary keyword \"{kw}\" is not in the content"),
            ],
        },
    ]
}
