use crate::application::dto::EvaluationDto;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A draft with every derived field filled in, ready to hand to the draft
/// store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreparedDraftDto {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub meta_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    pub keywords: Vec<String>,
    pub read_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub slug: String,
    pub date: NaiveDate,
    pub published: bool,
    pub evaluation: EvaluationDto,
}
