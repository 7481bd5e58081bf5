// src/presentation/http/controllers/editorial.rs
use crate::application::{
    commands::editorial::{
        DraftFields, EditKeywordsCommand, EvaluateDraftCommand, KeywordEdit, PrepareDraftCommand,
    },
    dto::{EvaluationDto, PreparedDraftDto, ScoringRulesDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Editor field values. Every field is optional on the wire; missing text
/// fields are treated as empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub banner_image: Option<String>,
    pub keywords: Vec<String>,
    pub read_time: Option<u32>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub date: Option<NaiveDate>,
    pub published: bool,
}

impl From<DraftRequest> for DraftFields {
    fn from(request: DraftRequest) -> Self {
        Self {
            title: request.title,
            excerpt: request.excerpt,
            content: request.content,
            meta_description: request.meta_description,
            banner_image: request.banner_image,
            keywords: request.keywords,
            read_time: request.read_time,
            author: request.author,
            slug: request.slug,
            date: request.date,
            published: request.published,
        }
    }
}

/// Exactly one of `add` or `remove` must be set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditKeywordsRequest {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub add: Option<String>,
    #[serde(default)]
    pub remove: Option<usize>,
}

impl TryFrom<EditKeywordsRequest> for EditKeywordsCommand {
    type Error = ApplicationError;

    fn try_from(request: EditKeywordsRequest) -> Result<Self, Self::Error> {
        let edit = match (request.add, request.remove) {
            (Some(keyword), None) => KeywordEdit::Add(keyword),
            (None, Some(index)) => KeywordEdit::Remove(index),
            _ => {
                return Err(ApplicationError::validation(
                    "exactly one of `add` or `remove` is required",
                ));
            }
        };
        Ok(Self {
            keywords: request.keywords,
            edit,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/editorial/evaluate",
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Score and advisory issues for the draft.", body = EvaluationDto)
    ),
    tag = "Editorial"
)]
pub async fn evaluate_draft(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<DraftRequest>,
) -> Json<EvaluationDto> {
    let command = EvaluateDraftCommand {
        draft: payload.into(),
    };

    Json(state.services.editorial_commands.evaluate_draft(command))
}

#[utoipa::path(
    post,
    path = "/api/v1/editorial/prepare",
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Draft with derived fields and its evaluation.", body = PreparedDraftDto),
        (status = 400, description = "Title or content missing, or read time out of range.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Editorial"
)]
pub async fn prepare_draft(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<DraftRequest>,
) -> HttpResult<Json<PreparedDraftDto>> {
    let command = PrepareDraftCommand {
        draft: payload.into(),
    };

    state
        .services
        .editorial_commands
        .prepare_draft(command)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/editorial/keywords",
    request_body = EditKeywordsRequest,
    responses(
        (status = 200, description = "Keyword list after the edit.", body = KeywordsResponse),
        (status = 400, description = "Ambiguous edit or index out of range.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Editorial"
)]
pub async fn edit_keywords(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<EditKeywordsRequest>,
) -> HttpResult<Json<KeywordsResponse>> {
    let command = EditKeywordsCommand::try_from(payload).map_err(HttpError::from_error)?;

    let keywords = state
        .services
        .editorial_commands
        .edit_keywords(command)
        .into_http()?;

    Ok(Json(KeywordsResponse { keywords }))
}

#[utoipa::path(
    get,
    path = "/api/v1/editorial/rules",
    responses(
        (status = 200, description = "Active scoring thresholds and rule weights.", body = ScoringRulesDto)
    ),
    tag = "Editorial"
)]
pub async fn scoring_rules(Extension(state): Extension<HttpState>) -> Json<ScoringRulesDto> {
    Json(state.services.editorial_queries.scoring_rules())
}
