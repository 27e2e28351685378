//! Form HTTP routes
//!
//! Endpoints for generating, storing, inspecting, and validating forms.
//! Everything a renderer needs lives in the responses here: descriptors for
//! widget selection, defaults for initial state, and per-field issue lists
//! for inline error display.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::descriptor::FieldDescriptor;
use crate::generator::FormSource;
use crate::observability::Logger;
use crate::registry::{FormRegistry, StoredForm};
use crate::schema::{FieldValue, FormSchema, ValidationErrors};

use super::errors::{RouteError, RouteResult};

// ==================
// Shared State
// ==================

/// State shared across form handlers.
pub struct FormState {
    pub registry: FormRegistry,
    /// None when no API key is configured; `/forms/generate` then answers 503.
    pub source: Option<FormSource>,
}

impl FormState {
    pub fn new(source: Option<FormSource>) -> Self {
        Self {
            registry: FormRegistry::new(),
            source,
        }
    }
}

/// Build the form router.
pub fn form_routes(state: Arc<FormState>) -> Router {
    Router::new()
        .route("/", get(list_forms).post(create_form))
        .route("/generate", post(generate_form))
        .route("/:id", get(get_form).delete(delete_form))
        .route("/:id/validate", post(validate_form))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub form_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    pub defaults: BTreeMap<String, FieldValue>,
    pub created_at: DateTime<Utc>,
}

impl FormResponse {
    fn from_stored(form: &StoredForm) -> Self {
        Self {
            form_id: form.id,
            prompt: form.prompt.clone(),
            fields: form.descriptors.clone(),
            defaults: form.schema.default_values(),
            created_at: form.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub form_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub field_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FormListResponse {
    pub forms: Vec<FormSummary>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub values: Map<String, Value>,
}

/// `ok: true` carries the coerced values; `ok: false` carries per-field
/// issue lists keyed by field name.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, FieldValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

// ==================
// Handlers
// ==================

async fn generate_form(
    State(state): State<Arc<FormState>>,
    Json(request): Json<GenerateRequest>,
) -> RouteResult<Json<FormResponse>> {
    if request.prompt.trim().is_empty() {
        return Err(RouteError::EmptyPrompt);
    }
    let source = state.source.as_ref().ok_or(RouteError::GeneratorUnavailable)?;

    let descriptors = source.generate(&request.prompt).await?;
    let schema = FormSchema::compile(&descriptors);
    let form = state
        .registry
        .insert(Some(request.prompt), descriptors, schema);

    Logger::info(
        "form_generated",
        &[
            ("form_id", &form.id.to_string()),
            ("fields", &form.schema.len().to_string()),
        ],
    );
    Ok(Json(FormResponse::from_stored(&form)))
}

async fn create_form(
    State(state): State<Arc<FormState>>,
    Json(request): Json<CreateFormRequest>,
) -> RouteResult<Json<FormResponse>> {
    let schema = FormSchema::compile(&request.fields);
    let form = state.registry.insert(None, request.fields, schema);

    Logger::info(
        "form_created",
        &[
            ("form_id", &form.id.to_string()),
            ("fields", &form.schema.len().to_string()),
        ],
    );
    Ok(Json(FormResponse::from_stored(&form)))
}

async fn list_forms(State(state): State<Arc<FormState>>) -> Json<FormListResponse> {
    let forms: Vec<FormSummary> = state
        .registry
        .list()
        .iter()
        .map(|form| FormSummary {
            form_id: form.id,
            prompt: form.prompt.clone(),
            field_count: form.schema.len(),
            created_at: form.created_at,
        })
        .collect();
    let total = forms.len();
    Json(FormListResponse { forms, total })
}

async fn get_form(
    State(state): State<Arc<FormState>>,
    Path(id): Path<Uuid>,
) -> RouteResult<Json<FormResponse>> {
    let form = state.registry.get(id).ok_or(RouteError::FormNotFound(id))?;
    Ok(Json(FormResponse::from_stored(&form)))
}

async fn delete_form(
    State(state): State<Arc<FormState>>,
    Path(id): Path<Uuid>,
) -> RouteResult<Json<Value>> {
    if !state.registry.remove(id) {
        return Err(RouteError::FormNotFound(id));
    }
    Ok(Json(serde_json::json!({ "deleted": id })))
}

async fn validate_form(
    State(state): State<Arc<FormState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ValidateRequest>,
) -> RouteResult<Json<ValidateResponse>> {
    let form = state.registry.get(id).ok_or(RouteError::FormNotFound(id))?;

    let response = match form.schema.validate(&request.values) {
        Ok(values) => ValidateResponse {
            ok: true,
            values: Some(values),
            errors: None,
        },
        Err(errors) => ValidateResponse {
            ok: false,
            values: None,
            errors: Some(errors),
        },
    };

    Logger::info(
        "form_validated",
        &[
            ("form_id", &id.to_string()),
            ("ok", if response.ok { "true" } else { "false" }),
        ],
    );
    Ok(Json(response))
}
