//! Endpoints that open resources on the host desktop

use crate::core::catalog::ItemFilter;
use crate::core::launcher::{BatchResult, LaunchCategory, OpenTarget};
use crate::core::{ResourceItem, ResourceTable};
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Configure open routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/opendoc")
            .route("", web::post().to(open_document))
            .route("/batch", web::post().to(open_batch))
            .route("/from-db", web::post().to(open_from_db)),
    );
}

/// Body of `POST /api/opendoc`
#[derive(Debug, Clone, Deserialize)]
pub struct OpenDocRequest {
    /// Command line run as given
    pub command: Option<String>,
    /// Document path opened by the extension policy
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
}

impl OpenDocRequest {
    /// `command` wins when both fields are present
    pub fn target(&self) -> Option<OpenTarget> {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };

        non_blank(&self.command)
            .map(OpenTarget::Command)
            .or_else(|| {
                non_blank(&self.file_path).map(|path| OpenTarget::Document(path.trim().to_string()))
            })
    }
}

#[derive(Debug, Serialize)]
struct OpenDocResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    command: String,
    timestamp: String,
}

/// Body of `POST /api/opendoc/batch`
#[derive(Debug, Clone, Deserialize)]
pub struct BatchOpenRequest {
    /// Category tag: websites, programs or files
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Items to open; anything but a non-empty array is rejected
    pub items: Option<Value>,
}

/// Body of `POST /api/opendoc/from-db`
#[derive(Debug, Clone, Deserialize)]
pub struct FromDbRequest {
    pub table: Option<String>,
    /// Sequence numbers to keep; empty keeps everything
    pub ids: Option<Vec<Value>>,
    /// Case-insensitive substring over every field
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    #[serde(flatten)]
    result: BatchResult,
    #[serde(rename = "dataCount", skip_serializing_if = "Option::is_none")]
    data_count: Option<usize>,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct NoMatchResponse {
    success: bool,
    message: String,
    data: Vec<ResourceItem>,
    timestamp: String,
}

/// POST /api/opendoc
pub async fn open_document(
    state: web::Data<AppState>,
    request: web::Json<OpenDocRequest>,
) -> Result<HttpResponse> {
    let target = request
        .target()
        .ok_or_else(|| AppError::validation("Either command or filePath is required"))?;

    let (command, result) = state.launcher.open_one(&target).await;
    let timestamp = chrono::Utc::now().to_rfc3339();

    match result {
        Ok(()) => {
            info!(command = %command, "Opened");
            Ok(HttpResponse::Ok().json(OpenDocResponse {
                success: true,
                message: Some("Command executed successfully".to_string()),
                error: None,
                command,
                timestamp,
            }))
        }
        Err(e) => {
            warn!(command = %command, error = %e, "Open failed");
            Ok(HttpResponse::InternalServerError().json(OpenDocResponse {
                success: false,
                message: None,
                error: Some(e.detail()),
                command,
                timestamp,
            }))
        }
    }
}

/// POST /api/opendoc/batch
pub async fn open_batch(
    state: web::Data<AppState>,
    request: web::Json<BatchOpenRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let kind = request
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .ok_or_else(|| AppError::validation("Missing type"))?
        .to_string();

    let items: Vec<ResourceItem> = match request.items {
        Some(Value::Array(values)) if !values.is_empty() => {
            values.into_iter().map(ResourceItem::new).collect()
        }
        _ => return Err(AppError::validation("items must be a non-empty array")),
    };

    let result = state.launcher.open_batch(&kind, &items).await;
    Ok(HttpResponse::Ok().json(BatchResponse {
        result,
        data_count: None,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// POST /api/opendoc/from-db
///
/// Reads the table, narrows it by `ids` and `filter`, then runs the same
/// batch pipeline as `/api/opendoc/batch`.
pub async fn open_from_db(
    state: web::Data<AppState>,
    request: web::Json<FromDbRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let table_name = request
        .table
        .as_deref()
        .map(str::trim)
        .filter(|table| !table.is_empty())
        .ok_or_else(|| AppError::validation("Missing table"))?;

    let table: ResourceTable = table_name.parse().map_err(AppError::validation)?;
    let category = LaunchCategory::for_table(table).ok_or_else(|| {
        AppError::validation(format!("Unsupported table for opening: {}", table_name))
    })?;
    let ids = seq_numbers(request.ids.as_deref().unwrap_or_default())?;

    let items = state.catalog.list(table).await?;
    let items = ItemFilter::default()
        .with_ids(&ids)
        .with_text(request.filter.as_deref().unwrap_or(""))
        .apply(items);

    if items.is_empty() {
        debug!(table = %table, "No records matched");
        return Ok(HttpResponse::Ok().json(NoMatchResponse {
            success: false,
            message: "No matching records found".to_string(),
            data: Vec::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }));
    }

    let data_count = items.len();
    let result = state.launcher.open_batch(category.as_str(), &items).await;
    Ok(HttpResponse::Ok().json(BatchResponse {
        result,
        data_count: Some(data_count),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Accept sequence numbers given as JSON numbers or numeric strings
fn seq_numbers(values: &[Value]) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|value| {
            let parsed = match value {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            };
            parsed.ok_or_else(|| AppError::validation(format!("Invalid id: {}", value)))
        })
        .collect()
}
