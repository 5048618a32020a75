//! Read-only listing and export of the tool tables

use super::{ListQuery, TOTAL_COUNT_HEADER};
use crate::core::ResourceTable;
use crate::core::catalog::{ExportDocument, ItemFilter};
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure listing routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let mut scope = web::scope("/api")
        .route("/data", web::get().to(all_tables))
        .route("/export/{table}", web::get().to(export_table));

    for table in ResourceTable::ALL {
        scope = scope.route(
            &format!("/{}", table.slug()),
            web::get().to(move |state: web::Data<AppState>, query: web::Query<ListQuery>| {
                list_table(state, table, query)
            }),
        );
    }

    cfg.service(scope);
}

/// GET /api/data
pub async fn all_tables(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshot = state.catalog.snapshot().await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// GET /api/{table-slug}
///
/// The body stays a plain array; the unpaged count goes in `X-Total-Count`.
pub async fn list_table(
    state: web::Data<AppState>,
    table: ResourceTable,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let page = query.page()?;

    let items = state.catalog.list(table).await?;
    let items = ItemFilter::default().with_text(query.filter()).apply(items);
    let total = items.len();

    let items = match page {
        Some(page) => page.slice(items),
        None => items,
    };
    debug!(table = %table, total, returned = items.len(), "Serving table");

    Ok(HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, total.to_string()))
        .json(items))
}

/// GET /api/export/{table}
pub async fn export_table(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let table: ResourceTable = path.parse().map_err(AppError::validation)?;

    let items = state.catalog.list(table).await?;
    let total = items.len();
    let filtered = ItemFilter::default().with_text(query.filter()).apply(items);
    let document = ExportDocument::new(table, total, filtered);

    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(format!(
            "{}_export_{}.json",
            table.table_name(),
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))],
    };

    Ok(HttpResponse::Ok()
        .insert_header(disposition)
        .json(document))
}
