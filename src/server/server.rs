//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::{Catalog, Launcher};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::database::Database;
use crate::storage::{ResourceStore, UnavailableStore};
use crate::utils::error::{AppError, ErrorResponse, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpResponse, HttpServer as ActixHttpServer,
    error::InternalError,
    middleware::DefaultHeaders,
    web,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting to the configured database
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let store = Self::connect_store(config).await?;
        let catalog = Catalog::new(store, config.database().on_list_error);
        let launcher = Launcher::with_shell(config.launcher().clone());

        Ok(Self::with_state(AppState::new(config.clone(), catalog, launcher)))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Connect to the database; an unreachable database leaves the server running unhealthy
    async fn connect_store(config: &Config) -> Result<Arc<dyn ResourceStore>> {
        match Database::new(config.database()).await {
            Ok(db) => {
                if config.database().run_migrations {
                    db.migrate().await?;
                }
                Ok(Arc::new(db))
            }
            Err(e) => {
                warn!(
                    url = %config.database().redacted_url(),
                    error = %e,
                    "Database unreachable, serving with an unavailable store"
                );
                Ok(Arc::new(UnavailableStore::new(e.detail())))
            }
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config.server().clone();
        let cors_config = &server_config.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            let methods: Vec<actix_web::http::Method> = cors_config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse().ok())
                .collect();
            if !methods.is_empty() {
                cors = cors.allowed_methods(methods);
            }

            cors = cors
                .allow_any_header()
                .expose_headers([routes::TOTAL_COUNT_HEADER])
                .max_age(cors_config.max_age as usize);

            if cors_config.allow_credentials {
                cors = cors.supports_credentials();
            }
        }

        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(|err, _req| {
                let message = format!("Invalid request body: {}", err);
                InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(ErrorResponse::new(message.clone(), message)),
                )
                .into()
            });

        let query_config = web::QueryConfig::default().error_handler(|err, _req| {
            let message = format!("Invalid query string: {}", err);
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse::new(message.clone(), message)),
            )
            .into()
        });

        let mut app = App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(query_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "cmdtools-rs")))
            .configure(routes::health::configure_routes)
            .configure(routes::resources::configure_routes)
            .configure(routes::opendoc::configure_routes);

        // Registered last so the API routes take precedence.
        if let Some(dir) = &server_config.static_dir {
            app = app.service(actix_files::Files::new("/", dir).index_file("index.html"));
        }

        app
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} ({} workers)", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| AppError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
