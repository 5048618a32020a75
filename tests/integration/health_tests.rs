//! Health endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::{self, FailingStore, RecordingRunner, TestDatabase};
    use actix_web::test;
    use cmdtools_rs::HttpServer;
    use cmdtools_rs::config::StoreErrorPolicy;
    use cmdtools_rs::storage::UnavailableStore;
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_with_reachable_store() {
        let db = TestDatabase::new().await;
        let state = common::app_state(
            db.store(),
            StoreErrorPolicy::Degrade,
            Arc::new(RecordingRunner::new()),
        );
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_health_with_unavailable_store() {
        let state = common::app_state(
            Arc::new(UnavailableStore::new("connection refused")),
            StoreErrorPolicy::Degrade,
            Arc::new(RecordingRunner::new()),
        );
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "disconnected");
    }

    #[actix_web::test]
    async fn test_health_with_failing_store() {
        let state = common::app_state(
            Arc::new(FailingStore),
            StoreErrorPolicy::Propagate,
            Arc::new(RecordingRunner::new()),
        );
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }
}
