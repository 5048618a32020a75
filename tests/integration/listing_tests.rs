//! Listing, filtering and export endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::{self, FailingStore, RecordingRunner, TestDatabase};
    use actix_web::test;
    use cmdtools_rs::HttpServer;
    use cmdtools_rs::config::StoreErrorPolicy;
    use cmdtools_rs::storage::ResourceStore;
    use serde_json::Value;
    use std::sync::Arc;

    macro_rules! app_over {
        ($store:expr, $policy:expr) => {
            test::init_service(HttpServer::create_app(common::app_state(
                $store,
                $policy,
                Arc::new(RecordingRunner::new()),
            )))
            .await
        };
    }

    async fn seeded_store() -> Arc<dyn ResourceStore> {
        TestDatabase::seeded().await.store()
    }

    #[actix_web::test]
    async fn test_all_data_has_every_table() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        let req = test::TestRequest::get().uri("/api/data").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["cmd_tools"].as_array().unwrap().len(), 3);
        assert_eq!(body["prompt_tools"].as_array().unwrap().len(), 2);
        assert_eq!(body["win_programs"].as_array().unwrap().len(), 5);
        assert_eq!(body["websites"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_each_listing_route_is_ordered() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        for (uri, expected) in [
            ("/api/cmd-tools", 3),
            ("/api/prompt-tools", 2),
            ("/api/win-programs", 5),
            ("/api/websites", 3),
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{}", uri);
            assert_eq!(resp.headers().get("X-Total-Count").unwrap(), &expected.to_string());

            let body: Value = test::read_body_json(resp).await;
            let seq: Vec<i64> = body
                .as_array()
                .unwrap()
                .iter()
                .map(|item| item["iSeqNo"].as_i64().unwrap())
                .collect();
            let mut sorted = seq.clone();
            sorted.sort();
            assert_eq!(seq, sorted, "{}", uri);
            assert_eq!(seq.len(), expected);
        }
    }

    #[actix_web::test]
    async fn test_filter_and_paging() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        let req = test::TestRequest::get()
            .uri("/api/cmd-tools?filter=LIST")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "2");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/win-programs?page=2&limit=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "5");
        let body: Value = test::read_body_json(resp).await;
        let seq: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["iSeqNo"].as_i64().unwrap())
            .collect();
        assert_eq!(seq, vec![3, 4]);
    }

    #[actix_web::test]
    async fn test_invalid_paging_is_bad_request() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        for uri in [
            "/api/websites?page=0",
            "/api/websites?limit=0",
            "/api/websites?limit=1001",
            "/api/websites?page=abc",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_store_failure_degrades_to_empty_list() {
        let app = app_over!(Arc::new(FailingStore), StoreErrorPolicy::Degrade);

        let req = test::TestRequest::get().uri("/api/cmd-tools").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!([]));

        let req = test::TestRequest::get().uri("/api/data").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["websites"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_store_failure_can_propagate() {
        let app = app_over!(Arc::new(FailingStore), StoreErrorPolicy::Propagate);

        let req = test::TestRequest::get().uri("/api/cmd-tools").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].as_str().unwrap().contains("locked"));
    }

    #[actix_web::test]
    async fn test_export_document() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        let req = test::TestRequest::get()
            .uri("/api/export/websites?filter=wiki")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let disposition = resp
            .headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["table_name"], "WebSite");
        assert_eq!(body["total_records"], 3);
        assert_eq!(body["filtered_records"], 1);
        assert_eq!(body["data"][0]["Remark"], "Team Wiki");
        assert!(body["export_time"].is_string());
    }

    #[actix_web::test]
    async fn test_export_unknown_table() {
        let app = app_over!(seeded_store().await, StoreErrorPolicy::Degrade);

        let req = test::TestRequest::get().uri("/api/export/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
