#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::project::Model as ProjectModel;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/metrics")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn record_metric_echoes_fields_and_assigns_timestamp() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Demo Project").await.unwrap();

        let res = app
            .oneshot(post(json!({
                "projectId": project.id,
                "type": "lcp",
                "value": 2140.5,
                "userAgent": "Mozilla/5.0",
                "url": "https://example.com/"
            })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["access-control-allow-origin"], "*");

        let json = read_json_body(res).await;
        assert_eq!(json["success"], true);
        let data = &json["data"];
        assert_eq!(data["projectId"], project.id);
        assert_eq!(data["type"], "lcp");
        assert_eq!(data["value"], 2140.5);
        assert_eq!(data["userAgent"], "Mozilla/5.0");
        assert_eq!(data["url"], "https://example.com/");
        assert!(data["id"].as_i64().is_some());
        assert!(data["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn zero_value_is_accepted() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Demo Project").await.unwrap();

        let res = app
            .oneshot(post(json!({ "projectId": project.id, "type": "cls", "value": 0 })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let json = read_json_body(res).await;
        assert_eq!(json["data"]["value"], 0.0);
        assert!(json["data"]["userAgent"].is_null());
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Demo Project").await.unwrap();

        let cases = [
            (json!({ "type": "lcp", "value": 1 }), "projectId"),
            (json!({ "projectId": project.id, "value": 1 }), "type"),
            (json!({ "projectId": project.id, "type": "lcp" }), "value"),
            (json!({ "projectId": project.id, "type": "lcp", "value": null }), "value"),
        ];

        for (body, field) in cases {
            let res = app.clone().oneshot(post(body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "missing {field}");
            let json = read_json_body(res).await;
            assert_eq!(json["success"], false);
            assert!(json["message"].as_str().unwrap().contains(field));
        }
    }

    #[tokio::test]
    async fn unknown_project_is_rejected() {
        let (app, _) = make_test_app().await;

        let res = app
            .oneshot(post(json!({ "projectId": 9999, "type": "lcp", "value": 1 })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = read_json_body(res).await;
        assert_eq!(json["message"], "Invalid projectId");
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/metrics")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"projectId": "one""#))
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
