#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::project::Model as ProjectModel;
    use db::models::web_vital_metric::{Model as MetricModel, NewSample};
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn record(db: &DatabaseConnection, project_id: i64, metric_type: &str, value: f64) {
        MetricModel::create(
            db,
            NewSample {
                project_id,
                metric_type: metric_type.into(),
                value,
                user_agent: None,
                url: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn list_projects_returns_id_and_name() {
        let (app, app_state) = make_test_app().await;
        ProjectModel::create(app_state.db(), "Alpha").await.unwrap();
        ProjectModel::create(app_state.db(), "Beta").await.unwrap();

        let res = app.oneshot(get("/api/projects")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = read_json_body(res).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Alpha");
        assert_eq!(data[1]["name"], "Beta");
        assert!(data[0]["id"].as_i64().is_some());
    }

    #[tokio::test]
    async fn get_unknown_project_is_not_found() {
        let (app, _) = make_test_app().await;
        let res = app.oneshot(get("/api/projects/4242")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_integer_project_id_returns_error_envelope() {
        let (app, _) = make_test_app().await;

        for uri in [
            "/api/projects/abc",
            "/api/projects/abc/summary",
            "/api/projects/abc/series?type=lcp",
        ] {
            let res = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");

            let json = read_json_body(res).await;
            assert_eq!(json["success"], false);
            assert!(json["data"].is_null());
            assert!(
                json["message"]
                    .as_str()
                    .unwrap()
                    .starts_with("Invalid project id"),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn summary_is_unknown_without_samples() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Fresh").await.unwrap();

        let res = app
            .oneshot(get(&format!("/api/projects/{}/summary", project.id)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = read_json_body(res).await;
        assert_eq!(json["data"]["level"], "unknown");
        assert_eq!(json["data"]["icon"], "❓");
    }

    #[tokio::test]
    async fn summary_warns_and_lists_failing_metric() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let project = ProjectModel::create(db, "Mixed").await.unwrap();
        record(db, project.id, "lcp", 2000.0).await;
        record(db, project.id, "lcp", 2400.0).await;
        record(db, project.id, "cls", 0.25).await;

        let res = app
            .oneshot(get(&format!("/api/projects/{}/summary", project.id)))
            .await
            .unwrap();
        let json = read_json_body(res).await;
        let data = &json["data"];
        assert_eq!(data["level"], "warn");
        assert_eq!(data["color"], "yellow");
        assert_eq!(data["failing"][0]["kind"], "cls");
        assert_eq!(data["failing"][0]["formatted"], "0.25");
        assert_eq!(data["details"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn summary_is_bad_when_every_present_metric_fails() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let project = ProjectModel::create(db, "Slow").await.unwrap();
        record(db, project.id, "lcp", 2000.0).await;
        record(db, project.id, "lcp", 3000.0).await;

        let res = app
            .oneshot(get(&format!("/api/projects/{}/summary", project.id)))
            .await
            .unwrap();
        let json = read_json_body(res).await;
        assert_eq!(json["data"]["level"], "bad");
        assert_eq!(json["data"]["details"][0]["average"], 2500.0);
    }

    #[tokio::test]
    async fn series_validates_type() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Series").await.unwrap();

        let missing = app
            .clone()
            .oneshot(get(&format!("/api/projects/{}/series", project.id)))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let unknown = app
            .oneshot(get(&format!("/api/projects/{}/series?type=fid", project.id)))
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn series_is_oldest_first_with_deviation() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let project = ProjectModel::create(db, "Series").await.unwrap();
        record(db, project.id, "fcp", 1000.0).await;
        record(db, project.id, "fcp", 3000.0).await;

        let res = app
            .oneshot(get(&format!("/api/projects/{}/series?type=fcp", project.id)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = read_json_body(res).await;
        let data = &json["data"];
        assert_eq!(data["average"], 2000.0);
        assert_eq!(data["points"][0]["value"], 1000.0);
        assert_eq!(data["points"][0]["deviation_pct"], -50.0);
        assert_eq!(data["points"][1]["value"], 3000.0);
        assert_eq!(data["points"][1]["label"], "just now");
    }
}
