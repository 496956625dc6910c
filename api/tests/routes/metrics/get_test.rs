#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use db::models::project::Model as ProjectModel;
    use db::models::web_vital_metric::{Model as MetricModel, NewSample};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn sample(project_id: i64, metric_type: &str, value: f64) -> NewSample {
        NewSample {
            project_id,
            metric_type: metric_type.into(),
            value,
            user_agent: None,
            url: None,
        }
    }

    #[tokio::test]
    async fn missing_project_id_is_a_bad_request() {
        let (app, _) = make_test_app().await;

        let res = app.oneshot(get("/api/metrics")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = read_json_body(res).await;
        assert_eq!(json["message"], "projectId is required");
    }

    #[tokio::test]
    async fn non_numeric_project_id_is_a_bad_request() {
        let (app, _) = make_test_app().await;
        let res = app.oneshot(get("/api/metrics?projectId=abc")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn project_without_samples_returns_empty_list() {
        let (app, app_state) = make_test_app().await;
        let project = ProjectModel::create(app_state.db(), "Quiet").await.unwrap();

        let res = app
            .oneshot(get(&format!("/api/metrics?projectId={}", project.id)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = read_json_body(res).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn results_are_newest_first_and_filtered_by_type() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let project = ProjectModel::create(db, "Busy").await.unwrap();
        let base = Utc::now() - Duration::hours(1);

        for i in 0..5 {
            MetricModel::create_at(
                db,
                sample(project.id, "lcp", 1000.0 + i as f64),
                base + Duration::minutes(i),
            )
            .await
            .unwrap();
        }
        MetricModel::create_at(db, sample(project.id, "cls", 0.2), base + Duration::minutes(30))
            .await
            .unwrap();

        let res = app
            .clone()
            .oneshot(get(&format!("/api/metrics?projectId={}&type=lcp", project.id)))
            .await
            .unwrap();
        let json = read_json_body(res).await;
        let values: Vec<f64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["value"].as_f64().unwrap())
            .collect();
        assert_eq!(values, vec![1004.0, 1003.0, 1002.0, 1001.0, 1000.0]);

        let res = app
            .oneshot(get(&format!("/api/metrics?projectId={}&type=", project.id)))
            .await
            .unwrap();
        let json = read_json_body(res).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["type"], "cls");
    }

    #[tokio::test]
    async fn results_are_capped_at_one_thousand() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let project = ProjectModel::create(db, "Flood").await.unwrap();
        let base = Utc::now() - Duration::days(1);

        for i in 0..1005 {
            MetricModel::create_at(
                db,
                sample(project.id, "ttfb", i as f64),
                base + Duration::seconds(i),
            )
            .await
            .unwrap();
        }

        let res = app
            .oneshot(get(&format!("/api/metrics?projectId={}", project.id)))
            .await
            .unwrap();
        let json = read_json_body(res).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1000);
        assert_eq!(rows[0]["value"], 1004.0);
        assert_eq!(rows[999]["value"], 5.0);

        let timestamps: Vec<&str> = rows.iter().map(|r| r["timestamp"].as_str().unwrap()).collect();
        let parsed: Vec<_> = timestamps
            .iter()
            .map(|t| chrono::DateTime::parse_from_rfc3339(t).unwrap())
            .collect();
        assert!(parsed.windows(2).all(|w| w[0] > w[1]));
    }
}
