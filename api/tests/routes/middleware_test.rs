#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        extract::ConnectInfo,
        http::{Request, StatusCode, header},
    };
    use std::net::SocketAddr;
    use tower::ServiceExt;

    #[tokio::test]
    async fn request_without_connect_info_is_logged_and_served() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .header(header::USER_AGENT, "vitals-test/1.0")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(read_json_body(res).await["data"], "OK");
    }

    #[tokio::test]
    async fn request_with_connect_info_is_served() {
        let (app, _) = make_test_app().await;

        let addr: SocketAddr = "10.0.0.7:51234".parse().unwrap();
        let mut req = Request::builder()
            .method("GET")
            .uri("/api/projects")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn preflight_passes_through_untouched() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/metrics")
            .body(Body::empty())
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
