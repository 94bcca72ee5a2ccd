//! Login/logout flow over HTTP

#[cfg(test)]
mod tests {
    use crate::common::{DEMO_PASSWORD, test_app, test_config, test_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_health_is_public() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_protected_routes_reject_unauthenticated_callers() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state)).await;

        for uri in [
            "/auth/me",
            "/api/navigation",
            "/api/dashboard",
            "/api/tasks",
            "/api/members",
            "/api/analytics",
        ] {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{} leaked", uri);
        }
    }

    #[actix_web::test]
    async fn test_login_establishes_session() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({
                    "email": "john@acme.com",
                    "password": DEMO_PASSWORD,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["email"], "john@acme.com");
        assert_eq!(body["data"]["role"], "admin");
        assert_eq!(body["data"]["organization"], "Acme Corporation");

        // The session is now visible through /auth/me
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/auth/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(state.auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_fails() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({
                    "email": "john@acme.com",
                    "password": "not-the-password",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(!state.auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_login_with_unknown_email_fails() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({
                    "email": "nobody@acme.com",
                    "password": DEMO_PASSWORD,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(!state.auth.is_authenticated());
    }

    #[actix_web::test]
    async fn test_logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        state
            .auth
            .login("john@acme.com", DEMO_PASSWORD)
            .await
            .unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/auth/logout").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!state.auth.is_authenticated());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/auth/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_permissions_endpoint_lists_role_set() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        state
            .auth
            .login("alex.chen@company.com", DEMO_PASSWORD)
            .await
            .unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/auth/permissions").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["role"], "member");
        let permissions = body["data"]["permissions"].as_array().unwrap();
        assert!(permissions.contains(&json!("view_tasks")));
        assert!(permissions.contains(&json!("update_own_tasks")));
        assert!(!permissions.contains(&json!("manage_users")));
    }
}
