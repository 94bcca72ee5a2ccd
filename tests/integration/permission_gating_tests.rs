//! Permission gating of routes and navigation

#[cfg(test)]
mod tests {
    use crate::common::{DEMO_PASSWORD, test_app, test_config, test_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_admin_sees_full_navigation() {
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
            test::TestRequest::get().uri("/api/navigation").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            ["Dashboard", "Tasks", "Calendar", "Analytics", "Members", "Settings"]
        );
    }

    #[actix_web::test]
    async fn test_member_navigation_hides_gated_entries() {
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
            test::TestRequest::get().uri("/api/navigation").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Dashboard", "Tasks", "Calendar", "Settings"]);
    }

    #[actix_web::test]
    async fn test_member_is_denied_directory_and_analytics() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        state
            .auth
            .login("alex.chen@company.com", DEMO_PASSWORD)
            .await
            .unwrap();

        for uri in ["/api/members", "/api/members/summary", "/api/analytics"] {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{} leaked", uri);
        }
    }

    #[actix_web::test]
    async fn test_manager_reads_analytics_but_not_directory() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        state
            .auth
            .login("mike.johnson@company.com", DEMO_PASSWORD)
            .await
            .unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/analytics").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/members").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_task_creation_requires_manage_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        let new_task = json!({
            "title": "Write onboarding guide",
            "description": "Draft the new-hire onboarding guide",
            "assignee": "Alex Chen",
            "category": "Development",
            "priority": "medium",
            "due_date": "2024-02-01",
        });

        state
            .auth
            .login("alex.chen@company.com", DEMO_PASSWORD)
            .await
            .unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/tasks")
                .set_json(&new_task)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        state
            .auth
            .login("mike.johnson@company.com", DEMO_PASSWORD)
            .await
            .unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/tasks")
                .set_json(&new_task)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_member_may_only_move_own_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        state
            .auth
            .login("alex.chen@company.com", DEMO_PASSWORD)
            .await
            .unwrap();

        let tasks = state
            .workspace
            .tasks
            .list(&taskmaster_rs::core::workspace::TaskQuery::default());
        let own = tasks.iter().find(|t| t.assignee == "Alex Chen").unwrap();
        let other = tasks.iter().find(|t| t.assignee == "Sarah Wilson").unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/tasks/{}/status", own.metadata.id))
                .set_json(json!({ "status": "in-progress" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/tasks/{}/status", other.metadata.id))
                .set_json(json!({ "status": "completed" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_meeting_scheduling_requires_permission() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&test_config(&dir)).await;
        let app = test::init_service(test_app(state.clone())).await;

        let meeting = json!({
            "title": "Sprint Planning",
            "date": "2024-02-05",
            "start_time": "10:00:00",
            "duration_minutes": 60,
            "kind": "project",
            "attendees": ["Mike Johnson", "Alex Chen"],
        });

        state
            .auth
            .login("alex.chen@company.com", DEMO_PASSWORD)
            .await
            .unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/meetings")
                .set_json(&meeting)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        state
            .auth
            .login("emma.davis@company.com", DEMO_PASSWORD)
            .await
            .unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/meetings")
                .set_json(&meeting)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_admin_invites_by_email_and_link() {
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
            test::TestRequest::post()
                .uri("/api/members/invite")
                .set_json(json!({
                    "method": "email",
                    "email": "jennifer.lopez@company.com",
                    "role": "member",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/members/invite")
                .set_json(json!({ "method": "link" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(
            body["data"]["url"]
                .as_str()
                .unwrap()
                .contains("/invite/")
        );
    }
}
