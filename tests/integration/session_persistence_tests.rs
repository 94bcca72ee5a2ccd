//! Session restoration across simulated restarts

#[cfg(test)]
mod tests {
    use crate::common::{DEMO_PASSWORD, test_config};
    use std::sync::Arc;
    use taskmaster_rs::auth::{AuthSystem, DirectoryVerifier, FileMarkerStore};
    use taskmaster_rs::config::Config;
    use taskmaster_rs::core::workspace::Workspace;

    /// A fresh guard over the same marker path, as a process restart would
    async fn build_guard(config: &Config, workspace: &Workspace) -> AuthSystem {
        AuthSystem::new(
            config.auth(),
            &config.workspace().organization,
            Arc::new(DirectoryVerifier::new(workspace.members.clone())),
            Arc::new(FileMarkerStore::new(config.auth().marker_path.clone())),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let workspace = Workspace::new(config.workspace()).unwrap();

        let auth = build_guard(&config, &workspace).await;
        auth.login("john@acme.com", DEMO_PASSWORD).await.unwrap();

        let restarted = build_guard(&config, &workspace).await;
        assert!(!restarted.is_authenticated());
        assert!(restarted.initialize().await.unwrap());
        assert!(restarted.is_authenticated());

        let session = restarted.current_session().unwrap();
        assert_eq!(session.email, "john@acme.com");
        assert!(restarted.has_permission("manage_users"));
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_marker() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let workspace = Workspace::new(config.workspace()).unwrap();

        let auth = build_guard(&config, &workspace).await;
        auth.login("john@acme.com", DEMO_PASSWORD).await.unwrap();
        auth.logout().await.unwrap();

        let restarted = build_guard(&config, &workspace).await;
        assert!(!restarted.initialize().await.unwrap());
        assert!(!restarted.is_authenticated());
    }

    #[tokio::test]
    async fn test_tampered_marker_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let workspace = Workspace::new(config.workspace()).unwrap();

        let auth = build_guard(&config, &workspace).await;
        auth.login("john@acme.com", DEMO_PASSWORD).await.unwrap();

        // Corrupt the stored marker
        let marker_path = &config.auth().marker_path;
        tokio::fs::write(marker_path, "tampered-marker-value")
            .await
            .unwrap();

        let restarted = build_guard(&config, &workspace).await;
        assert!(!restarted.initialize().await.unwrap());
        assert!(!restarted.is_authenticated());
    }

    #[tokio::test]
    async fn test_marker_signed_with_other_secret_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let workspace = Workspace::new(config.workspace()).unwrap();

        let auth = build_guard(&config, &workspace).await;
        auth.login("john@acme.com", DEMO_PASSWORD).await.unwrap();

        // A "restart" under a rotated secret must not trust the old marker
        let mut rotated = config.clone();
        rotated.dashboard.auth.session_secret =
            "a-rotated-secret-that-is-also-long-enough!".to_string();

        let restarted = build_guard(&rotated, &workspace).await;
        assert!(!restarted.initialize().await.unwrap());
        assert!(!restarted.is_authenticated());
    }

    #[tokio::test]
    async fn test_restored_session_for_departed_member_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let workspace = Workspace::new(config.workspace()).unwrap();

        let auth = build_guard(&config, &workspace).await;
        auth.login("john@acme.com", DEMO_PASSWORD).await.unwrap();

        // Restart against an empty directory: the marker subject is unknown
        let mut no_seed = config.clone();
        no_seed.dashboard.workspace.seed_demo_data = false;
        let empty_workspace = Workspace::new(no_seed.workspace()).unwrap();

        let restarted = build_guard(&config, &empty_workspace).await;
        assert!(!restarted.initialize().await.unwrap());
        assert!(!restarted.is_authenticated());
    }
}
