//! Helper functions for middleware

/// Check if a route is public (doesn't require an active session)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health", "/auth/login"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}
