//! API utilities for frontend-backend communication
//!
//! Base path lookup and URL joining.

use crate::config::config;

/// Base path every REST call is made under, e.g. `/api/v1`
pub fn api_base() -> String {
    config().api.base_path.clone()
}

/// Join a base path and a resource path without doubling or dropping `/`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(join_url("/api/v1/", "/polizas"), "/api/v1/polizas");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
