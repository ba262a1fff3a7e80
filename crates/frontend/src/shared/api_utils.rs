//! API utilities for frontend-backend communication

/// Порт backend-сервера
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// URL of a store collection, or of one document when `id` is given.
/// Segments are percent-encoded.
pub fn store_url(base: &str, collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!(
            "{}/api/store/{}/{}",
            base,
            urlencoding::encode(collection),
            urlencoding::encode(id)
        ),
        None => format!("{}/api/store/{}", base, urlencoding::encode(collection)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("https:", "tkap.vn"), "https://tkap.vn:3000");
    }

    #[test]
    fn test_store_url() {
        assert_eq!(
            store_url("http://h:3000", "landingPages", None),
            "http://h:3000/api/store/landingPages"
        );
        assert_eq!(
            store_url("http://h:3000", "products", Some("p 1/x")),
            "http://h:3000/api/store/products/p%201%2Fx"
        );
    }
}
