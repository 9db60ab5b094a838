//! Helpers for requesting static assets of the site.

/// Origin of the page, like "http://localhost:8080"
///
/// Empty string if window is not available.
pub fn site_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Full URL of a site asset.
///
/// Absolute URLs are returned unchanged; paths are resolved against the page
/// origin.
///
/// # Example
/// ```rust,ignore
/// let url = asset_url("/story_map_indonesia.json");
/// ```
pub fn asset_url(path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    join_url(&site_base(), path)
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080", "/story_map_indonesia.json"),
            "http://localhost:8080/story_map_indonesia.json"
        );
        assert_eq!(join_url("https://peta.id/", "data.json"), "https://peta.id/data.json");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            asset_url("https://cdn.example.org/lokasi.json"),
            "https://cdn.example.org/lokasi.json"
        );
    }
}
