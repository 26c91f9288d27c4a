/// Candidate filtering and raw URL resolution
///
/// A collected (link, image) pair is only worth enlarging when the link
/// resolves to a full-resolution raster asset. The link qualifies if it sits
/// on the raw-content asset host, or if it is a blob/raw content path ending
/// in a raster extension (an optional query string is ignored).
use super::CandidateImage;
use std::path::{Path, PathBuf};

/// Host serving full-resolution assets directly
pub const RAW_CONTENT_HOST: &str = "githubusercontent.com";

/// Check whether a link points at a full-resolution raster image
///
/// Links lacking a target are rejected outright.
pub fn is_raster_link(link: &str) -> bool {
    if link.is_empty() {
        return false;
    }

    link.contains(RAW_CONTENT_HOST) || is_raster_content_path(link)
}

/// Check for a blob/raw content path ending in a raster extension
fn is_raster_content_path(link: &str) -> bool {
    // An optional query string may follow the extension
    let path = match link.split_once('?') {
        Some((path, _query)) => path,
        None => link,
    };

    let segment = match path.find("/blob/").or_else(|| path.find("/raw/")) {
        Some(index) => index,
        None => return false,
    };

    match path.rfind('.') {
        Some(dot) if dot > segment => {
            matches!(&path[dot + 1..], "png" | "jpg" | "jpeg" | "gif")
        }
        _ => false,
    }
}

/// Get the raw URL of a candidate image
///
/// If the enclosing link already points at the raw-content host it is used
/// directly. Otherwise the visible link wraps a rendered thumbnail, and the
/// raw URL is the nested image's own source.
pub fn raw_image_url(candidate: &CandidateImage) -> &str {
    if candidate.link.contains(RAW_CONTENT_HOST) {
        &candidate.link
    } else {
        &candidate.source
    }
}

/// Where a raw image URL can actually be loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An asset on disk, relative to the page folder root
    Local(PathBuf),
    /// A remote asset; collected and displayed, but never fetched
    Remote(String),
}

/// Resolve a raw image URL against the page folder root
pub fn resolve_source(page_root: &Path, raw_url: &str) -> ImageSource {
    if raw_url.starts_with("http://") || raw_url.starts_with("https://") {
        ImageSource::Remote(raw_url.to_string())
    } else {
        let relative = raw_url.trim_start_matches("./");
        ImageSource::Local(page_root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(link: &str, source: &str) -> CandidateImage {
        CandidateImage {
            link: link.to_string(),
            source: source.to_string(),
            alt: String::new(),
        }
    }

    #[test]
    fn raw_content_host_links_pass() {
        assert!(is_raster_link(
            "https://raw.githubusercontent.com/user/repo/main/shot.png"
        ));
        // The host alone qualifies, whatever the path looks like
        assert!(is_raster_link(
            "https://user-images.githubusercontent.com/12345/67890-abcdef"
        ));
    }

    #[test]
    fn blob_paths_with_raster_extensions_pass() {
        for extension in ["png", "jpg", "jpeg", "gif"] {
            let link = format!("https://example.com/user/repo/blob/main/shot.{extension}");
            assert!(is_raster_link(&link), "{link} should pass");
        }
        assert!(is_raster_link(
            "https://example.com/user/repo/raw/main/shot.png"
        ));
    }

    #[test]
    fn query_strings_are_ignored() {
        assert!(is_raster_link(
            "https://example.com/user/repo/blob/main/shot.png?raw=true"
        ));
    }

    #[test]
    fn svg_and_other_extensions_are_rejected() {
        assert!(!is_raster_link(
            "https://example.com/user/repo/blob/main/diagram.svg"
        ));
        assert!(!is_raster_link(
            "https://example.com/user/repo/blob/main/README.md"
        ));
    }

    #[test]
    fn empty_links_are_rejected() {
        assert!(!is_raster_link(""));
    }

    #[test]
    fn raster_extensions_without_content_paths_are_rejected() {
        assert!(!is_raster_link("https://example.com/shot.png"));
    }

    #[test]
    fn extension_before_content_segment_is_rejected() {
        assert!(!is_raster_link("https://example.png/user/repo/blob/main"));
    }

    #[test]
    fn raw_url_is_the_link_when_already_on_the_asset_host() {
        let candidate = candidate(
            "https://raw.githubusercontent.com/user/repo/main/shot.png",
            "docs/shot.png",
        );
        assert_eq!(
            raw_image_url(&candidate),
            "https://raw.githubusercontent.com/user/repo/main/shot.png"
        );
    }

    #[test]
    fn raw_url_falls_back_to_the_nested_image_source() {
        let candidate = candidate(
            "https://example.com/user/repo/blob/main/docs/shot.png",
            "docs/shot.png",
        );
        assert_eq!(raw_image_url(&candidate), "docs/shot.png");
    }

    #[test]
    fn relative_urls_resolve_against_the_page_root() {
        let root = Path::new("/pages/repo");
        assert_eq!(
            resolve_source(root, "./docs/shot.png"),
            ImageSource::Local(PathBuf::from("/pages/repo/docs/shot.png"))
        );
        assert_eq!(
            resolve_source(root, "docs/shot.png"),
            ImageSource::Local(PathBuf::from("/pages/repo/docs/shot.png"))
        );
    }

    #[test]
    fn http_urls_resolve_to_remote_sources() {
        let root = Path::new("/pages/repo");
        let url = "https://raw.githubusercontent.com/user/repo/main/shot.png";
        assert_eq!(
            resolve_source(root, url),
            ImageSource::Remote(url.to_string())
        );
    }
}
