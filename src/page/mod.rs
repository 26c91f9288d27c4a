/// Page loading module
///
/// This module handles:
/// - Detecting the active page region (README or discussion thread)
/// - Scanning the region's markdown for link-wrapped images (scan.rs)
/// - Filtering candidates down to raster assets (filter.rs)
/// - Generating gallery thumbnails (thumbnail.rs)

pub mod filter;
pub mod scan;
pub mod thumbnail;

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

/// The section of the page that may contain previewable images
///
/// At most one region is active per page; README wins when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRegion {
    /// A `README.md` file at the page folder root
    Readme,
    /// A `discussion/` folder of comment files, visited in filename order
    Discussion,
}

/// Identity of the loaded page content
///
/// The analog of the browser address: a watcher event only causes a re-scan
/// when the address of the freshly resolved page differs from this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Path of the active region document (or thread folder)
    pub document: PathBuf,
    /// Latest content modification time within the region
    pub modified: SystemTime,
}

/// An image whose enclosing link references a full-size raster asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateImage {
    /// Target of the enclosing link
    pub link: String,
    /// Source of the nested image (the rendered thumbnail)
    pub source: String,
    /// Alt text of the nested image
    pub alt: String,
}

/// A loaded page: the active region and its candidate images
#[derive(Debug, Clone)]
pub struct Page {
    /// Folder the page was loaded from
    pub root: PathBuf,
    /// Which region is active
    pub region: PageRegion,
    /// Identity of the loaded content
    pub address: Address,
    /// Candidate images in document order
    pub candidates: Vec<CandidateImage>,
}

/// Errors while reading a page folder
///
/// A folder without any region is not an error; it loads as `None`.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the page at `root`
///
/// Returns `Ok(None)` when the folder has neither a README nor a discussion
/// thread; the page is simply inactive and nothing else happens.
pub async fn load(root: PathBuf) -> Result<Option<Page>, PageError> {
    let Some((region, document)) = detect_region(&root)? else {
        return Ok(None);
    };

    let (address, candidates) = match region {
        PageRegion::Readme => load_readme(&document).await?,
        PageRegion::Discussion => load_discussion(&document).await?,
    };

    Ok(Some(Page {
        root,
        region,
        address,
        candidates,
    }))
}

/// Find the active region of a page folder
fn detect_region(root: &Path) -> Result<Option<(PageRegion, PathBuf)>, PageError> {
    // README wins when both regions are present
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().eq_ignore_ascii_case("readme.md") && entry.file_type()?.is_file()
        {
            return Ok(Some((PageRegion::Readme, entry.path())));
        }
    }

    let discussion = root.join("discussion");
    if discussion.is_dir() {
        return Ok(Some((PageRegion::Discussion, discussion)));
    }

    Ok(None)
}

/// Scan a README document for candidate images
async fn load_readme(document: &Path) -> Result<(Address, Vec<CandidateImage>), PageError> {
    let markdown = tokio::fs::read_to_string(document).await?;
    let modified = tokio::fs::metadata(document).await?.modified()?;

    let mut candidates = Vec::new();
    scan::scan_markdown(&markdown, &mut candidates);
    candidates.retain(|candidate| filter::is_raster_link(&candidate.link));

    let address = Address {
        document: document.to_path_buf(),
        modified,
    };
    Ok((address, candidates))
}

/// Scan a discussion thread for candidate images, comment by comment
async fn load_discussion(thread: &Path) -> Result<(Address, Vec<CandidateImage>), PageError> {
    let mut candidates = Vec::new();
    let mut modified = SystemTime::UNIX_EPOCH;

    for comment in comment_files(thread) {
        let markdown = tokio::fs::read_to_string(&comment).await?;
        if let Ok(time) = tokio::fs::metadata(&comment).await?.modified() {
            modified = modified.max(time);
        }
        scan::scan_markdown(&markdown, &mut candidates);
    }

    candidates.retain(|candidate| filter::is_raster_link(&candidate.link));

    let address = Address {
        document: thread.to_path_buf(),
        modified,
    };
    Ok((address, candidates))
}

/// Comment files of a discussion thread, in filename (thread) order
fn comment_files(thread: &Path) -> Vec<PathBuf> {
    WalkDir::new(thread)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|extension| extension.eq_ignore_ascii_case("md"))
        })
        .collect()
}
