/// Markdown scanning for link-wrapped images
///
/// Walks the markdown event stream and collects every image nested inside a
/// link, in document order. Bare images have nothing to enlarge to, so they
/// are skipped.
use super::CandidateImage;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Append the region's (link, image) pairs to `candidates`, in document order
pub fn scan_markdown(markdown: &str, candidates: &mut Vec<CandidateImage>) {
    let mut link: Option<String> = None;
    let mut image: Option<CandidateImage> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some(dest_url.into_string());
            }
            Event::End(TagEnd::Link) => {
                link = None;
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                // Only images nested inside a link are candidates
                if let Some(href) = &link {
                    image = Some(CandidateImage {
                        link: href.clone(),
                        source: dest_url.into_string(),
                        alt: String::new(),
                    });
                }
            }
            Event::Text(text) => {
                // Inside an image, text events carry the alt text
                if let Some(candidate) = &mut image {
                    candidate.alt.push_str(&text);
                }
            }
            Event::End(TagEnd::Image) => {
                if let Some(candidate) = image.take() {
                    candidates.push(candidate);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(markdown: &str) -> Vec<CandidateImage> {
        let mut candidates = Vec::new();
        scan_markdown(markdown, &mut candidates);
        candidates
    }

    #[test]
    fn linked_images_are_collected() {
        let candidates = scan(
            "# Title\n\n[![screenshot](docs/shot.png)](https://example.com/repo/blob/main/docs/shot.png)\n",
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].link,
            "https://example.com/repo/blob/main/docs/shot.png"
        );
        assert_eq!(candidates[0].source, "docs/shot.png");
        assert_eq!(candidates[0].alt, "screenshot");
    }

    #[test]
    fn bare_images_are_skipped() {
        let candidates = scan("![no link here](docs/shot.png)\n");
        assert!(candidates.is_empty());
    }

    #[test]
    fn plain_links_are_skipped() {
        let candidates = scan("[just a link](https://example.com)\n");
        assert!(candidates.is_empty());
    }

    #[test]
    fn document_order_is_preserved() {
        let candidates = scan(
            "[![first](a.png)](https://e.com/r/blob/main/a.png)\n\n\
             some text\n\n\
             [![second](b.png)](https://e.com/r/blob/main/b.png)\n",
        );

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].alt, "first");
        assert_eq!(candidates[1].alt, "second");
    }

    #[test]
    fn links_without_targets_yield_empty_candidates() {
        // The filter rejects these later; the scanner still records the pair
        let candidates = scan("[![icon](icon.png)]()\n");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].link.is_empty());
    }
}
