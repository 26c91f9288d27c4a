/// Overlay state for the enlarged-image layer
///
/// The overlay is a singleton owned by the application state: created once,
/// shown and hidden by visibility toggling, its content replaced wholesale on
/// each activation and left in place on hide.
use iced::widget::image::Handle;

/// What the overlay currently displays
#[derive(Debug, Clone)]
pub struct OverlayContent {
    /// Resolved raw image URL of the enlarged asset
    pub url: String,
    /// Decodable handle when the asset is available locally
    /// Remote assets are never fetched; their overlay shows a labeled placeholder
    pub handle: Option<Handle>,
}

/// The enlarged-image overlay
///
/// States: Hidden and Visible, starting Hidden. `show` swaps content and
/// makes the overlay visible (repeated `show` is a plain content swap);
/// `hide` only toggles visibility.
#[derive(Debug, Default)]
pub struct Overlay {
    visible: bool,
    content: Option<OverlayContent>,
}

impl Overlay {
    /// Replace the content wholesale and make the overlay visible
    pub fn show(&mut self, content: OverlayContent) {
        self.content = Some(content);
        self.visible = true;
    }

    /// Make the overlay invisible; content stays in place until the next show
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The most recently shown content, whether or not the overlay is visible
    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(url: &str) -> OverlayContent {
        OverlayContent {
            url: url.to_string(),
            handle: None,
        }
    }

    #[test]
    fn starts_hidden_with_no_content() {
        let overlay = Overlay::default();
        assert!(!overlay.is_visible());
        assert!(overlay.content().is_none());
    }

    #[test]
    fn show_makes_the_overlay_visible() {
        let mut overlay = Overlay::default();
        overlay.show(content("https://raw.githubusercontent.com/u/r/main/a.png"));

        assert!(overlay.is_visible());
        assert_eq!(
            overlay.content().unwrap().url,
            "https://raw.githubusercontent.com/u/r/main/a.png"
        );
    }

    #[test]
    fn repeated_show_swaps_content_without_hiding() {
        let mut overlay = Overlay::default();
        overlay.show(content("first.png"));
        overlay.show(content("second.png"));

        assert!(overlay.is_visible());
        assert_eq!(overlay.content().unwrap().url, "second.png");
    }

    #[test]
    fn hide_keeps_the_content_in_place() {
        let mut overlay = Overlay::default();
        overlay.show(content("kept.png"));
        overlay.hide();

        assert!(!overlay.is_visible());
        assert_eq!(overlay.content().unwrap().url, "kept.png");

        overlay.show(content("next.png"));
        assert_eq!(overlay.content().unwrap().url, "next.png");
    }
}
