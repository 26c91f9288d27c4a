use chrono::Local;
use iced::widget::{
    button, center, column, container, image, opaque, row, scrollable, text, Space,
};
use iced::{Alignment, ContentFit, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

pub mod overlay;
pub mod page;
pub mod ui;
pub mod watch;

use overlay::{Overlay, OverlayContent};
use page::filter::{self, ImageSource};
use page::{thumbnail, Page};

/// Main application state
struct Viewer {
    /// The currently open page, if its folder had an active region
    page: Option<Page>,
    /// Thumbnail handles, one slot per candidate image
    thumbnails: Vec<Option<image::Handle>>,
    /// The enlarged-image overlay
    overlay: Overlay,
    /// Index of the candidate currently under the pointer
    hovered: Option<usize>,
    /// Bumped on every page swap so stale thumbnail results are dropped
    generation: u64,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Open Page" button
    OpenPage,
    /// A page load requested by the user finished
    PageOpened(Result<Option<Page>, String>),
    /// A page reload triggered by the watcher finished
    PageRefreshed(Result<Option<Page>, String>),
    /// The page folder watcher reported an event
    PageEvent(watch::PageEvent),
    /// A background thumbnail decode finished
    ThumbnailReady {
        generation: u64,
        index: usize,
        handle: Option<image::Handle>,
    },
    /// User clicked a candidate image
    ImageClicked(usize),
    /// Pointer entered a candidate image
    HoverEntered(usize),
    /// Pointer left a candidate image
    HoverLeft(usize),
    /// User clicked the overlay background
    OverlayDismissed,
}

impl Viewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🖼️  Repo Image Viewer ready");

        let viewer = Viewer {
            page: None,
            thumbnails: Vec::new(),
            overlay: Overlay::default(),
            hovered: None,
            generation: 0,
            status: String::from("Open a page folder to browse its images."),
        };

        // A folder given on the command line is opened right away
        let task = match std::env::args().nth(1) {
            Some(folder) => Task::perform(
                open_page_async(PathBuf::from(folder)),
                Message::PageOpened,
            ),
            None => Task::none(),
        };

        (viewer, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPage => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Page Folder")
                    .pick_folder();

                if let Some(root) = folder {
                    self.status = format!("Opening {}...", root.display());
                    return Task::perform(open_page_async(root), Message::PageOpened);
                }

                Task::none()
            }
            Message::PageOpened(result) => match result {
                Ok(Some(page)) => self.install_page(page),
                Ok(None) => {
                    self.clear_page();
                    self.status =
                        String::from("No README or discussion thread found in this folder.");
                    Task::none()
                }
                Err(error) => {
                    self.status = format!("Failed to open page: {error}");
                    eprintln!("⚠️  {}", self.status);
                    Task::none()
                }
            },
            Message::PageRefreshed(result) => match result {
                // Do nothing if the page address hasn't changed
                Ok(Some(page))
                    if self.page.as_ref().map(|current| &current.address)
                        == Some(&page.address) =>
                {
                    Task::none()
                }
                Ok(Some(page)) => {
                    println!("🔄 Page changed, re-scanning");
                    let task = self.install_page(page);
                    self.status = format!(
                        "{} (re-scanned at {})",
                        self.status,
                        Local::now().format("%H:%M:%S")
                    );
                    task
                }
                Ok(None) => {
                    if self.page.is_some() {
                        self.clear_page();
                        self.status = String::from("Page region disappeared.");
                    }
                    Task::none()
                }
                Err(error) => {
                    self.status = format!("Failed to re-scan page: {error}");
                    Task::none()
                }
            },
            Message::PageEvent(watch::PageEvent::Changed) => {
                if let Some(page) = &self.page {
                    return Task::perform(
                        open_page_async(page.root.clone()),
                        Message::PageRefreshed,
                    );
                }
                Task::none()
            }
            Message::PageEvent(watch::PageEvent::WatchFailed(error)) => {
                self.status = format!("Page watcher stopped: {error}");
                eprintln!("⚠️  {}", self.status);
                Task::none()
            }
            Message::ThumbnailReady {
                generation,
                index,
                handle,
            } => {
                // Drop results that belong to a previous scan
                if generation == self.generation {
                    if let Some(slot) = self.thumbnails.get_mut(index) {
                        *slot = handle;
                    }
                }
                Task::none()
            }
            Message::ImageClicked(index) => {
                if let Some(content) = self.resolve_overlay_content(index) {
                    println!("🔍 Viewing {}", content.url);
                    self.overlay.show(content);
                }
                Task::none()
            }
            Message::HoverEntered(index) => {
                self.hovered = Some(index);
                Task::none()
            }
            Message::HoverLeft(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::OverlayDismissed => {
                self.overlay.hide();
                Task::none()
            }
        }
    }

    /// Replace the current page wholesale and queue thumbnail decodes
    ///
    /// The candidate list and its thumbnail slots are rebuilt from scratch;
    /// nothing from the previous scan survives, so a cell can never dispatch
    /// more than one click per press.
    fn install_page(&mut self, page: Page) -> Task<Message> {
        self.generation += 1;
        self.hovered = None;
        self.thumbnails = vec![None; page.candidates.len()];

        let generation = self.generation;
        let decodes: Vec<Task<Message>> = page
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let raw_url = filter::raw_image_url(candidate);
                match filter::resolve_source(&page.root, raw_url) {
                    ImageSource::Local(path) => Some(Task::perform(
                        thumbnail::generate(path),
                        move |handle| Message::ThumbnailReady {
                            generation,
                            index,
                            handle,
                        },
                    )),
                    // Remote assets are never fetched; their cells keep a placeholder
                    ImageSource::Remote(_) => None,
                }
            })
            .collect();

        println!("✅ Page loaded: {} candidate image(s)", page.candidates.len());
        self.status = format!(
            "{} preview image(s) found in {}.",
            page.candidates.len(),
            page.root.display()
        );
        self.page = Some(page);

        Task::batch(decodes)
    }

    /// Forget the current page and everything scanned from it
    fn clear_page(&mut self) {
        self.generation += 1;
        self.page = None;
        self.thumbnails.clear();
        self.hovered = None;
    }

    /// Resolve the raw image URL of a clicked candidate into overlay content
    fn resolve_overlay_content(&self, index: usize) -> Option<OverlayContent> {
        let page = self.page.as_ref()?;
        let candidate = page.candidates.get(index)?;

        let url = filter::raw_image_url(candidate).to_string();
        let handle = match filter::resolve_source(&page.root, &url) {
            ImageSource::Local(path) => Some(image::Handle::from_path(path)),
            // No network requests: remote assets get a labeled placeholder
            ImageSource::Remote(_) => None,
        };

        Some(OverlayContent { url, handle })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            button("Open Page").on_press(Message::OpenPage).padding(10),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .align_y(Alignment::Center)
        .padding(16);

        let body: Element<Message> = match &self.page {
            Some(page) if !page.candidates.is_empty() => scrollable(ui::gallery::gallery(
                &page.candidates,
                &self.thumbnails,
                self.hovered,
            ))
            .height(Length::Fill)
            .into(),
            Some(_) => center(text("No preview images on this page.").size(16)).into(),
            None => center(text("No page open.").size(16)).into(),
        };

        let base: Element<Message> = column![header, body].into();

        if self.overlay.is_visible() {
            ui::modal::modal(base, self.overlay_view(), Message::OverlayDismissed)
        } else {
            base
        }
    }

    /// Build the content layer shown inside the overlay
    fn overlay_view(&self) -> Element<Message> {
        let Some(content) = self.overlay.content() else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };

        match &content.handle {
            Some(handle) => enlarged_image(handle.clone()),
            None => center(opaque(
                container(
                    column![
                        text("Remote image (not fetched)").size(18),
                        text(&content.url).size(13),
                    ]
                    .spacing(10)
                    .align_x(Alignment::Center),
                )
                .padding(24)
                .style(container::rounded_box),
            ))
            .into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Watch the open page folder for in-page navigation
    fn subscription(&self) -> Subscription<Message> {
        match &self.page {
            Some(page) => watch::page_changes(page.root.clone()).map(Message::PageEvent),
            None => Subscription::none(),
        }
    }
}

fn main() -> iced::Result {
    iced::application("Repo Image Viewer", Viewer::update, Viewer::view)
        .subscription(Viewer::subscription)
        .theme(Viewer::theme)
        .centered()
        .run_with(Viewer::new)
}

/// Load a page folder in the background
/// Errors are stringified so the result can travel inside a message
async fn open_page_async(root: PathBuf) -> Result<Option<Page>, String> {
    println!("🔍 Scanning page folder: {}", root.display());
    page::load(root).await.map_err(|error| error.to_string())
}

/// The enlarged raster, inset so a margin of background stays clickable
///
/// The image itself is opaque to presses; the surrounding tenth of the
/// window falls through to the dismissing background.
fn enlarged_image(handle: image::Handle) -> Element<'static, Message> {
    let picture = opaque(
        image(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    row![
        Space::with_width(Length::FillPortion(1)),
        column![
            Space::with_height(Length::FillPortion(1)),
            container(picture)
                .width(Length::Fill)
                .height(Length::FillPortion(18)),
            Space::with_height(Length::FillPortion(1)),
        ]
        .width(Length::FillPortion(18))
        .height(Length::Fill),
        Space::with_width(Length::FillPortion(1)),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
