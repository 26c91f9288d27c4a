/// Thumbnail gallery for candidate images
use crate::page::CandidateImage;
use crate::Message;
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Stack};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

/// Pixel size of a gallery cell (matches the generated thumbnail size)
const CELL_SIZE: f32 = 256.0;

/// Build the wrapping grid of candidate thumbnails
pub fn gallery<'a>(
    candidates: &'a [CandidateImage],
    thumbnails: &'a [Option<Handle>],
    hovered: Option<usize>,
) -> Element<'a, Message> {
    let cells = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let thumbnail = thumbnails.get(index).and_then(|slot| slot.as_ref());
            cell(index, candidate, thumbnail, hovered == Some(index))
        })
        .collect();

    container(Wrap::with_elements(cells).spacing(12.0).line_spacing(12.0))
        .padding(16)
        .into()
}

/// A single clickable gallery cell with its hover affordance
fn cell<'a>(
    index: usize,
    candidate: &'a CandidateImage,
    thumbnail: Option<&Handle>,
    hovered: bool,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Pending local decode, or a remote asset we never fetch
        None => container(text(label(candidate)).size(13))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let framed = container(preview)
        .width(Length::Fixed(CELL_SIZE))
        .height(Length::Fixed(CELL_SIZE))
        .padding(6)
        .style(container::rounded_box);

    let mut layers: Vec<Element<'a, Message>> = vec![framed.into()];
    if hovered {
        layers.push(maximize_badge());
    }

    mouse_area(
        Stack::with_children(layers)
            .width(Length::Fixed(CELL_SIZE))
            .height(Length::Fixed(CELL_SIZE)),
    )
    .interaction(iced::mouse::Interaction::Pointer)
    .on_press(Message::ImageClicked(index))
    .on_enter(Message::HoverEntered(index))
    .on_exit(Message::HoverLeft(index))
    .into()
}

/// Text shown in place of a thumbnail
fn label(candidate: &CandidateImage) -> &str {
    if candidate.alt.is_empty() {
        &candidate.link
    } else {
        &candidate.alt
    }
}

/// Decorative maximize glyph shown over the hovered cell
fn maximize_badge<'a>() -> Element<'a, Message> {
    container(text("⛶").size(20))
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding(8)
        .into()
}
