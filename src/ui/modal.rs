/// Modal overlay layer
use iced::widget::{container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length};

/// Lay `content` over `base` with a dimmed, click-to-dismiss background
///
/// The background catches every press and produces `on_dismiss`. Content the
/// caller wraps in `opaque` swallows its own presses, so clicking the
/// displayed image never dismisses the layer.
pub fn modal<'a, Message>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let background = mouse_area(
        container(Space::new(Length::Fill, Length::Fill)).style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.12, 0.12, 0.12, 0.7).into()),
            ..container::Style::default()
        }),
    )
    .on_press(on_dismiss);

    stack![base, opaque(background), content].into()
}
