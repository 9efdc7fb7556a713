//! Section header widget
//!
//! Displays a section title with an optional caption underneath.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{column, text};
use iced::{Element, Font};

use crate::ui::theme;

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `caption` - Muted line under the title, skipped when empty
pub fn view<'a, Message: 'a>(title: &'a str, caption: &'a str) -> Element<'a, Message> {
    let title_text = text(title)
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    if caption.is_empty() {
        return title_text.into();
    }

    column![
        title_text,
        text(caption).size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(2)
    .into()
}
