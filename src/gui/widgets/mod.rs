use std::path::{Path, PathBuf};

use iced::{
    Element, Length,
    widget::{Column, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::gui::Message;

/// Titled, bordered group of controls.
pub fn section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![text(title).size(16), content.into()].spacing(10))
        .style(bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One row per image with reorder and remove buttons.
pub fn file_list(images: &[PathBuf], enabled: bool) -> Element<'_, Message> {
    if images.is_empty() {
        return container(text("No images selected"))
            .padding(10)
            .height(Length::Fill)
            .into();
    }

    let last = images.len() - 1;
    let rows = images.iter().enumerate().map(|(i, path)| {
        row![
            text(format!("{}. {}", i + 1, file_name(path))).width(Length::Fill),
            button("Up").on_press_maybe((enabled && i > 0).then_some(Message::MoveUp(i))),
            button("Down").on_press_maybe((enabled && i < last).then_some(Message::MoveDown(i))),
            button("Remove").on_press_maybe(enabled.then_some(Message::RemoveImage(i))),
        ]
        .spacing(5)
        .align_y(iced::Alignment::Center)
        .into()
    });

    scrollable(Column::with_children(rows).spacing(5).padding(5))
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/shots/a.png")), "a.png");
        assert_eq!(file_name(Path::new("b.jpg")), "b.jpg");
        assert_eq!(file_name(Path::new("/")), "/");
    }
}
