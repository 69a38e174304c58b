use iced::{
    Element, Length, Task, Theme,
    widget::{button, column, container, pick_list, progress_bar, row, text, text_input},
};
use rfd::AsyncFileDialog;
use tracing::info;

use crate::gui::{
    AppState, Message, Status,
    widgets::{file_list, section},
    worker,
};
use crate::models::Alignment;
use crate::stack::CancelToken;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

pub struct StackerApp {
    state: AppState,
}

impl StackerApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Image Combiner".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let state = &mut self.state;
        match message {
            Message::AddImages => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Image Files", IMAGE_EXTENSIONS)
                    .pick_files(),
                |handles| {
                    Message::ImagesPicked(
                        handles
                            .unwrap_or_default()
                            .iter()
                            .map(|handle| handle.path().to_path_buf())
                            .collect(),
                    )
                },
            ),
            Message::ImagesPicked(paths) => {
                state.add_images(paths);
                Task::none()
            }
            Message::RemoveImage(index) => {
                state.remove_image(index);
                Task::none()
            }
            Message::MoveUp(index) => {
                state.move_up(index);
                Task::none()
            }
            Message::MoveDown(index) => {
                state.move_down(index);
                Task::none()
            }
            Message::ClearAll => {
                state.clear();
                Task::none()
            }
            Message::SpacingChanged(value) => {
                state.set_spacing(value);
                Task::none()
            }
            Message::AlignmentSelected(alignment) => {
                state.alignment = alignment;
                Task::none()
            }
            Message::OutputChanged(value) => {
                state.output = value;
                Task::none()
            }
            Message::BrowseOutput => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Save Combined Image As")
                    .set_file_name("combined.jpg")
                    .add_filter("JPEG", &["jpg", "jpeg"])
                    .add_filter("PNG", &["png"])
                    .save_file(),
                |handle| Message::OutputPicked(handle.map(|data| data.path().to_path_buf())),
            ),
            Message::OutputPicked(path) => {
                if let Some(path) = path {
                    state.output = path.display().to_string();
                }
                Task::none()
            }
            Message::Combine => {
                if state.is_running() {
                    return Task::none();
                }
                match state.request() {
                    Ok(request) => {
                        info!("Starting combine of {} images", request.paths.len());
                        let token = CancelToken::new();
                        state.start(token.clone());
                        worker::start(request, token)
                    }
                    Err(message) => {
                        state.reject(message);
                        Task::none()
                    }
                }
            }
            Message::Cancel => {
                state.cancel();
                Task::none()
            }
            Message::Progress(percent) => {
                state.set_progress(percent);
                Task::none()
            }
            Message::Finished(result) => {
                state.finish(result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;
        let idle = !state.is_running();

        let selection = section(
            "Image Selection",
            column![
                row![
                    button("Add Images").on_press_maybe(idle.then_some(Message::AddImages)),
                    button("Clear All").on_press_maybe(
                        (idle && !state.images.is_empty()).then_some(Message::ClearAll)
                    ),
                ]
                .spacing(10),
                file_list(&state.images, idle),
            ]
            .spacing(10)
            .height(Length::Fill),
        );

        let options = section(
            "Combination Options",
            column![
                row![
                    text("Spacing (px):"),
                    text_input("0", &state.spacing)
                        .on_input_maybe(idle.then_some(Message::SpacingChanged))
                        .width(Length::Fixed(60.0)),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
                row![
                    text("Alignment:"),
                    pick_list(Alignment::ALL, Some(state.alignment), Message::AlignmentSelected),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
                row![
                    text("Output File:"),
                    text_input("combined.jpg", &state.output)
                        .on_input_maybe(idle.then_some(Message::OutputChanged))
                        .width(Length::Fill),
                    button("Browse").on_press_maybe(idle.then_some(Message::BrowseOutput)),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
            ]
            .spacing(10),
        );

        let actions = row![
            button("Combine Images").on_press_maybe(idle.then_some(Message::Combine)),
            button("Cancel").on_press_maybe((!idle).then_some(Message::Cancel)),
        ]
        .spacing(10);

        let status: Element<'_, Message> = match &state.status {
            Status::Idle => text("").into(),
            Status::Running => text(format!("Combining... {:.0}%", state.progress)).into(),
            Status::Done(message) => text(message.as_str()).style(text::success).into(),
            Status::Cancelled => text("Cancelled").into(),
            Status::Invalid(message) => text(message.as_str()).style(text::danger).into(),
            Status::Failed(message) => text(format!("An error occurred:\n{}", message))
                .style(text::danger)
                .into(),
        };

        let content = column![
            selection,
            options,
            progress_bar(0.0..=100.0, state.progress),
            actions,
            status,
        ]
        .spacing(10)
        .padding(10)
        .align_x(iced::Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

pub fn run() -> iced::Result {
    iced::application(StackerApp::new, StackerApp::update, StackerApp::view)
        .title(StackerApp::title)
        .theme(StackerApp::theme)
        .window_size((800.0, 600.0))
        .run()
}
