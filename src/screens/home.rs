//! Signed-in landing screen

use crate::messages::Message;
use crate::state::AppState;
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

pub struct HomeScreen;

impl HomeScreen {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let greeting = match &state.session {
            Some(session) => format!("Signed in as {}", session.email),
            None => "Signed in".to_string(),
        };

        let content = column![
            Space::with_height(Length::FillPortion(1)),
            text("Relay").size(48),
            text(greeting).size(16),
            Space::with_height(30),
            button(text("Sign Out"))
                .padding(12)
                .on_press(Message::Logout),
            Space::with_height(Length::FillPortion(1)),
        ]
        .align_items(Alignment::Center)
        .spacing(10)
        .padding(40);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}
