//! Sign-in screen for Relay Desktop

use crate::messages::Message;
use crate::state::AppState;
use crate::validate::Field;
use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Color, Element, Length};

pub struct SignInScreen;

impl SignInScreen {
    pub fn view(state: &AppState) -> Element<'static, Message> {
        let title = text("Relay").size(48);
        let subtitle = text("Sign in to your account").size(16);

        // Server rejection banner, shown above the form
        let banner: Element<'static, Message> = match &state.submit_error {
            Some(error) => container(
                row![
                    text(error)
                        .style(iced::theme::Text::Color(Color::from_rgb(0.9, 0.3, 0.3)))
                        .size(14)
                        .width(Length::Fill),
                    button(text("X").size(12))
                        .on_press(Message::ClearSubmitError)
                        .style(iced::theme::Button::Text),
                ]
                .spacing(10),
            )
            .padding(10)
            .width(Length::Fill)
            .into(),
            None => Space::with_height(0).into(),
        };

        let email_field = Self::labeled_input(state, "Email", "you@example.com", Field::Email, false);
        let password_field = Self::labeled_input(state, "Password", "Password", Field::Password, true);

        let submit_label = if state.is_submitting {
            "Signing in..."
        } else {
            "Sign In"
        };
        let mut submit = button(
            text(submit_label).horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(14);
        if state.form.is_valid() && !state.is_submitting {
            submit = submit.on_press(Message::Submit);
        }

        let form = column![
            banner,
            email_field,
            Space::with_height(12),
            password_field,
            Space::with_height(20),
            submit,
        ]
        .spacing(4)
        .max_width(400);

        let content = column![
            Space::with_height(Length::FillPortion(1)),
            title,
            subtitle,
            Space::with_height(40),
            form,
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

    fn labeled_input(
        state: &AppState,
        label: &'static str,
        placeholder: &'static str,
        field: Field,
        secure: bool,
    ) -> Column<'static, Message> {
        let mut input = text_input(placeholder, state.form.value(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit)
            .padding(12);
        if secure {
            input = input.secure(true);
        }

        let mut col = column![text(label).size(14), input].spacing(4);

        // Inline error, gated on the field having been touched
        if let Some(error) = state.form.visible_error(field) {
            col = col.push(
                text(error.to_string())
                    .style(iced::theme::Text::Color(Color::from_rgb(0.9, 0.3, 0.3)))
                    .size(12),
            );
        }

        col
    }
}
