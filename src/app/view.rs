// SPDX-License-Identifier: MPL-2.0
//! Gallery layout: trigger buttons, mode picker, counters and the three
//! toast overlays.

use super::{App, Message, Sample};
use crate::design_tokens::{palette, spacing, typography};
use crate::toast::{self, PresentationMode, StandardRenderer};
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let samples = Sample::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, sample| row.push(button(text(sample.label())).on_press(Message::Show(*sample))),
        );

        let modes = PresentationMode::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, mode| {
                let picker = button(text(mode.as_str()));
                let picker = if *mode == self.mode {
                    picker
                } else {
                    picker.on_press(Message::SelectMode(*mode))
                };
                row.push(picker)
            },
        );

        let bindings = Row::new()
            .spacing(spacing::XS)
            .push(button(text(if self.loading { "Stop loading" } else { "Start loading" }))
                .on_press(Message::ToggleLoading))
            .push(button(text("Upload")).on_press(Message::StartUpload))
            .push(button(text("Clear upload")).on_press(Message::ClearUpload));

        let status = text(format!(
            "taps: {}  dismissals: {}",
            self.counters.taps.get(),
            self.counters.dismissals.get()
        ))
        .size(typography::CAPTION);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .push(text("Samples").size(typography::TITLE))
            .push(samples)
            .push(text("Presentation").size(typography::TITLE))
            .push(modes)
            .push(text("Bindings").size(typography::TITLE))
            .push(bindings)
            .push(status);

        if let Some(warning) = &self.config_warning {
            content = content.push(
                text(format!("Config ignored: {warning}"))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        let with_samples = toast::overlay(
            base,
            &self.samples,
            &StandardRenderer,
            &self.metrics,
            Message::Flag(toast::Message::Tapped),
        );
        let with_loading = toast::overlay(
            with_samples,
            &self.loading_site,
            &StandardRenderer,
            &self.metrics,
            Message::Loading(toast::Message::Tapped),
        );
        toast::overlay(
            with_loading,
            &self.upload_site,
            &StandardRenderer,
            &self.metrics,
            Message::Upload(toast::Message::Tapped),
        )
    }
}
