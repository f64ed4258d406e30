// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::GalleryState;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ImageSlot};
use iced::{widget::Container, Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub images: &'a HashMap<String, ImageSlot>,
    pub grid_columns: usize,
}

/// Renders the gallery window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        images: ctx.images,
        grid_columns: ctx.grid_columns,
    })
    .map(Message::Gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
