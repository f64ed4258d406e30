// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: view tabs, status lines, and the Grid or List body.
//!
//! The screen follows the "state down, messages up" pattern. It reads the
//! [`GalleryState`] and the image map owned by the application and emits
//! [`Message`]s, which the application turns into gallery events.

pub mod card;

pub use card::ImageSlot;

use crate::gallery::{GalleryState, Item, ScrollPosition, View};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{
        button, container, scrollable::Viewport, Column, Container, Row, Scrollable, Space, Text,
    },
    Element, Length, Theme,
};
use std::collections::HashMap;

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectView(View),
    PreviousPage,
    NextPage,
    Scrolled(ScrollPosition),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a GalleryState,
    pub images: &'a HashMap<String, ImageSlot>,
    pub grid_columns: usize,
}

/// Last known geometry of the List view.
///
/// The List scrollable only reports its viewport when it actually scrolls, so
/// a page too short to fill the window never produces a scroll event. This
/// keeps enough to rebuild the position without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListViewport {
    pub window_height: f32,
    /// Last offset reported by the scrollable, 0 for a fresh list.
    pub offset_y: f32,
}

impl ListViewport {
    pub fn new(window_height: f32) -> Self {
        Self {
            window_height,
            offset_y: 0.0,
        }
    }

    /// Position of the List body for `items`, using the window height minus
    /// the gallery header as the viewport.
    pub fn position(&self, items: &[Item]) -> ScrollPosition {
        ScrollPosition {
            offset_y: self.offset_y,
            viewport_height: (self.window_height - sizing::GALLERY_HEADER_HEIGHT).max(0.0),
            content_height: list_content_height(items),
        }
    }
}

/// Height of one List card, following the image's aspect ratio at the List
/// column width.
pub fn list_card_height(item: &Item) -> f32 {
    item.aspect_ratio()
        .map(|ratio| {
            (sizing::LIST_MAX_WIDTH / ratio)
                .clamp(sizing::LIST_CARD_MIN_HEIGHT, sizing::LIST_CARD_MAX_HEIGHT)
        })
        .unwrap_or(sizing::LIST_CARD_HEIGHT)
}

/// Height of the List cards stacked with their spacing, footer excluded.
pub fn list_content_height(items: &[Item]) -> f32 {
    let cards: f32 = items.iter().map(list_card_height).sum();
    let gaps = items.len().saturating_sub(1) as f32 * spacing::MD;
    cards + gaps
}

/// Converts the List scrollable's viewport into the geometry the gallery
/// reasons about.
pub fn scroll_position(viewport: &Viewport) -> ScrollPosition {
    ScrollPosition {
        offset_y: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
        content_height: viewport.content_bounds().height,
    }
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(view_tabs(&ctx));

    if ctx.state.is_loading() && ctx.state.items().is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("status-loading")).size(typography::BODY));
    }

    if let Some(key) = ctx.state.error() {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::container::error_banner),
        );
    }

    let body = match ctx.state.view() {
        View::Grid => view_grid(&ctx),
        View::List => view_list(&ctx),
    };

    content.push(body).into()
}

fn view_tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab = |view: View, key: &str| {
        let style: fn(&Theme, button::Status) -> button::Style = if ctx.state.view() == view {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        // Reselecting the active view is allowed and refetches page 1
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::SelectView(view))
            .style(style)
    };

    Row::new()
        .spacing(spacing::XS)
        .push(tab(View::Grid, "view-grid"))
        .push(tab(View::List, "view-list"))
        .into()
}

fn view_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.grid_columns.max(1);

    let rows = grid_rows(ctx.state.items(), columns).into_iter().map(|row| {
        let mut cells = Row::new().spacing(spacing::SM).width(Length::Fill);
        for item in row {
            cells = cells.push(
                container(card::view(
                    ctx.images.get(&item.url),
                    sizing::GRID_CARD_HEIGHT,
                    ctx.i18n,
                ))
                .width(Length::FillPortion(1)),
            );
        }
        // Pad the last row so its cards keep the same width as full rows
        for _ in row.len()..columns {
            cells = cells.push(Space::new().width(Length::FillPortion(1)));
        }
        Element::from(cells)
    });

    let grid = Column::with_children(rows)
        .spacing(spacing::SM)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Scrollable::new(grid).height(Length::Fill))
        .push(view_pagination(ctx))
        .into()
}

fn view_pagination<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let control = |key: &str, message: Message, enabled: bool| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe(enabled.then_some(message))
            .style(styles::button::unselected)
    };

    let page = ctx.state.page().to_string();
    let indicator =
        Text::new(ctx.i18n.tr_with_args("pagination-page", &[("page", page.as_str())]))
            .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(control(
            "pagination-previous",
            Message::PreviousPage,
            ctx.state.can_go_previous(),
        ))
        .push(indicator)
        .push(control(
            "pagination-next",
            Message::NextPage,
            ctx.state.can_go_next(),
        ))
        .into()
}

fn view_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx.state.items().iter().map(|item| {
        card::view(ctx.images.get(&item.url), list_card_height(item), ctx.i18n)
    });

    let mut list = Column::with_children(cards)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::LIST_MAX_WIDTH);

    if ctx.state.is_loading() && !ctx.state.items().is_empty() {
        list = list.push(Text::new(ctx.i18n.tr("status-loading-more")).size(typography::BODY));
    } else if !ctx.state.has_more() {
        list = list.push(Text::new(ctx.i18n.tr("status-no-more")).size(typography::CAPTION));
    }

    let centered = Container::new(list)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Scrollable::new(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(scroll_position(&viewport)))
        .into()
}

/// Splits the page into display rows of at most `columns` items.
fn grid_rows(items: &[Item], columns: usize) -> Vec<&[Item]> {
    items.chunks(columns.max(1)).collect()
}
