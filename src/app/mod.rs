// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! The `App` struct wires together the gallery controller, the API client,
//! localization and the in-memory image handles. It translates messages into
//! gallery events and gallery effects into asynchronous tasks.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::api::CatApiClient;
use crate::config::{self, ApiConfig};
use crate::gallery::{Event, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{ImageSlot, ListViewport};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryState,
    client: Option<CatApiClient>,
    /// Decoded images of the current items, keyed by url.
    images: HashMap<String, ImageSlot>,
    list_viewport: ListViewport,
    theme_mode: ThemeMode,
    grid_columns: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view", &self.gallery.view())
            .field("page", &self.gallery.page())
            .field("items", &self.gallery.items().len())
            .field("images", &self.images.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the API client. Without one every fetch completes with an error,
/// which keeps the window usable and shows the failure banner.
fn build_client(api: &ApiConfig) -> Option<CatApiClient> {
    match CatApiClient::new(api) {
        Ok(client) => {
            log::info!(
                "Gallery endpoint {} (page size {})",
                client.endpoint().base_url,
                client.endpoint().page_size
            );
            Some(client)
        }
        Err(err) => {
            log::error!("HTTP client unavailable: {err}");
            None
        }
    }
}

impl App {
    /// Initializes application state and issues the first page fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            gallery: GalleryState::new().with_scroll_threshold(config.gallery.scroll_threshold_px()),
            client: build_client(&config.api),
            images: HashMap::new(),
            list_viewport: ListViewport::new(WINDOW_DEFAULT_HEIGHT as f32),
            theme_mode: config.general.theme_mode,
            grid_columns: config.gallery.grid_columns() as usize,
        };

        let task = update::dispatch(&mut app.update_context(), Event::Mounted);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            images: &mut self.images,
            client: self.client.as_ref(),
            list_viewport: &mut self.list_viewport,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::PageFetched { request, result } => {
                update::handle_page_fetched(&mut ctx, request, result)
            }
            Message::ImageFetched { epoch, url, result } => {
                update::handle_image_fetched(&mut ctx, epoch, url, result)
            }
            Message::ImageCached { epoch } => update::handle_image_cached(&mut ctx, epoch),
            Message::WindowResized { height } => update::handle_window_resized(&mut ctx, height),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            grid_columns: self.grid_columns,
        })
    }
}
