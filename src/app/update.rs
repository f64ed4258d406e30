// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler ends in [`dispatch`]: the message is turned into a gallery
//! [`Event`], the state is replaced by the result of [`GalleryState::apply`],
//! and the returned [`Effect`] becomes an asynchronous [`Task`].

use super::message::Shortcut;
use super::Message;
use crate::api::CatApiClient;
use crate::error::FetchError;
use crate::gallery::{Effect, Event, FetchRequest, GalleryState, Item, RequestId, View};
use crate::ui::gallery::{self, ImageSlot, ListViewport};
use iced::Task;
use std::collections::{HashMap, HashSet};

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryState,
    pub images: &'a mut HashMap<String, ImageSlot>,
    /// `None` when the HTTP client could not be built.
    pub client: Option<&'a CatApiClient>,
    pub list_viewport: &'a mut ListViewport,
}

/// Applies one event to the gallery and runs the resulting effect.
pub fn dispatch(ctx: &mut UpdateContext<'_>, event: Event) -> Task<Message> {
    let (next, effect) = std::mem::take(ctx.gallery).apply(event);
    *ctx.gallery = next;
    run_effect(ctx, effect)
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let event = match message {
        gallery::Message::SelectView(view) => {
            ctx.list_viewport.offset_y = 0.0;
            Event::ViewSelected(view)
        }
        gallery::Message::PreviousPage => Event::PreviousPage,
        gallery::Message::NextPage => Event::NextPage,
        gallery::Message::Scrolled(position) => {
            ctx.list_viewport.offset_y = position.offset_y;
            Event::Scrolled(position)
        }
    };
    dispatch(ctx, event)
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    let event = match shortcut {
        Shortcut::PreviousPage => Event::PreviousPage,
        Shortcut::NextPage => Event::NextPage,
        Shortcut::ShowGrid => Event::ViewSelected(View::Grid),
        Shortcut::ShowList => Event::ViewSelected(View::List),
    };
    if let Event::ViewSelected(_) = event {
        ctx.list_viewport.offset_y = 0.0;
    }
    dispatch(ctx, event)
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, height: f32) -> Task<Message> {
    ctx.list_viewport.window_height = height;
    fill_list_viewport(ctx)
}

pub fn handle_page_fetched(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    result: Result<Vec<Item>, FetchError>,
) -> Task<Message> {
    match &result {
        Ok(items) => log::info!("Request {request} returned {} items", items.len()),
        Err(err) => log::warn!("Request {request} failed: {err}"),
    }
    dispatch(ctx, Event::FetchCompleted { request, result })
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    epoch: RequestId,
    url: String,
    result: Result<Vec<u8>, FetchError>,
) -> Task<Message> {
    // The url may belong to items that have since been replaced
    if ctx.gallery.image_epoch() != Some(epoch) {
        log::debug!("Discarding image {url} from finished round {epoch}");
        return Task::none();
    }

    let slot = match result {
        Ok(bytes) => ImageSlot::from_bytes(bytes),
        Err(err) => {
            log::debug!("Image {url} failed to load: {err}");
            ImageSlot::Failed
        }
    };
    ctx.images.insert(url, slot);
    // A broken image completes its load just like a decoded one
    record_image_load(ctx, epoch)
}

pub fn handle_image_cached(ctx: &mut UpdateContext<'_>, epoch: RequestId) -> Task<Message> {
    record_image_load(ctx, epoch)
}

/// Counts one image of the round and, once the round is complete, checks
/// whether the List still needs more items to fill the window.
fn record_image_load(ctx: &mut UpdateContext<'_>, epoch: RequestId) -> Task<Message> {
    let before = ctx.gallery.loaded_count();
    let task = dispatch(ctx, Event::ImageLoaded { epoch });

    if ctx.gallery.loaded_count() != before && ctx.gallery.all_images_loaded() {
        Task::batch([task, fill_list_viewport(ctx)])
    } else {
        task
    }
}

/// Replays the List scroll check from the last known geometry. A List too
/// short to scroll never reports a position on its own.
fn fill_list_viewport(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.view() != View::List {
        return Task::none();
    }
    let position = ctx.list_viewport.position(ctx.gallery.items());
    dispatch(ctx, Event::Scrolled(position))
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Fetch(request) => fetch_page(ctx.client, request),
        Effect::LoadImages { epoch, urls } => load_images(ctx, epoch, urls),
    }
}

fn fetch_page(client: Option<&CatApiClient>, request: FetchRequest) -> Task<Message> {
    let Some(client) = client.cloned() else {
        return Task::done(Message::PageFetched {
            request: request.id,
            result: Err(FetchError::Network("HTTP client unavailable".to_string())),
        });
    };
    log::info!(
        "Fetching page {} ({:?}) as request {}",
        request.page,
        request.mode,
        request.id
    );
    Task::perform(
        async move { client.search_images(request.page).await },
        move |result| Message::PageFetched {
            request: request.id,
            result,
        },
    )
}

/// Issues one completion per listed url: immediately for images already in
/// memory, after the download for the others.
fn load_images(ctx: &mut UpdateContext<'_>, epoch: RequestId, urls: Vec<String>) -> Task<Message> {
    let current: HashSet<&str> = urls.iter().map(String::as_str).collect();
    ctx.images.retain(|url, _| current.contains(url.as_str()));

    let (cached, downloads) = split_cached(ctx.images, urls);
    log::debug!(
        "Image round {epoch}: {cached} in memory, {} to download",
        downloads.len()
    );

    let client = ctx.client;
    let tasks = std::iter::repeat_with(|| Task::done(Message::ImageCached { epoch }))
        .take(cached)
        .chain(
            downloads
                .into_iter()
                .map(|url| fetch_image(client, epoch, url)),
        );

    Task::batch(tasks)
}

/// Splits a round's urls into the count already in memory and the urls to
/// download. Each listed url lands on exactly one side, duplicates included.
fn split_cached(images: &HashMap<String, ImageSlot>, urls: Vec<String>) -> (usize, Vec<String>) {
    let (cached, downloads): (Vec<String>, Vec<String>) =
        urls.into_iter().partition(|url| images.contains_key(url));
    (cached.len(), downloads)
}

fn fetch_image(client: Option<&CatApiClient>, epoch: RequestId, url: String) -> Task<Message> {
    let Some(client) = client.cloned() else {
        return Task::done(Message::ImageFetched {
            epoch,
            url,
            result: Err(FetchError::Network("HTTP client unavailable".to_string())),
        });
    };
    Task::perform(
        async move {
            let result = client.fetch_image(&url).await;
            (url, result)
        },
        move |(url, result)| Message::ImageFetched { epoch, url, result },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> CatApiClient {
        CatApiClient::new(&ApiConfig::default()).expect("default client builds")
    }

    fn window() -> ListViewport {
        ListViewport::new(760.0)
    }

    #[test]
    fn shortcuts_only_turn_pages_in_grid() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let _ = handle_shortcut(&mut ctx, Shortcut::ShowList);
        let pending = ctx.gallery.pending_request().expect("view switch fetches");
        let _ = handle_page_fetched(&mut ctx, pending.id, Ok(vec![Item::from_url("a")]));
        assert_eq!(ctx.gallery.view(), View::List);

        let _ = handle_shortcut(&mut ctx, Shortcut::NextPage);
        assert!(ctx.gallery.pending_request().is_none());
        assert_eq!(ctx.gallery.page().value(), 1);
    }

    #[test]
    fn failed_images_still_count_as_loaded() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let _ = dispatch(&mut ctx, Event::Mounted);
        let pending = ctx.gallery.pending_request().expect("mount fetches");
        let _ = handle_page_fetched(&mut ctx, pending.id, Ok(vec![Item::from_url("a")]));

        let _ = handle_image_fetched(
            &mut ctx,
            pending.id,
            "a".to_string(),
            Err(FetchError::Status(404)),
        );
        assert!(ctx.gallery.all_images_loaded());
        assert!(matches!(ctx.images.get("a"), Some(ImageSlot::Failed)));
    }

    #[test]
    fn image_map_keeps_only_current_items() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::from([
            ("old".to_string(), ImageSlot::Failed),
            ("kept".to_string(), ImageSlot::Failed),
        ]);
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let _ = load_images(&mut ctx, RequestId::default(), vec!["kept".to_string()]);
        assert!(ctx.images.contains_key("kept"));
        assert!(!ctx.images.contains_key("old"));
    }

    #[test]
    fn late_image_from_replaced_page_is_dropped() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let _ = dispatch(&mut ctx, Event::Mounted);
        let first = ctx.gallery.pending_request().expect("mount fetches");
        let _ = handle_page_fetched(&mut ctx, first.id, Ok(vec![Item::from_url("p1")]));

        let _ = handle_gallery_message(&mut ctx, gallery::Message::NextPage);
        let second = ctx.gallery.pending_request().expect("next page fetches");
        let _ = handle_page_fetched(&mut ctx, second.id, Ok(vec![Item::from_url("p2")]));

        let _ = handle_image_fetched(
            &mut ctx,
            first.id,
            "p1".to_string(),
            Err(FetchError::Status(404)),
        );

        assert!(ctx.images.is_empty());
        assert_eq!(ctx.gallery.loaded_count(), 0);

        // The current round still downloads and counts "p2"
        let _ = handle_image_fetched(
            &mut ctx,
            second.id,
            "p2".to_string(),
            Err(FetchError::Status(404)),
        );
        assert_eq!(ctx.images.keys().collect::<Vec<_>>(), vec!["p2"]);
        assert!(ctx.gallery.all_images_loaded());
    }

    #[test]
    fn every_url_gets_exactly_one_completion() {
        let images = HashMap::from([("cached".to_string(), ImageSlot::Failed)]);
        let urls = vec![
            "cached".to_string(),
            "new".to_string(),
            "cached".to_string(),
            "new".to_string(),
        ];

        let (cached, downloads) = split_cached(&images, urls);

        assert_eq!(cached, 2);
        assert_eq!(downloads, vec!["new".to_string(), "new".to_string()]);
    }

    #[test]
    fn cached_round_completes_without_downloads() {
        let images = HashMap::from([
            ("a".to_string(), ImageSlot::Failed),
            ("b".to_string(), ImageSlot::Failed),
        ]);
        let (cached, downloads) = split_cached(&images, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cached, 2);
        assert!(downloads.is_empty());
    }

    fn list_with_images_loaded(
        ctx: &mut UpdateContext<'_>,
        items: Vec<Item>,
    ) -> Option<crate::gallery::FetchRequest> {
        let _ = handle_shortcut(ctx, Shortcut::ShowList);
        let request = ctx.gallery.pending_request().expect("view switch fetches");
        let urls: Vec<String> = items.iter().map(|item| item.url.clone()).collect();
        let _ = handle_page_fetched(ctx, request.id, Ok(items));
        for url in urls {
            let _ = handle_image_fetched(ctx, request.id, url, Err(FetchError::Status(404)));
        }
        ctx.gallery.pending_request()
    }

    #[test]
    fn short_list_loads_the_next_page_once_images_finish() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let next = list_with_images_loaded(&mut ctx, vec![Item::from_url("only")])
            .expect("a one-card list leaves the window unfilled");
        assert_eq!(next.page.value(), 2);
    }

    #[test]
    fn list_taller_than_the_window_waits_for_scrolling() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let items = (0..5).map(|i| Item::from_url(format!("u{i}"))).collect();
        assert!(list_with_images_loaded(&mut ctx, items).is_none());
        assert_eq!(ctx.gallery.page().value(), 1);
    }

    #[test]
    fn growing_the_window_fills_a_short_list() {
        let client = client();
        let mut gallery = GalleryState::new();
        let mut images = HashMap::new();
        let mut viewport = window();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            images: &mut images,
            client: Some(&client),
            list_viewport: &mut viewport,
        };

        let items = (0..2).map(|i| Item::from_url(format!("u{i}"))).collect();
        assert!(list_with_images_loaded(&mut ctx, items).is_none());

        let _ = handle_window_resized(&mut ctx, 1_400.0);
        let next = ctx.gallery.pending_request().expect("taller window fetches");
        assert_eq!(next.page.value(), 2);
    }
}
