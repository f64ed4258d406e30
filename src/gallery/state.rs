// SPDX-License-Identifier: MPL-2.0
//! Gallery state record and its transition function.

use super::event::{Effect, Event, FetchMode, FetchRequest, ScrollPosition};
use super::item::Item;
use super::newtypes::{Page, RequestId};
use crate::error::FetchError;

/// Distance from the end of the List content, in pixels, under which a
/// scroll event may load the next page.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 10.0;

/// Display mode of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One page at a time with Previous/Next controls.
    #[default]
    Grid,
    /// Cumulative list that appends the next page on scroll.
    List,
}

/// The gallery controller state.
///
/// Invariants maintained by [`GalleryState::apply`]:
/// - `loaded_count <= items.len()`
/// - `has_more` only goes back to `true` on a view switch
/// - `page` is 1 right after a view switch
/// - at most one fetch is pending, and only its completion is applied
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    items: Vec<Item>,
    page: Page,
    view: View,
    loading: bool,
    error: Option<&'static str>,
    has_more: bool,
    loaded_count: usize,
    /// The fetch whose completion will be applied.
    pending: Option<FetchRequest>,
    /// Tag of the image loads that count towards `loaded_count`.
    image_epoch: Option<RequestId>,
    last_request: RequestId,
    scroll_threshold: f32,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: Page::FIRST,
            view: View::Grid,
            loading: false,
            error: None,
            has_more: true,
            loaded_count: 0,
            pending: None,
            image_epoch: None,
            last_request: RequestId::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the List view scroll trigger distance (negative values are
    /// treated as 0).
    #[must_use]
    pub fn with_scroll_threshold(mut self, threshold: f32) -> Self {
        self.scroll_threshold = threshold.max(0.0);
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// i18n key of the error message currently shown, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn pending_request(&self) -> Option<FetchRequest> {
        self.pending
    }

    /// Request whose image round is currently counted, if any.
    pub fn image_epoch(&self) -> Option<RequestId> {
        self.image_epoch
    }

    /// Every rendered item has reported its image load.
    pub fn all_images_loaded(&self) -> bool {
        self.loaded_count == self.items.len()
    }

    /// Whether the Grid "Previous" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        !self.page.is_first() && !self.loading
    }

    /// Whether the Grid "Next" control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.has_more && !self.loading
    }

    /// Whether a scroll event at `position` loads the next page.
    pub fn should_load_more(&self, position: &ScrollPosition) -> bool {
        self.view == View::List
            && position.is_near_bottom(self.scroll_threshold)
            && self.has_more
            && !self.loading
            && self.all_images_loaded()
    }

    /// Applies one event and returns the next state with the side effect the
    /// caller must run.
    #[must_use]
    pub fn apply(mut self, event: Event) -> (Self, Effect) {
        let effect = match event {
            Event::Mounted => self.begin_fetch(Page::FIRST, FetchMode::Replace),
            Event::ViewSelected(view) => self.select_view(view),
            Event::PreviousPage => match self.page.previous() {
                Some(page) if self.view == View::Grid && self.can_go_previous() => {
                    self.turn_page(page)
                }
                _ => Effect::None,
            },
            Event::NextPage => {
                if self.view == View::Grid && self.can_go_next() {
                    self.turn_page(self.page.next())
                } else {
                    Effect::None
                }
            }
            Event::Scrolled(position) => {
                if self.should_load_more(&position) {
                    self.page = self.page.next();
                    self.begin_fetch(self.page, FetchMode::Append)
                } else {
                    Effect::None
                }
            }
            Event::FetchCompleted { request, result } => self.complete_fetch(request, result),
            Event::ImageLoaded { epoch } => {
                if self.image_epoch == Some(epoch) && self.loaded_count < self.items.len() {
                    self.loaded_count += 1;
                }
                Effect::None
            }
        };
        (self, effect)
    }

    fn select_view(&mut self, view: View) -> Effect {
        self.view = view;
        self.page = Page::FIRST;
        self.has_more = true;
        self.clear_items();
        let mode = match view {
            View::Grid => FetchMode::Replace,
            View::List => FetchMode::Append,
        };
        self.begin_fetch(Page::FIRST, mode)
    }

    fn turn_page(&mut self, page: Page) -> Effect {
        self.page = page;
        self.clear_items();
        self.begin_fetch(page, FetchMode::Replace)
    }

    fn clear_items(&mut self) {
        self.items.clear();
        self.loaded_count = 0;
        self.image_epoch = None;
    }

    fn begin_fetch(&mut self, page: Page, mode: FetchMode) -> Effect {
        self.last_request = self.last_request.next();
        let request = FetchRequest {
            id: self.last_request,
            page,
            mode,
        };
        self.loading = true;
        self.error = None;
        self.pending = Some(request);
        Effect::Fetch(request)
    }

    fn complete_fetch(
        &mut self,
        request: RequestId,
        result: Result<Vec<Item>, FetchError>,
    ) -> Effect {
        let Some(pending) = self.pending.filter(|pending| pending.id == request) else {
            log::debug!("Discarding stale response for request {request}");
            return Effect::None;
        };
        self.pending = None;
        self.loading = false;

        match result {
            Ok(items) => {
                if items.is_empty() {
                    self.has_more = false;
                }
                match pending.mode {
                    FetchMode::Replace => self.items = items,
                    FetchMode::Append => self.items.extend(items),
                }
                self.loaded_count = 0;
                self.image_epoch = Some(request);

                if self.items.is_empty() {
                    Effect::None
                } else {
                    Effect::LoadImages {
                        epoch: request,
                        urls: self.items.iter().map(|item| item.url.clone()).collect(),
                    }
                }
            }
            Err(err) => {
                self.error = Some(err.i18n_key());
                Effect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FETCH_FAILED_KEY;

    fn page_of(prefix: &str, count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item::from_url(format!("https://img.test/{prefix}-{i}.jpg")))
            .collect()
    }

    fn expect_fetch(effect: Effect) -> FetchRequest {
        match effect {
            Effect::Fetch(request) => request,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    fn complete(
        state: GalleryState,
        request: FetchRequest,
        result: Result<Vec<Item>, FetchError>,
    ) -> (GalleryState, Effect) {
        state.apply(Event::FetchCompleted {
            request: request.id,
            result,
        })
    }

    fn load_all_images(mut state: GalleryState) -> GalleryState {
        let epoch = state.image_epoch.expect("images were requested");
        for _ in 0..state.items().len() {
            state = state.apply(Event::ImageLoaded { epoch }).0;
        }
        state
    }

    fn near_bottom() -> Event {
        Event::Scrolled(ScrollPosition {
            offset_y: 1_000.0,
            viewport_height: 600.0,
            content_height: 1_605.0,
        })
    }

    fn mounted_with(items: Vec<Item>) -> GalleryState {
        let (state, effect) = GalleryState::new().apply(Event::Mounted);
        let request = expect_fetch(effect);
        complete(state, request, Ok(items)).0
    }

    fn list_with_first_page() -> GalleryState {
        let (state, effect) = mounted_with(page_of("g", 5)).apply(Event::ViewSelected(View::List));
        let request = expect_fetch(effect);
        load_all_images(complete(state, request, Ok(page_of("l1", 5))).0)
    }

    #[test]
    fn new_state_has_mount_defaults() {
        let state = GalleryState::new();
        assert!(state.items().is_empty());
        assert_eq!(state.page(), Page::FIRST);
        assert_eq!(state.view(), View::Grid);
        assert!(!state.is_loading());
        assert!(state.has_more());
        assert_eq!(state.loaded_count(), 0);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn mount_fetches_first_page_and_sets_loading() {
        let (state, effect) = GalleryState::new().apply(Event::Mounted);
        let request = expect_fetch(effect);
        assert_eq!(request.page, Page::FIRST);
        assert_eq!(request.mode, FetchMode::Replace);
        assert!(state.is_loading());
        assert_eq!(state.pending_request(), Some(request));
    }

    #[test]
    fn grid_scenario_next_replaces_items_and_previous_is_disabled_on_first_page() {
        let state = mounted_with(page_of("p1", 5));
        assert_eq!(state.items().len(), 5);
        assert!(state.has_more());
        assert!(!state.is_loading());
        assert!(!state.can_go_previous());

        let (state, effect) = state.apply(Event::NextPage);
        let request = expect_fetch(effect);
        assert_eq!(state.page().value(), 2);
        assert!(state.items().is_empty());
        assert_eq!(request.mode, FetchMode::Replace);

        let (state, _) = complete(state, request, Ok(page_of("p2", 5)));
        assert_eq!(state.items(), page_of("p2", 5).as_slice());

        let (state, effect) = state.apply(Event::PreviousPage);
        let request = expect_fetch(effect);
        assert_eq!(state.page(), Page::FIRST);
        let (state, _) = complete(state, request, Ok(page_of("p1", 5)));

        let (state, effect) = state.apply(Event::PreviousPage);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.page(), Page::FIRST);
        assert_eq!(state.items().len(), 5);
    }

    #[test]
    fn consecutive_next_clicks_advance_one_page_at_a_time() {
        let mut state = mounted_with(page_of("p1", 5));
        for expected in 2..=6 {
            let (next, effect) = state.apply(Event::NextPage);
            let request = expect_fetch(effect);
            assert_eq!(next.page().value(), expected);
            assert!(next.items().is_empty());
            let prefix = format!("p{expected}");
            let (next, _) = complete(next, request, Ok(page_of(&prefix, 5)));
            assert_eq!(next.items(), page_of(&prefix, 5).as_slice());
            state = next;
        }
    }

    #[test]
    fn pagination_is_ignored_while_loading() {
        let (state, _) = mounted_with(page_of("p1", 5)).apply(Event::NextPage);
        assert!(state.is_loading());
        let (state, effect) = state.apply(Event::NextPage);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.page().value(), 2);
        let (state, effect) = state.apply(Event::PreviousPage);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.page().value(), 2);
    }

    #[test]
    fn pagination_is_ignored_in_list_view() {
        let state = list_with_first_page();
        let (state, effect) = state.apply(Event::NextPage);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.page(), Page::FIRST);
        assert_eq!(state.items().len(), 5);
    }

    #[test]
    fn empty_page_disables_next_until_view_switch() {
        let (state, effect) = mounted_with(page_of("p1", 5)).apply(Event::NextPage);
        let (state, load) = complete(state, expect_fetch(effect), Ok(Vec::new()));
        assert!(!state.has_more());
        assert!(!state.can_go_next());
        assert_eq!(load, Effect::None);

        let (state, effect) = state.apply(Event::NextPage);
        assert_eq!(effect, Effect::None);

        let (state, effect) = state.apply(Event::PreviousPage);
        let (state, _) = complete(state, expect_fetch(effect), Ok(page_of("p1", 5)));
        assert!(!state.has_more(), "a non-empty page does not restore has_more");

        let (state, _) = state.apply(Event::ViewSelected(View::Grid));
        assert!(state.has_more());
    }

    #[test]
    fn view_switch_resets_page_items_and_has_more() {
        let (state, effect) = mounted_with(page_of("p1", 5)).apply(Event::NextPage);
        let (state, _) = complete(state, expect_fetch(effect), Ok(Vec::new()));

        for view in [View::List, View::Grid, View::Grid] {
            let (next, effect) = state.clone().apply(Event::ViewSelected(view));
            let request = expect_fetch(effect);
            assert_eq!(next.view(), view);
            assert_eq!(next.page(), Page::FIRST);
            assert!(next.items().is_empty());
            assert!(next.has_more());
            assert_eq!(next.loaded_count(), 0);
            assert_eq!(request.page, Page::FIRST);
        }
    }

    #[test]
    fn list_view_fetch_appends_to_empty_sequence() {
        let (state, effect) = mounted_with(page_of("g", 5)).apply(Event::ViewSelected(View::List));
        let request = expect_fetch(effect);
        assert_eq!(request.mode, FetchMode::Append);
        let (state, effect) = complete(state, request, Ok(page_of("l1", 5)));
        assert_eq!(state.items(), page_of("l1", 5).as_slice());
        match effect {
            Effect::LoadImages { epoch, urls } => {
                assert_eq!(epoch, request.id);
                assert_eq!(urls.len(), 5);
            }
            other => panic!("expected image loads, got {other:?}"),
        }
    }

    #[test]
    fn list_scenario_scroll_appends_next_page_after_images_load() {
        let state = list_with_first_page();
        assert_eq!(state.loaded_count(), 5);

        let (state, effect) = state.apply(near_bottom());
        let request = expect_fetch(effect);
        assert_eq!(request.page.value(), 2);
        assert_eq!(request.mode, FetchMode::Append);
        assert_eq!(state.page().value(), 2);
        assert!(state.is_loading());

        let (state, effect) = complete(state, request, Ok(page_of("l2", 5)));
        assert_eq!(state.items().len(), 10);
        assert_eq!(state.loaded_count(), 0);
        assert_eq!(&state.items()[..5], page_of("l1", 5).as_slice());
        match effect {
            Effect::LoadImages { urls, .. } => assert_eq!(urls.len(), 10),
            other => panic!("expected image loads, got {other:?}"),
        }

        let state = load_all_images(state);
        assert_eq!(state.loaded_count(), 10);
        let (state, effect) = state.apply(near_bottom());
        assert_eq!(expect_fetch(effect).page.value(), 3);
        assert_eq!(state.page().value(), 3);
    }

    #[test]
    fn scroll_before_images_load_does_not_fetch() {
        let (state, effect) = mounted_with(page_of("g", 5)).apply(Event::ViewSelected(View::List));
        let request = expect_fetch(effect);
        let (mut state, _) = complete(state, request, Ok(page_of("l1", 5)));

        for _ in 0..4 {
            state = state.apply(Event::ImageLoaded { epoch: request.id }).0;
            let (next, effect) = state.clone().apply(near_bottom());
            assert_eq!(effect, Effect::None);
            assert_eq!(next.page(), Page::FIRST);
        }
    }

    #[test]
    fn scroll_requires_list_view_position_and_idle_state() {
        let far = Event::Scrolled(ScrollPosition {
            offset_y: 0.0,
            viewport_height: 600.0,
            content_height: 3_000.0,
        });
        let (_, effect) = list_with_first_page().apply(far);
        assert_eq!(effect, Effect::None);

        let grid = load_all_images(mounted_with(page_of("g", 5)));
        let (_, effect) = grid.apply(near_bottom());
        assert_eq!(effect, Effect::None);

        let (loading, _) = list_with_first_page().apply(near_bottom());
        let (_, effect) = loading.apply(near_bottom());
        assert_eq!(effect, Effect::None, "a second scroll while loading must not fetch");
    }

    #[test]
    fn scroll_stops_after_empty_page() {
        let (state, effect) = list_with_first_page().apply(near_bottom());
        let (state, _) = complete(state, expect_fetch(effect), Ok(Vec::new()));
        assert!(!state.has_more());
        assert_eq!(state.items().len(), 5);
        let (_, effect) = state.apply(near_bottom());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn custom_scroll_threshold_is_honoured() {
        let state = list_with_first_page().with_scroll_threshold(100.0);
        let pos = ScrollPosition {
            offset_y: 1_000.0,
            viewport_height: 600.0,
            content_height: 1_680.0,
        };
        assert!(state.should_load_more(&pos));
        let state = state.with_scroll_threshold(-5.0);
        assert!(!state.should_load_more(&pos));
    }

    #[test]
    fn failed_fetch_keeps_items_and_reports_generic_error() {
        let (state, effect) = list_with_first_page().apply(near_bottom());
        let request = expect_fetch(effect);
        let (state, effect) = complete(
            state,
            request,
            Err(FetchError::Network("connection refused".into())),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(state.error(), Some(FETCH_FAILED_KEY));
        assert!(!state.is_loading());
        assert_eq!(state.items(), page_of("l1", 5).as_slice());
        assert_eq!(state.loaded_count(), 5);
    }

    #[test]
    fn next_fetch_clears_previous_error() {
        let (state, effect) = GalleryState::new().apply(Event::Mounted);
        let (state, _) = complete(state, expect_fetch(effect), Err(FetchError::Status(500)));
        assert!(state.error().is_some());
        let (state, _) = state.apply(Event::ViewSelected(View::Grid));
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn stale_response_after_view_switch_is_discarded() {
        let (state, effect) = GalleryState::new().apply(Event::Mounted);
        let grid_request = expect_fetch(effect);
        let (state, effect) = state.apply(Event::ViewSelected(View::List));
        let list_request = expect_fetch(effect);
        assert_ne!(grid_request.id, list_request.id);

        let (state, effect) = complete(state, grid_request, Ok(page_of("stale", 5)));
        assert_eq!(effect, Effect::None);
        assert!(state.items().is_empty());
        assert!(state.is_loading());

        let (state, _) = complete(state, list_request, Ok(page_of("fresh", 5)));
        assert_eq!(state.items(), page_of("fresh", 5).as_slice());
        assert!(!state.is_loading());
    }

    #[test]
    fn image_loads_from_old_epoch_are_ignored() {
        let (state, effect) = list_with_first_page().apply(near_bottom());
        let old_epoch = state.image_epoch.expect("first page loaded");
        let (state, _) = complete(state, expect_fetch(effect), Ok(page_of("l2", 5)));

        let (state, _) = state.apply(Event::ImageLoaded { epoch: old_epoch });
        assert_eq!(state.loaded_count(), 0);
    }

    #[test]
    fn loaded_count_never_exceeds_item_count() {
        let mut state = mounted_with(page_of("g", 2));
        let epoch = state.image_epoch.expect("images requested");
        for _ in 0..5 {
            state = state.apply(Event::ImageLoaded { epoch }).0;
        }
        assert_eq!(state.loaded_count(), 2);
        assert!(state.all_images_loaded());
    }

    #[test]
    fn clearing_items_resets_loaded_count() {
        let state = load_all_images(mounted_with(page_of("g", 5)));
        let (state, _) = state.apply(Event::NextPage);
        assert_eq!(state.loaded_count(), 0);
        assert!(state.loaded_count() <= state.items().len());
    }
}
