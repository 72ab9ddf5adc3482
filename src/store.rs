//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pain_marker_core::{
    BodyView, DomainError, IdGenerator, KeyValueStorage, LogicalPoint, Marker, MarkerId,
    MarkerRepository, MarkerStore, PainLevel,
};
use reactive_stores::Store;

use crate::storage::LocalStorage;

pub type Repo = MarkerRepository<LocalStorage>;

/// Page-session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Markers for both views (persisted)
    pub markers: MarkerStore,
    /// Level given to new markers
    pub level: PainLevel,
    /// View currently displayed
    pub view: BodyView,
    pub ids: IdGenerator,
    /// Transient message shown in the toast
    pub notice: Option<Notice>,
    /// Sequence number of the last notice raised
    pub notice_seq: u64,
}

/// A toast message tagged with the sequence number that raised it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
}

impl AppState {
    /// State around markers rehydrated at startup
    pub fn with_markers(markers: MarkerStore) -> Self {
        let mut ids = IdGenerator::new();
        markers.seed_ids(&mut ids);
        Self {
            markers,
            ids,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a marker at `point` with the selected level, then persist.
/// Points outside the body region are ignored.
pub fn store_add_marker<S: KeyValueStorage>(
    store: &AppStore,
    repo: &MarkerRepository<S>,
    view: BodyView,
    point: LogicalPoint,
) -> bool {
    store_add_marker_at(store, repo, view, point, js_sys::Date::now(), js_sys::Math::random())
}

/// [`store_add_marker`] with the id clock and jitter supplied by the caller
pub fn store_add_marker_at<S: KeyValueStorage>(
    store: &AppStore,
    repo: &MarkerRepository<S>,
    view: BodyView,
    point: LogicalPoint,
    now_ms: f64,
    random: f64,
) -> bool {
    let level = store.level().get_untracked();
    let id = store.ids().write().next(now_ms, random);
    let result = store.markers().write().add(view, Marker::new(point, level, id));
    match result {
        Ok(()) => {
            log::debug!("[Store] Added level {} marker {} to {}", level, id, view.key());
            repo.persist(&store.markers().read_untracked());
            true
        }
        Err(DomainError::OutsideBody { x, y }) => {
            log::debug!("[Store] Ignored tap at ({:.1}, {:.1}) outside the body", x, y);
            false
        }
        Err(e) => {
            log::warn!("[Store] Marker not added: {}", e);
            false
        }
    }
}

/// Remove a marker by id, then persist
pub fn store_remove_marker<S: KeyValueStorage>(
    store: &AppStore,
    repo: &MarkerRepository<S>,
    view: BodyView,
    id: MarkerId,
) {
    let removed = store.markers().write().remove(view, id);
    if removed.is_some() {
        log::debug!("[Store] Removed marker {} from {}", id, view.key());
    }
    repo.persist(&store.markers().read_untracked());
}

/// Empty one view, then persist
pub fn store_clear_view<S: KeyValueStorage>(
    store: &AppStore,
    repo: &MarkerRepository<S>,
    view: BodyView,
) {
    let count = store.markers().write().clear(view);
    log::info!("[Store] Cleared {} markers from {}", count, view.key());
    repo.persist(&store.markers().read_untracked());
}

/// Markers of `view` without subscribing
pub fn store_snapshot(store: &AppStore, view: BodyView) -> Vec<Marker> {
    store.markers().read_untracked().markers(view).to_vec()
}

/// Replace the toast message; returns the new notice's sequence number
fn store_raise_notice(store: &AppStore, message: String) -> u64 {
    let seq = {
        let notice_seq = store.notice_seq();
        let mut last = notice_seq.write();
        *last += 1;
        *last
    };
    *store.notice().write() = Some(Notice { seq, message });
    seq
}

/// Clear the toast if it still shows notice `seq`
fn store_expire_notice(store: &AppStore, seq: u64) -> bool {
    let current = store.notice().with_untracked(|notice| notice.as_ref().map(|n| n.seq));
    if current != Some(seq) {
        return false;
    }
    *store.notice().write() = None;
    true
}

/// Show `message` in the toast for `duration_ms`
pub fn store_show_notice(store: &AppStore, message: String, duration_ms: u32) {
    let seq = store_raise_notice(store, message);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        // A newer notice keeps its own timer
        store_expire_notice(&store, seq);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pain_marker_core::InMemoryStorage;

    const KEY: &str = "painMarkers";

    fn setup() -> (Owner, AppStore, MarkerRepository<InMemoryStorage>) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        let repo = MarkerRepository::new(InMemoryStorage::new(), KEY);
        (owner, store, repo)
    }

    fn saved(repo: &MarkerRepository<InMemoryStorage>) -> Option<MarkerStore> {
        repo.load().unwrap()
    }

    fn add(
        store: &AppStore,
        repo: &MarkerRepository<InMemoryStorage>,
        view: BodyView,
        x: f64,
        y: f64,
        random: f64,
    ) -> bool {
        store_add_marker_at(store, repo, view, LogicalPoint::new(x, y), 1000.0, random)
    }

    #[test]
    fn test_add_inside_body_persists() {
        let (_owner, store, repo) = setup();
        *store.level().write() = PainLevel::Three;

        let added = add(&store, &repo, BodyView::Front, 100.0, 200.0, 0.5);

        assert!(added);
        let saved = saved(&repo).expect("markers were saved");
        assert_eq!(saved.len(BodyView::Front), 1);
        assert_eq!(saved.markers(BodyView::Front)[0].level, PainLevel::Three);
        assert_eq!(saved, store.markers().get_untracked());
    }

    #[test]
    fn test_add_outside_body_does_not_persist() {
        let (_owner, store, repo) = setup();

        let added = add(&store, &repo, BodyView::Front, 10.0, 200.0, 0.5);

        assert!(!added);
        assert_eq!(store.markers().get_untracked().len(BodyView::Front), 0);
        assert_eq!(repo.storage().get_item(KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let (_owner, store, repo) = setup();
        add(&store, &repo, BodyView::Front, 100.0, 100.0, 0.1);
        add(&store, &repo, BodyView::Front, 100.0, 150.0, 0.2);
        add(&store, &repo, BodyView::Back, 80.0, 300.0, 0.3);

        let first = store_snapshot(&store, BodyView::Front)[0].id;
        store_remove_marker(&store, &repo, BodyView::Front, first);
        let after_remove = saved(&repo).unwrap();
        assert_eq!(after_remove.len(BodyView::Front), 1);
        assert!(!after_remove.contains(BodyView::Front, first));

        store_clear_view(&store, &repo, BodyView::Front);
        let after_clear = saved(&repo).unwrap();
        assert_eq!(after_clear.len(BodyView::Front), 0);
        assert_eq!(after_clear.len(BodyView::Back), 1);
    }

    #[test]
    fn test_same_clock_gives_distinct_ids() {
        let (_owner, store, repo) = setup();
        add(&store, &repo, BodyView::Back, 100.0, 100.0, 0.5);
        add(&store, &repo, BodyView::Back, 100.0, 120.0, 0.5);

        let markers = store_snapshot(&store, BodyView::Back);
        assert_eq!(markers.len(), 2);
        assert_ne!(markers[0].id, markers[1].id);
    }

    #[test]
    fn test_repeated_notice_outlives_earlier_timer() {
        let (_owner, store, _repo) = setup();
        let first = store_raise_notice(&store, "Downloaded".to_string());
        let second = store_raise_notice(&store, "Downloaded".to_string());

        assert!(!store_expire_notice(&store, first));
        assert_eq!(
            store.notice().get_untracked().map(|n| n.message).as_deref(),
            Some("Downloaded")
        );

        assert!(store_expire_notice(&store, second));
        assert_eq!(store.notice().get_untracked(), None);
    }
}
