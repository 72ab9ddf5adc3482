//! Repository Integration Tests
//!
//! Persistence behaviour against in-memory and failing storage backends.

#[cfg(test)]
mod tests {
    use crate::domain::{BodyView, IdGenerator, Marker, MarkerStore, PainLevel};
    use crate::export::ExportPlan;
    use crate::geometry::{LogicalPoint, ScreenRect};
    use crate::repository::{
        InMemoryStorage, KeyValueStorage, MarkerRepository, RepositoryError, StorageError,
        DEFAULT_STORAGE_KEY,
    };
    use crate::ExportStyle;

    /// Storage that rejects every call, like a full or disabled localStorage
    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn setup_repo() -> MarkerRepository<InMemoryStorage> {
        MarkerRepository::new(InMemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }

    fn sample_store(ids: &mut IdGenerator) -> MarkerStore {
        let mut store = MarkerStore::new();
        let points = [
            (BodyView::Front, 100.0, 200.0, PainLevel::Three),
            (BodyView::Front, 45.5, 33.25, PainLevel::One),
            (BodyView::Back, 160.0, 399.0, PainLevel::Four),
            (BodyView::Back, 88.125, 120.75, PainLevel::Two),
        ];
        for (i, (view, x, y, level)) in points.into_iter().enumerate() {
            let id = ids.next(1_700_000_000_000.0 + i as f64, 0.123);
            store
                .add(view, Marker::new(LogicalPoint::new(x, y), level, id))
                .expect("inside body");
        }
        store
    }

    #[test]
    fn test_round_trip() {
        let repo = setup_repo();
        let store = sample_store(&mut IdGenerator::new());

        repo.save(&store).expect("save failed");
        let loaded = repo.load().expect("load failed").expect("nothing saved");

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_round_trip_empty_store() {
        let repo = setup_repo();
        repo.save(&MarkerStore::new()).unwrap();
        let raw = repo.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"front":[],"back":[]}"#);
        assert_eq!(repo.load().unwrap(), Some(MarkerStore::new()));
    }

    #[test]
    fn test_load_absent_is_none() {
        let repo = setup_repo();
        assert!(repo.load().unwrap().is_none());
        assert_eq!(repo.load_or_default(), MarkerStore::new());
    }

    #[test]
    fn test_corrupted_value_loads_default() {
        let storage = InMemoryStorage::with_item(DEFAULT_STORAGE_KEY, "not json {{");
        let repo = MarkerRepository::new(storage, DEFAULT_STORAGE_KEY);

        assert!(matches!(repo.load(), Err(RepositoryError::Malformed(_))));
        let store = repo.load_or_default();
        assert_eq!(store.len(BodyView::Front), 0);
        assert_eq!(store.len(BodyView::Back), 0);
    }

    #[test]
    fn test_bad_level_is_malformed() {
        let json = r##"{"front":[{"x":100,"y":200,"level":9,"color":"#000","bgColor":"#fff","id":1}],"back":[]}"##;
        let repo = MarkerRepository::new(InMemoryStorage::with_item("k", json), "k");
        assert!(repo.load().is_err());
        assert_eq!(repo.load_or_default(), MarkerStore::new());
    }

    #[test]
    fn test_stored_colors_are_kept() {
        let json = r##"{"front":[{"x":100,"y":200,"level":2,"color":"#123456","bgColor":"#abcdef","id":42.5}]}"##;
        let repo = MarkerRepository::new(InMemoryStorage::with_item("k", json), "k");
        let store = repo.load().unwrap().unwrap();
        let marker = &store.markers(BodyView::Front)[0];
        assert_eq!(marker.color, "#123456");
        assert_eq!(marker.bg_color, "#abcdef");
        assert_eq!(store.len(BodyView::Back), 0);
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let repo = MarkerRepository::new(FailingStorage, DEFAULT_STORAGE_KEY);
        let store = sample_store(&mut IdGenerator::new());

        assert!(matches!(
            repo.save(&store),
            Err(RepositoryError::Storage(StorageError::Write { .. }))
        ));
        // Neither call panics
        repo.persist(&store);
        assert_eq!(repo.load_or_default(), MarkerStore::new());
    }

    #[test]
    fn test_custom_key() {
        let repo = MarkerRepository::new(InMemoryStorage::new(), "other-key");
        repo.save(&sample_store(&mut IdGenerator::new())).unwrap();
        assert!(repo.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert!(repo.storage().get_item("other-key").unwrap().is_some());
    }

    #[test]
    fn test_tap_to_export_scenario() {
        let storage = InMemoryStorage::new();
        let repo = MarkerRepository::new(&storage, DEFAULT_STORAGE_KEY);
        let mut ids = IdGenerator::new();
        let mut store = repo.load_or_default();

        // Tap the middle of a 300x600 surface: logical (100, 200)
        let rect = ScreenRect::new(0.0, 0.0, 300.0, 600.0);
        let point = rect.to_logical(150.0, 300.0).expect("inside drawing");
        let marker = Marker::new(point, PainLevel::Three, ids.next(1000.0, 0.5));
        store.add(BodyView::Front, marker).unwrap();
        repo.persist(&store);

        let front = store.markers(BodyView::Front);
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].level, PainLevel::Three);
        assert_eq!(front[0].color, "#FF5252");
        assert_eq!(front[0].bg_color, "#FF9999");
        assert!(store.markers(BodyView::Back).is_empty());

        // A tap in the head margin is ignored
        let outside = rect.to_logical(150.0, 15.0).expect("inside drawing");
        let rejected = Marker::new(outside, PainLevel::Three, ids.next(1001.0, 0.5));
        assert!(store.add(BodyView::Front, rejected).is_err());
        assert_eq!(store.len(BodyView::Front), 1);

        // Reload sees the same store
        let reloaded = MarkerRepository::new(&storage, DEFAULT_STORAGE_KEY).load_or_default();
        assert_eq!(reloaded, store);

        let plan = ExportPlan::new(reloaded.markers(BodyView::Front), &ExportStyle::default());
        assert_eq!((plan.width, plan.height), (400, 800));
        assert_eq!(plan.circles.len(), 1);
        assert_eq!((plan.circles[0].cx, plan.circles[0].cy), (200.0, 400.0));
        assert_eq!(plan.circles[0].radius, 16.0);
    }
}
