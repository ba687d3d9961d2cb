use catalog_app_core::app_core::{reduce, AppStore, DomainEvent};
use catalog_app_core::{CatalogState, Product, ProductDraft};

fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        price,
    }
}

fn apply_all(state: CatalogState, events: Vec<DomainEvent>) -> CatalogState {
    events.into_iter().fold(state, reduce)
}

#[test]
fn request_events_set_loading_and_clear_error() {
    let requests = vec![
        DomainEvent::FetchRequested,
        DomainEvent::AddRequested(ProductDraft::new("A", 1.0)),
        DomainEvent::UpdateRequested(product("1", "A", 1.0)),
        DomainEvent::DeleteRequested("1".into()),
    ];
    for req in requests {
        let state = CatalogState {
            error: Some("old failure".into()),
            ..Default::default()
        };
        let next = reduce(state, req.clone());
        assert!(next.loading, "{req:?} should set loading");
        assert_eq!(next.error, None, "{req:?} should clear error");
        assert!(next.items.is_empty());
    }
}

#[test]
fn fetch_clears_prior_error_before_completion() {
    let state = reduce(CatalogState::default(), DomainEvent::FetchFailed("boom".into()));
    assert_eq!(state.error.as_deref(), Some("boom"));

    let state = reduce(state, DomainEvent::FetchRequested);
    assert_eq!(state.error, None);
    assert!(state.loading);
}

#[test]
fn fetch_success_replaces_items_in_arrival_order() {
    let state = CatalogState::with_items(vec![product("old", "Old", 1.0)]);
    let list = vec![product("2", "B", 2.0), product("1", "A", 1.0)];

    let state = apply_all(
        state,
        vec![DomainEvent::FetchRequested, DomainEvent::FetchSucceeded(list.clone())],
    );
    assert_eq!(state.items, list);
    assert!(!state.loading);
}

#[test]
fn fetch_success_drops_repeated_ids() {
    let state = reduce(
        CatalogState::default(),
        DomainEvent::FetchSucceeded(vec![
            product("1", "A", 1.0),
            product("1", "A again", 2.0),
            product("2", "B", 3.0),
        ]),
    );
    let ids: Vec<_> = state.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(state.items[0].name, "A");
}

#[test]
fn each_add_success_grows_items_by_one_without_duplicates() {
    let mut state = CatalogState::default();
    for i in 0..5 {
        let before = state.items.len();
        state = reduce(state, DomainEvent::AddRequested(ProductDraft::new("x", 1.0)));
        state = reduce(
            state,
            DomainEvent::AddSucceeded(product(&i.to_string(), "x", 1.0)),
        );
        assert_eq!(state.items.len(), before + 1);
        assert!(!state.loading);
    }

    let mut ids: Vec<_> = state.items.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), state.items.len());
}

#[test]
fn add_success_with_known_id_replaces_instead_of_duplicating() {
    let state = CatalogState::with_items(vec![product("1", "A", 1.0)]);
    let state = reduce(state, DomainEvent::AddSucceeded(product("1", "A2", 2.0)));
    assert_eq!(state.items, vec![product("1", "A2", 2.0)]);
}

#[test]
fn update_scenario_replaces_in_place() {
    let state = CatalogState::with_items(vec![product("1", "A", 10.0)]);

    let state = apply_all(
        state,
        vec![
            DomainEvent::UpdateRequested(product("1", "A", 20.0)),
            DomainEvent::UpdateSucceeded(product("1", "A", 20.0)),
        ],
    );
    assert_eq!(state.items, vec![product("1", "A", 20.0)]);
    assert!(!state.loading);
}

#[test]
fn update_success_keeps_position() {
    let state = CatalogState::with_items(vec![
        product("1", "A", 1.0),
        product("2", "B", 2.0),
        product("3", "C", 3.0),
    ]);
    let state = reduce(state, DomainEvent::UpdateSucceeded(product("2", "B+", 5.0)));
    let names: Vec<_> = state.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B+", "C"]);
}

#[test]
fn update_success_for_absent_id_leaves_items_unchanged() {
    let items = vec![product("1", "A", 10.0)];
    let state = CatalogState {
        items: items.clone(),
        loading: true,
        error: None,
    };
    let state = reduce(state, DomainEvent::UpdateSucceeded(product("9", "Z", 1.0)));
    assert_eq!(state.items, items);
    assert!(!state.loading);
}

#[test]
fn delete_success_is_idempotent() {
    let state = CatalogState::with_items(vec![product("1", "A", 1.0), product("2", "B", 2.0)]);

    let once = reduce(state, DomainEvent::DeleteSucceeded("1".into()));
    let twice = reduce(once.clone(), DomainEvent::DeleteSucceeded("1".into()));

    assert_eq!(once, twice);
    assert!(twice.find("1").is_none());
    assert_eq!(twice.items, vec![product("2", "B", 2.0)]);
}

#[test]
fn delete_failure_scenario_keeps_items_and_records_error() {
    let items = vec![product("1", "A", 10.0)];
    let state = apply_all(
        CatalogState::with_items(items.clone()),
        vec![
            DomainEvent::DeleteRequested("1".into()),
            DomainEvent::DeleteFailed("network error".into()),
        ],
    );
    assert_eq!(state.items, items);
    assert_eq!(state.error.as_deref(), Some("network error"));
    assert!(!state.loading);
}

#[test]
fn delete_success_clears_error_but_other_successes_do_not() {
    let failed = CatalogState {
        error: Some("stale".into()),
        ..Default::default()
    };
    let after_delete = reduce(failed.clone(), DomainEvent::DeleteSucceeded("1".into()));
    assert_eq!(after_delete.error, None);

    let after_fetch = reduce(failed, DomainEvent::FetchSucceeded(vec![]));
    assert_eq!(after_fetch.error.as_deref(), Some("stale"));
}

#[test]
fn store_applies_events_and_hands_out_snapshots() {
    let store = AppStore::new(CatalogState::default());
    let snapshot = store.state();

    store.apply(DomainEvent::AddSucceeded(product("1", "A", 1.0)));

    assert!(snapshot.items.is_empty());
    assert_eq!(store.state().items.len(), 1);
}
