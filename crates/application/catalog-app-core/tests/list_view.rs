use catalog_app_core::{
    format_price, product_list_vm, CatalogState, ListQuery, Product, SortOrder,
};

fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        price,
    }
}

fn catalog() -> CatalogState {
    CatalogState::with_items(vec![
        product("1", "banana", 2.5),
        product("2", "Apple", 10.0),
        product("3", "cherry", 2.5),
        product("4", "apple pie", 7.25),
    ])
}

fn ids(state: &CatalogState, query: &ListQuery) -> Vec<String> {
    product_list_vm(state, query)
        .rows
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn default_query_keeps_arrival_order() {
    let vm = product_list_vm(&catalog(), &ListQuery::default());
    assert_eq!(vm.total, 4);
    assert_eq!(vm.shown, 4);
    assert_eq!(ids(&catalog(), &ListQuery::default()), ["1", "2", "3", "4"]);
}

#[test]
fn search_is_trimmed_and_case_insensitive() {
    let query = ListQuery {
        search: Some("  APPLE ".into()),
        ..Default::default()
    };
    let vm = product_list_vm(&catalog(), &query);
    assert_eq!(vm.shown, 2);
    assert_eq!(vm.total, 4);
    assert_eq!(ids(&catalog(), &query), ["2", "4"]);

    let blank = ListQuery {
        search: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(product_list_vm(&catalog(), &blank).shown, 4);
}

#[test]
fn price_bounds_are_inclusive() {
    let query = ListQuery {
        min_price: Some(2.5),
        max_price: Some(7.25),
        ..Default::default()
    };
    assert_eq!(ids(&catalog(), &query), ["1", "3", "4"]);
}

#[test]
fn sorts_are_stable_on_ties() {
    let by_price = ListQuery {
        sort: SortOrder::PriceAsc,
        ..Default::default()
    };
    assert_eq!(ids(&catalog(), &by_price), ["1", "3", "4", "2"]);

    let by_price_desc = ListQuery {
        sort: SortOrder::PriceDesc,
        ..Default::default()
    };
    assert_eq!(ids(&catalog(), &by_price_desc), ["2", "4", "1", "3"]);

    let by_name = ListQuery {
        sort: SortOrder::NameAsc,
        ..Default::default()
    };
    assert_eq!(ids(&catalog(), &by_name), ["2", "4", "1", "3"]);

    let by_name_desc = ListQuery {
        sort: SortOrder::NameDesc,
        ..Default::default()
    };
    assert_eq!(ids(&catalog(), &by_name_desc), ["3", "1", "4", "2"]);
}

#[test]
fn rows_carry_two_decimal_labels() {
    let vm = product_list_vm(&catalog(), &ListQuery::default());
    let labels: Vec<_> = vm.rows.iter().map(|r| r.price_label.as_str()).collect();
    assert_eq!(labels, ["2.50", "10.00", "2.50", "7.25"]);
    assert_eq!(format_price(0.0), "0.00");
}

#[test]
fn editing_is_disabled_while_loading() {
    let mut state = catalog();
    state.loading = true;
    state.error = Some("boom".into());

    let vm = product_list_vm(&state, &ListQuery::default());
    assert!(vm.loading);
    assert!(!vm.can_edit);
    assert_eq!(vm.error.as_deref(), Some("boom"));

    state.loading = false;
    assert!(product_list_vm(&state, &ListQuery::default()).can_edit);
}
