use std::cmp::Ordering;

use crate::domain::{CatalogState, Product, ProductId};

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Arrival,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

/// Search, filter and sort options for the product list.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortOrder,
}

impl ListQuery {
    fn matches(&self, p: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !p.name.to_lowercase().contains(needle) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| p.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| p.price > max) {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct ProductRowVm {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub price_label: String,
}

impl From<&Product> for ProductRowVm {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            price_label: format_price(p.price),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductListVm {
    pub rows: Vec<ProductRowVm>,
    pub total: usize,
    pub shown: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub can_edit: bool,
}

pub fn product_list_vm(state: &CatalogState, query: &ListQuery) -> ProductListVm {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Product> = state
        .items
        .iter()
        .filter(|p| query.matches(p, needle.as_deref()))
        .collect();

    // sort_by is stable, so ties keep arrival order.
    match query.sort {
        SortOrder::Arrival => {}
        SortOrder::NameAsc => matched.sort_by(|a, b| cmp_name(a, b)),
        SortOrder::NameDesc => matched.sort_by(|a, b| cmp_name(b, a)),
        SortOrder::PriceAsc => matched.sort_by(|a, b| cmp_price(a, b)),
        SortOrder::PriceDesc => matched.sort_by(|a, b| cmp_price(b, a)),
    }

    let rows: Vec<ProductRowVm> = matched.into_iter().map(ProductRowVm::from).collect();
    ProductListVm {
        total: state.items.len(),
        shown: rows.len(),
        rows,
        loading: state.loading,
        error: state.error.clone(),
        can_edit: !state.loading,
    }
}

fn cmp_name(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn cmp_price(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}
