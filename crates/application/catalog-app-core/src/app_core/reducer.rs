use std::collections::HashSet;

use crate::domain::{CatalogState, Product};

use super::events::DomainEvent;

pub fn reduce(mut state: CatalogState, ev: DomainEvent) -> CatalogState {
    match ev {
        DomainEvent::FetchRequested
        | DomainEvent::AddRequested(_)
        | DomainEvent::UpdateRequested(_)
        | DomainEvent::DeleteRequested(_) => {
            state.loading = true;
            state.error = None;
        }

        DomainEvent::FetchSucceeded(list) => {
            state.items = dedup_by_id(list);
            state.loading = false;
        }

        DomainEvent::AddSucceeded(p) => {
            // A repeated id replaces rather than duplicates.
            if let Some(ix) = state.items.iter().position(|x| x.id == p.id) {
                state.items[ix] = p;
            } else {
                state.items.push(p);
            }
            state.loading = false;
        }

        DomainEvent::UpdateSucceeded(p) => {
            if let Some(ix) = state.items.iter().position(|x| x.id == p.id) {
                state.items[ix] = p;
            }
            state.loading = false;
        }

        DomainEvent::DeleteSucceeded(id) => {
            state.items.retain(|p| p.id != id);
            state.loading = false;
            state.error = None;
        }

        DomainEvent::FetchFailed(msg)
        | DomainEvent::AddFailed(msg)
        | DomainEvent::UpdateFailed(msg)
        | DomainEvent::DeleteFailed(msg) => {
            state.error = Some(msg);
            state.loading = false;
        }
    }
    state
}

fn dedup_by_id(list: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(list.len());
    list.into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
