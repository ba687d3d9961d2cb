pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod ports;
pub mod remote;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{CatalogState, Product, ProductDraft, ProductId};
pub use kernel::AppKernel;
pub use ports::*;
pub use remote::http_catalog_api;
pub use viewmodel::*;
