use anyhow::{anyhow, bail, Context, Result};
use catalog_app_core::{
    http_catalog_api, product_list_vm, AppCommand, AppKernel, AppStore, CatalogApi, CatalogState,
    ListQuery, Product, ProductDraft, ProductListVm,
};
use catalog_core::parse_price;
use catalog_infra::CatalogClient;
use tracing::debug;

use crate::table;

/// Kernel talking HTTP to the service at `api_url`.
pub fn connect(api_url: &str) -> Result<AppKernel<CatalogClient>> {
    let api = http_catalog_api(api_url).context("Failed to build catalog client")?;
    Ok(AppKernel::new(AppStore::new(CatalogState::default()), api))
}

/// Dispatches one command, waits for its completion and turns a recorded
/// failure into an error.
async fn run<A: CatalogApi>(kernel: &mut AppKernel<A>, cmd: AppCommand) -> Result<CatalogState> {
    debug!("dispatching {cmd:?}");
    kernel.dispatch(cmd)?;
    kernel.settle().await;
    let state = kernel.store.state();
    if let Some(err) = &state.error {
        bail!("{err}");
    }
    Ok(state)
}

pub async fn cmd_list<A: CatalogApi>(
    kernel: &mut AppKernel<A>,
    query: ListQuery,
) -> Result<ProductListVm> {
    let state = run(kernel, AppCommand::LoadProducts).await?;
    let vm = product_list_vm(&state, &query);
    print!("{}", table::render(&vm));
    Ok(vm)
}

pub async fn cmd_add<A: CatalogApi>(
    kernel: &mut AppKernel<A>,
    name: String,
    price: &str,
) -> Result<Product> {
    let draft = ProductDraft::new(name, parse_price(price)?);
    let before = kernel.store.state().items.len();
    let state = run(kernel, AppCommand::AddProduct(draft)).await?;
    let product = state
        .items
        .get(before)
        .or_else(|| state.items.last())
        .cloned()
        .ok_or_else(|| anyhow!("Service returned no product"))?;
    println!("Product '{}' ({}) created.", product.name, product.id);
    Ok(product)
}

/// Loads the catalog first so unchanged fields keep their current value.
pub async fn cmd_update<A: CatalogApi>(
    kernel: &mut AppKernel<A>,
    id: String,
    name: Option<String>,
    price: Option<&str>,
) -> Result<Product> {
    if name.is_none() && price.is_none() {
        bail!("Nothing to update, pass --name and/or --price");
    }
    let price = price.map(parse_price).transpose()?;

    let state = run(kernel, AppCommand::LoadProducts).await?;
    let current = state
        .find(&id)
        .cloned()
        .ok_or_else(|| anyhow!("Product '{}' not found", id))?;

    let edited = Product {
        name: name.unwrap_or(current.name),
        price: price.unwrap_or(current.price),
        id: current.id,
    };
    let state = run(kernel, AppCommand::UpdateProduct(edited)).await?;
    let product = state
        .find(&id)
        .cloned()
        .ok_or_else(|| anyhow!("Product '{}' vanished during update", id))?;
    println!(
        "Product '{}' ({}) updated, price {:.2}.",
        product.name, product.id, product.price
    );
    Ok(product)
}

pub async fn cmd_delete<A: CatalogApi>(kernel: &mut AppKernel<A>, id: String) -> Result<()> {
    run(kernel, AppCommand::DeleteProduct(id.clone())).await?;
    println!("Product '{}' deleted.", id);
    Ok(())
}
