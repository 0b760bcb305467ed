//! Detail page for a single product at `/{product_id}`.
//!
//! The catalog API has no single-item read, so the page loads the list once
//! and picks the matching `id` out of it.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::Product;

/// Progress of the one list request the page makes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum ListLoad {
    #[default]
    Pending,
    Loaded(Vec<Product>),
    Failed,
}

/// What the detail page can show for the requested id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ProductLookup {
    Loading,
    Found(Product),
    Missing,
    Unavailable,
}

/// Resolve `id` against the list load. A failed load is not a missing product.
pub(crate) fn resolve_product(load: &ListLoad, id: &str) -> ProductLookup {
    match load {
        ListLoad::Pending => ProductLookup::Loading,
        ListLoad::Failed => ProductLookup::Unavailable,
        ListLoad::Loaded(items) => items
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .map_or(ProductLookup::Missing, ProductLookup::Found),
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("product_id").unwrap_or_default();
    let load = RwSignal::new(ListLoad::Pending);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(list) => load.set(ListLoad::Loaded(list)),
            Err(e) => {
                log::warn!("product list load failed: {e}");
                load.set(ListLoad::Failed);
            }
        }
    });

    let lookup = move || load.with(|load| resolve_product(load, &product_id()));

    view! {
        <div class="product-page">
            <A href="/">"Back to products"</A>
            {move || match lookup() {
                ProductLookup::Loading => view! { <p class="product-page__status">"Loading..."</p> }.into_any(),
                ProductLookup::Missing => {
                    view! { <p class="product-page__status">"Product not found."</p> }.into_any()
                }
                ProductLookup::Unavailable => {
                    view! { <p class="product-page__status">"Products could not be loaded."</p> }.into_any()
                }
                ProductLookup::Found(product) => {
                    view! {
                        <article class="product-page__detail">
                            <h1 class="product-page__name">{product.name}</h1>
                            <div class="product-page__id">{product.id}</div>
                            <div class="product-page__price">{product.price}</div>
                            <p class="product-page__explanation">{product.explanation}</p>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
