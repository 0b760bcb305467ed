//! Listing page: the creation form plus one row per product.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the product list. It loads the list once on mount and is the
//! only place that calls the create, update, and delete endpoints. Each call
//! mutates the list only after the server reports success; failures are logged
//! to the console and the list stays as it was.

use leptos::prelude::*;

use crate::components::product_item::ProductItem;
use crate::net::types::{NewProduct, Product};
use crate::state::products::ProductsState;
use crate::util::product_form::build_new_product;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Rows are keyed by `id` alone so an edited row keeps its local edit state.
fn row_key(product: &Product) -> String {
    product.id.clone()
}

/// The row's current record, looked up by `id` in the shared list.
///
/// Falls back to the last record seen, which only matters for the moment
/// between a delete landing and the row being unmounted.
fn row_signal(products: RwSignal<ProductsState>, initial: Product) -> Signal<Product> {
    Signal::derive(move || {
        products
            .with(|s| s.find(&initial.id).cloned())
            .unwrap_or_else(|| initial.clone())
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(ProductsState::default());

    // Creation form fields.
    let name = RwSignal::new(String::new());
    let explanation = RwSignal::new(String::new());
    let price = RwSignal::new("0".to_owned());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(items) => products.update(|s| s.replace_all(items)),
            Err(e) => log::warn!("product list load failed: {e}"),
        }
    });

    let on_create = Callback::new(move |draft: NewProduct| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_product(&draft).await;
            if let Err(e) = &result {
                log::warn!("product create failed: {e}");
            }
            products.maybe_update(|s| s.apply_create_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_product(&id).await;
            if let Err(e) = &result {
                log::warn!("product delete failed for {id}: {e}");
            }
            products.maybe_update(|s| s.apply_delete_result(&id, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_update = Callback::new(move |product: Product| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_product(&product).await;
            if let Err(e) = &result {
                log::warn!("product update failed for {}: {e}", product.id);
            }
            products.maybe_update(|s| s.apply_update_result(product, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = build_new_product(&name.get_untracked(), &explanation.get_untracked(), &price.get_untracked());
        on_create.run(draft);
    };

    view! {
        <div class="home-page">
            <form class="product-form product-form--create" on:submit=on_submit>
                <input
                    class="product-form__input"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="product-form__textarea"
                    rows="5"
                    placeholder="Product description"
                    prop:value=move || explanation.get()
                    on:input=move |ev| explanation.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="product-form__input"
                    type="number"
                    placeholder="Product price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input class="btn btn--primary" type="submit" value="Add product"/>
            </form>

            <div class="home-page__list">
                <For
                    each=move || products.get().items
                    key=row_key
                    children=move |product: Product| {
                        let row = row_signal(products, product);
                        view! { <ProductItem product=row on_delete=on_delete on_update=on_update/> }
                    }
                />
            </div>
        </div>
    }
}
