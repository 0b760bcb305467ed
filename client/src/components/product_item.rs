//! One row of the product list with delete and inline edit actions.
//!
//! The row never talks to the network. Delete and update go through the
//! callbacks the listing view hands down, and the list only changes once the
//! listing view sees the server accept the call.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Product;
use crate::util::product_form::build_edited_product;

/// Product fields, a delete button, and a view/edit toggle.
///
/// `product` tracks the list entry with this row's `id`, so a successful update
/// re-renders the fields in place. The edit form is seeded once when the row
/// is created and stays open after submitting.
#[component]
pub fn ProductItem(product: Signal<Product>, on_delete: Callback<String>, on_update: Callback<Product>) -> impl IntoView {
    let seed = product.get_untracked();
    let edit_mode = RwSignal::new(false);
    let edit_name = RwSignal::new(seed.name);
    let edit_explanation = RwSignal::new(seed.explanation);
    let edit_price = RwSignal::new(seed.price.to_string());

    let submit = Callback::new(move |()| {
        let edited = build_edited_product(
            &product.get_untracked(),
            &edit_name.get_untracked(),
            &edit_explanation.get_untracked(),
            &edit_price.get_untracked(),
        );
        on_update.run(edited);
    });

    view! {
        <div class="product-item">
            <div class="product-item__id">{move || product.get().id}</div>
            <div class="product-item__name">
                <A href=move || format!("/{}", product.get().id)>{move || product.get().name}</A>
            </div>
            <div class="product-item__price">{move || product.get().price}</div>
            <div class="product-item__explanation">{move || product.get().explanation}</div>

            <button type="button" class="btn btn--danger" on:click=move |_| on_delete.run(product.get_untracked().id)>
                "Delete"
            </button>
            <button type="button" class="btn" on:click=move |_| edit_mode.update(|on| *on = !*on)>
                "Edit"
            </button>

            <Show when=move || edit_mode.get()>
                <form
                    class="product-form product-form--edit"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <input
                        class="product-form__input"
                        type="text"
                        placeholder="Product name"
                        prop:value=move || edit_name.get()
                        on:input=move |ev| edit_name.set(event_target_value(&ev))
                    />
                    <textarea
                        class="product-form__textarea"
                        rows="5"
                        placeholder="Product description"
                        prop:value=move || edit_explanation.get()
                        on:input=move |ev| edit_explanation.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="product-form__input"
                        type="number"
                        placeholder="Product price"
                        prop:value=move || edit_price.get()
                        on:input=move |ev| edit_price.set(event_target_value(&ev))
                    />
                    <input class="btn btn--primary" type="submit" value="Save product"/>
                </form>
            </Show>
        </div>
    }
}
