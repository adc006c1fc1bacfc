use super::icons::CloseIcon;
use super::labels::{
    CHECKOUT, CLOSE_PANEL, CONTINUE_SHOPPING, EMPTY_CART, OR, PANEL_TITLE, QUANTITY, REMOVE_ITEM,
    SHIPPING_NOTE, SUBTOTAL,
};
use super::store::CartStore;
use crate::state::CartActions;
use dioxus::prelude::*;
use shop_domain::LineItem;
use shop_kernel::client::{Image, ImageFit};
use shop_kernel::format::CurrencyFormatter;

const TITLE_ID: &str = "mini-cart-title";

/// Slide-over cart panel.
///
/// Renders nothing while the store is closed. The close button, a click on the backdrop and
/// the Escape key all close it. The subtotal is recomputed from the cart on every render.
#[component]
pub fn MiniCart(store: CartStore, formatter: CurrencyFormatter) -> Element {
    let mut store = store;
    let state = store.snapshot();

    if !state.is_open() {
        return rsx! {};
    }

    let cart = state.cart();
    let has_items = !cart.is_empty();
    let subtotal = formatter.format(cart.subtotal());

    rsx! {
        div {
            class: "fixed inset-0 z-50 overflow-hidden",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": TITLE_ID,
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    store.set_open(false);
                }
            },
            div {
                class: "fixed inset-0 bg-gray-500 bg-opacity-75 transition-opacity",
                "data-backdrop": "true",
                onclick: move |_| store.set_open(false),
            }
            div { class: "pointer-events-none fixed inset-y-0 right-0 flex max-w-full pl-10",
                div { class: "pointer-events-auto w-screen max-w-md",
                    div { class: "flex h-full flex-col overflow-y-scroll bg-white shadow-xl",
                        div { class: "flex-1 overflow-y-auto py-6 px-4 sm:px-6",
                            div { class: "flex items-start justify-between",
                                h2 { id: TITLE_ID, class: "text-lg font-medium text-gray-900", "{PANEL_TITLE}" }
                                div { class: "ml-3 flex h-7 items-center",
                                    button {
                                        r#type: "button",
                                        class: "m-2 p-2 text-gray-400 hover:text-gray-500",
                                        autofocus: true,
                                        onclick: move |_| store.set_open(false),
                                        span { class: "sr-only", "{CLOSE_PANEL}" }
                                        CloseIcon {}
                                    }
                                }
                            }
                            div { class: "mt-8",
                                div { class: "flow-root",
                                    if has_items {
                                        ul { role: "list", class: "-my-6 divide-y divide-gray-200",
                                            for row in cart.rows() {
                                                CartLine {
                                                    key: "{row.key()}",
                                                    item: row.item.clone(),
                                                    store,
                                                    formatter: formatter.clone(),
                                                }
                                            }
                                        }
                                    } else {
                                        div { "{EMPTY_CART}" }
                                    }
                                }
                            }
                        }
                        if has_items {
                            CartFooter { store, subtotal, checkout_url: state.checkout_url() }
                        }
                    }
                }
            }
        }
    }
}

/// One row of the panel.
#[component]
fn CartLine(item: LineItem, store: CartStore, formatter: CurrencyFormatter) -> Element {
    let mut store = store;
    let href = item.product_path();
    let price = formatter.format(item.price);
    let quantity = item.quantity.get();
    let id = item.id.to_string();
    let remove_id = id.clone();
    let title = item.title.clone();
    let variant_title = item.variant_title.clone();

    rsx! {
        li { class: "flex py-6", "data-line-item": "{id}",
            div { class: "relative h-24 w-24 flex-shrink-0 overflow-hidden rounded-md border border-gray-200",
                if let Some(src) = item.image.clone() {
                    Image { src, alt: title.clone(), fit: ImageFit::Contain }
                }
            }
            div { class: "ml-4 flex flex-1 flex-col",
                div {
                    div { class: "flex justify-between text-base font-medium text-gray-900",
                        h3 {
                            a { href: "{href}", onclick: move |_| store.set_open(false), "{title}" }
                        }
                        p { class: "ml-4", "{price}" }
                    }
                    p { class: "mt-1 text-sm text-gray-500", "{variant_title}" }
                }
                div { class: "flex flex-1 items-end justify-between text-sm",
                    p { class: "text-gray-500", "{QUANTITY}: {quantity}" }
                    div { class: "flex",
                        button {
                            r#type: "button",
                            class: "font-medium text-indigo-600 hover:text-indigo-500",
                            onclick: move |_| {
                                store.remove_item(&remove_id);
                            },
                            "{REMOVE_ITEM}"
                        }
                    }
                }
            }
        }
    }
}

/// Subtotal, disclaimer and the two ways out of the panel.
#[component]
fn CartFooter(
    store: CartStore,
    subtotal: String,
    #[props(!optional)] checkout_url: Option<String>,
) -> Element {
    let mut store = store;
    let has_checkout = checkout_url.is_some();
    let href = checkout_url.unwrap_or_default();

    rsx! {
        div { class: "border-t border-gray-200 py-6 px-4 sm:px-6", "data-cart-footer": "true",
            div { class: "flex justify-between text-base font-medium text-gray-900",
                p { "{SUBTOTAL}" }
                p { "data-subtotal": "true", "{subtotal}" }
            }
            p { class: "mt-0.5 text-sm text-gray-500", "{SHIPPING_NOTE}" }
            div { class: "mt-6",
                if has_checkout {
                    a {
                        href: "{href}",
                        class: "flex items-center justify-center rounded-md border border-transparent bg-indigo-600 px-6 py-3 text-base font-medium text-white shadow-sm hover:bg-indigo-700",
                        "{CHECKOUT}"
                    }
                } else {
                    span {
                        class: "flex cursor-not-allowed items-center justify-center rounded-md bg-indigo-300 px-6 py-3 text-base font-medium text-white",
                        "aria-disabled": "true",
                        "{CHECKOUT}"
                    }
                }
            }
            div { class: "mt-6 flex justify-center text-center text-sm text-gray-500",
                p {
                    "{OR} "
                    button {
                        r#type: "button",
                        class: "font-medium hover:text-gray-800",
                        onclick: move |_| store.set_open(false),
                        "{CONTINUE_SHOPPING}"
                        span { "aria-hidden": "true", " →" }
                    }
                }
            }
        }
    }
}
