//! Application root shared by the web and desktop shells.

use dioxus::prelude::*;
use shop_about::client::AboutPage;
use shop_cart::client::{CartButton, MiniCart, use_cart, use_cart_provider};
use shop_cart::{CartError, CartItemInput, CartState};
use shop_domain::config::StoreConfig;
use shop_kernel::format::CurrencyFormatter;
use tracing::info;

/// Header, about page and mini-cart inside a [`StoreProvider`].
#[component]
pub fn App() -> Element {
    rsx! {
        StoreProvider {
            Header {}
            AboutPage {}
            CartPanel {}
        }
    }
}

/// Makes the storefront services available to `children`: the [`StoreConfig`], the cart
/// store (see [`use_cart`]) and the shop's [`CurrencyFormatter`].
///
/// The config is taken from the root context; without one the defaults apply.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    let config =
        use_context_provider(|| try_consume_context::<StoreConfig>().unwrap_or_default());
    use_context_provider(|| CurrencyFormatter::new(config.currency.clone()));
    use_cart_provider(|| {
        info!(shop = %config.shop.name, "Cart store created");
        CartState::new(config.checkout.url.clone())
    });

    rsx! { {children} }
}

/// Adds raw add-to-cart payloads, priced in the configured currency's minor units.
///
/// Must be called below a [`StoreProvider`].
#[must_use]
pub fn use_add_to_cart() -> Callback<CartItemInput, Result<(), CartError>> {
    let mut store = use_cart();
    let fraction_digits = use_context::<StoreConfig>().currency.fraction_digits;
    use_callback(move |input: CartItemInput| store.add_input(input, fraction_digits))
}

/// Shop name and the cart button.
#[component]
pub fn Header() -> Element {
    let config = use_context::<StoreConfig>();
    let store = use_cart();
    let shop_name = config.shop.name.as_str();

    rsx! {
        header { class: "border-b border-gray-200 bg-white",
            nav { class: "mx-auto flex h-16 max-w-7xl items-center justify-between px-6",
                a { href: "/", class: "text-lg font-semibold text-gray-900", "{shop_name}" }
                CartButton { store }
            }
        }
    }
}

/// The mini-cart bound to the provided store and formatter.
#[component]
pub fn CartPanel() -> Element {
    let store = use_cart();
    let formatter = use_context::<CurrencyFormatter>();

    rsx! { MiniCart { store, formatter } }
}
