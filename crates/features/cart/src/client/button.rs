use super::icons::BagIcon;
use super::labels::OPEN_CART;
use super::store::CartStore;
use crate::state::CartActions;
use dioxus::prelude::*;

/// Header button that toggles the mini-cart, with the unit count as a badge.
#[component]
pub fn CartButton(store: CartStore) -> Element {
    let mut store = store;
    let count = store.item_count();

    rsx! {
        button {
            r#type: "button",
            class: "group -m-2 flex items-center p-2",
            "aria-label": OPEN_CART,
            onclick: move |_| store.toggle_open(),
            BagIcon {}
            span {
                class: "ml-2 text-sm font-medium text-gray-700 group-hover:text-gray-800",
                "data-cart-count": "true",
                "{count}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CartState;
    use shop_domain::{LineItem, Money};
    use std::num::NonZeroU32;

    #[component]
    fn Harness(state: CartState) -> Element {
        let store = crate::client::use_cart_store(move || state);
        rsx! { CartButton { store } }
    }

    #[test]
    fn badge_shows_total_units() {
        let mut state = CartState::default();
        for (id, quantity) in [("a", 2), ("b", 3)] {
            state.add_item(
                LineItem::builder()
                    .id(id)
                    .title(id)
                    .handle(id)
                    .price(Money::from_minor(100))
                    .quantity(NonZeroU32::new(quantity).expect("non-zero"))
                    .build(),
            );
        }

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(">5</span>"));
        assert!(html.contains(OPEN_CART));
    }
}
