//! Storefront copy for the cart panel (Danish shop, English panel title).

pub const PANEL_TITLE: &str = "Shopping cart";
pub const CLOSE_PANEL: &str = "Close panel";
pub const OPEN_CART: &str = "Åbn kurv";
pub const EMPTY_CART: &str = "Du har ikke noget i kurven.";
pub const QUANTITY: &str = "Antal";
pub const REMOVE_ITEM: &str = "Fjern vare";
pub const SUBTOTAL: &str = "Subtotal";
pub const SHIPPING_NOTE: &str = "Forsendelse og afgifter beregnes ved kassen.";
pub const CHECKOUT: &str = "Gå til betaling";
pub const OR: &str = "eller";
pub const CONTINUE_SHOPPING: &str = "Fortsæt med at shoppe";
