use std::borrow::Cow;

/// A specialized [`CartError`] enum of this crate.
#[shop_derive::shop_error]
pub enum CartError {
    /// Add-to-cart input that cannot become a line item (missing or malformed fields).
    #[error("Invalid line item{}: {message}", format_context(.context))]
    InvalidItem { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal cart error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
