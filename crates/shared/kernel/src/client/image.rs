use dioxus::prelude::*;

/// How an image fills the box it is rendered into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFit {
    /// Stretch to the box, ignoring the aspect ratio.
    Fill,
    /// Scale down to fit entirely inside the box.
    #[default]
    Contain,
    /// Scale up to cover the box, cropping the overflow.
    Cover,
}

impl ImageFit {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Fill => "object-fill",
            Self::Contain => "object-contain",
            Self::Cover => "object-cover",
        }
    }
}

/// An image that fills its (relatively positioned) parent.
///
/// Delivery and resizing are left to the CDN behind `src`.
#[component]
pub fn Image(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    #[props(default)] fit: ImageFit,
) -> Element {
    let class = format!("absolute inset-0 h-full w-full {}", fit.class());

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            "loading": "lazy",
            "decoding": "async",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fit_class_and_alt_text() {
        let html = dioxus_ssr::render_element(rsx! {
            Image { src: "/images/shirt.jpg", alt: "Hørskjorte", fit: ImageFit::Cover }
        });

        assert!(html.contains("object-cover"));
        assert!(html.contains(r#"src="/images/shirt.jpg""#));
        assert!(html.contains(r#"alt="Hørskjorte""#));
    }

    #[test]
    fn defaults_to_contain() {
        let html = dioxus_ssr::render_element(rsx! { Image { src: "/a.png", alt: "" } });
        assert!(html.contains("object-contain"));
    }
}
