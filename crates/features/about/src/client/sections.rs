use crate::content::{Hero, Picture, Story};
use dioxus::prelude::*;
use shop_kernel::client::{Image, ImageFit};

#[component]
pub fn AboutHero(hero: Hero) -> Element {
    rsx! {
        section { class: "relative isolate h-96 overflow-hidden", "data-section": "hero",
            Image { src: hero.image, alt: "", fit: ImageFit::Cover }
            div { class: "absolute inset-0 bg-black/40" }
            div { class: "relative mx-auto flex h-full max-w-7xl flex-col justify-end px-6 pb-16",
                h1 { class: "text-4xl font-bold tracking-tight text-white sm:text-6xl", "{hero.heading}" }
                p { class: "mt-4 max-w-xl text-lg text-gray-100", "{hero.tagline}" }
            }
        }
    }
}

#[component]
pub fn RichText(story: Story) -> Element {
    rsx! {
        section { class: "mx-auto max-w-3xl px-6 py-16", "data-section": "rich-text",
            h2 { class: "text-2xl font-semibold text-gray-900", "{story.heading}" }
            for (index, paragraph) in story.paragraphs.iter().enumerate() {
                p { key: "{index}", class: "mt-6 text-base leading-7 text-gray-600", "{paragraph}" }
            }
        }
    }
}

#[component]
pub fn ImageBlock(picture: Picture) -> Element {
    rsx! {
        section { class: "mx-auto max-w-5xl px-6 pb-24", "data-section": "image",
            figure {
                div { class: "relative aspect-[16/9] overflow-hidden rounded-2xl",
                    Image { src: picture.src, alt: picture.alt, fit: ImageFit::Cover }
                }
                figcaption { class: "mt-3 text-sm text-gray-500", "{picture.caption}" }
            }
        }
    }
}
