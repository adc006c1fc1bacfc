//! Dioxus sections of the about page.

mod sections;

pub use sections::{
    AboutHero, AboutHeroProps, ImageBlock, ImageBlockProps, RichText, RichTextProps,
};

use crate::content::{HERO, PICTURE, STORY};
use dioxus::prelude::*;

/// Hero banner, story text and image block, always in that order.
#[component]
pub fn AboutPage() -> Element {
    rsx! {
        main { class: "bg-white",
            AboutHero { hero: HERO }
            RichText { story: STORY }
            ImageBlock { picture: PICTURE }
        }
    }
}
