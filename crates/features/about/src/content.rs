//! Static copy for the about page.

/// Full-width banner at the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
}

/// A heading followed by paragraphs of body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// A single captioned picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const HERO: Hero = Hero {
    heading: "Om os",
    tagline: "Tøj lavet til at holde, fra et lille værksted i København.",
    image: "/images/about/hero.jpg",
};

pub const STORY: Story = Story {
    heading: "Vores historie",
    paragraphs: &[
        "Vi startede med en symaskine og en idé om, at gode basisvarer ikke behøver at være dyre.",
        "I dag designer vi stadig alt selv og samarbejder med få, udvalgte producenter i Europa.",
        "Vi vælger naturlige materialer, syr i små serier og reparerer gerne det, du allerede har købt.",
    ],
};

pub const PICTURE: Picture = Picture {
    src: "/images/about/workshop.jpg",
    alt: "Værkstedet med stofruller og symaskiner",
    caption: "Værkstedet på Nørrebro",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_filled_in() {
        assert!(!HERO.heading.is_empty());
        assert!(!STORY.paragraphs.is_empty());
        assert!(STORY.paragraphs.iter().all(|p| !p.trim().is_empty()));
        assert!(PICTURE.src.starts_with('/'));
        assert!(!PICTURE.alt.is_empty());
    }
}
