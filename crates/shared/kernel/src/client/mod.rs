//! Dioxus primitives shared by the feature slices.

mod image;

pub use image::{Image, ImageFit, ImageProps};
