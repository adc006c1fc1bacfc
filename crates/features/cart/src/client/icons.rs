use dioxus::prelude::*;

#[component]
pub(crate) fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "h-6 w-6",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", stroke_linejoin: "round", d: "M6 18L18 6M6 6l12 12" }
        }
    }
}

#[component]
pub(crate) fn BagIcon() -> Element {
    rsx! {
        svg {
            class: "h-6 w-6",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z",
            }
        }
    }
}
