use dioxus::prelude::*;
use crate::theme::spacing;

/// One widget of the page, with its heading.
#[component]
pub fn SectionCard(is_dark: bool, #[props(into)] title: String, children: Element) -> Element {
    let surface = if is_dark { "rgba(73,69,79,0.9)" } else { "rgba(255,255,255,0.95)" };
    rsx! {
        section {
            style: "background: {surface}; border-radius: 12px; padding: {spacing::SECTION_PADDING}; margin: {spacing::SM};",
            h1 { style: "font-size: 1.25rem; margin: 0 0 {spacing::MD};", "{title}" }
            {children}
        }
    }
}
