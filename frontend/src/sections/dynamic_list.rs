use chipin_core::models::{ListEvent, ListState};
use dioxus::prelude::*;

use super::BUTTON_STYLE;
use crate::dispatch::Dispatcher;
use crate::theme::AppColors;
use crate::widgets::SectionCard;

/// Entries are keyed by id so the DOM keeps their identity across removals.
/// Clicking an entry removes it.
#[component]
pub fn DynamicListSection(is_dark: bool, state: ListState, dispatch: Dispatcher) -> Element {
    let primary = AppColors::primary(is_dark);
    let outline = AppColors::outline(is_dark);
    rsx! {
        SectionCard { is_dark, title: "Dynamic list",
            div { class: "addButtons",
                button {
                    class: "add-btn",
                    onclick: move |_| dispatch.send(ListEvent::Add),
                    style: "{BUTTON_STYLE} background: {primary};",
                    "Add Item"
                }
            }
            div { class: "list",
                {state.entries.iter().map(move |entry| {
                    let id = entry.id;
                    rsx! {
                        div {
                            key: "{id}",
                            class: "list-item",
                            "data-index": "{id}",
                            title: "Click to remove",
                            onclick: move |_| dispatch.send(ListEvent::Remove(id)),
                            style: "padding: 4px 8px; margin-top: 4px; border-bottom: 1px solid {outline}; cursor: pointer;",
                            p { style: "margin: 0;", "{entry.label}" }
                        }
                    }
                })}
            }
        }
    }
}
