use chipin_core::models::SelectionState;
use dioxus::prelude::*;

use super::INPUT_STYLE;
use crate::dispatch::Dispatcher;
use crate::intents;
use crate::widgets::SectionCard;

#[component]
pub fn ListSelectionSection(is_dark: bool, state: SelectionState, dispatch: Dispatcher) -> Element {
    let message = state.message();
    let selected = state.selected;
    rsx! {
        SectionCard { is_dark, title: "List selection example",
            select {
                class: "select",
                onchange: move |ev| dispatch.send(intents::selection_changed(&ev.value())),
                style: INPUT_STYLE,
                option { value: "-1", selected: selected.is_none(), "Choose one..." }
                {state.choices.iter().enumerate().map(|(i, choice)| rsx! {
                    option {
                        key: "{i}",
                        value: intents::choice_value(i),
                        selected: selected == Some(i),
                        "{choice}"
                    }
                })}
            }
            p { "{message}" }
        }
    }
}
