use chipin_core::models::{CounterEvent, CounterState};
use dioxus::prelude::*;

use super::BUTTON_STYLE;
use crate::dispatch::Dispatcher;
use crate::theme::AppColors;
use crate::widgets::SectionCard;

#[component]
pub fn CounterSection(is_dark: bool, state: CounterState, dispatch: Dispatcher) -> Element {
    let primary = AppColors::primary(is_dark);
    rsx! {
        SectionCard { is_dark, title: "Counter example (no pun intended)",
            button {
                class: "decrement",
                onclick: move |_| dispatch.send(CounterEvent::Decrement),
                style: "{BUTTON_STYLE} background: {primary};",
                "Decrement"
            }
            button {
                class: "increment",
                onclick: move |_| dispatch.send(CounterEvent::Increment),
                style: "{BUTTON_STYLE} background: {primary};",
                "Increment"
            }
            p { "Counter: {state.display()}" }
        }
    }
}
