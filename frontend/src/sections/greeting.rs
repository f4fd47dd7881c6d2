use chipin_core::models::GreetingState;
use dioxus::prelude::*;

use super::INPUT_STYLE;
use crate::dispatch::Dispatcher;
use crate::intents;
use crate::widgets::SectionCard;

#[component]
pub fn GreetingSection(is_dark: bool, state: GreetingState, dispatch: Dispatcher) -> Element {
    let message = state.message();
    rsx! {
        SectionCard { is_dark, title: "Greetings",
            label { style: "margin-right: 8px;", "Name:" }
            input {
                class: "field",
                r#type: "text",
                value: "{state.text}",
                oninput: move |ev| dispatch.send(intents::greeting_changed(&ev.value())),
                style: INPUT_STYLE,
            }
            p { "{message}" }
        }
    }
}
