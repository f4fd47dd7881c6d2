use chipin_core::models::{ChipInEvent, ChipInState};
use dioxus::prelude::*;

use super::{BUTTON_STYLE, INPUT_STYLE};
use crate::dispatch::Dispatcher;
use crate::intents;
use crate::theme::{payback_decoration, AppColors};
use crate::widgets::SectionCard;

/// Contributions form, aggregates, and the payback checklist from the last
/// "Calculate". Clicking a payback marks it settled.
#[component]
pub fn ChipInSection(is_dark: bool, state: ChipInState, dispatch: Dispatcher) -> Element {
    let mut name = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let primary = AppColors::primary(is_dark);
    let total = state.aggregate.total;
    let equal_share = state.aggregate.equal_share;

    rsx! {
        SectionCard { is_dark, title: "Chip-in calculator",
            div {
                input {
                    class: "add-name",
                    placeholder: "Name",
                    value: "{name()}",
                    oninput: move |ev| name.set(ev.value()),
                    style: INPUT_STYLE,
                }
                input {
                    class: "add-amount",
                    r#type: "number",
                    placeholder: "Amount",
                    value: "{amount()}",
                    oninput: move |ev| amount.set(ev.value()),
                    style: INPUT_STYLE,
                }
                button {
                    class: "add",
                    onclick: move |_| dispatch.send(intents::contribution_added(&name.read(), &amount.read())),
                    style: "{BUTTON_STYLE} background: {primary};",
                    "Add"
                }
            }
            {state.contributions.iter().enumerate().map(move |(i, contrib)| rsx! {
                div { key: "{i}", class: "contrib", "data-index": "{i}", style: "margin-top: 4px;",
                    span { class: "text", "{contrib.name}" }
                    " "
                    span { class: "amount", "{contrib.amount}" }
                    " "
                    button {
                        class: "remove",
                        onclick: move |_| dispatch.send(ChipInEvent::Remove { index: i }),
                        style: BUTTON_STYLE,
                        "Remove"
                    }
                }
            })}
            button {
                class: "calc",
                onclick: move |_| dispatch.send(ChipInEvent::Calculate),
                style: "{BUTTON_STYLE} margin-top: 8px; background: {primary};",
                "Calculate"
            }
            p { "Total amount: " span { class: "amount", "{total}" } }
            p { "Equal payment: " span { class: "amount", "{equal_share}" } }
            {state.paybacks.iter().enumerate().map(move |(i, payback)| {
                let decoration = payback_decoration(payback.settled);
                rsx! {
                    div {
                        key: "{i}",
                        class: "chipIn",
                        "data-index": "{i}",
                        onclick: move |_| dispatch.send(ChipInEvent::Toggle { index: i }),
                        style: "text-decoration: {decoration}; cursor: pointer;",
                        "{payback.sentence()}"
                    }
                }
            })}
        }
    }
}
