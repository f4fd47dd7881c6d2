use chipin_core::models::{TimerEvent, TimerState};
use dioxus::prelude::*;

use super::BUTTON_STYLE;
use crate::dispatch::Dispatcher;
use crate::theme::AppColors;
use crate::widgets::SectionCard;

#[component]
pub fn ElapsedTimerSection(is_dark: bool, state: TimerState, dispatch: Dispatcher) -> Element {
    let primary = AppColors::primary(is_dark);
    let outline = AppColors::outline(is_dark);
    rsx! {
        SectionCard { is_dark, title: "Elapsed timer",
            button {
                class: "timer-startstop",
                "data-running": "{state.running}",
                onclick: move |_| dispatch.send(TimerEvent::Toggle),
                style: "{BUTTON_STYLE} background: {primary};",
                if state.running { "Stop" } else { "Start" }
            }
            button {
                class: "timer-reset",
                onclick: move |_| dispatch.send(TimerEvent::Reset),
                style: "{BUTTON_STYLE} background: {outline};",
                "Reset"
            }
            p { style: "font-size: 1.5rem; font-variant-numeric: tabular-nums;", "{state.display()}" }
        }
    }
}
