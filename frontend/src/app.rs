use chipin_core::models::TimerEvent;
use chipin_core::{EventQueue, PageConfig, PageState};
use dioxus::prelude::*;

use crate::dispatch::Dispatcher;
use crate::sections::{
    ChipInSection, CounterSection, DynamicListSection, ElapsedTimerSection, GreetingSection,
    ListSelectionSection,
};
use crate::theme::{spacing, AppColors};
use crate::tick_loop;
use crate::ticker;
use crate::widgets::PageBackground;

fn load_config() -> PageConfig {
    PageConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("{}; using default page config", e);
        PageConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let mut is_dark = use_signal(|| false);
    let page = use_signal(|| PageState::new(&config));
    let queue = use_signal(EventQueue::new);
    let dispatch = Dispatcher::new(page, queue);

    // The ticker exists only while the timer runs; clearing the flag drops it.
    let running = use_memo(move || page.read().timer.running);
    let interval = config.tick_interval;
    let _ticker = use_resource(move || async move {
        if !running() {
            return;
        }
        tracing::debug!(?interval, "elapsed timer ticking");
        let sent = tick_loop::drive(
            interval,
            ticker::sleep,
            move || *running.peek(),
            move || dispatch.send(TimerEvent::Tick),
        )
        .await;
        tracing::debug!(sent, "elapsed timer stopped");
    });

    let state = page.read();
    let outline = AppColors::outline(is_dark());
    let primary = AppColors::primary(is_dark());

    rsx! {
        PageBackground { is_dark: is_dark(),
            div { style: "padding: {spacing::LG}; max-width: 640px; margin: 0 auto;",
                div { style: "display: flex; justify-content: flex-end;",
                    button {
                        onclick: move |_| is_dark.set(!is_dark()),
                        style: "padding: 6px 12px; border-radius: 8px; border: 1px solid {outline}; background: transparent; color: {primary}; cursor: pointer;",
                        if is_dark() { "Light mode" } else { "Dark mode" }
                    }
                }
                GreetingSection { is_dark: is_dark(), state: state.greeting.clone(), dispatch }
                hr { style: "border-color: {outline};" }
                CounterSection { is_dark: is_dark(), state: state.counter, dispatch }
                hr { style: "border-color: {outline};" }
                ListSelectionSection { is_dark: is_dark(), state: state.selection.clone(), dispatch }
                hr { style: "border-color: {outline};" }
                DynamicListSection { is_dark: is_dark(), state: state.list.clone(), dispatch }
                hr { style: "border-color: {outline};" }
                ChipInSection { is_dark: is_dark(), state: state.chip_in.clone(), dispatch }
                hr { style: "border-color: {outline};" }
                ElapsedTimerSection { is_dark: is_dark(), state: state.timer, dispatch }
            }
        }
    }
}
