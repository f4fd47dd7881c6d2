//! Pure page state rebuild from events.
//! No side effects, easy to test.

use crate::config::PageConfig;
use crate::models::{
    ChipInEvent, ChipInState, Contribution, CounterEvent, CounterState, GreetingEvent,
    GreetingState, ListEntry, ListEvent, ListState, PageEvent, SelectionEvent, SelectionState,
    TimerEvent, TimerState,
};
use crate::settlement;
use serde::{Deserialize, Serialize};

/// Page state: one state per widget, built from events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub greeting: GreetingState,
    pub counter: CounterState,
    pub selection: SelectionState,
    pub list: ListState,
    pub chip_in: ChipInState,
    pub timer: TimerState,
}

impl PageState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            selection: SelectionState::new(config.choices.clone()),
            ..Self::default()
        }
    }
}

/// Build full state from all events, in the given order.
pub fn build_state(config: &PageConfig, events: &[PageEvent]) -> PageState {
    apply_events(&PageState::new(config), events)
}

/// Apply new events to existing state (incremental update).
pub fn apply_events(current: &PageState, events: &[PageEvent]) -> PageState {
    if events.is_empty() {
        return current.clone();
    }
    events
        .iter()
        .fold(current.clone(), |state, event| apply_event(&state, event))
}

/// The page transition function: route `event` to its widget, leave the rest alone.
pub fn apply_event(current: &PageState, event: &PageEvent) -> PageState {
    log::debug!("page event: {} {:?}", event.widget(), event);
    let mut next = current.clone();
    match event {
        PageEvent::Greeting(e) => next.greeting = reduce_greeting(&current.greeting, e),
        PageEvent::Counter(e) => next.counter = reduce_counter(&current.counter, e),
        PageEvent::Selection(e) => next.selection = reduce_selection(&current.selection, e),
        PageEvent::List(e) => next.list = reduce_list(&current.list, e),
        PageEvent::ChipIn(e) => next.chip_in = reduce_chip_in(&current.chip_in, e),
        PageEvent::Timer(e) => next.timer = reduce_timer(&current.timer, e),
    }
    next
}

pub fn reduce_greeting(_current: &GreetingState, event: &GreetingEvent) -> GreetingState {
    match event {
        GreetingEvent::TextChanged(text) => GreetingState { text: text.clone() },
    }
}

pub fn reduce_counter(current: &CounterState, event: &CounterEvent) -> CounterState {
    let count = match event {
        CounterEvent::Increment => current.count.saturating_add(1),
        CounterEvent::Decrement => current.count.saturating_sub(1),
    };
    CounterState { count }
}

pub fn reduce_selection(current: &SelectionState, event: &SelectionEvent) -> SelectionState {
    match *event {
        SelectionEvent::Changed(index) => {
            let selected = usize::try_from(index)
                .ok()
                .filter(|i| *i < current.choices.len());
            SelectionState {
                choices: current.choices.clone(),
                selected,
            }
        }
    }
}

pub fn reduce_list(current: &ListState, event: &ListEvent) -> ListState {
    let mut next = current.clone();
    match *event {
        ListEvent::Add => {
            let id = current.next_id;
            next.entries.push(ListEntry {
                id,
                label: id.to_string(),
            });
            next.next_id = id.next();
        }
        ListEvent::Remove(id) => match next.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                next.entries.remove(pos);
            }
            None => log::warn!("list: no entry with id {}", id),
        },
    }
    next
}

pub fn reduce_chip_in(current: &ChipInState, event: &ChipInEvent) -> ChipInState {
    let mut next = current.clone();
    match event {
        ChipInEvent::Add { name, amount } => {
            next.contributions.push(Contribution::new(name.clone(), *amount));
            next.aggregate = settlement::aggregate(&next.contributions);
        }
        ChipInEvent::Remove { index } => {
            if *index < next.contributions.len() {
                next.contributions.remove(*index);
                next.aggregate = settlement::aggregate(&next.contributions);
            } else {
                log::warn!(
                    "chip-in: remove index {} out of range ({} contributions)",
                    index,
                    next.contributions.len()
                );
            }
        }
        ChipInEvent::Calculate => {
            next.paybacks = settlement::settle(&next.contributions);
            log::debug!("chip-in: {} paybacks", next.paybacks.len());
        }
        ChipInEvent::Toggle { index } => match next.paybacks.get_mut(*index) {
            Some(payback) => payback.settled = !payback.settled,
            None => log::warn!(
                "chip-in: toggle index {} out of range ({} paybacks)",
                index,
                next.paybacks.len()
            ),
        },
    }
    next
}

pub fn reduce_timer(current: &TimerState, event: &TimerEvent) -> TimerState {
    match event {
        TimerEvent::Toggle => TimerState {
            running: !current.running,
            ..*current
        },
        TimerEvent::Start => TimerState {
            running: true,
            ..*current
        },
        TimerEvent::Stop => TimerState {
            running: false,
            ..*current
        },
        TimerEvent::Reset => TimerState::default(),
        TimerEvent::Tick => TimerState {
            running: current.running,
            seconds: if current.running {
                current.seconds + 1
            } else {
                current.seconds
            },
        },
    }
}
