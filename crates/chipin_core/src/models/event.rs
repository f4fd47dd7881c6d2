use super::{ChipInEvent, CounterEvent, GreetingEvent, ListEvent, SelectionEvent, TimerEvent};
use serde::{Deserialize, Serialize};

/// One UI event, addressed to exactly one widget on the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", content = "event", rename_all = "snake_case")]
pub enum PageEvent {
    Greeting(GreetingEvent),
    Counter(CounterEvent),
    Selection(SelectionEvent),
    List(ListEvent),
    ChipIn(ChipInEvent),
    Timer(TimerEvent),
}

impl PageEvent {
    pub fn widget(&self) -> &'static str {
        match self {
            PageEvent::Greeting(_) => "greeting",
            PageEvent::Counter(_) => "counter",
            PageEvent::Selection(_) => "selection",
            PageEvent::List(_) => "list",
            PageEvent::ChipIn(_) => "chip_in",
            PageEvent::Timer(_) => "timer",
        }
    }
}

impl From<GreetingEvent> for PageEvent {
    fn from(e: GreetingEvent) -> Self {
        PageEvent::Greeting(e)
    }
}

impl From<CounterEvent> for PageEvent {
    fn from(e: CounterEvent) -> Self {
        PageEvent::Counter(e)
    }
}

impl From<SelectionEvent> for PageEvent {
    fn from(e: SelectionEvent) -> Self {
        PageEvent::Selection(e)
    }
}

impl From<ListEvent> for PageEvent {
    fn from(e: ListEvent) -> Self {
        PageEvent::List(e)
    }
}

impl From<ChipInEvent> for PageEvent {
    fn from(e: ChipInEvent) -> Self {
        PageEvent::ChipIn(e)
    }
}

impl From<TimerEvent> for PageEvent {
    fn from(e: TimerEvent) -> Self {
        PageEvent::Timer(e)
    }
}
