mod chip_in;
mod counter;
mod event;
mod greeting;
mod list;
mod selection;
mod timer;

pub use chip_in::{parse_amount, Aggregate, ChipInEvent, ChipInState, Contribution, Payback};
pub use counter::{format_number_with_commas, CounterEvent, CounterState};
pub use event::PageEvent;
pub use greeting::{GreetingEvent, GreetingState};
pub use list::{ListEntry, ListEvent, ListState};
pub use selection::{SelectionEvent, SelectionState, DEFAULT_CHOICES};
pub use timer::{TimerEvent, TimerState};
