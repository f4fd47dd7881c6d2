mod chip_in;
mod counter;
mod dynamic_list;
mod elapsed_timer;
mod greeting;
mod list_selection;

pub use chip_in::ChipInSection;
pub use counter::CounterSection;
pub use dynamic_list::DynamicListSection;
pub use elapsed_timer::ElapsedTimerSection;
pub use greeting::GreetingSection;
pub use list_selection::ListSelectionSection;

const BUTTON_STYLE: &str =
    "padding: 8px 16px; margin-right: 8px; border-radius: 8px; border: none; cursor: pointer;";
const INPUT_STYLE: &str =
    "padding: 8px; margin-right: 8px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: inherit;";
