use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub running: bool,
    pub seconds: u64,
}

impl TimerState {
    pub fn minutes(&self) -> u64 {
        self.seconds / 60
    }

    pub fn seconds_part(&self) -> u64 {
        self.seconds % 60
    }

    /// `MM:SS`; minutes keep every digit past two.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds_part())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerEvent {
    /// The start/stop button: flips `running`.
    Toggle,
    Start,
    Stop,
    Reset,
    Tick,
}
