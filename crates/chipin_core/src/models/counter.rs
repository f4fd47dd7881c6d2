use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    /// Count with thousands separators, e.g. `-1,234`.
    pub fn display(&self) -> String {
        let digits = format_number_with_commas(&self.count.unsigned_abs().to_string());
        if self.count < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterEvent {
    Increment,
    Decrement,
}

/// Group an unsigned digit string in threes.
pub fn format_number_with_commas(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    for (i, c) in chars.into_iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
