use serde::{Deserialize, Serialize};

/// A named amount paid into the shared pool. Amounts are not validated;
/// negative contributions are allowed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub name: String,
    pub amount: f64,
}

impl Contribution {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One directed payment. `settled` is a checklist mark only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payback {
    pub from: String,
    pub to: String,
    pub amount: f64,
    #[serde(default)]
    pub settled: bool,
}

impl Payback {
    pub fn sentence(&self) -> String {
        format!("{} should give {} to {}", self.from, self.amount, self.to)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total: f64,
    pub equal_share: f64,
}

/// Contributions with their live aggregate, and the paybacks from the last
/// "calculate". Paybacks are not refreshed by add/remove.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChipInState {
    pub contributions: Vec<Contribution>,
    pub aggregate: Aggregate,
    pub paybacks: Vec<Payback>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipInEvent {
    Add { name: String, amount: f64 },
    Remove { index: usize },
    Calculate,
    Toggle { index: usize },
}

/// Read a user-typed amount. Anything that is not a finite number is `0`.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
