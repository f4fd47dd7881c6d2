use serde::{Deserialize, Serialize};

/// Choices offered when no `CHIPIN_CHOICES` override is configured.
pub const DEFAULT_CHOICES: [&str; 4] = ["Audi", "Volkswagen", "Ford", "Skoda"];

/// A fixed set of choices plus the selected position, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub choices: Vec<String>,
    pub selected: Option<usize>,
}

impl SelectionState {
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            choices,
            selected: None,
        }
    }

    pub fn selected_label(&self) -> &str {
        self.selected
            .and_then(|i| self.choices.get(i))
            .map(String::as_str)
            .unwrap_or("Nothing")
    }

    pub fn message(&self) -> String {
        format!("You selected: {}", self.selected_label())
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect())
    }
}

/// `Changed` carries the raw DOM index; `-1` means the placeholder row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEvent {
    Changed(i64),
}
