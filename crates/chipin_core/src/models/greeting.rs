use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingState {
    pub text: String,
}

impl GreetingState {
    /// Greeting shown under the text box; an empty name asks for one.
    pub fn message(&self) -> String {
        if self.text.is_empty() {
            "Hello! Please enter your name...".to_string()
        } else {
            format!("Hello, {}!", self.text)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingEvent {
    TextChanged(String),
}
