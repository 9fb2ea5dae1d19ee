//! Message entity

use serde::{Deserialize, Serialize};

/// One completed exchange: a user question paired with the model's
/// answer (Entity)
///
/// Created only after a successful ask and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    pub assistant: String,
}

impl Message {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_json_shape() {
        let message = Message::new("What issues exist?", "Two: A and B.");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["user"], "What issues exist?");
        assert_eq!(value["assistant"], "Two: A and B.");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
