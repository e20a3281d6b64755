use serde::{Deserialize, Serialize};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLevel {
    Info,
    Warning,
    Danger,
}

/// One user-facing diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub message: String,
    pub message_level: MessageLevel,
}

/// Result envelope a hook returns to the host.
///
/// On failure the host aborts further processing and shows the messages
/// in its UI; on success it continues with the annotated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionableResponse {
    pub success: bool,
    #[serde(default)]
    pub response_messages: Vec<ResponseMessage>,
}

impl ActionableResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            response_messages: Vec::new(),
        }
    }

    /// Failure with a single Danger-level message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response_messages: vec![ResponseMessage {
                message: message.into(),
                message_level: MessageLevel::Danger,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_messages() {
        let r = ActionableResponse::ok();
        assert!(r.success);
        assert!(r.response_messages.is_empty());
    }

    #[test]
    fn test_failure_is_single_danger_message() {
        let r = ActionableResponse::failure("connection refused");
        assert!(!r.success);
        assert_eq!(r.response_messages.len(), 1);
        assert_eq!(r.response_messages[0].message, "connection refused");
        assert_eq!(r.response_messages[0].message_level, MessageLevel::Danger);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ActionableResponse::failure("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["response_messages"][0]["message"], "boom");
        assert_eq!(json["response_messages"][0]["message_level"], "Danger");
    }
}
