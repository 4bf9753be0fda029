//! Tool Endpoint wire protocol.
//!
//! A request names a tool and carries its named arguments. A response
//! carries a list of typed content items, or an error with an HTTP-style
//! status. Tools return their typed value JSON-encoded inside a text item.

use crate::{FactCheckError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const EXTRACT_CLAIMS: &str = "extract_claims";
pub const CHECK_CLAIM: &str = "check_claim";
pub const GENERATE_POST: &str = "generate_post";

/// A call to a named tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,

    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolCall {
    /// Build a call from a JSON object of arguments. Non-object values
    /// produce an empty argument map.
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// One item of a tool response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
    Json { json: serde_json::Value },
}

/// Error half of a tool response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    #[serde(default)]
    pub content: Vec<ToolContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolFailure>,
}

impl ToolResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            error: None,
        }
    }

    /// Encode a typed tool value as the response's text item.
    pub fn value<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::text(serde_json::to_string(value)?))
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            content: Vec::new(),
            error: Some(ToolFailure {
                status,
                message: message.into(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Concatenation of every text item.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                ToolContent::Text { text } => Some(text.as_str()),
                ToolContent::Json { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Convert an error response into `Err`.
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(failure) => Err(FactCheckError::Tool {
                status: failure.status,
                message: failure.message,
            }),
            None => Ok(self),
        }
    }

    /// Decode the typed tool value.
    ///
    /// A `json` item is used directly; otherwise the text items are decoded.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        if let Some(failure) = &self.error {
            return Err(FactCheckError::Tool {
                status: failure.status,
                message: failure.message.clone(),
            });
        }

        let json = self.content.iter().find_map(|c| match c {
            ToolContent::Json { json } => Some(json.clone()),
            ToolContent::Text { .. } => None,
        });
        if let Some(json) = json {
            return Ok(serde_json::from_value(json)?);
        }

        let text = self.text_content();
        serde_json::from_str(&text).map_err(|e| {
            FactCheckError::InvalidInput(format!("Failed to parse tool result: {} (text: {})", e, text))
        })
    }
}

/// Result of `check_claim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Failed {
        error: String,
    },
    Checked {
        #[serde(default)]
        verified: bool,
        #[serde(default)]
        source: String,
    },
}

/// Acknowledgement returned by `generate_post`. Zero means published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAck {
    pub status_code: i32,
    pub path: String,
}

impl PostAck {
    pub fn is_published(&self) -> bool {
        self.status_code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_wire_format() {
        let call = ToolCall::new(CHECK_CLAIM, json!({"statement": "s"}));
        let value = serde_json::to_value(&call).unwrap();

        assert_eq!(value, json!({"name": "check_claim", "arguments": {"statement": "s"}}));
    }

    #[test]
    fn test_tool_call_ignores_non_object_arguments() {
        let call = ToolCall::new(EXTRACT_CLAIMS, json!("not an object"));
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_parse_text_value() {
        let response = ToolResponse::value(&vec!["a", "b"]).unwrap();
        let claims: Vec<String> = response.parse().unwrap();

        assert_eq!(claims, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_parse_json_item() {
        let response = ToolResponse {
            content: vec![ToolContent::Json {
                json: json!({"status_code": 0, "path": "p.md"}),
            }],
            error: None,
        };
        let ack: PostAck = response.parse().unwrap();

        assert!(ack.is_published());
    }

    #[test]
    fn test_failure_into_result() {
        let err = ToolResponse::failure(404, "Unknown tool: nope")
            .into_result()
            .unwrap_err();

        match err {
            FactCheckError::Tool { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("nope"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_outcome_variants() {
        let checked: CheckOutcome =
            serde_json::from_str(r#"{"verified": true, "source": "https://example.org/Q1"}"#).unwrap();
        let failed: CheckOutcome = serde_json::from_str(r#"{"error": "offline"}"#).unwrap();

        assert_eq!(
            checked,
            CheckOutcome::Checked {
                verified: true,
                source: "https://example.org/Q1".into()
            }
        );
        assert_eq!(
            failed,
            CheckOutcome::Failed {
                error: "offline".into()
            }
        );
        assert!(serde_json::from_str::<CheckOutcome>(r#""just text""#).is_err());
    }

    #[test]
    fn test_non_zero_ack_is_not_published() {
        let ack = PostAck {
            status_code: 1,
            path: "x.md".into(),
        };
        assert!(!ack.is_published());
    }
}
