use serde::Deserialize;
use serde_json::Value;

pub const FALLBACK_DETAIL: &str = "Request failed";

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ValidationIssue {
    msg: String,
}

impl ErrorBody {
    /// Extracts a displayable message: a string `detail` verbatim, the
    /// `msg` of each issue for list-shaped validation errors, or the
    /// generic fallback.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(Value::Array(issues)) => {
                let messages: Vec<String> = issues
                    .iter()
                    .filter_map(|issue| {
                        serde_json::from_value::<ValidationIssue>(issue.clone()).ok()
                    })
                    .map(|issue| issue.msg)
                    .collect();

                if messages.is_empty() {
                    FALLBACK_DETAIL.to_string()
                } else {
                    messages.join("; ")
                }
            }
            _ => FALLBACK_DETAIL.to_string(),
        }
    }

    pub fn from_value(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }
}
