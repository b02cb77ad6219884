//! Submission handler that records the final data in the log

use super::traits::{SubmissionHandler, SubmissionReceipt};
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

const REDACTED: &str = "[redacted]";

/// Logs the final registration data instead of sending it anywhere
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitter;

impl LoggingSubmitter {
    /// Serialize values for the log with secrets removed
    fn redacted_json(values: &FormValues) -> Result<String> {
        let mut value = serde_json::to_value(values)?;
        if let Some(map) = value.as_object_mut() {
            for key in ["password", "confirmPassword"] {
                if let Some(secret) = map.get_mut(key) {
                    *secret = serde_json::Value::String(REDACTED.to_string());
                }
            }
        }
        Ok(serde_json::to_string(&value)?)
    }
}

#[async_trait]
impl SubmissionHandler for LoggingSubmitter {
    async fn submit(&self, values: &FormValues) -> Result<SubmissionReceipt> {
        let data = Self::redacted_json(values)?;
        let receipt = SubmissionReceipt::issue();
        tracing::info!(id = %receipt.id, "Final data: {data}");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values() -> FormValues {
        FormValues {
            name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            location: "Lagos".to_string(),
            address: "12 Marina Road".to_string(),
            phone_number: "08012345678".to_string(),
            nin_number: "12345678901".to_string(),
        }
    }

    #[test]
    fn test_redacts_passwords() {
        let json = LoggingSubmitter::redacted_json(&values()).unwrap();
        assert!(!json.contains("abc123"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["password"], REDACTED);
        assert_eq!(parsed["confirmPassword"], REDACTED);
        assert_eq!(parsed["phoneNumber"], "08012345678");
        assert_eq!(parsed["ninNumber"], "12345678901");
    }

    #[test]
    fn test_submit_returns_fresh_receipts() {
        let submitter = LoggingSubmitter;
        let first = tokio_test::block_on(submitter.submit(&values())).unwrap();
        let second = tokio_test::block_on(submitter.submit(&values())).unwrap();
        assert_ne!(first.id, second.id);
    }
}
