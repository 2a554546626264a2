use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::{AlertDispatcher, DispatchError, DispatchReceipt};

/// Logs alerts instead of sending them. Used when no SMS provider is
/// configured.
#[derive(Debug, Default, Clone)]
pub struct DryRunDispatcher;

#[async_trait]
impl AlertDispatcher for DryRunDispatcher {
    async fn dispatch(
        &self,
        recipient: &str,
        body: &str,
    ) -> Result<DispatchReceipt, DispatchError> {
        info!("[dry run] SMS to {}:\n{}", recipient, body);
        Ok(DispatchReceipt {
            sid: format!("dry-run-{}", Utc::now().timestamp_millis()),
            status: Some("dry-run".to_string()),
            recipient: recipient.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_receipt() {
        let receipt = DryRunDispatcher
            .dispatch("+911123404446", "hello")
            .await
            .unwrap();
        assert!(receipt.sid.starts_with("dry-run-"));
        assert_eq!(receipt.recipient, "+911123404446");
    }
}
