//! Emergency alert delivery.
//!
//! The lookup core never talks to the network; everything that sends a
//! message sits behind [`AlertDispatcher`].

mod dry_run;
mod message;
mod twilio;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SmsConfig;

pub use dry_run::DryRunDispatcher;
pub use message::AlertMessage;
pub use twilio::TwilioDispatcher;

/// Provider acknowledgement for a sent alert
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReceipt {
    /// Provider message id
    pub sid: String,
    pub status: Option<String>,
    pub recipient: String,
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("SMS provider rejected credentials: {message}")]
    Authentication { message: String },

    #[error("SMS provider rejected recipient {recipient}: {message}")]
    InvalidRecipient { recipient: String, message: String },

    #[error("SMS provider request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("SMS provider returned {status}: {message}")]
    Provider {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("SMS provider response could not be parsed: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl DispatchError {
    /// Message safe to show the person who raised the alert
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Authentication { .. } => {
                "Emergency alert service is not configured correctly".to_string()
            }
            DispatchError::InvalidRecipient { .. } => {
                "The hospital's contact number could not receive the alert".to_string()
            }
            DispatchError::Network(_) => "Could not reach the emergency alert service".to_string(),
            DispatchError::Provider { message, .. } if !message.is_empty() => message.clone(),
            DispatchError::Provider { .. } | DispatchError::MalformedResponse(_) => {
                "Emergency alert failed".to_string()
            }
        }
    }
}

/// Sends a text alert to a phone number
#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    async fn dispatch(&self, recipient: &str, body: &str)
        -> Result<DispatchReceipt, DispatchError>;
}

/// Twilio when an SMS section is configured, otherwise a dry run
pub fn build_dispatcher(sms: Option<&SmsConfig>) -> anyhow::Result<Arc<dyn AlertDispatcher>> {
    match sms {
        Some(sms) => {
            let dispatcher = TwilioDispatcher::from_config(sms)?;
            info!("Sending alerts via {}", dispatcher.messages_url());
            Ok(Arc::new(dispatcher))
        }
        None => {
            warn!("No SMS provider configured, alerts will only be logged");
            Ok(Arc::new(DryRunDispatcher))
        }
    }
}
