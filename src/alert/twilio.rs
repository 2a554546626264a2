//! Twilio Messages API client.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{error, info};
use url::{form_urlencoded, Url};

use super::{AlertDispatcher, DispatchError, DispatchReceipt};
use crate::config::SmsConfig;

/// Error codes Twilio uses for an unusable `To` number
const INVALID_RECIPIENT_CODES: &[i64] = &[21211, 21408, 21610, 21612, 21614];
const AUTHENTICATION_CODE: i64 = 20003;

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<i64>,
    message: Option<String>,
}

pub struct TwilioDispatcher {
    client: Client,
    messages_url: Url,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioDispatcher {
    pub fn new(
        base_url: &Url,
        account_sid: &str,
        auth_token: &str,
        from: &str,
    ) -> Result<Self, url::ParseError> {
        // Append to any path already on the base (gateways, proxies)
        let mut messages_url = base_url.clone();
        messages_url
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["2010-04-01", "Accounts", account_sid, "Messages.json"]);

        Ok(Self {
            client: Client::new(),
            messages_url,
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            from: from.to_string(),
        })
    }

    pub fn from_config(sms: &SmsConfig) -> anyhow::Result<Self> {
        let auth_token = sms.auth_token()?;
        Ok(Self::new(&sms.base_url, &sms.account_sid, &auth_token, &sms.from)?)
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }
}

#[async_trait]
impl AlertDispatcher for TwilioDispatcher {
    async fn dispatch(
        &self,
        recipient: &str,
        body: &str,
    ) -> Result<DispatchReceipt, DispatchError> {
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("To", recipient)
            .append_pair("From", &self.from)
            .append_pair("Body", body)
            .finish();

        let response = self
            .client
            .post(self.messages_url.clone())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("SMS to {} failed with {}: {}", recipient, status, text);
            return Err(classify_failure(status, &text, recipient));
        }

        let message: MessageResource = serde_json::from_str(&text)?;
        info!("Sent SMS {} to {}", message.sid, recipient);

        Ok(DispatchReceipt {
            sid: message.sid,
            status: message.status,
            recipient: recipient.to_string(),
        })
    }
}

fn classify_failure(status: StatusCode, body: &str, recipient: &str) -> DispatchError {
    let api_error: Option<ApiError> = serde_json::from_str(body).ok();
    let code = api_error.as_ref().and_then(|e| e.code);
    let message = api_error
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::UNAUTHORIZED || code == Some(AUTHENTICATION_CODE) {
        return DispatchError::Authentication { message };
    }

    if code.is_some_and(|c| INVALID_RECIPIENT_CODES.contains(&c)) {
        return DispatchError::InvalidRecipient {
            recipient: recipient.to_string(),
            message,
        };
    }

    DispatchError::Provider {
        status: status.as_u16(),
        code,
        message,
    }
}
