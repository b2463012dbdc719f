use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::domain::{Subscriber, SubscriberEmail};

/// HTTP boundary towards the newsletter backend. One `Client` is built up
/// front and reused so the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Successful subscribe response. The backend sends the full stored record,
/// but only the confirmed address is required here.
#[derive(Debug, Deserialize)]
pub struct SubscriptionReceipt {
    pub email: String,
}

#[derive(Deserialize)]
struct RejectionBody {
    detail: Option<String>,
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("Failed to reach the newsletter backend.")]
    Transport(#[from] reqwest::Error),
    #[error("The newsletter backend responded with {status}.")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(e: &impl std::error::Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing backend base url."),
        }
    }

    /// Reads the full subscriber collection. Any non-2xx status is an error;
    /// the body is never inspected in that case.
    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>, ApiError> {
        let url = self
            .base_url
            .join("api/subscribers")
            .expect("Failed joining route to backend base url.");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status,
                detail: None,
            });
        }

        Ok(response.json::<Vec<Subscriber>>().await?)
    }

    /// Registers one new address. The response body is decoded regardless of
    /// status: rejections may carry a human-readable `detail` string.
    pub async fn subscribe(&self, email: &SubscriberEmail) -> Result<SubscriptionReceipt, ApiError> {
        let url = self
            .base_url
            .join("api/subscribe")
            .expect("Failed joining route to backend base url.");

        let body = SubscribeRequest {
            email: email.as_ref(),
        };

        let response = self.http_client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<RejectionBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::Rejected { status, detail });
        }

        Ok(response.json::<SubscriptionReceipt>().await?)
    }
}
