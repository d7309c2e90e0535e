use std::time::Duration;

use assistant_core::{AssistantRequest, AssistantResult};

use crate::protocol::{WireRequest, WireResponse};
use crate::types::{AiError, AiFailureKind};

#[derive(Debug, Clone)]
pub struct AiClientSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl AiClientSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait AiClient: Send + Sync {
    async fn run(&self, request: &AssistantRequest) -> Result<AssistantResult, AiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAiClient {
    settings: AiClientSettings,
}

impl ReqwestAiClient {
    pub fn new(settings: AiClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| AiError::new(AiFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl AiClient for ReqwestAiClient {
    async fn run(&self, request: &AssistantRequest) -> Result<AssistantResult, AiError> {
        let client = self.build_client()?;
        let wire = WireRequest::from(request);

        let response = client
            .post(&self.settings.endpoint)
            .json(&wire)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::new(
                AiFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let payload: WireResponse = response
            .json()
            .await
            .map_err(|err| AiError::new(AiFailureKind::MalformedPayload, err.to_string()))?;

        // The service reports its own failures in-band on a 2xx status.
        if let Some(message) = payload.error {
            return Err(AiError::new(AiFailureKind::Service, message));
        }
        match payload.result {
            Some(result) => Ok(result.into_result()),
            None => Err(AiError::new(
                AiFailureKind::MalformedPayload,
                "response carries neither result nor error",
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AiError {
    if err.is_timeout() {
        return AiError::new(AiFailureKind::Timeout, err.to_string());
    }
    AiError::new(AiFailureKind::Network, err.to_string())
}
