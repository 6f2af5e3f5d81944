use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::models::{error_payload, PaymentRequest};
use super::state::FormAction;
use crate::utils::api::Api;

pub const PAY_PATH: &str = "/pay";

/// Failure to obtain a JSON response at all. Error statuses with a JSON body
/// are not failures.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Network(#[from] gloo_net::Error),
}

#[async_trait(?Send)]
pub trait PaymentGateway {
    async fn pay(&self, request: &PaymentRequest) -> Result<Value, PaymentError>;
}

/// Posts to `{BASE_URL}/pay` and decodes whatever comes back as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpGateway;

#[async_trait(?Send)]
impl PaymentGateway for HttpGateway {
    async fn pay(&self, request: &PaymentRequest) -> Result<Value, PaymentError> {
        let response = Api::post(PAY_PATH).json(request)?.send().await?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

impl PaymentError {
    /// Text for the `details` field. A rejected fetch reports only the
    /// exception message, without its `TypeError:` prefix.
    pub fn details(&self) -> String {
        match self {
            PaymentError::Network(gloo_net::Error::JsError(js)) => js.message.clone(),
            other => other.to_string(),
        }
    }
}

/// Collapses a gateway outcome into the value the result panel shows.
pub fn settle(outcome: Result<Value, PaymentError>) -> Value {
    match outcome {
        Ok(body) => body,
        Err(e) => {
            log::error!("Payment request failed: {}", e);
            error_payload(e.details())
        }
    }
}

/// One submission: exactly one `SubmitStarted`, then exactly one `Settled`.
pub async fn submit<G, D>(gateway: &G, request: PaymentRequest, dispatch: D)
where
    G: PaymentGateway + ?Sized,
    D: Fn(FormAction),
{
    dispatch(FormAction::SubmitStarted);
    log::info!("Submitting {} {} payment", request.amount, request.currency);
    let response = settle(gateway.pay(&request).await);
    dispatch(FormAction::Settled(response));
}
