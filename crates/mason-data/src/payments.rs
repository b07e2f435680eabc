//! Payment verification endpoint.

use crate::{FetchClient, FetchError, HttpTransport, Response};
use mason_commerce::{OrderId, OrderSummary};
use serde::{Deserialize, Serialize};

/// Path of the verification endpoint, relative to the API base.
pub const VERIFY_PAYMENT_PATH: &str = "/api/payments/verify";

/// Body sent to the verification endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyPaymentRequest {
    pub session_id: String,
    pub order_id: Option<OrderId>,
}

/// Order payload nested in a verification response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VerifyPaymentData {
    #[serde(default)]
    pub order: Option<OrderSummary>,
}

/// Verification response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VerifyPaymentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<VerifyPaymentData>,
}

impl VerifyPaymentResponse {
    /// The order carried by the response, if any.
    pub fn order(&self) -> Option<&OrderSummary> {
        self.data.as_ref().and_then(|d| d.order.as_ref())
    }

    pub fn into_order(self) -> Option<OrderSummary> {
        self.data.and_then(|d| d.order)
    }
}

/// Client for the payments API.
pub struct PaymentsClient<T> {
    client: FetchClient<T>,
}

impl<T: HttpTransport> PaymentsClient<T> {
    pub fn new(api_base: impl Into<String>, transport: T) -> Self {
        Self {
            client: FetchClient::new(transport)
                .with_base_url(api_base)
                .with_default_header("Accept", "application/json"),
        }
    }

    /// Ask the backend whether a checkout session was paid.
    ///
    /// A non-2xx reply that still carries a JSON body is returned as an
    /// unsuccessful response so the caller can use its order context.
    pub async fn verify(
        &self,
        session_id: &str,
        order_id: Option<&OrderId>,
        token: Option<&str>,
    ) -> Result<VerifyPaymentResponse, FetchError> {
        let body = VerifyPaymentRequest {
            session_id: session_id.to_string(),
            order_id: order_id.cloned(),
        };

        let mut request = self.client.post(VERIFY_PAYMENT_PATH).json(&body)?;
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let resp = self.client.send(request).await?;
        Self::interpret(resp)
    }

    fn interpret(resp: Response) -> Result<VerifyPaymentResponse, FetchError> {
        if resp.is_success() {
            return resp.json();
        }

        match resp.json::<VerifyPaymentResponse>() {
            Ok(mut parsed) => {
                tracing::warn!(status = resp.status, "payment verification rejected");
                parsed.success = false;
                Ok(parsed)
            }
            Err(_) => resp.error_for_status().map(|_| VerifyPaymentResponse::default()),
        }
    }
}
