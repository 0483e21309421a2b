//! HTTP client for network-based API calls
//!
//! Thin typed wrapper over the server's REST surface. Every call returns
//! the full payload from the `ApiResponse` envelope; error statuses are
//! mapped to typed [`ClientError`] variants using the envelope message.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::MenuItem;
use shared::order::{
    CreateOrderRequest, OrderFilters, OrderSnapshot, PaymentStatus, PaymentStatusUpdate,
    TransitionRequest,
};
use shared::request::{PaginatedResponse, Pagination};

/// HTTP client for making network requests to the cafe server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with URL-encoded query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(params).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response, unwrapping the ApiResponse envelope
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ApiResponse<()>>().await {
                Ok(envelope) => envelope.message,
                Err(_) => status.to_string(),
            };
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                StatusCode::UNPROCESSABLE_ENTITY | StatusCode::FORBIDDEN => {
                    Err(ClientError::Rejected(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    // ========== Order API ==========

    /// Create an order
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<OrderSnapshot> {
        self.post("/api/orders", request).await
    }

    /// Fetch an order by its shareable number
    pub async fn order_by_number(&self, order_number: &str) -> ClientResult<OrderSnapshot> {
        self.get(&format!("/api/orders/number/{order_number}")).await
    }

    /// Request a status transition, returning the updated snapshot
    pub async fn transition_order(
        &self,
        order_id: i64,
        request: &TransitionRequest,
    ) -> ClientResult<OrderSnapshot> {
        self.put(&format!("/api/orders/{order_id}/status"), request).await
    }

    /// Record a payment status change
    pub async fn set_payment_status(
        &self,
        order_id: i64,
        payment_status: PaymentStatus,
    ) -> ClientResult<OrderSnapshot> {
        self.put(
            &format!("/api/orders/{order_id}/payment"),
            &PaymentStatusUpdate { payment_status },
        )
        .await
    }

    /// Filtered, paginated order listing for a cafe
    pub async fn list_orders(
        &self,
        cafe_id: i64,
        filters: &OrderFilters,
        pagination: Pagination,
    ) -> ClientResult<PaginatedResponse<OrderSnapshot>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filters.status {
            params.push(("status", serde_plain(&status)?));
        }
        if let Some(method) = filters.payment_method {
            params.push(("payment_method", serde_plain(&method)?));
        }
        if let Some(from) = filters.from {
            params.push(("from", from.to_rfc3339()));
        }
        if let Some(to) = filters.to {
            params.push(("to", to.to_rfc3339()));
        }
        params.push(("page", pagination.page.to_string()));
        params.push(("per_page", pagination.per_page.to_string()));

        self.get_with_query(&format!("/api/cafes/{cafe_id}/orders"), &params)
            .await
    }

    // ========== Menu API ==========

    /// Fetch a cafe's menu
    pub async fn menu(&self, cafe_id: i64) -> ClientResult<Vec<MenuItem>> {
        self.get(&format!("/api/cafes/{cafe_id}/menu-items")).await
    }
}

/// Render a unit-variant enum the way the wire format spells it
fn serde_plain<T: serde::Serialize>(value: &T) -> ClientResult<String> {
    let json = serde_json::to_value(value)?;
    json.as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidResponse("Expected string-like filter value".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderStatus;

    #[test]
    fn test_serde_plain_uses_wire_spelling() {
        assert_eq!(serde_plain(&OrderStatus::Preparing).unwrap(), "PREPARING");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3000/"));
        assert_eq!(client.url("/api/health"), "http://localhost:3000/api/health");
        assert_eq!(client.url("api/health"), "http://localhost:3000/api/health");
    }
}
