//! Typed REST client for the order gateway

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::save::OrderStore;
use crate::synthesis::{ArtifactHandle, ArtifactSource, ArtifactStatus};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart};
use serde::de::DeserializeOwned;
use shared::models::{
    DeliveryInstruction, DeliveryTerm, DocumentKind, DocumentSlot, Order, PaymentTerm, Supplier,
    TransferReport, UserRef,
};
use shared::response::{ApiResponse, Page};
use std::time::Duration;

/// HTTP client for the order gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GatewayClient {
    /// Create a new gateway client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {token}"),
            ),
            None => request,
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        Self::handle_response(request.send().await?).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// Unwrap the envelope and map error statuses
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Structured errors pass through; anything else maps by status
            if let Ok(err) = serde_json::from_str::<shared::AppError>(&text) {
                return Err(ClientError::Api(err));
            }
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            return Err(ClientError::Internal(envelope.message));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing response data".to_string()))
    }

    // ==================== Order API ====================

    /// Fetch one order by id
    pub async fn fetch_order(&self, order_id: &str) -> ClientResult<Order> {
        self.get(&format!("api/orders/{order_id}")).await
    }

    /// Create a new order; the gateway assigns id and order number
    pub async fn create_order(&self, order: &Order) -> ClientResult<Order> {
        if order.has_pending_upload() {
            return self.send_multipart(None, order).await;
        }
        self.post("api/orders", order).await
    }

    /// Update an existing order
    pub async fn update_order(&self, order: &Order) -> ClientResult<Order> {
        let id = order.id.as_deref().ok_or_else(|| {
            ClientError::Validation("order has no id yet, create it first".to_string())
        })?;
        if order.has_pending_upload() {
            return self.send_multipart(Some(id), order).await;
        }
        self.put(&format!("api/orders/{id}"), order).await
    }

    /// Submit an order with pending uploads as one multipart request.
    ///
    /// The order itself travels as a JSON part; each pending slot becomes
    /// a file part named after its gateway field.
    async fn send_multipart(&self, id: Option<&str>, order: &Order) -> ClientResult<Order> {
        let mut form = multipart::Form::new().part(
            "order",
            multipart::Part::text(serde_json::to_string(order)?)
                .mime_str("application/json")?,
        );

        for kind in [
            DocumentKind::Offer,
            DocumentKind::Order,
            DocumentKind::SupplierConfirmation,
        ] {
            if let DocumentSlot::PendingUpload {
                file_name,
                content_type,
                data,
            } = order.document(kind)
            {
                tracing::debug!(
                    field = kind.field_name(),
                    file_name = %file_name,
                    size = data.len(),
                    "Attaching pending upload"
                );
                form = form.part(
                    kind.field_name(),
                    multipart::Part::bytes(data.clone())
                        .file_name(file_name.clone())
                        .mime_str(content_type)?,
                );
            }
        }

        let request = match id {
            Some(id) => self.client.put(self.url(&format!("api/orders/{id}"))),
            None => self.client.post(self.url("api/orders")),
        };
        let response = self.authorize(request.multipart(form)).send().await?;
        Self::handle_response(response).await
    }

    /// Transfer delivered items into a goods receipt.
    ///
    /// Item-level failures do not abort the batch; the report carries one
    /// outcome per item.
    pub async fn transfer_to_receipt(
        &self,
        order_id: &str,
        positions: &[u32],
    ) -> ClientResult<TransferReport> {
        #[derive(serde::Serialize)]
        struct TransferRequest<'a> {
            positions: &'a [u32],
        }

        let report: TransferReport = self
            .post(
                &format!("api/orders/{order_id}/transfer"),
                &TransferRequest { positions },
            )
            .await?;

        if report.is_partial_failure() {
            tracing::warn!(
                order_id,
                succeeded = report.succeeded().count(),
                failed = report.failed().count(),
                "Receipt transfer partially failed"
            );
        }
        Ok(report)
    }

    // ==================== Catalog API ====================

    /// List suppliers
    pub async fn suppliers(&self) -> ClientResult<Page<Supplier>> {
        self.get("api/suppliers").await
    }

    /// List payment terms
    pub async fn payment_terms(&self) -> ClientResult<Page<PaymentTerm>> {
        self.get("api/payment-terms").await
    }

    /// List delivery terms
    pub async fn delivery_terms(&self) -> ClientResult<Page<DeliveryTerm>> {
        self.get("api/delivery-terms").await
    }

    /// List delivery instructions
    pub async fn delivery_instructions(&self) -> ClientResult<Page<DeliveryInstruction>> {
        self.get("api/delivery-instructions").await
    }

    /// List users for the creator dropdown
    pub async fn users(&self) -> ClientResult<Page<UserRef>> {
        self.get("api/users").await
    }
}

#[async_trait]
impl OrderStore for GatewayClient {
    async fn persist(&self, order: &Order) -> ClientResult<Order> {
        match &order.id {
            Some(_) => self.update_order(order).await,
            None => self.create_order(order).await,
        }
    }
}

#[async_trait]
impl ArtifactSource for GatewayClient {
    /// Poll the rendered order document.
    ///
    /// 202 means the renderer has not finished; 200 carries the bytes.
    async fn fetch(&self, order_id: &str) -> ClientResult<ArtifactStatus> {
        let path = format!("api/orders/{order_id}/document");
        let request = self.authorize(self.client.get(self.url(&path)));
        let response = request.send().await?;

        match response.status() {
            StatusCode::ACCEPTED => Ok(ArtifactStatus::NotReady),
            status if status.is_success() => {
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("application/pdf")
                    .to_string();
                let data = response.bytes().await?.to_vec();
                Ok(ArtifactStatus::Ready(ArtifactHandle::new(
                    format!("order-{order_id}.pdf"),
                    content_type,
                    data,
                )))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(format!(
                "no document for order {order_id}"
            ))),
            _ => Err(ClientError::Internal(response.text().await?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderType;

    fn client() -> GatewayClient {
        let config = ClientConfig {
            base_url: "http://localhost:9".into(),
            token: None,
            timeout_secs: 1,
            synthesis: Default::default(),
        };
        GatewayClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let client = client();
        assert_eq!(client.url("api/orders"), "http://localhost:9/api/orders");
        assert_eq!(client.url("/api/orders"), "http://localhost:9/api/orders");
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let order = Order::new("u-1", OrderType::Direct).unwrap();
        let err = client().update_order(&order).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
