#[cfg(test)]
use mockall::automock;
use {
    super::entities::{
        Product,
        ProductStatus,
    },
    crate::{
        api::RestError,
        kernel::entities::ProductId,
    },
    anyhow::anyhow,
    axum::async_trait,
    std::time::Duration,
};

/// Remote product catalog. Only the two calls the lifecycle needs are
/// modeled; the catalog's own CRUD surface is out of scope.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductClient: Send + Sync + 'static {
    async fn get_product(&self, product_id: ProductId) -> Result<Product, RestError>;
    async fn set_status(&self, product_id: ProductId, status: ProductStatus)
        -> anyhow::Result<()>;
}

pub struct HttpProductClient {
    client:   reqwest::Client,
    base_url: String,
}

impl HttpProductClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProductClient for HttpProductClient {
    #[tracing::instrument(skip_all, fields(product_id = %product_id))]
    async fn get_product(&self, product_id: ProductId) -> Result<Product, RestError> {
        let url = format!("{}/product/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(error = e.to_string(), "Failed to reach product service");
            RestError::TemporarilyUnavailable
        })?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RestError::ProductNotFound);
        }
        let response = response.error_for_status().map_err(|e| {
            tracing::error!(error = e.to_string(), "Product service returned an error");
            RestError::TemporarilyUnavailable
        })?;
        response.json::<Product>().await.map_err(|e| {
            tracing::error!(error = e.to_string(), "Failed to decode product response");
            RestError::TemporarilyUnavailable
        })
    }

    #[tracing::instrument(skip_all, fields(product_id = %product_id, status = status.as_str()))]
    async fn set_status(
        &self,
        product_id: ProductId,
        status: ProductStatus,
    ) -> anyhow::Result<()> {
        let url = format!("{}/product/{}/{}", self.base_url, product_id, status.as_str());
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach product service: {e}"))?;
        response
            .error_for_status()
            .map_err(|e| anyhow!("Product status update rejected: {e}"))?;
        Ok(())
    }
}
