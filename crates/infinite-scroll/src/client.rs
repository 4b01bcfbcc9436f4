use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::product::ProductPage;
use crate::source::{PageRequest, PageSource};

/// HTTP client for the catalog's read-only `GET /products` endpoint.
///
/// Any non-2xx status becomes [`FetchError::Status`]; transport and body
/// decoding failures surface as [`FetchError::Http`]. Nothing is retried.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// `{base_url}/products`, tolerating a trailing slash on the base.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait(?Send)]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<ProductPage, FetchError> {
        let url = self.products_url();
        debug!(target: "catalog", "GET {url} limit={} skip={}", request.limit, request.skip);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", request.limit), ("skip", request.skip)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<ProductPage>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_body(ids: &[u32], skip: u32, limit: u32) -> serde_json::Value {
        let products: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "title": format!("Product {id}"), "price": 10.0}))
            .collect();
        json!({"products": products, "total": 194, "skip": skip, "limit": limit})
    }

    #[test]
    fn test_products_url_strips_trailing_slash() {
        assert_eq!(
            CatalogClient::new("https://dummyjson.com/").products_url(),
            "https://dummyjson.com/products"
        );
        assert_eq!(
            CatalogClient::new("https://dummyjson.com").products_url(),
            "https://dummyjson.com/products"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_sends_limit_and_skip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("limit", "10"))
            .and(query_param("skip", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[21, 22, 23], 20, 10)))
            .expect(1)
            .mount(&server)
            .await;

        let client = CatalogClient::new(server.uri());
        let page = client
            .fetch_page(PageRequest { limit: 10, skip: 20 })
            .await
            .expect("Fetch failed");

        let ids: Vec<u32> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
        assert_eq!(page.total, 194);
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = CatalogClient::new(server.uri());
        let err = client
            .fetch_page(PageRequest { limit: 10, skip: 0 })
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500 }), "got: {err:?}");
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_malformed_body_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = CatalogClient::new(server.uri());
        let err = client
            .fetch_page(PageRequest { limit: 10, skip: 0 })
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Http(_)), "got: {err:?}");
        assert!(!err.user_message().is_empty());
    }
}
