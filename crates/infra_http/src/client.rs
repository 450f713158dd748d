//! JSON REST client
//!
//! A thin wrapper over a pooled `reqwest::Client`. Each method sends one
//! request and either decodes the success body or classifies the failure.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use core_kernel::PortError;

use crate::error::{classify_response, transport_error, IntegrationError};

/// Query-string pairs sent with a request
pub type Query = [(&'static str, String)];

/// JSON client shared by all downstream adapters
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
}

impl RestClient {
    /// Builds a client applying `timeout` to every request
    pub fn new(timeout: Duration) -> Result<Self, IntegrationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query,
    ) -> Result<T, PortError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, PortError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, PortError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    /// Sends a DELETE; a `404` counts as success since the target is gone
    pub async fn delete(&self, url: &str, query: &Query) -> Result<(), PortError> {
        let response = self
            .client
            .delete(url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        let body = response.text().await.map_err(transport_error)?;
        Err(classify_response(status, &body))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, PortError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(transport_error);
    }
    let body = response.text().await.map_err(transport_error)?;
    Err(classify_response(status, &body))
}
