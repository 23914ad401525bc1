// SPDX-License-Identifier: Apache-2.0

use crate::config::GatewayConfig;
use crate::health::{HealthReport, ProbeStatus};
use crate::{GatewayError, ResourceGateway};
use async_trait::async_trait;
use opsdeck_model::{Resource, Summary};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Stateless HTTP client for the operations API. The fixed request timeout
/// is set once on the underlying client; no retry, no cancellation.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    cfg: GatewayConfig,
}

impl HttpGateway {
    pub fn new(cfg: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| GatewayError(e.to_string()))?;
        Ok(Self { client, cfg })
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.cfg
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.cfg.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError(e.to_string()))?;
        resp.json::<T>()
            .await
            .map_err(|e| GatewayError(e.to_string()))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError(e.to_string()))?;
        Ok(())
    }

    pub async fn fetch_summary(&self) -> Result<Summary, GatewayError> {
        self.get_json("summary").await
    }

    /// Issues both probes concurrently and interprets each on its own.
    /// Never fails outward.
    pub async fn probe_health(&self) -> HealthReport {
        let (healthz, readyz) = tokio::join!(self.probe("healthz"), self.probe("readyz"));
        let report = HealthReport { healthz, readyz };
        debug!(healthz = %report.healthz, readyz = %report.readyz, "health probes settled");
        report
    }

    async fn probe(&self, path: &str) -> ProbeStatus {
        match self
            .client
            .get(self.url(path))
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(_) => ProbeStatus::Ok,
            Err(_) => ProbeStatus::Fail,
        }
    }
}

#[async_trait]
impl<R> ResourceGateway<R> for HttpGateway
where
    R: Resource + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        self.get_json(R::KIND).await
    }

    async fn create(&self, draft: &R::Create) -> Result<(), GatewayError> {
        self.send_json(reqwest::Method::POST, R::KIND, draft).await
    }

    async fn update(&self, id: u64, edit: &R::Edit) -> Result<(), GatewayError> {
        let path = format!("{}/{id}", R::KIND);
        self.send_json(reqwest::Method::PUT, &path, edit).await
    }

    async fn delete(&self, id: u64) -> Result<(), GatewayError> {
        self.client
            .delete(self.url(&format!("{}/{id}", R::KIND)))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GatewayError(e.to_string()))?;
        Ok(())
    }
}
