use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain::chargepoint::schema::*;
use domain::chargepoint::{ApiError, ChargePointApi};
use domain::device::ApiCredentials;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::http_log::{HttpExchange, HttpLogSink};

/// JSON-over-HTTP binding of the vendor API for one endpoint address.
///
/// Every operation is `POST <base>/<Operation>` with HTTP basic auth.
pub struct HttpChargePointApi {
    client: Client,
    base_url: String,
    credentials: ApiCredentials,
    http_log: Option<Arc<HttpLogSink>>,
}

impl HttpChargePointApi {
    pub fn new(
        client: Client,
        address: &str,
        credentials: ApiCredentials,
        http_log: Option<Arc<HttpLogSink>>,
    ) -> Self {
        Self {
            client,
            base_url: base_url(address),
            credentials,
            http_log,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<Req, Res>(
        &self,
        cancel: &CancellationToken,
        operation: &str,
        request: &Req,
    ) -> Result<Res, ApiError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, operation);
        debug!(operation = operation, url = %url, "Sending vendor request");

        let send = async {
            let response = self
                .client
                .post(&url)
                .basic_auth(&self.credentials.user, Some(&self.credentials.password))
                .json(request)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            result = send => result.map_err(|e| ApiError::Http(e.to_string())),
        };

        if let Some(sink) = &self.http_log {
            let (status, response) = match &outcome {
                Ok((status, body)) => (Some(status.as_u16()), body_value(body)),
                Err(e) => (None, Value::String(e.to_string())),
            };
            let exchange = HttpExchange {
                timestamp: Utc::now(),
                operation: operation.to_string(),
                url: url.clone(),
                request: serde_json::to_value(request).unwrap_or(Value::Null),
                status,
                response,
            };
            sink.record(&exchange).await;
        }

        let (status, body) = outcome?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ChargePointApi for HttpChargePointApi {
    async fn get_cpn_instances(
        &self,
        cancel: &CancellationToken,
        request: GetCPNInstancesRequest,
    ) -> Result<GetCPNInstancesResponse, ApiError> {
        self.call(cancel, "GetCPNInstances", &request).await
    }

    async fn get_stations(
        &self,
        cancel: &CancellationToken,
        request: GetStationsRequest,
    ) -> Result<GetStationsResponse, ApiError> {
        self.call(cancel, "GetStations", &request).await
    }

    async fn get_station_groups(
        &self,
        cancel: &CancellationToken,
        request: GetStationGroupsRequest,
    ) -> Result<GetStationGroupsResponse, ApiError> {
        self.call(cancel, "GetStationGroups", &request).await
    }

    async fn shed_load(
        &self,
        cancel: &CancellationToken,
        request: ShedLoadRequest,
    ) -> Result<ShedLoadResponse, ApiError> {
        self.call(cancel, "ShedLoad", &request).await
    }

    async fn clear_shed_state(
        &self,
        cancel: &CancellationToken,
        request: ClearShedStateRequest,
    ) -> Result<ClearShedStateResponse, ApiError> {
        self.call(cancel, "ClearShedState", &request).await
    }

    async fn get_load(
        &self,
        cancel: &CancellationToken,
        request: GetLoadRequest,
    ) -> Result<GetLoadResponse, ApiError> {
        self.call(cancel, "GetLoad", &request).await
    }
}

fn base_url(address: &str) -> String {
    let address = address.trim_end_matches('/');
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}

// Non-JSON bodies are kept as raw text.
fn body_value(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
