//! JSON gateway client for the management API.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;

use crate::config::SwarmGateConfig;
use crate::error::{Result, SwarmGateError};

use super::messages::{
    ActiveAlarmsResponse, GetActiveAlarms, LocalAgent, PrerequisitesCheckRequest,
    PrerequisitesCheckResponse, SetAlarmState,
};
use super::{AlarmService, PrerequisiteEvaluator};

/// Blocking HTTP client for the management API gateway.
///
/// # Example
///
/// ```no_run
/// use swarmgate::api::{HttpApiClient, PrerequisiteEvaluator, PrerequisitesCheckRequest};
/// use std::time::Duration;
///
/// let client = HttpApiClient::new("https://dma.example.com/api", Duration::from_secs(30))
///     .unwrap()
///     .with_token("secret");
/// let responses = client
///     .check_prerequisites(&PrerequisitesCheckRequest::structural())
///     .unwrap();
/// ```
pub struct HttpApiClient {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    client: Client,
}

impl HttpApiClient {
    /// Create a client for the given gateway base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("swarmgate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout,
            client,
        })
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &SwarmGateConfig) -> Result<Self> {
        let endpoint = config.require_endpoint()?;
        let client = Self::new(endpoint, config.timeout())?;
        Ok(match &config.token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Send a bearer token with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the gateway base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.authorized(self.client.get(&url)).send()?;
        check_status(response, url)
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.authorized(self.client.post(&url)).json(body).send()?;
        check_status(response, url)
    }
}

fn check_status(response: Response, url: String) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SwarmGateError::Api {
            status: status.as_u16(),
            url,
        })
    }
}

impl PrerequisiteEvaluator for HttpApiClient {
    fn check_prerequisites(
        &self,
        request: &PrerequisitesCheckRequest,
    ) -> Result<Vec<PrerequisitesCheckResponse>> {
        let responses = self
            .post("/swarming/prerequisites", request)?
            .json::<Option<Vec<PrerequisitesCheckResponse>>>()?;
        Ok(responses.unwrap_or_default())
    }

    fn local_agent_id(&self) -> Result<i32> {
        let agent: LocalAgent = self.get("/agents/local")?.json()?;
        Ok(agent.agent_id)
    }

    fn enable_swarming(&self) -> Result<()> {
        self.post("/swarming/enable", &serde_json::json!({}))?;
        Ok(())
    }
}

impl AlarmService for HttpApiClient {
    fn active_alarms(&self, lookup: &GetActiveAlarms) -> Result<Option<ActiveAlarmsResponse>> {
        let responses = self
            .post("/alarms/active", lookup)?
            .json::<Option<Vec<ActiveAlarmsResponse>>>()?;
        Ok(responses.and_then(|r| r.into_iter().next()))
    }

    fn set_alarm_states(&self, batch: &[SetAlarmState]) -> Result<()> {
        self.post("/alarms/state", batch)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AlarmInfo, AlarmUserStatus};
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> HttpApiClient {
        HttpApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    fn structural_body(last_flag: bool) -> serde_json::Value {
        json!({
            "supportedDms": true,
            "supportedDatabase": true,
            "centralDatabaseNotConfigured": true,
            "legacyReportsAndDashboardsDisabled": true,
            "noIncompatibleEnhancedServicesOnDms": last_flag,
            "satisfiesPrerequisites": last_flag,
            "summary": "summary text"
        })
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = HttpApiClient::new("http://dma/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://dma/api");
        assert_eq!(client.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn check_prerequisites_posts_request_and_parses_responses() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/swarming/prerequisites")
                .json_body(json!({ "analyzeAlarmIdUsage": false, "dataMinerId": -1 }));
            then.status(200).json_body(json!([structural_body(false)]));
        });

        let responses = client(&server)
            .check_prerequisites(&PrerequisitesCheckRequest::structural())
            .unwrap();

        mock.assert();
        assert_eq!(responses.len(), 1);
        assert!(!responses[0].no_incompatible_enhanced_services_on_dms);
        assert_eq!(responses[0].summary, "summary text");
    }

    #[test]
    fn check_prerequisites_returns_every_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/swarming/prerequisites");
            then.status(200)
                .json_body(json!([structural_body(true), structural_body(true)]));
        });

        let responses = client(&server)
            .check_prerequisites(&PrerequisitesCheckRequest::structural())
            .unwrap();

        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn check_prerequisites_null_body_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/swarming/prerequisites");
            then.status(200).body("null");
        });

        let responses = client(&server)
            .check_prerequisites(&PrerequisitesCheckRequest::structural())
            .unwrap();

        assert!(responses.is_empty());
    }

    #[test]
    fn sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/agents/local")
                .header("authorization", "Bearer s3cret");
            then.status(200).json_body(json!({ "agentId": 17 }));
        });

        let agent = client(&server).with_token("s3cret").local_agent_id().unwrap();

        mock.assert();
        assert_eq!(agent, 17);
    }

    #[test]
    fn enable_swarming_posts_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/swarming/enable");
            then.status(202);
        });

        client(&server).enable_swarming().unwrap();

        mock.assert_calls(1);
    }

    #[test]
    fn non_success_status_is_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/swarming/enable");
            then.status(503);
        });

        let err = client(&server).enable_swarming().unwrap_err();

        match err {
            SwarmGateError::Api { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/swarming/enable"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreachable_gateway_is_transport_error() {
        let client = HttpApiClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        let err = client.enable_swarming().unwrap_err();
        assert!(matches!(err, SwarmGateError::Transport { .. }));
    }

    #[test]
    fn active_alarms_takes_first_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/alarms/active")
                .json_body(json!({ "dataMinerId": 12, "elementId": 400 }));
            then.status(200).json_body(json!([
                { "activeAlarms": [
                    { "dataMinerId": 12, "alarmId": 1, "severity": "Critical" }
                ] }
            ]));
        });

        let response = client(&server)
            .active_alarms(&GetActiveAlarms {
                data_miner_id: 12,
                element_id: 400,
            })
            .unwrap()
            .unwrap();

        assert_eq!(
            response.active_alarms,
            vec![AlarmInfo {
                data_miner_id: 12,
                alarm_id: 1,
                severity: "Critical".into(),
            }]
        );
    }

    #[test]
    fn active_alarms_empty_answer_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/alarms/active");
            then.status(200).json_body(json!([]));
        });

        let response = client(&server)
            .active_alarms(&GetActiveAlarms {
                data_miner_id: 1,
                element_id: 2,
            })
            .unwrap();

        assert!(response.is_none());
    }

    #[test]
    fn set_alarm_states_sends_whole_batch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/alarms/state").json_body(json!([
                { "dataMinerId": 12, "alarmId": 1, "desiredStatus": "mask" },
                { "dataMinerId": 12, "alarmId": 3, "desiredStatus": "mask" }
            ]));
            then.status(200);
        });

        let batch = [
            SetAlarmState {
                data_miner_id: 12,
                alarm_id: 1,
                desired_status: AlarmUserStatus::Mask,
            },
            SetAlarmState {
                data_miner_id: 12,
                alarm_id: 3,
                desired_status: AlarmUserStatus::Mask,
            },
        ];
        client(&server).set_alarm_states(&batch).unwrap();

        mock.assert_calls(1);
    }
}
