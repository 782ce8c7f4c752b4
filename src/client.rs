//! Replica API client and builder.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::types::{
    AuthResponse, BadRequestResponse, SpeechRequest, SpeechResponse, UnauthorizedResponse, Voice,
};
use crate::{Error, Result};

const DEFAULT_ENDPOINT: &str = "https://api.replicastudios.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const AUTH_PATH: &str = "/auth/";
const VOICE_PATH: &str = "/voice/";
const SPEECH_PATH: &str = "/speech/";

// Form and query parameter names from the service contract.
const PARAM_CLIENT_ID: &str = "client_id";
const PARAM_SECRET: &str = "secret";
const PARAM_TEXT: &str = "txt";
const PARAM_SPEAKER_ID: &str = "speaker_id";
const PARAM_EXTENSION: &str = "extension";
const PARAM_BIT_RATE: &str = "bit_rate";
const PARAM_SAMPLE_RATE: &str = "sample_rate";

/// Client for the Replica Studios text-to-speech API.
///
/// Holds the service endpoint, the client credentials, the bearer token
/// obtained by [`authenticate`](Client::authenticate), and a reusable HTTP
/// transport. Each instance is fully self-contained; there is no global
/// state. The token is the only field mutated after construction, which is
/// why `authenticate` takes `&mut self` while the other operations borrow
/// immutably — shared concurrent use must go through an external lock.
#[derive(Debug)]
pub struct Client {
    endpoint: Url,
    client_id: String,
    client_secret: String,
    access_token: String,
    http: reqwest::Client,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Bearer token from the last successful
    /// [`authenticate`](Client::authenticate) call; empty before then.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Exchange the client credentials for a bearer token.
    ///
    /// Issues one form-encoded `POST` to `/auth/`. On success the token is
    /// stored on the client and reused by every subsequent call until
    /// `authenticate` runs again; on failure the stored token is left
    /// unchanged. Never retried.
    pub async fn authenticate(&mut self) -> Result<()> {
        let url = self.route(AUTH_PATH)?;
        debug!(path = AUTH_PATH, "requesting access token");
        let response = self
            .http
            .post(url)
            .form(&[
                (PARAM_CLIENT_ID, self.client_id.as_str()),
                (PARAM_SECRET, self.client_secret.as_str()),
            ])
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let auth: AuthResponse = decode_body(response).await?;
                self.access_token = auth.access_token;
                Ok(())
            }
            401 => Err(unauthorized(response).await),
            status => {
                warn!(status, path = AUTH_PATH, "unexpected status");
                Err(Error::UnknownResponse { status })
            }
        }
    }

    /// List the voices available to the authenticated client, keyed by voice
    /// identifier.
    ///
    /// Fails with [`Error::MissingAuthorization`] before making any request
    /// when no token is held.
    pub async fn list_voices(&self) -> Result<HashMap<String, String>> {
        if self.access_token.is_empty() {
            return Err(Error::MissingAuthorization);
        }

        let url = self.route(VOICE_PATH)?;
        debug!(path = VOICE_PATH, "listing voices");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONNECTION, "close")
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let voices: Vec<Voice> = decode_body(response).await?;
                Ok(voices.into_iter().map(|v| (v.uuid, v.name)).collect())
            }
            401 => Err(unauthorized(response).await),
            status => {
                warn!(status, path = VOICE_PATH, "unexpected status");
                Err(Error::UnknownResponse { status })
            }
        }
    }

    /// Synthesize speech for `request` and return the label to download-URL
    /// mapping of the rendered audio.
    ///
    /// See [`synthesize_detailed`](Client::synthesize_detailed) for the full
    /// server response.
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<HashMap<String, String>> {
        Ok(self.synthesize_detailed(request).await?.urls)
    }

    /// Same round trip as [`synthesize`](Client::synthesize), returning the
    /// full decoded response including duration, quality, and the echoed
    /// request parameters.
    pub async fn synthesize_detailed(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        if self.access_token.is_empty() {
            return Err(Error::MissingAuthorization);
        }

        let mut url = self.route(SPEECH_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(PARAM_TEXT, &request.text);
            query.append_pair(PARAM_SPEAKER_ID, &request.speaker_id);
            query.append_pair(PARAM_EXTENSION, request.extension.as_str());
            if let Some(bit_rate) = request.bit_rate.filter(|v| *v > 0) {
                query.append_pair(PARAM_BIT_RATE, &bit_rate.to_string());
            }
            if let Some(sample_rate) = request.sample_rate.filter(|v| *v > 0) {
                query.append_pair(PARAM_SAMPLE_RATE, &sample_rate.to_string());
            }
        }

        debug!(
            path = SPEECH_PATH,
            speaker_id = %request.speaker_id,
            extension = %request.extension,
            "requesting synthesis"
        );
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONNECTION, "close")
            .send()
            .await?;

        match response.status().as_u16() {
            200 => decode_body(response).await,
            400 => {
                let body: BadRequestResponse = decode_body(response).await?;
                Err(Error::BadRequest {
                    code: body.error_code,
                    message: body.error,
                })
            }
            401 => Err(unauthorized(response).await),
            status => {
                warn!(status, path = SPEECH_PATH, "unexpected status");
                Err(Error::UnknownResponse { status })
            }
        }
    }

    fn route(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| Error::configuration(format!("Invalid request URL: {}", e)))
    }
}

/// Read the body, then decode. Keeps read failures and decode failures as
/// distinct error variants.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn unauthorized(response: reqwest::Response) -> Error {
    match decode_body::<UnauthorizedResponse>(response).await {
        Ok(body) => Error::Unauthorized {
            exception: body.exception,
            reasons: body.reasons,
        },
        Err(e) => e,
    }
}

/// Builder for [`Client`].
///
/// Keep this surface small and predictable: endpoint, credentials, and the
/// transport are the only knobs.
pub struct ClientBuilder {
    endpoint: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            client_id: None,
            client_secret: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http: None,
        }
    }

    /// Override the service endpoint (primarily for testing with mock
    /// servers). Defaults to the hosted Replica service.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Request timeout for the default transport. Ignored when a caller
    /// transport is supplied via [`http_client`](ClientBuilder::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a preconfigured transport instead of building the default one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let client_id = self
            .client_id
            .or_else(|| env::var("REPLICA_CLIENT_ID").ok())
            .ok_or_else(|| Error::configuration("Client ID required"))?;
        let client_secret = self
            .client_secret
            .or_else(|| env::var("REPLICA_CLIENT_SECRET").ok())
            .ok_or_else(|| Error::configuration("Client secret required"))?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| Error::configuration(format!("Invalid endpoint {:?}: {}", endpoint, e)))?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| {
                    Error::configuration(format!("Failed to create HTTP client: {}", e))
                })?,
        };

        Ok(Client {
            endpoint,
            client_id,
            client_secret,
            access_token: String::new(),
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
