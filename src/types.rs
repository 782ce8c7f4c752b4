//! Wire types for the Replica service endpoints.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Requested audio container for synthesized speech.
///
/// The service recognizes four formats. Any other value is passed through to
/// the request uninterpreted rather than rejected client-side, so new server
/// formats work without a client update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioExtension {
    Wav,
    Mp3,
    Ogg,
    Flac,
    /// A format the client does not recognize; sent verbatim.
    Other(String),
}

impl AudioExtension {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for AudioExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AudioExtension {
    fn from(s: &str) -> Self {
        match s {
            "wav" => Self::Wav,
            "mp3" => Self::Mp3,
            "ogg" => Self::Ogg,
            "flac" => Self::Flac,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Parameters for one synthesis call. Constructed per call, never persisted.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub speaker_id: String,
    pub extension: AudioExtension,
    /// Sent only when greater than zero.
    pub bit_rate: Option<u32>,
    /// Sent only when greater than zero.
    pub sample_rate: Option<u32>,
}

impl SpeechRequest {
    pub fn new(
        text: impl Into<String>,
        speaker_id: impl Into<String>,
        extension: AudioExtension,
    ) -> Self {
        Self {
            text: text.into(),
            speaker_id: speaker_id.into(),
            extension,
            bit_rate: None,
            sample_rate: None,
        }
    }

    /// Set the requested bit rate.
    pub fn bit_rate(mut self, bit_rate: u32) -> Self {
        self.bit_rate = Some(bit_rate);
        self
    }

    /// Set the requested sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }
}

/// One voice record from `GET /voice/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

/// Full response from `GET /speech/`.
///
/// Only [`urls`](Self::urls) is surfaced by [`Client::synthesize`]; the
/// remaining fields echo the request and describe the rendered audio, and are
/// available through [`Client::synthesize_detailed`].
///
/// [`Client::synthesize`]: crate::Client::synthesize
/// [`Client::synthesize_detailed`]: crate::Client::synthesize_detailed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechResponse {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub duration: f32,
    #[serde(default)]
    pub speaker_id: String,
    #[serde(default, rename = "txt")]
    pub text: String,
    #[serde(default)]
    pub bit_rate: u32,
    #[serde(default)]
    pub sample_rate: u32,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub url: String,
    /// Label (extension or variant name) to download URL.
    #[serde(default)]
    pub urls: HashMap<String, String>,
}

/// Success body of `POST /auth/`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub refresh_token: Option<String>,
}

/// 401 body shared by all endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct UnauthorizedResponse {
    #[serde(default)]
    pub exception: String,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// 400 body of `GET /speech/`.
#[derive(Debug, Deserialize)]
pub(crate) struct BadRequestResponse {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_canonical_strings() {
        assert_eq!(AudioExtension::Wav.as_str(), "wav");
        assert_eq!(AudioExtension::Mp3.as_str(), "mp3");
        assert_eq!(AudioExtension::Ogg.as_str(), "ogg");
        assert_eq!(AudioExtension::Flac.as_str(), "flac");
    }

    #[test]
    fn unknown_extension_passes_through() {
        let ext = AudioExtension::from("opus");
        assert_eq!(ext, AudioExtension::Other("opus".to_string()));
        assert_eq!(ext.as_str(), "opus");
    }

    #[test]
    fn speech_request_defaults_omit_rates() {
        let req = SpeechRequest::new("hi", "speaker", AudioExtension::Wav);
        assert!(req.bit_rate.is_none());
        assert!(req.sample_rate.is_none());
    }

    #[test]
    fn speech_response_decodes_partial_body() {
        let resp: SpeechResponse =
            serde_json::from_str(r#"{"urls":{"mp3":"https://cdn.example/x.mp3"},"duration":1.5}"#)
                .unwrap();
        assert_eq!(resp.duration, 1.5);
        assert_eq!(resp.urls["mp3"], "https://cdn.example/x.mp3");
        assert!(resp.extensions.is_empty());
    }
}
