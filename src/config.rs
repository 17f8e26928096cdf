use std::fmt;
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::error::Error;
use crate::google_tts::api::{AudioEncoding, SsmlVoiceGender};

const ENV_PREFIX: &str = "GOOGLE_TTS_";

/// Compiled-in fallback for `GOOGLE_TTS_API_KEY`.
const DEFAULT_API_KEY: Option<&str> = None;

/// 8 kHz narrowband, what Asterisk plays without resampling.
pub const SAMPLE_RATE_HERTZ: u32 = 8000;

#[derive(Deserialize, Debug)]
struct Setting {
    api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    endpoint: String,

    #[serde(default = "default_language_code")]
    language_code: String,

    voice_name: Option<String>,

    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

fn default_endpoint() -> String {
    "https://texttospeech.googleapis.com/v1/text:synthesize".to_string()
}

fn default_language_code() -> String {
    "cs-CZ".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

pub struct Config {
    pub api_key: String,
    pub endpoint: Url,
    pub language_code: String,
    pub voice_name: Option<String>,
    pub ssml_gender: SsmlVoiceGender,
    pub audio_encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("language_code", &self.language_code)
            .field("voice_name", &self.voice_name)
            .field("ssml_gender", &self.ssml_gender)
            .field("audio_encoding", &self.audio_encoding)
            .field("sample_rate_hertz", &self.sample_rate_hertz)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from `GOOGLE_TTS_*` variables.
    ///
    /// Fails with [`Error::MissingCredential`] when neither the environment nor
    /// [`DEFAULT_API_KEY`] provide a non-empty key.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let setting: Setting = envy::prefixed(ENV_PREFIX).from_iter(vars)?;

        let api_key = setting
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| DEFAULT_API_KEY.map(str::to_owned))
            .ok_or(Error::MissingCredential)?;

        let endpoint = Url::parse(&setting.endpoint)
            .map_err(|e| Error::Config(format!("GOOGLE_TTS_ENDPOINT: {e}")))?;

        if setting.timeout_ms == 0 {
            return Err(Error::Config(
                "GOOGLE_TTS_TIMEOUT_MS must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            api_key,
            endpoint,
            language_code: setting.language_code,
            voice_name: setting.voice_name.filter(|v| !v.is_empty()),
            ssml_gender: SsmlVoiceGender::Neutral,
            audio_encoding: AudioEncoding::Linear16,
            sample_rate_hertz: SAMPLE_RATE_HERTZ,
            timeout: Duration::from_millis(setting.timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[("GOOGLE_TTS_API_KEY", "secret")])).unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(
            config.endpoint.as_str(),
            "https://texttospeech.googleapis.com/v1/text:synthesize"
        );
        assert_eq!(config.language_code, "cs-CZ");
        assert_eq!(config.voice_name, None);
        assert_eq!(config.ssml_gender, SsmlVoiceGender::Neutral);
        assert_eq!(config.audio_encoding, AudioEncoding::Linear16);
        assert_eq!(config.sample_rate_hertz, 8000);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_key() {
        let result = Config::from_vars(vars(&[("PATH", "/usr/bin")]));
        assert!(matches!(result, Err(Error::MissingCredential)));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let result = Config::from_vars(vars(&[("GOOGLE_TTS_API_KEY", "")]));
        assert!(matches!(result, Err(Error::MissingCredential)));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("GOOGLE_TTS_API_KEY", "secret"),
            ("GOOGLE_TTS_ENDPOINT", "http://127.0.0.1:8080/v1/text:synthesize"),
            ("GOOGLE_TTS_LANGUAGE_CODE", "en-US"),
            ("GOOGLE_TTS_VOICE_NAME", "en-US-Standard-C"),
            ("GOOGLE_TTS_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint.port(), Some(8080));
        assert_eq!(config.language_code, "en-US");
        assert_eq!(config.voice_name.as_deref(), Some("en-US-Standard-C"));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = Config::from_vars(vars(&[
            ("GOOGLE_TTS_API_KEY", "secret"),
            ("GOOGLE_TTS_ENDPOINT", "not a url"),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = Config::from_vars(vars(&[
            ("GOOGLE_TTS_API_KEY", "secret"),
            ("GOOGLE_TTS_TIMEOUT_MS", "soon"),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Config::from_vars(vars(&[
            ("GOOGLE_TTS_API_KEY", "secret"),
            ("GOOGLE_TTS_TIMEOUT_MS", "0"),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_vars(vars(&[("GOOGLE_TTS_API_KEY", "secret")])).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
