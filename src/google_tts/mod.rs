use std::path::Path;

use reqwest::StatusCode;
use tap::Tap;

use crate::config::Config;
use crate::error::{Error, ProtocolError};
use crate::output;

pub mod api;

#[derive(Debug)]
pub struct GoogleTts<'a> {
    client: reqwest::Client,
    config: &'a Config,
}

impl<'a> GoogleTts<'a> {
    pub fn new(config: &'a Config) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::transport)?;

        Ok(GoogleTts { client, config })
    }

    fn request(&self, text: &str) -> api::SynthesizeRequest {
        api::SynthesizeRequest {
            input: api::SynthesisInput {
                text: text.to_string(),
            },
            voice: api::VoiceSelectionParams {
                language_code: self.config.language_code.clone(),
                name: self.config.voice_name.clone(),
                ssml_gender: self.config.ssml_gender,
            },
            audio_config: api::AudioConfig {
                audio_encoding: self.config.audio_encoding,
                sample_rate_hertz: self.config.sample_rate_hertz,
            },
        }
    }

    /// Asks the API for `text` and returns the decoded audio bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, Error> {
        let url = self.config.endpoint.clone().tap_mut(|u| {
            u.query_pairs_mut().append_pair("key", &self.config.api_key);
        });

        tracing::debug!(
            endpoint = self.config.endpoint.as_str(),
            language_code = %self.config.language_code,
            chars = text.chars().count(),
            "requesting synthesis"
        );

        let resp = self
            .client
            .post(url)
            .json(&self.request(text))
            .send()
            .await
            .map_err(Error::transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ProtocolError::Status(status).into());
        }

        let body = resp.bytes().await.map_err(Error::transport)?;

        let resp: api::SynthesizeResponse =
            serde_json::from_slice(&body).map_err(ProtocolError::Body)?;

        tracing::debug!(bytes = resp.audio_content.bin.len(), "received audio");

        Ok(resp.audio_content.bin)
    }

    /// Synthesizes `text` and atomically writes the audio to `path`.
    ///
    /// `path` is left untouched unless the whole response was decoded.
    pub async fn synthesize_to_file(&self, text: &str, path: &Path) -> Result<(), Error> {
        let audio = self.synthesize(text).await?;
        output::write_atomic(path, &audio)?;

        tracing::info!(path = %path.display(), bytes = audio.len(), "wrote audio");

        Ok(())
    }
}
