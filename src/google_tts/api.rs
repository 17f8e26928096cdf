use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};
use serde::{de, Deserialize, Serialize};

#[derive(Debug)]
pub struct DecodedBinary {
    pub bin: Vec<u8>,
}

impl<'de> Deserialize<'de> for DecodedBinary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bin = base64_engine
            .decode(s)
            .map_err(|e| de::Error::custom(format!("invalid base64 audio content: {e}")))?;

        Ok(DecodedBinary { bin })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// 16-bit signed little-endian PCM, delivered with a WAV header.
    Linear16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SsmlVoiceGender {
    Neutral,
}

structstruck::strike! {
    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct SynthesizeRequest {
        pub input:
            #[derive(Serialize, Debug)]
            pub struct SynthesisInput {
                pub text: String,
            },
        pub voice:
            #[derive(Serialize, Debug)]
            #[serde(rename_all = "camelCase")]
            pub struct VoiceSelectionParams {
                pub language_code: String,
                #[serde(skip_serializing_if = "Option::is_none")]
                pub name: Option<String>,
                pub ssml_gender: SsmlVoiceGender,
            },
        pub audio_config:
            #[derive(Serialize, Debug)]
            #[serde(rename_all = "camelCase")]
            pub struct AudioConfig {
                pub audio_encoding: AudioEncoding,
                pub sample_rate_hertz: u32,
            },
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub audio_content: DecodedBinary,
}
