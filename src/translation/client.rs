use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};

/// JSON body sent to the DeepLX endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// JSON body returned by the DeepLX endpoint.
///
/// Only `code` is required; a successful response carries the translation in `data`.
/// Missing and `null` fields decode to their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Code the endpoint reports inside the payload on success.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Failed to connect to DeepLX API: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("DeepLX API returned non-200 status: {status}, body: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode DeepLX API response: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation failed with code {code}: {message}")]
    Api { code: i64, message: String },
}

pub struct TranslationClient {
    client: Client,
    url: String,
}

impl TranslationClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Sends one translation request and returns the translated text.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let request = TranslationRequest {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;

        if status != StatusCode::OK {
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }

    fn transport_error(&self, source: reqwest::Error) -> TranslateError {
        TranslateError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

/// Decodes a response body and extracts the translation.
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let response: TranslationResponse =
        serde_json::from_str(body).map_err(|source| TranslateError::Decode {
            body: body.to_string(),
            source,
        })?;

    if response.code != SUCCESS_CODE {
        return Err(TranslateError::Api {
            code: response.code,
            message: response.message,
        });
    }

    Ok(response.data)
}
