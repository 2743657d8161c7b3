//! Wire format of the AnkiConnect protocol.

use serde::{Deserialize, Serialize};

/// Protocol version sent with every request.
pub(crate) const API_VERSION: u8 = 6;

/// The request body expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct AnkiRequest<'a, T> {
    /// The action to perform.
    pub action: &'a str,
    /// The API version.
    pub version: u8,
    /// Parameters, omitted entirely for actions that take none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<'a, T> AnkiRequest<'a, T> {
    pub fn new(action: &'a str, params: T) -> Self {
        Self {
            action,
            version: API_VERSION,
            params: Some(params),
        }
    }

    pub fn without_params(action: &'a str) -> AnkiRequest<'a, ()> {
        AnkiRequest {
            action,
            version: API_VERSION,
            params: None,
        }
    }
}

/// The response envelope returned by AnkiConnect.
///
/// Both fields are optional on the wire; [`AnkiResponse::into_result`]
/// decides which combinations count as success.
#[derive(Debug, Deserialize)]
pub(crate) struct AnkiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> AnkiResponse<T> {
    /// An `error` marker always wins, even next to a result.
    pub fn into_result(self) -> crate::Result<T> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(crate::Error::AnkiConnect(err)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(crate::Error::EmptyResponse),
        }
    }
}
