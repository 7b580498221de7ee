use thiserror::Error;

/// Failure of a single weather request, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The connection could not be established or the transport failed.
    #[error("Weather API did not respond: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body could not be read to completion.
    #[error("Weather API response empty: {0}")]
    EmptyResponse(#[source] reqwest::Error),

    /// The body was not valid JSON or did not have the expected shape.
    #[error("Error parsing response: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    EmptyResponse,
    Parse,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::Network(_) => ErrorKind::Network,
            WeatherError::EmptyResponse(_) => ErrorKind::EmptyResponse,
            WeatherError::Parse(_) => ErrorKind::Parse,
        }
    }
}
