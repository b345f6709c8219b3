use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, header};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Characters escaped when an identifier is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Networking errors for upstream API communication
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("dlbadge/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Shared HTTP client for source queries
#[derive(Debug, Clone)]
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        trace!(
            timeout_seconds = config.timeout_seconds,
            user_agent = %config.user_agent,
            "Initializing networking manager"
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a URL and return the body of a 2xx response
    ///
    /// Any other status is reported as [`NetworkingError::HttpStatus`].
    pub async fn get(&self, url: &str, accept: Option<&str>) -> Result<Vec<u8>, NetworkingError> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }

        debug!(url, "GET");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkingError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        trace!(url, status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }

    /// GET a URL and decode the 2xx body as text, replacing invalid UTF-8
    pub async fn get_text(&self, url: &str) -> Result<String, NetworkingError> {
        let body = self.get(url, None).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub fn config(&self) -> &NetworkingConfig {
        &self.config
    }
}

/// Percent-encode an identifier for use as a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
