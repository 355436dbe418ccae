//! The bulk product source: a JSON object mapping image file names to raw
//! product titles, used to build the catalog when no edits are persisted.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;

use crate::error::BulkSourceError;

/// Where the default title mapping comes from.
#[derive(Debug, Clone)]
pub enum BulkSource {
    File(PathBuf),
    Http(HttpBulkSource),
}

impl BulkSource {
    /// Picks an HTTP source for `http://`/`https://` locations and a file
    /// source for anything else.
    ///
    /// # Errors
    ///
    /// Returns [`BulkSourceError::Http`] if the HTTP client cannot be built.
    pub fn from_location(
        location: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, BulkSourceError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(HttpBulkSource::new(
                location,
                timeout_secs,
                user_agent,
            )?))
        } else {
            Ok(Self::File(PathBuf::from(location)))
        }
    }

    /// Reads and parses the title mapping.
    ///
    /// # Errors
    ///
    /// - [`BulkSourceError::Io`]: the file cannot be read.
    /// - [`BulkSourceError::Http`] / [`BulkSourceError::UnexpectedStatus`]:
    ///   the HTTP request failed or returned a non-2xx status.
    /// - [`BulkSourceError::Deserialize`]: the body is not a JSON object.
    pub async fn load_titles(&self) -> Result<BTreeMap<String, String>, BulkSourceError> {
        match self {
            Self::File(path) => {
                let body = tokio::fs::read_to_string(path).await.map_err(|e| {
                    BulkSourceError::Io {
                        path: path.display().to_string(),
                        source: e,
                    }
                })?;
                parse_titles(&body, &path.display().to_string())
            }
            Self::Http(source) => source.fetch_titles().await,
        }
    }
}

/// Fetches the title mapping over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBulkSource {
    client: Client,
    url: String,
}

impl HttpBulkSource {
    /// # Errors
    ///
    /// Returns [`BulkSourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, BulkSourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// # Errors
    ///
    /// See [`BulkSource::load_titles`].
    pub async fn fetch_titles(&self) -> Result<BTreeMap<String, String>, BulkSourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BulkSourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        parse_titles(&body, &self.url)
    }
}

/// Parses a `{ "<file name>": "<title>" }` object. Numeric and boolean
/// titles are stringified; nested values and nulls are skipped.
fn parse_titles(body: &str, context: &str) -> Result<BTreeMap<String, String>, BulkSourceError> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| BulkSourceError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;

    let titles = raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(title) => Some((key, title)),
            serde_json::Value::Number(n) => Some((key, n.to_string())),
            serde_json::Value::Bool(b) => Some((key, b.to_string())),
            other => {
                tracing::debug!(%key, kind = ?other, "skipping non-text bulk title");
                None
            }
        })
        .collect();

    Ok(titles)
}
