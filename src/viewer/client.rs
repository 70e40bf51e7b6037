use crate::domain::Snapshot;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct LocationClient {
    client: Client,
    url: String,
}

impl LocationClient {
    pub fn new(url: impl Into<String>) -> Self {
        LocationClient {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Option<Snapshot>, ClientError> {
        let response = self.client.get(&self.url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("Store has no snapshot yet");
                Ok(None)
            }
            status if status.is_success() => Ok(Some(response.json::<Snapshot>().await?)),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}
