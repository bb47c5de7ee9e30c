use crate::{
    adapter::{
        QueryResult,
        SpotifyAdapter,
    },
    error::ProviderError,
    http::{
        endpoint,
        fetch_json,
    },
    provider::SpotifyCredentials,
    window::DateWindow,
};
use futures::FutureExt as _;
use reqwest::{
    header,
    Client,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use url::Url;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Spotify podcasters API client.
///
/// The `sp_dc` / `sp_key` session cookies are exchanged for a bearer token on
/// first use; the token is reused for the lifetime of the connector.
pub struct SpotifyConnector {
    client: Client,
    base_url: Url,
    auth_url: Url,
    credentials: SpotifyCredentials,
    token: OnceCell<String>,
}

impl SpotifyConnector {
    pub fn new(client: Client, base_url: Url, auth_url: Url, credentials: SpotifyCredentials) -> Self {
        Self {
            client,
            base_url,
            auth_url,
            credentials,
            token: OnceCell::new(),
        }
    }

    async fn token(&self) -> Result<&str, ProviderError> {
        self.token
            .get_or_try_init(|| self.authenticate())
            .await
            .map(String::as_str)
    }

    async fn authenticate(&self) -> Result<String, ProviderError> {
        debug!(client_id = %self.credentials.client_id, "Requesting Spotify access token");
        let mut url = self.auth_url.clone();
        url.query_pairs_mut().append_pair("client_id", &self.credentials.client_id);

        let cookie = format!("sp_dc={}; sp_key={}", self.credentials.sp_dc, self.credentials.sp_key);
        let response = fetch_json(self.client.get(url).header(header::COOKIE, cookie)).await?;

        response
            .get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Authentication("Spotify did not return an access token".to_string()))
    }

    async fn get(&self, resource: &str, window: Option<DateWindow>) -> Result<Value, ProviderError> {
        let mut url = endpoint(&self.base_url, &["shows", &self.credentials.podcast_id, resource])?;
        if let Some(window) = window {
            url.query_pairs_mut()
                .append_pair("start", &window.start.format(DATE_FORMAT).to_string())
                .append_pair("end", &window.end.format(DATE_FORMAT).to_string());
        }

        let token = self.token().await?;
        debug!(%url, "Querying Spotify");
        fetch_json(self.client.get(url).bearer_auth(token)).await
    }
}

impl SpotifyAdapter for SpotifyConnector {
    fn metadata(&self) -> QueryResult<'_> {
        self.get("metadata", None).boxed()
    }

    fn listeners(&self, window: DateWindow) -> QueryResult<'_> {
        self.get("listeners", Some(window)).boxed()
    }

    fn aggregate(&self, window: DateWindow) -> QueryResult<'_> {
        self.get("aggregate", Some(window)).boxed()
    }
}
