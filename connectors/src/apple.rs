use crate::{
    adapter::{
        AppleAdapter,
        QueryResult,
    },
    error::ProviderError,
    http::{
        endpoint,
        fetch_json,
    },
    provider::AppleCredentials,
};
use futures::FutureExt as _;
use reqwest::{
    header,
    Client,
};
use serde_json::Value;
use url::Url;

/// Apple Podcasts Connect analytics client, authenticated by the
/// `myacinfo` / `itctx` session cookies.
pub struct AppleConnector {
    client: Client,
    base_url: Url,
    credentials: AppleCredentials,
}

impl AppleConnector {
    pub fn new(client: Client, base_url: Url, credentials: AppleCredentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    async fn get(&self, resource: &str) -> Result<Value, ProviderError> {
        let url = endpoint(&self.base_url, &["shows", &self.credentials.podcast_id, resource])?;
        let cookie = format!(
            "myacinfo={}; itctx={}",
            self.credentials.myacinfo, self.credentials.itctx
        );

        debug!(%url, "Querying Apple");
        fetch_json(
            self.client
                .get(url)
                .header(header::COOKIE, cookie)
                .header(header::ACCEPT, "application/json"),
        )
        .await
    }
}

impl AppleAdapter for AppleConnector {
    fn overview(&self) -> QueryResult<'_> {
        self.get("overview").boxed()
    }

    fn trends(&self) -> QueryResult<'_> {
        self.get("trends").boxed()
    }
}
