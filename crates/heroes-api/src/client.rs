// Async HTTP client for a REST hero collection.
//
// Base path: <server>/<collection> (e.g. http://localhost:3000/api/heroes)
// Bodies: JSON, sent with `Content-Type: application/json`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{HeroCreate, HeroResponse, HeroUpdate};

// ── Client ───────────────────────────────────────────────────────────

/// Raw HTTP client for the hero collection.
///
/// Every method maps to exactly one request and returns the decoded
/// payload or an [`Error`]. No logging to the message log and no
/// fallback values happen here; that policy lives in `heroes-core`.
pub struct HeroClient {
    http: reqwest::Client,
    collection_url: Url,
}

impl HeroClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `<server>/<collection>` from a transport config.
    pub fn new(server: &str, collection: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(server, collection, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        server: &str,
        collection: &str,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let collection_url = Self::normalize_collection_url(server, collection)?;
        Ok(Self {
            http,
            collection_url,
        })
    }

    /// Join the collection path onto the server URL, without a trailing slash.
    ///
    /// `http://host:3000/` + `/api/heroes/` -> `http://host:3000/api/heroes`
    fn normalize_collection_url(server: &str, collection: &str) -> Result<Url, Error> {
        let mut url = Url::parse(server)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let base = url.path().trim_end_matches('/').to_owned();
        let collection = collection.trim_matches('/');
        url.set_path(&format!("{base}/{collection}"));
        url.set_query(None);
        Ok(url)
    }

    /// The resolved collection endpoint.
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `<collection>/<id>`
    fn item_url(&self, id: u32) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}/{id}", self.collection_url))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<T>, Error> {
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_optional(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            decode(body)
        } else {
            Err(parse_error(status, resp).await)
        }
    }

    /// Like `handle_response`, but a 2xx with an empty body is `Ok(None)`.
    async fn handle_optional<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            if body.trim().is_empty() {
                Ok(None)
            } else {
                decode(body).map(Some)
            }
        } else {
            Err(parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error(status, resp).await)
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET /<collection>`
    pub async fn list_heroes(&self) -> Result<Vec<HeroResponse>, Error> {
        self.get(self.collection_url.clone()).await
    }

    /// `GET /<collection>/<id>`
    pub async fn get_hero(&self, id: u32) -> Result<HeroResponse, Error> {
        self.get(self.item_url(id)?).await
    }

    /// `GET /<collection>?name=<term>`
    pub async fn search_heroes(&self, term: &str) -> Result<Vec<HeroResponse>, Error> {
        self.get_with_params(self.collection_url.clone(), &[("name", term)])
            .await
    }

    /// `POST /<collection>`
    pub async fn create_hero(&self, body: &HeroCreate) -> Result<HeroResponse, Error> {
        self.post(self.collection_url.clone(), body).await
    }

    /// `PUT /<collection>`
    ///
    /// Returns the echoed hero when the server sends one back.
    pub async fn update_hero(&self, body: &HeroUpdate) -> Result<Option<HeroResponse>, Error> {
        self.put(self.collection_url.clone(), body).await
    }

    /// `DELETE /<collection>/<id>`
    pub async fn delete_hero(&self, id: u32) -> Result<(), Error> {
        self.delete(self.item_url(id)?).await
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn decode<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let url = resp.url().to_string();
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let raw = resp.text().await.unwrap_or_default();

    Error::Api {
        url,
        status: status.as_u16(),
        message: if raw.trim().is_empty() {
            reason.to_owned()
        } else {
            format!("{reason} ({})", raw.trim())
        },
    }
}
