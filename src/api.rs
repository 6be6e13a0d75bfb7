//! Blocking client for the civic-data backend.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::model::{County, CountyDetail, LocationSearch, Roster};

/// Environment variable consulted for the API base URL.
pub const API_URL_ENV: &str = "CIVICMAP_API_URL";

pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Build a client for the backend rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() { bail!("[api] base URL is empty") }

        let client = Client::builder()
            .user_agent(concat!("civicmap/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("[api] build HTTP client")?;

        Ok(Self { base_url: base_url.to_string(), client })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send a request and decode its JSON body.
    fn fetch<T: DeserializeOwned>(&self, label: &str, request: RequestBuilder) -> Result<T> {
        log::info!("[api] {label}");
        let body = request.send()
            .with_context(|| format!("[api] {label}"))?
            .error_for_status()
            .with_context(|| format!("[api] {label} returned error status"))?
            .text()
            .with_context(|| format!("[api] {label}: read body"))?;

        serde_json::from_str(&body)
            .with_context(|| format!("[api] {label}: unexpected response shape"))
    }

    /// `GET /maps/counties`
    pub fn counties(&self) -> Result<Vec<County>> {
        let url = self.url("maps/counties");
        self.fetch(&format!("GET {url}"), self.client.get(&url))
    }

    /// `GET /maps/counties/{id}`
    pub fn county(&self, id: u64) -> Result<CountyDetail> {
        let url = self.url(&format!("maps/counties/{id}"));
        self.fetch(&format!("GET {url}"), self.client.get(&url))
    }

    /// `POST /location_search` with `{"place": ...}`
    pub fn search(&self, place: &str) -> Result<LocationSearch> {
        let place = place.trim();
        if place.is_empty() { bail!("[api] search query is empty") }

        let url = self.url("location_search");
        let body = serde_json::json!({ "place": place }).to_string();
        let request = self.client.post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.fetch(&format!("POST {url}"), request)
    }

    /// `GET /presidents`
    pub fn presidents(&self) -> Result<Roster> {
        let url = self.url("presidents");
        self.fetch(&format!("GET {url}"), self.client.get(&url))
    }
}
