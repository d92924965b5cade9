use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{ApiConfig, SearchSpecConfig};
use crate::logic::query::{build_search_query, QueryPlan, SearchQuerySpec};
use crate::services::search::SearchBackend;

/// One search hit, shaped by the configured result fragment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub href: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Vec<SearchResultItem>,
}

/// Client for a Sanity-compatible document query endpoint
///
/// Executes query plans against `GET {base}/{version}/data/query/{dataset}`.
/// Parameters are bound as `$name=<json literal>` pairs on the query string,
/// so the user's term never appears inside the query text itself.
pub struct ContentClient {
    api: ApiConfig,
    spec: SearchSpecConfig,
    client: Client,
}

impl ContentClient {
    pub fn new(api: ApiConfig, spec: SearchSpecConfig) -> Self {
        Self {
            api,
            spec,
            client: Client::new(),
        }
    }

    pub async fn run_query(&self, plan: &QueryPlan) -> Result<Vec<SearchResultItem>> {
        let url = format!(
            "{}/{}/data/query/{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.api_version,
            self.api.dataset
        );

        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), plan.query.clone())];
        for (name, value) in &plan.params {
            let literal = serde_json::to_string(value)
                .with_context(|| format!("failed to encode query parameter ${}", name))?;
            pairs.push((format!("${}", name), literal));
        }

        let mut request = self.client.get(&url).query(&pairs);
        if let Some(token) = &self.api.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .context("content API request failed")?
            .error_for_status()
            .context("content API returned an error status")?;

        let body: QueryResponse = response
            .json()
            .await
            .context("content API returned an unexpected body")?;

        Ok(body.result)
    }
}

#[async_trait]
impl SearchBackend for ContentClient {
    async fn search(&self, term: &str) -> Result<Vec<SearchResultItem>> {
        let plan = build_search_query(&SearchQuerySpec {
            document_type: self.spec.document_type.clone(),
            searchable_fields: self.spec.searchable_fields.clone(),
            search_term: term.to_string(),
            result_fragment: self.spec.result_fragment.clone(),
        });

        self.run_query(&plan).await
    }
}
