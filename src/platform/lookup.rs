//! HTTP lookups: Wikipedia summaries and DuckDuckGo instant answers

use std::time::Duration;

use serde::Deserialize;

use super::{Encyclopedia, InstantAnswer, InstantAnswers};
use crate::error::ServiceError;
use crate::output::shorten;

const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org";
const DUCKDUCKGO_URL: &str = "https://api.duckduckgo.com/";
const USER_AGENT: &str = concat!("aura/", env!("CARGO_PKG_VERSION"));

fn agent(timeout: Option<Duration>) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(timeout)
        .build()
        .into()
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    extract: String,
}

pub(crate) struct Wikipedia {
    agent: ureq::Agent,
    base: String,
}

impl Wikipedia {
    pub(crate) fn new() -> Self {
        Self {
            agent: agent(None),
            base: WIKIPEDIA_BASE.to_string(),
        }
    }

    /// Best matching article title for a free-text topic
    fn search_title(&self, topic: &str) -> Result<String, ServiceError> {
        let url = format!("{}/w/api.php", self.base);
        let results: serde_json::Value = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query("action", "opensearch")
            .query("search", topic)
            .query("limit", "1")
            .query("format", "json")
            .call()?
            .into_body()
            .read_json()?;
        results
            .get(1)
            .and_then(|titles| titles.as_array())
            .and_then(|titles| titles.first())
            .and_then(|title| title.as_str())
            .map(str::to_string)
            .ok_or_else(|| ServiceError::NotFound(topic.to_string()))
    }
}

impl Encyclopedia for Wikipedia {
    fn summary(&self, topic: &str, max_sentences: usize) -> Result<String, ServiceError> {
        let title = self.search_title(topic)?;
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.base,
            urlencoding::encode(&title.replace(' ', "_"))
        );
        let page: PageSummary = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .call()?
            .into_body()
            .read_json()?;
        if page.kind == "disambiguation" {
            return Err(ServiceError::Ambiguous(topic.to_string()));
        }
        let text = shorten(&page.extract, max_sentences);
        if text.is_empty() {
            return Err(ServiceError::NotFound(topic.to_string()));
        }
        Ok(text)
    }
}

#[derive(Debug, Default, Deserialize)]
struct DdgResponse {
    #[serde(rename = "Abstract", default)]
    abstract_text: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<DdgTopic>,
}

/// Related topics are either plain entries or named groups; only plain
/// entries carry `Text`
#[derive(Debug, Default, Deserialize)]
struct DdgTopic {
    #[serde(rename = "Text", default)]
    text: Option<String>,
}

impl From<DdgResponse> for InstantAnswer {
    fn from(response: DdgResponse) -> Self {
        InstantAnswer {
            abstract_text: response.abstract_text,
            related: response
                .related_topics
                .into_iter()
                .filter_map(|topic| topic.text)
                .collect(),
        }
    }
}

pub(crate) struct DuckDuckGo {
    agent: ureq::Agent,
}

impl DuckDuckGo {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self {
            agent: agent(Some(timeout)),
        }
    }
}

impl InstantAnswers for DuckDuckGo {
    fn lookup(&self, query: &str) -> Result<InstantAnswer, ServiceError> {
        let response: DdgResponse = self
            .agent
            .get(DUCKDUCKGO_URL)
            .header("User-Agent", USER_AGENT)
            .query("q", query)
            .query("format", "json")
            .query("no_redirect", "1")
            .query("no_html", "1")
            .call()?
            .into_body()
            .read_json()?;
        Ok(response.into())
    }
}
