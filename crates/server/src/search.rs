//! Outbound client for the article search service.
//!
//! The service speaks GraphQL over plain JSON POST. We ask for the few
//! articles most like the query text; the schema mirrored here is the
//! subset this relay consumes and re-serializes, including the `ismatch`
//! flag added to each article node on the way out.

use matcher::MatchCandidate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// More-like-this search over the article corpus, best four hits first.
const ARTICLE_SEARCH_QUERY: &str = r#"
query($text: String) {
  ListArticles(
    filter: { moreLikeThis: { like: $text } }
    orderBy: [{ _score: DESC }]
    first: 4
  ) {
    edges {
      node {
        id
        text
        hyperlinks {
          url
        }
        articleReplies {
          reply {
            id
            text
            type
            reference
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
struct SearchVariables<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'static str,
    variables: SearchVariables<'a>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyperlink {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleReply {
    pub reply: Reply,
}

/// One article node. `is_match` is absent in the service's response and is
/// filled in by this relay before re-serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub hyperlinks: Vec<Hyperlink>,
    #[serde(rename = "articleReplies", default)]
    pub article_replies: Vec<ArticleReply>,
    #[serde(rename = "ismatch", default)]
    pub is_match: bool,
}

impl Article {
    /// View this article as a match candidate for the decision engine.
    pub fn to_candidate(&self) -> MatchCandidate {
        MatchCandidate::new(
            self.text.clone(),
            self.hyperlinks.iter().map(|h| h.url.clone()).collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleEdge {
    pub node: Article,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleConnection {
    #[serde(default)]
    pub edges: Vec<ArticleEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(rename = "ListArticles")]
    pub list_articles: ArticleConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}

/// Thin client around the search service endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: String, timeout: std::time::Duration) -> ServerResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ServerError::Config(format!("http client: {err}")))?;
        Ok(Self { http, endpoint })
    }

    /// POST the query text to the search service and decode its response.
    pub async fn search(&self, text: &str) -> ServerResult<SearchResponse> {
        let request = SearchRequest {
            query: ARTICLE_SEARCH_QUERY,
            variables: SearchVariables { text },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
