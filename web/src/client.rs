use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core as trivia;

pub(crate) const DEFAULT_API_URL: &str = "http://jservice.io/api";

/// `TriviaApi` over the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaApi {
    base_url: String,
}

impl HttpTriviaApi {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: [(&str, String); 1]) -> trivia::Result<T> {
        use gloo::net::Error::*;

        let url = self.endpoint(path);
        log::debug!("GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| trivia::Error::Network(err.to_string()))?;

        if !response.ok() {
            return Err(trivia::Error::Network(format!(
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }

        response.json::<T>().await.map_err(|err| match err {
            SerdeError(err) => trivia::Error::Decode(err.to_string()),
            err => trivia::Error::Network(err.to_string()),
        })
    }
}

impl trivia::TriviaApi for HttpTriviaApi {
    async fn category_ids(&self, count: usize) -> trivia::Result<Vec<trivia::CategorySummary>> {
        self.get_json("categories", [("count", count.to_string())]).await
    }

    async fn category(&self, id: trivia::CategoryId) -> trivia::Result<trivia::CategoryDetail> {
        self.get_json("category", [("id", id.to_string())]).await
    }
}
