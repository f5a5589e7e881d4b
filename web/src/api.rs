use gloo::net::http::Request;
use jeopardy_core::{self as game, CategoryData, CategoryId, ClueText, GameError};
use jeopardy_protocol as protocol;
use serde::de::DeserializeOwned;

/// [`game::ClueSource`] backed by the jService HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JServiceClient {
    base_url: String,
}

impl JServiceClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> game::Result<T> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| GameError::FetchFailure(format!("{url}: {err}")))?;

        if !response.ok() {
            return Err(GameError::FetchFailure(format!(
                "{url}: {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| GameError::FetchFailure(format!("{url}: {err}")))?;
        parse_body(url, &body)
    }
}

impl game::ClueSource for JServiceClient {
    async fn random_category_id(&self) -> game::Result<CategoryId> {
        let clues = self.get_json(&protocol::random_url(&self.base_url)).await?;
        pick_category_id(clues)
    }

    async fn category(&self, id: CategoryId) -> game::Result<CategoryData> {
        let response: protocol::CategoryResponse = self
            .get_json(&protocol::category_url(&self.base_url, id))
            .await?;
        if response.id != id {
            log::warn!("asked for category {} but got {}", id, response.id);
        }
        Ok(into_category_data(response))
    }
}

fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> game::Result<T> {
    serde_json::from_str(body).map_err(|err| GameError::MalformedResponse(format!("{url}: {err}")))
}

/// Uses the first random clue's category; the endpoint is expected to return exactly one.
fn pick_category_id(clues: Vec<protocol::RandomClue>) -> game::Result<CategoryId> {
    if clues.len() > 1 {
        log::warn!("random endpoint returned {} clues, using the first", clues.len());
    }
    clues
        .into_iter()
        .next()
        .map(|clue| clue.category.id)
        .ok_or_else(|| GameError::MalformedResponse("random endpoint returned no clues".to_string()))
}

/// Missing text becomes empty here and is rejected when the board is built, but only for clues that make it onto
/// the board.
fn into_category_data(response: protocol::CategoryResponse) -> CategoryData {
    CategoryData {
        id: response.id,
        title: response.title.unwrap_or_default(),
        clues: response
            .clues
            .into_iter()
            .map(|clue| {
                ClueText::new(
                    clue.question.unwrap_or_default(),
                    clue.answer
                        .map(protocol::Text::into_string)
                        .unwrap_or_default(),
                )
            })
            .collect(),
    }
}
