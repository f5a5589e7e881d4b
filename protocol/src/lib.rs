//! Wire types of the jService question/answer API.
//!
//! Only the fields the board needs are modeled; everything else in a response is ignored. Fields the board cannot
//! do without are still optional here so callers can tell a malformed response apart from a transport failure.

use serde::{Deserialize, Serialize};

pub type CategoryId = u64;

pub const DEFAULT_API_BASE: &str = "https://jservice.io";
pub const RANDOM_PATH: &str = "api/random";
pub const CATEGORY_PATH: &str = "api/category";

/// URL returning a list with one random clue, whose `category` is what the board uses.
pub fn random_url(base: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), RANDOM_PATH)
}

pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}/{}?id={}", base.trim_end_matches('/'), CATEGORY_PATH, id)
}

/// Element of the `api/random` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomClue {
    #[serde(default)]
    pub id: Option<u64>,
    pub category: CategoryRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of the `api/category?id=` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<Text>,
}

/// Text field that the service sometimes sends as a bare number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    String(String),
    Number(serde_json::Number),
}

impl Text {
    pub fn into_string(self) -> String {
        match self {
            Self::String(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_tolerate_trailing_slash() {
        assert_eq!(random_url("https://jservice.io/"), "https://jservice.io/api/random");
        assert_eq!(
            category_url("https://jservice.io", 42),
            "https://jservice.io/api/category?id=42"
        );
    }

    #[test]
    fn random_response_keeps_category_id() {
        let body = r#"[{
            "id": 87621,
            "answer": "Gdansk",
            "question": "Formerly Danzig",
            "value": 400,
            "category_id": 11496,
            "category": {"id": 11496, "title": "cities", "clues_count": 5}
        }]"#;

        let clues: Vec<RandomClue> = serde_json::from_str(body).unwrap();

        assert_eq!(clues.len(), 1);
        assert_eq!(clues[0].category.id, 11496);
        assert_eq!(clues[0].category.title.as_deref(), Some("cities"));
    }

    #[test]
    fn category_response_accepts_numeric_answers_and_missing_fields() {
        let body = r#"{
            "id": 3,
            "title": "math",
            "clues_count": 3,
            "clues": [
                {"id": 1, "question": "2+2", "answer": 4, "value": 100},
                {"id": 2, "question": "Half of 1", "answer": "0.5"},
                {"id": 3, "value": 300}
            ]
        }"#;

        let category: CategoryResponse = serde_json::from_str(body).unwrap();

        assert_eq!(category.title.as_deref(), Some("math"));
        assert_eq!(category.clues.len(), 3);
        assert_eq!(
            category.clues[0].answer.clone().map(Text::into_string).as_deref(),
            Some("4")
        );
        assert_eq!(
            category.clues[1].answer.clone().map(Text::into_string).as_deref(),
            Some("0.5")
        );
        assert_eq!(category.clues[2].question, None);
        assert_eq!(category.clues[2].answer, None);
    }

    #[test]
    fn category_without_clues_decodes_empty() {
        let category: CategoryResponse = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(category.title, None);
        assert!(category.clues.is_empty());
    }
}
