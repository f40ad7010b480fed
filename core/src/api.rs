//! Wire types of the remote trivia service and the seam the loader fetches through.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// One entry of `GET /categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Body of `GET /category?id=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
}

impl From<ClueDetail> for Clue {
    fn from(detail: ClueDetail) -> Self {
        Clue::new(detail.question, detail.answer, detail.value)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only access to a trivia service.
///
/// Implementations report transport failures as [`Error::Network`] and
/// malformed bodies as [`Error::Decode`].
#[allow(async_fn_in_trait)]
pub trait TriviaApi {
    async fn category_ids(&self, count: usize) -> Result<Vec<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_detail_ignores_unknown_fields_and_nulls() {
        let body = r#"{
            "id": 11531,
            "title": "mixed bag",
            "clues_count": 5,
            "clues": [
                {"id": 1, "answer": "Shakespeare", "question": "Hamlet Author", "value": 200, "airdate": "1985-02-08T12:00:00.000Z"},
                {"id": 2, "answer": "Plath", "question": null, "value": null}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.title, "mixed bag");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].value, Some(200));
        assert_eq!(detail.clues[1].question, "");
        assert_eq!(detail.clues[1].value, None);
    }

    #[test]
    fn category_list_only_needs_ids() {
        let body = r#"[{"id": 1, "title": "a", "clues_count": 5}, {"id": 2, "title": "b"}]"#;

        let summaries: Vec<CategorySummary> = serde_json::from_str(body).unwrap();

        assert_eq!(
            summaries,
            [CategorySummary { id: 1 }, CategorySummary { id: 2 }]
        );
    }

    #[test]
    fn clue_detail_becomes_hidden_clue() {
        let clue = Clue::from(ClueDetail {
            question: "2+2".into(),
            answer: "4".into(),
            value: Some(100),
        });

        assert_eq!(clue.reveal_state(), RevealState::Hidden);
        assert_eq!(clue.question(), "2+2");
        assert_eq!(clue.answer(), "4");
        assert_eq!(clue.value(), Some(100));
    }
}
