use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Asks the service for `config.categories` random category ids.
pub async fn fetch_category_ids<A: TriviaApi>(api: &A, config: &GameConfig) -> Result<Vec<CategoryId>> {
    let summaries = api.category_ids(config.categories).await.map_err(|err| {
        log::error!("Error fetching category ids: {}", err);
        err
    })?;

    if summaries.len() != config.categories {
        let err = Error::CategoryCount {
            expected: config.categories,
            actual: summaries.len(),
        };
        log::error!("Error fetching category ids: {}", err);
        return Err(err);
    }

    Ok(summaries.into_iter().map(|summary| summary.id).collect())
}

/// Fetches one category, keeping its first `config.clues_per_category` clues, all hidden.
pub async fn fetch_category<A: TriviaApi>(api: &A, id: CategoryId, config: &GameConfig) -> Result<Category> {
    let detail = api.category(id).await.map_err(|err| {
        log::error!("Error fetching category {}: {}", id, err);
        err
    })?;

    let wanted = config.clues_per_category;
    if detail.clues.len() < wanted {
        let err = Error::ClueCount {
            title: detail.title,
            expected: wanted,
            actual: detail.clues.len(),
        };
        log::error!("Error fetching category {}: {}", id, err);
        return Err(err);
    }

    let clues = detail.clues.into_iter().take(wanted).map(Clue::from).collect();
    log::debug!("category {} ({:?}) loaded", id, detail.title);
    Ok(Category::new(detail.title, clues))
}

/// Loads a fresh board: the id request first, then every category in one joined batch.
///
/// The batch is all-or-nothing; the first failing category fails the whole load.
pub async fn load_board<A: TriviaApi>(api: &A, config: &GameConfig) -> Result<Board> {
    let ids = fetch_category_ids(api, config).await?;
    log::debug!("category ids: {:?}, {} clues to fetch", ids, config.total_clues());

    let categories = try_join_all(ids.iter().map(|&id| fetch_category(api, id, config))).await?;

    Board::new(categories, *config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::cell::Cell;
    use futures::executor::block_on;

    struct FakeApi {
        ids: Result<Vec<CategoryId>>,
        categories: BTreeMap<CategoryId, Result<CategoryDetail>>,
        category_requests: Cell<usize>,
    }

    impl FakeApi {
        fn new(ids: Vec<CategoryId>) -> Self {
            let categories = ids.iter().map(|&id| (id, Ok(detail(&format!("cat {id}"), 5)))).collect();
            Self {
                ids: Ok(ids),
                categories,
                category_requests: Cell::new(0),
            }
        }
    }

    impl TriviaApi for FakeApi {
        async fn category_ids(&self, count: usize) -> Result<Vec<CategorySummary>> {
            let ids = self.ids.clone()?;
            Ok(ids
                .into_iter()
                .take(count)
                .map(|id| CategorySummary { id })
                .collect())
        }

        async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
            self.category_requests.set(self.category_requests.get() + 1);
            self.categories
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Err(Error::Network(format!("404 for {id}"))))
        }
    }

    fn detail(title: &str, clues: usize) -> CategoryDetail {
        CategoryDetail {
            title: title.to_string(),
            clues: (0..clues)
                .map(|i| ClueDetail {
                    question: format!("{title} q{i}"),
                    answer: format!("{title} a{i}"),
                    value: Some(200 * (i as u32 + 1)),
                })
                .collect(),
        }
    }

    #[test]
    fn load_board_builds_full_grid_in_id_order() {
        let api = FakeApi::new(vec![10, 20, 30, 40, 50, 60]);

        let board = block_on(load_board(&api, &GameConfig::default())).unwrap();

        assert_eq!(board.categories().len(), NUM_CATEGORIES);
        assert!(
            board
                .categories()
                .iter()
                .all(|category| category.clues().len() == NUM_QUESTIONS_PER_CAT)
        );
        let titles: Vec<&str> = board.titles().collect();
        assert_eq!(titles, ["cat 10", "cat 20", "cat 30", "cat 40", "cat 50", "cat 60"]);
        assert_eq!(board.clue_at((2, 1)).unwrap().question(), "cat 30 q1");
        assert!(
            board
                .rows()
                .flatten()
                .all(|(_, clue)| clue.reveal_state() == RevealState::Hidden)
        );
    }

    #[test]
    fn id_failure_is_returned_without_fetching_categories() {
        let mut api = FakeApi::new(vec![1, 2, 3, 4, 5, 6]);
        api.ids = Err(Error::Network("connection refused".into()));

        let result = block_on(load_board(&api, &GameConfig::default()));

        assert_eq!(result, Err(Error::Network("connection refused".into())));
        assert_eq!(api.category_requests.get(), 0);
    }

    #[test]
    fn short_id_list_is_rejected() {
        let api = FakeApi::new(vec![1, 2, 3]);

        let result = block_on(fetch_category_ids(&api, &GameConfig::default()));

        assert_eq!(
            result,
            Err(Error::CategoryCount {
                expected: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn one_failing_category_fails_the_whole_batch() {
        let mut api = FakeApi::new(vec![1, 2, 3, 4, 5, 6]);
        api.categories
            .insert(4, Err(Error::Decode("expected `title`".into())));

        let result = block_on(load_board(&api, &GameConfig::default()));

        assert_eq!(result, Err(Error::Decode("expected `title`".into())));
    }

    #[test]
    fn category_keeps_only_the_configured_number_of_clues() {
        let api = FakeApi::new(vec![7]);

        let category = block_on(fetch_category(&api, 7, &GameConfig::new(1, 3))).unwrap();

        assert_eq!(category.title(), "cat 7");
        let questions: Vec<&str> = category.clues().iter().map(Clue::question).collect();
        assert_eq!(questions, ["cat 7 q0", "cat 7 q1", "cat 7 q2"]);
    }

    #[test]
    fn category_with_too_few_clues_is_an_error() {
        let mut api = FakeApi::new(vec![7]);
        api.categories.insert(7, Ok(detail("sparse", 1)));

        let result = block_on(fetch_category(&api, 7, &GameConfig::default()));

        assert_eq!(
            result,
            Err(Error::ClueCount {
                title: String::from("sparse"),
                expected: 2,
                actual: 1
            })
        );
    }
}
