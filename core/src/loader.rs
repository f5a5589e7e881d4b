use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Where categories and their clues come from.
///
/// Implementations only talk to the remote service; turning the results into a playable board is left to
/// [`load_board`].
#[allow(async_fn_in_trait)]
pub trait ClueSource {
    /// Picks one category at random and returns its id.
    async fn random_category_id(&self) -> Result<CategoryId>;

    /// Fetches the title and clues of the category `id`.
    async fn category(&self, id: CategoryId) -> Result<CategoryData>;
}

/// Loads a complete board of `config.width()` random categories.
///
/// Both the id lookups and the category fetches run as one ordered batch each: results keep the order they were
/// requested in and the first error aborts the whole load, so a partially filled board is never produced.
pub async fn load_board<S: ClueSource>(source: &S, config: BoardConfig) -> Result<Board> {
    let width = usize::from(config.width());
    log::debug!("loading {} categories", width);

    let ids = try_join_all((0..width).map(|_| source.random_category_id())).await?;

    let distinct: BTreeSet<CategoryId> = ids.iter().copied().collect();
    if distinct.len() != ids.len() {
        log::debug!("duplicate categories picked: {:?}", ids);
    }

    let categories: Vec<CategoryData> =
        try_join_all(ids.iter().map(|&id| source.category(id))).await?;

    Board::new(config, categories)
}
