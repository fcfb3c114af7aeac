use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::Renderer;
use crate::search::{self, MIN_QUERY_LEN};
use crate::store::ContentStore;

pub fn run(store: &ContentStore, renderer: &Renderer, query: &str) -> Result<CmdResult> {
    let query = query.trim();

    // Below the minimum length the index is not consulted at all; the view
    // just clears.
    if query.chars().count() < MIN_QUERY_LEN {
        let mut result = CmdResult::default().with_fragment(renderer.render_search_prompt());
        result.add_message(CmdMessage::info(format!(
            "Queries need at least {} characters.",
            MIN_QUERY_LEN
        )));
        return Ok(result);
    }

    let results = search::search(store, query);
    let fragment = renderer.render_search_results(&results, query);

    let mut result = CmdResult::default()
        .with_fragment(fragment)
        .with_results(results);
    let n = result.results.len();
    result.add_message(CmdMessage::info(format!(
        "{} result{} for \"{}\"",
        n,
        if n == 1 { "" } else { "s" },
        query
    )));
    Ok(result)
}
