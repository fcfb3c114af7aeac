use crate::commands::{CmdResult, SectionSummary};
use crate::error::Result;
use crate::render::Renderer;
use crate::store::ContentStore;

pub fn run(store: &ContentStore, renderer: &Renderer) -> Result<CmdResult> {
    let summaries: Vec<SectionSummary> = store
        .sections
        .iter()
        .map(|s| SectionSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            entry_count: s.entry_count(),
            last_updated: s.last_updated(),
        })
        .collect();

    Ok(CmdResult::default()
        .with_fragment(renderer.render_home(store))
        .with_sections(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_sections_in_store_order() {
        let store = StoreFixture::support_kb();
        let result = run(&store, &Renderer::default()).unwrap();

        let ids: Vec<&str> = result.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["support", "billing"]);
        assert_eq!(result.sections[0].entry_count, 4);
        assert!(result.fragment.unwrap().contains("kb-home"));
    }
}
