use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::{
    self, ArticleDraft, ArticlePatch, CaseDraft, CasePatch, SubcategoryDraft,
};
use crate::nav::Navigator;
use crate::render::Renderer;
use crate::store::ContentStore;

use super::view::render_view;

/// Rebuild the open view after a successful write. The navigator keeps the
/// active subcategory filter, so the refreshed fragment preserves it.
fn refreshed(store: &ContentStore, nav: &Navigator, renderer: &Renderer) -> String {
    render_view(store, renderer, &nav.refresh(store))
}

pub fn add_article(
    store: &mut ContentStore,
    nav: &Navigator,
    renderer: &Renderer,
    section_id: &str,
    draft: ArticleDraft,
) -> Result<CmdResult> {
    let id = forms::create_article(store, section_id, draft)?;
    let mut result = CmdResult::default().with_fragment(refreshed(store, nav, renderer));
    result.add_message(CmdMessage::success(format!(
        "Article added to {}: {}",
        section_id, id
    )));
    Ok(result)
}

pub fn edit_article(
    store: &mut ContentStore,
    nav: &Navigator,
    renderer: &Renderer,
    section_id: &str,
    article_id: &str,
    patch: ArticlePatch,
) -> Result<CmdResult> {
    forms::update_article(store, section_id, article_id, patch)?;
    let mut result = CmdResult::default().with_fragment(refreshed(store, nav, renderer));
    result.add_message(CmdMessage::success(format!("Article updated: {}", article_id)));
    Ok(result)
}

pub fn add_case(
    store: &mut ContentStore,
    nav: &Navigator,
    renderer: &Renderer,
    section_id: &str,
    draft: CaseDraft,
) -> Result<CmdResult> {
    let id = forms::create_case(store, section_id, draft)?;
    let mut result = CmdResult::default().with_fragment(refreshed(store, nav, renderer));
    result.add_message(CmdMessage::success(format!(
        "Case added to {}: {}",
        section_id, id
    )));
    Ok(result)
}

pub fn edit_case(
    store: &mut ContentStore,
    nav: &Navigator,
    renderer: &Renderer,
    section_id: &str,
    case_id: &str,
    patch: CasePatch,
) -> Result<CmdResult> {
    forms::update_case(store, section_id, case_id, patch)?;
    let mut result = CmdResult::default().with_fragment(refreshed(store, nav, renderer));
    result.add_message(CmdMessage::success(format!("Case updated: {}", case_id)));
    Ok(result)
}

pub fn add_subcategory(
    store: &mut ContentStore,
    nav: &Navigator,
    renderer: &Renderer,
    section_id: &str,
    draft: SubcategoryDraft,
) -> Result<CmdResult> {
    let id = forms::create_subcategory(store, section_id, draft)?;
    let mut result = CmdResult::default().with_fragment(refreshed(store, nav, renderer));
    result.add_message(CmdMessage::success(format!(
        "Subsection added to {}: {}",
        section_id, id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::store::memory::fixtures::StoreFixture;
    use std::str::FromStr;

    #[test]
    fn save_refreshes_the_current_view_with_filter_intact() {
        let mut store = StoreFixture::support_kb();
        let mut nav = Navigator::default();
        let renderer = Renderer::default();
        nav.navigate(&store, Route::from_str("support/tickets").unwrap());

        let result = add_article(
            &mut store,
            &nav,
            &renderer,
            "support",
            ArticleDraft {
                title: "Tagged for tickets".into(),
                summary: "s".into(),
                tags: vec!["tickets".into()],
                ..Default::default()
            },
        )
        .unwrap();

        let fragment = result.fragment.unwrap();
        // The refreshed fragment is still the filtered overview and shows
        // the new article (tagged into the active subcategory).
        assert!(fragment.contains("kb-chip kb-chip--active"));
        assert!(fragment.contains("Tagged for tickets"));
    }

    #[test]
    fn failed_validation_produces_no_fragment_and_no_write() {
        let mut store = StoreFixture::support_kb();
        let nav = Navigator::default();
        let renderer = Renderer::default();
        let before = store.section("support").unwrap().articles.len();

        let err = add_article(
            &mut store,
            &nav,
            &renderer,
            "support",
            ArticleDraft {
                title: "ok".into(),
                summary: "".into(),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::KbError::Validation(_)));
        assert_eq!(store.section("support").unwrap().articles.len(), before);
    }
}
