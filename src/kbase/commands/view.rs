use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::log::AccessLog;
use crate::model::EntryKind;
use crate::nav::{Navigator, View};
use crate::render::Renderer;
use crate::route::Route;
use crate::store::ContentStore;

/// Navigate to `route`, record the access when something resolved, and
/// render the resulting view.
pub fn run(
    store: &ContentStore,
    nav: &mut Navigator,
    log: &mut AccessLog,
    renderer: &Renderer,
    user: &str,
    route: Route,
) -> Result<CmdResult> {
    let view = nav.navigate(store, route);
    record_access(store, log, user, &view);

    let mut result = CmdResult::default().with_fragment(render_view(store, renderer, &view));
    if let View::NotFound { fragment } = &view {
        result.add_message(CmdMessage::warning(format!("Nothing at {}", fragment)));
    }
    Ok(result)
}

/// Render any resolved view. Also used after saves to rebuild the current
/// view with its filter intact.
pub(crate) fn render_view(store: &ContentStore, renderer: &Renderer, view: &View) -> String {
    match view {
        View::Home => renderer.render_home(store),
        View::SectionOverview {
            section_id,
            subcategory,
        } => match store.section(section_id) {
            Some(section) => {
                let filter = subcategory
                    .as_deref()
                    .and_then(|id| section.subcategories.iter().find(|sc| sc.id == id));
                renderer.render_section(section, filter)
            }
            None => renderer.render_not_found(&format!("#{}", section_id)),
        },
        View::EntryDetail {
            section_id,
            entry_id,
            ..
        } => match (store.section(section_id), store.entry(section_id, entry_id)) {
            (Some(section), Some(entry)) => renderer.render_entry_detail(section, entry),
            _ => renderer.render_not_found(&format!("#{}/{}", section_id, entry_id)),
        },
        View::NotFound { fragment } => renderer.render_not_found(fragment),
    }
}

/// One log entry per successfully resolved section or entry view. Home and
/// not-found renders are not access.
fn record_access(store: &ContentStore, log: &mut AccessLog, user: &str, view: &View) {
    match view {
        View::SectionOverview { section_id, .. } => {
            if let Some(section) = store.section(section_id) {
                log.record(user, section.name.clone(), section.name.clone(), EntryKind::Section);
            }
        }
        View::EntryDetail {
            section_id,
            entry_id,
            ..
        } => {
            if let (Some(section), Some(entry)) =
                (store.section(section_id), store.entry(section_id, entry_id))
            {
                log.record(user, entry.title(), section.name.clone(), entry.kind());
            }
        }
        View::Home | View::NotFound { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::str::FromStr;

    fn route(s: &str) -> Route {
        Route::from_str(s).unwrap()
    }

    #[test]
    fn viewing_an_entry_records_one_access() {
        let store = StoreFixture::support_kb();
        let mut nav = Navigator::default();
        let mut log = AccessLog::new();
        let renderer = Renderer::default();

        let result = run(&store, &mut nav, &mut log, &renderer, "ana", route("support/sup001"))
            .unwrap();
        assert!(result.fragment.unwrap().contains("High Priority Ticket"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.recent()[0].item, "How to Handle a High Priority Ticket");
        assert_eq!(log.recent()[0].user, "ana");
    }

    #[test]
    fn not_found_renders_recoverably_and_logs_nothing() {
        let store = StoreFixture::support_kb();
        let mut nav = Navigator::default();
        let mut log = AccessLog::new();
        let renderer = Renderer::default();

        let result =
            run(&store, &mut nav, &mut log, &renderer, "ana", route("ghost")).unwrap();
        assert!(result.fragment.unwrap().contains("kb-not-found"));
        assert!(!result.messages.is_empty());
        assert!(log.is_empty());

        // Navigation stays usable afterwards.
        let result =
            run(&store, &mut nav, &mut log, &renderer, "ana", route("home")).unwrap();
        assert!(result.fragment.unwrap().contains("kb-home"));
    }

    #[test]
    fn subcategory_view_applies_the_filter() {
        let mut store = StoreFixture::support_kb();
        store.section_mut("support").unwrap().articles[0]
            .tags
            .push("tickets".into());
        let mut nav = Navigator::default();
        let mut log = AccessLog::new();
        let renderer = Renderer::default();

        let result = run(
            &store,
            &mut nav,
            &mut log,
            &renderer,
            "ana",
            route("support/tickets"),
        )
        .unwrap();
        let fragment = result.fragment.unwrap();
        assert!(fragment.contains("High Priority Ticket"));
        assert!(!fragment.contains("Password Reset Walkthrough"));
    }
}
