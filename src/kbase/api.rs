//! # API Facade
//!
//! The single entry point for all kbase operations, regardless of the UI
//! driving them. The facade owns the loaded content store, the navigator,
//! the access log, and the renderer, and threads them through the command
//! layer; nothing here prints, and nothing here contains business logic.
//!
//! Generic over [`DataStore`] so the CLI runs on `FileStore` and tests run
//! on `InMemoryStore`. Mutating operations persist through the backend only
//! after the command succeeded, so a validation failure never reaches disk.

use std::path::PathBuf;
use std::str::FromStr;

use crate::commands;
use crate::error::Result;
use crate::forms::{ArticleDraft, ArticlePatch, CaseDraft, CasePatch, SubcategoryDraft};
use crate::log::AccessLog;
use crate::nav::Navigator;
use crate::render::Renderer;
use crate::route::Route;
use crate::session::{LocalSession, UserSession};
use crate::store::{ContentStore, DataStore};

pub struct KbApi<S: DataStore> {
    backend: S,
    store: ContentStore,
    nav: Navigator,
    log: AccessLog,
    renderer: Renderer,
    session: LocalSession,
}

impl<S: DataStore> KbApi<S> {
    /// Load the knowledge base from the backend. Fails with
    /// `KbError::DataUnavailable` when there is nothing to load; the
    /// caller renders that as a top-level error.
    pub fn open(backend: S, renderer: Renderer, session: LocalSession) -> Result<Self> {
        let store = backend.load()?;
        Ok(Self {
            backend,
            store,
            nav: Navigator::default(),
            log: AccessLog::new(),
            renderer,
            session,
        })
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn history(&self) -> &[String] {
        self.nav.history()
    }

    pub fn session(&self) -> &LocalSession {
        &self.session
    }

    pub fn sections(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.renderer)
    }

    /// Navigate to a route given as a fragment string (`support/tickets`,
    /// `#support/sup001`, ...). A route that does not even parse behaves
    /// like any other unresolvable one: a not-found view, not an error.
    pub fn view(&mut self, route: &str) -> Result<commands::CmdResult> {
        let route = match Route::from_str(route) {
            Ok(parsed) => parsed,
            Err(_) => {
                let fragment = format!("#{}", route.trim_start_matches('#'));
                let mut result = commands::CmdResult::default()
                    .with_fragment(self.renderer.render_not_found(&fragment));
                result.add_message(commands::CmdMessage::warning(format!(
                    "Nothing at {}",
                    fragment
                )));
                return Ok(result);
            }
        };
        let user = self.session.log_name();
        commands::view::run(
            &self.store,
            &mut self.nav,
            &mut self.log,
            &self.renderer,
            &user,
            route,
        )
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &self.renderer, query)
    }

    pub fn add_article(&mut self, section: &str, draft: ArticleDraft) -> Result<commands::CmdResult> {
        let result =
            commands::save::add_article(&mut self.store, &self.nav, &self.renderer, section, draft)?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_article(
        &mut self,
        section: &str,
        id: &str,
        patch: ArticlePatch,
    ) -> Result<commands::CmdResult> {
        let result = commands::save::edit_article(
            &mut self.store,
            &self.nav,
            &self.renderer,
            section,
            id,
            patch,
        )?;
        self.persist()?;
        Ok(result)
    }

    pub fn add_case(&mut self, section: &str, draft: CaseDraft) -> Result<commands::CmdResult> {
        let result =
            commands::save::add_case(&mut self.store, &self.nav, &self.renderer, section, draft)?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_case(
        &mut self,
        section: &str,
        id: &str,
        patch: CasePatch,
    ) -> Result<commands::CmdResult> {
        let result = commands::save::edit_case(
            &mut self.store,
            &self.nav,
            &self.renderer,
            section,
            id,
            patch,
        )?;
        self.persist()?;
        Ok(result)
    }

    pub fn add_subcategory(
        &mut self,
        section: &str,
        draft: SubcategoryDraft,
    ) -> Result<commands::CmdResult> {
        let result = commands::save::add_subcategory(
            &mut self.store,
            &self.nav,
            &self.renderer,
            section,
            draft,
        )?;
        self.persist()?;
        Ok(result)
    }

    pub fn access_log(&self) -> Result<commands::CmdResult> {
        commands::log::run(&self.log, &self.renderer)
    }

    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, &self.renderer, output)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.store)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SectionSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> KbApi<InMemoryStore> {
        let backend = InMemoryStore::with_content(StoreFixture::support_kb());
        KbApi::open(backend, Renderer::default(), LocalSession::new(Some("ana".into()))).unwrap()
    }

    #[test]
    fn mutations_reach_the_backend_only_on_success() {
        let mut api = api();

        let err = api.add_article(
            "support",
            ArticleDraft {
                title: "t".into(),
                summary: " ".into(),
                ..Default::default()
            },
        );
        assert!(err.is_err());

        api.add_article(
            "support",
            ArticleDraft {
                title: "Persisted".into(),
                summary: "yes".into(),
                ..Default::default()
            },
        )
        .unwrap();

        // Reopen from the same backend content via a fresh load.
        let reloaded = api.backend.load().unwrap();
        assert!(reloaded
            .section("support")
            .unwrap()
            .articles
            .iter()
            .any(|a| a.title == "Persisted"));
    }

    #[test]
    fn view_then_log_shows_the_visit() {
        let mut api = api();
        api.view("support/sup001").unwrap();
        let log = api.access_log().unwrap();
        assert!(log
            .fragment
            .unwrap()
            .contains("How to Handle a High Priority Ticket"));
    }
}
