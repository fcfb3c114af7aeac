use super::{ContentStore, DataStore};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct InMemoryStore {
    saved: ContentStore,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(store: ContentStore) -> Self {
        Self { saved: store }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ContentStore> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, store: &ContentStore) -> Result<()> {
        self.saved = store.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        Article, Case, CaseStatus, GlossaryEntry, Item, ItemKind, Section, Subcategory,
    };

    /// Builder for seeded content stores used across the test suite.
    pub struct StoreFixture {
        pub store: ContentStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ContentStore::default(),
            }
        }

        pub fn with_section(mut self, id: &str, name: &str) -> Self {
            self.store.sections.push(Section::new(id, name));
            self
        }

        pub fn with_article(mut self, section: &str, id: &str, title: &str, summary: &str) -> Self {
            let s = self.store.section_mut(section).expect("fixture section");
            s.articles
                .push(Article::new(id.into(), title.into(), summary.into()));
            self
        }

        pub fn with_case(mut self, section: &str, id: &str, title: &str, status: CaseStatus) -> Self {
            let s = self.store.section_mut(section).expect("fixture section");
            let mut case = Case::new(id.into(), title.into(), "Case summary".into());
            case.status = status;
            s.cases.push(case);
            self
        }

        pub fn with_item(mut self, section: &str, id: &str, title: &str, kind: ItemKind) -> Self {
            let s = self.store.section_mut(section).expect("fixture section");
            s.items.push(Item {
                id: id.into(),
                title: title.into(),
                description: format!("{} reference", title),
                kind,
                url: format!("https://example.com/{}", id),
            });
            self
        }

        pub fn with_subcategory(mut self, section: &str, id: &str, name: &str) -> Self {
            let s = self.store.section_mut(section).expect("fixture section");
            s.subcategories.push(Subcategory {
                id: id.into(),
                name: name.into(),
                description: None,
            });
            self
        }

        pub fn with_glossary(mut self, section: &str, term: &str, definition: &str) -> Self {
            let s = self.store.section_mut(section).expect("fixture section");
            s.glossary.push(GlossaryEntry {
                term: term.into(),
                definition: definition.into(),
            });
            self
        }

        /// A small realistic knowledge base: one support section with a bit
        /// of everything, plus a second section for ordering checks.
        pub fn support_kb() -> ContentStore {
            StoreFixture::new()
                .with_section("support", "Support")
                .with_article(
                    "support",
                    "sup001",
                    "How to Handle a High Priority Ticket",
                    "Triage, escalate, resolve",
                )
                .with_article(
                    "support",
                    "sup002",
                    "Password Reset Walkthrough",
                    "Self-service and assisted resets",
                )
                .with_case("support", "case101", "VPN drops every hour", CaseStatus::Open)
                .with_item("support", "form01", "Incident Report Form", ItemKind::Form)
                .with_subcategory("support", "tickets", "Ticketing")
                .with_glossary("support", "SLA", "Service level agreement")
                .with_section("billing", "Billing")
                .with_article("billing", "bil001", "Reading Your Invoice", "Line items explained")
                .store
        }
    }
}
