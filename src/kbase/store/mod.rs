//! # Content store and persistence
//!
//! [`ContentStore`] is the single owned application state: every section and
//! everything inside it. It is constructed once at startup and passed by
//! reference into navigation, rendering, and the form pipeline. Nothing in
//! this crate reaches for it as a global.
//!
//! Persistence sits behind the [`DataStore`] trait so the application can
//! work with different backends:
//!
//! - [`fs::FileStore`]: production storage, one JSON document (`kb.json`)
//! - [`memory::InMemoryStore`]: tests, no persistence
//!
//! The whole store is loaded and saved as a unit. The content is a nested
//! document, small enough that entity-level persistence would buy nothing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KbError, Result};
use crate::model::{EntryRef, Section};

pub mod fs;
pub mod memory;

/// The in-memory knowledge base: an ordered list of sections.
///
/// Iteration order is document order. Search results and the home view both
/// follow it, so the order in the content file is the order on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentStore {
    pub sections: Vec<Section>,
}

impl ContentStore {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn require_section(&self, id: &str) -> Result<&Section> {
        self.section(id)
            .ok_or_else(|| KbError::SectionNotFound(id.to_string()))
    }

    pub fn require_section_mut(&mut self, id: &str) -> Result<&mut Section> {
        self.section_mut(id)
            .ok_or_else(|| KbError::SectionNotFound(id.to_string()))
    }

    /// Look up one entry (article, case, or item) inside a section.
    /// Articles are checked first, then cases, then items.
    pub fn entry<'a>(&'a self, section_id: &str, entry_id: &str) -> Option<EntryRef<'a>> {
        let section = self.section(section_id)?;
        if let Some(a) = section.articles.iter().find(|a| a.id == entry_id) {
            return Some(EntryRef::Article(a));
        }
        if let Some(c) = section.cases.iter().find(|c| c.id == entry_id) {
            return Some(EntryRef::Case(c));
        }
        if let Some(i) = section.items.iter().find(|i| i.id == entry_id) {
            return Some(EntryRef::Item(i));
        }
        None
    }

    /// Generate an id with the given prefix that collides with nothing in
    /// the store (any section, any entity class).
    pub fn generate_id(&self, prefix: &str) -> String {
        loop {
            let candidate = format!(
                "{}-{}",
                prefix,
                &Uuid::new_v4().simple().to_string()[..8]
            );
            if !self.id_in_use(&candidate) {
                return candidate;
            }
        }
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.sections.iter().any(|s| {
            s.id == id
                || s.articles.iter().any(|a| a.id == id)
                || s.cases.iter().any(|c| c.id == id)
                || s.items.iter().any(|i| i.id == id)
                || s.subcategories.iter().any(|sc| sc.id == id)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Abstract persistence seam for the content store.
///
/// Implementations load and save the store as one document; consistency
/// within it is the caller's concern (all mutation happens in memory first).
pub trait DataStore {
    /// Load the whole knowledge base.
    fn load(&self) -> Result<ContentStore>;

    /// Persist the whole knowledge base.
    fn save(&mut self, store: &ContentStore) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, EntryKind};

    #[test]
    fn entry_lookup_checks_articles_before_cases_and_items() {
        let mut section = Section::new("support", "Support");
        section
            .articles
            .push(Article::new("dup".into(), "Article".into(), "s".into()));
        section.items.push(crate::model::Item {
            id: "dup".into(),
            title: "Item".into(),
            description: String::new(),
            kind: crate::model::ItemKind::Document,
            url: String::new(),
        });
        let store = ContentStore::new(vec![section]);

        let entry = store.entry("support", "dup").unwrap();
        assert_eq!(entry.kind(), EntryKind::Article);
    }

    #[test]
    fn generated_ids_avoid_existing_ones() {
        let store = ContentStore::new(vec![Section::new("support", "Support")]);
        let id = store.generate_id("art");
        assert!(id.starts_with("art-"));
        assert!(!store.id_in_use(&id));
    }

    #[test]
    fn require_section_reports_missing_id() {
        let store = ContentStore::default();
        let err = store.require_section("nope").unwrap_err();
        assert!(matches!(err, KbError::SectionNotFound(ref id) if id == "nope"));
    }
}
