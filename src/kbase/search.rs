//! # Free-text search
//!
//! A linear, case-insensitive substring scan over the content store. No
//! ranking, no tokenization: results come back in store iteration order,
//! which keeps the search view stable against the sidebar.

use serde::Serialize;

use crate::model::EntryKind;
use crate::store::ContentStore;

/// Queries shorter than this are treated by callers as "clear results",
/// not as searches. The scan itself is never invoked for them.
pub const MIN_QUERY_LEN: usize = 2;

/// One match from a free-text query. Derived transiently, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub section_id: String,
    pub section_name: String,
    pub theme: String,
    pub id: String,
    pub title: String,
    pub summary: String,
    pub kind: EntryKind,
}

fn matches(query_lower: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|f| f.to_lowercase().contains(query_lower))
}

/// Scan every section for case-insensitive substring matches in titles,
/// summaries, descriptions, and glossary definitions.
///
/// Pure read; an empty or no-match query yields an empty vec. Callers are
/// responsible for the [`MIN_QUERY_LEN`] gate.
pub fn search(store: &ContentStore, query: &str) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    let mut results = Vec::new();

    for section in &store.sections {
        if matches(&query_lower, &[&section.name]) {
            results.push(SearchResult {
                section_id: section.id.clone(),
                section_name: section.name.clone(),
                theme: section.theme.clone(),
                id: section.id.clone(),
                title: section.name.clone(),
                summary: section.description.clone(),
                kind: EntryKind::Section,
            });
        }

        for article in &section.articles {
            if matches(&query_lower, &[&article.title, &article.summary]) {
                results.push(SearchResult {
                    section_id: section.id.clone(),
                    section_name: section.name.clone(),
                    theme: section.theme.clone(),
                    id: article.id.clone(),
                    title: article.title.clone(),
                    summary: article.summary.clone(),
                    kind: EntryKind::Article,
                });
            }
        }

        for case in &section.cases {
            if matches(&query_lower, &[&case.title, &case.summary]) {
                results.push(SearchResult {
                    section_id: section.id.clone(),
                    section_name: section.name.clone(),
                    theme: section.theme.clone(),
                    id: case.id.clone(),
                    title: case.title.clone(),
                    summary: case.summary.clone(),
                    kind: EntryKind::Case,
                });
            }
        }

        for item in &section.items {
            if matches(&query_lower, &[&item.title, &item.description]) {
                results.push(SearchResult {
                    section_id: section.id.clone(),
                    section_name: section.name.clone(),
                    theme: section.theme.clone(),
                    id: item.id.clone(),
                    title: item.title.clone(),
                    summary: item.description.clone(),
                    kind: EntryKind::Item,
                });
            }
        }

        for entry in &section.glossary {
            if matches(&query_lower, &[&entry.term, &entry.definition]) {
                results.push(SearchResult {
                    section_id: section.id.clone(),
                    section_name: section.name.clone(),
                    theme: section.theme.clone(),
                    id: entry.term.clone(),
                    title: entry.term.clone(),
                    summary: entry.definition.clone(),
                    kind: EntryKind::Glossary,
                });
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_article_by_title_substring() {
        let store = StoreFixture::support_kb();
        let results = search(&store, "priority");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sup001");
        assert_eq!(results[0].kind, EntryKind::Article);
        assert_eq!(results[0].section_id, "support");
    }

    #[test]
    fn no_match_yields_empty() {
        let store = StoreFixture::support_kb();
        assert!(search(&store, "xyz123").is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let store = StoreFixture::support_kb();
        let results = search(&store, "PASSWORD");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sup002");
    }

    #[test]
    fn section_name_matches_emit_a_section_result() {
        let store = StoreFixture::support_kb();
        let results = search(&store, "billing");
        assert!(results
            .iter()
            .any(|r| r.kind == EntryKind::Section && r.id == "billing"));
    }

    #[test]
    fn glossary_and_items_are_searchable() {
        let store = StoreFixture::support_kb();
        let glossary = search(&store, "service level");
        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary[0].kind, EntryKind::Glossary);
        assert_eq!(glossary[0].id, "SLA");

        let items = search(&store, "incident report");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, EntryKind::Item);
    }

    #[test]
    fn results_follow_store_iteration_order() {
        let store = StoreFixture::support_kb();
        // "re" hits several entries; section order (support before billing)
        // and in-section order (articles before cases before items) hold.
        let results = search(&store, "re");
        let sections: Vec<&str> = results.iter().map(|r| r.section_id.as_str()).collect();
        let first_billing = sections.iter().position(|s| *s == "billing");
        if let Some(pos) = first_billing {
            assert!(sections[..pos].iter().all(|s| *s == "support"));
        }
    }

    #[test]
    fn every_result_contains_the_query_somewhere() {
        let store = StoreFixture::support_kb();
        for query in ["re", "ticket", "invoice", "sla"] {
            for r in search(&store, query) {
                let haystack = format!("{} {} {}", r.title, r.summary, r.section_name);
                assert!(
                    haystack.to_lowercase().contains(&query.to_lowercase()),
                    "result {:?} does not contain {:?}",
                    r.id,
                    query
                );
            }
        }
    }
}
