//! # Edit forms
//!
//! The write path into the content store. Create operations take a draft
//! with the full field set; edit operations take a patch whose `None`
//! fields leave the stored value untouched (the id is never part of a
//! patch). Validation runs against the merged result before anything is
//! written back, so a failed submit leaves the store exactly as it was.

use chrono::Utc;

use crate::error::{KbError, Result};
use crate::model::{Article, Case, CaseStatus, Subcategory};
use crate::store::ContentStore;

#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub details: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct CaseDraft {
    pub title: String,
    pub summary: String,
    pub details: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<CaseStatus>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CasePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<CaseStatus>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SubcategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

/// Required-field check: non-empty after trimming.
fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KbError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Append a new article with a generated id. Returns the id.
pub fn create_article(store: &mut ContentStore, section_id: &str, draft: ArticleDraft) -> Result<String> {
    let title = required(&draft.title, "Title")?;
    let summary = required(&draft.summary, "Summary")?;
    store.require_section(section_id)?;

    let id = store.generate_id("art");
    let mut article = Article::new(id.clone(), title, summary);
    article.details = draft.details.filter(|d| !d.trim().is_empty());
    article.tags = clean_tags(draft.tags);

    let section = store.require_section_mut(section_id)?;
    section.articles.push(article);
    Ok(id)
}

/// Merge a patch over an existing article. Fields absent from the patch
/// (id included) are preserved; `updated_at` is bumped on success.
pub fn update_article(
    store: &mut ContentStore,
    section_id: &str,
    article_id: &str,
    patch: ArticlePatch,
) -> Result<()> {
    store.require_section(section_id)?;
    let existing = store
        .section(section_id)
        .and_then(|s| s.articles.iter().find(|a| a.id == article_id))
        .ok_or_else(|| KbError::EntryNotFound {
            section: section_id.to_string(),
            id: article_id.to_string(),
        })?;

    let mut merged = existing.clone();
    if let Some(title) = patch.title {
        merged.title = title;
    }
    if let Some(summary) = patch.summary {
        merged.summary = summary;
    }
    if let Some(details) = patch.details {
        merged.details = Some(details);
    }
    if let Some(tags) = patch.tags {
        merged.tags = clean_tags(tags);
    }
    merged.title = required(&merged.title, "Title")?;
    merged.summary = required(&merged.summary, "Summary")?;
    merged.updated_at = Utc::now();

    let section = store.require_section_mut(section_id)?;
    let slot = section
        .articles
        .iter_mut()
        .find(|a| a.id == article_id)
        .expect("article existed above");
    *slot = merged;
    Ok(())
}

/// Append a new case with a generated id. Returns the id.
pub fn create_case(store: &mut ContentStore, section_id: &str, draft: CaseDraft) -> Result<String> {
    let title = required(&draft.title, "Title")?;
    let summary = required(&draft.summary, "Summary")?;
    store.require_section(section_id)?;

    let id = store.generate_id("case");
    let mut case = Case::new(id.clone(), title, summary);
    case.details = draft.details.filter(|d| !d.trim().is_empty());
    case.tags = clean_tags(draft.tags);
    if let Some(status) = draft.status {
        case.status = status;
    }
    if let Some(assignee) = draft.assignee {
        case.assignee = assignee.trim().to_string();
    }

    let section = store.require_section_mut(section_id)?;
    section.cases.push(case);
    Ok(id)
}

/// Merge a patch over an existing case.
pub fn update_case(
    store: &mut ContentStore,
    section_id: &str,
    case_id: &str,
    patch: CasePatch,
) -> Result<()> {
    store.require_section(section_id)?;
    let existing = store
        .section(section_id)
        .and_then(|s| s.cases.iter().find(|c| c.id == case_id))
        .ok_or_else(|| KbError::EntryNotFound {
            section: section_id.to_string(),
            id: case_id.to_string(),
        })?;

    let mut merged = existing.clone();
    if let Some(title) = patch.title {
        merged.title = title;
    }
    if let Some(summary) = patch.summary {
        merged.summary = summary;
    }
    if let Some(details) = patch.details {
        merged.details = Some(details);
    }
    if let Some(tags) = patch.tags {
        merged.tags = clean_tags(tags);
    }
    if let Some(status) = patch.status {
        merged.status = status;
    }
    if let Some(assignee) = patch.assignee {
        merged.assignee = assignee.trim().to_string();
    }
    merged.title = required(&merged.title, "Title")?;
    merged.summary = required(&merged.summary, "Summary")?;
    merged.updated_at = Utc::now();

    let section = store.require_section_mut(section_id)?;
    let slot = section
        .cases
        .iter_mut()
        .find(|c| c.id == case_id)
        .expect("case existed above");
    *slot = merged;
    Ok(())
}

/// Append a new subcategory with a generated id. Returns the id.
pub fn create_subcategory(
    store: &mut ContentStore,
    section_id: &str,
    draft: SubcategoryDraft,
) -> Result<String> {
    let name = required(&draft.name, "Name")?;
    store.require_section(section_id)?;

    let id = store.generate_id("sub");
    let section = store.require_section_mut(section_id)?;
    section.subcategories.push(Subcategory {
        id: id.clone(),
        name,
        description: draft.description.filter(|d| !d.trim().is_empty()),
    });
    Ok(id)
}
