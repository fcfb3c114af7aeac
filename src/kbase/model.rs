use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow states a case moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InProgress => "In progress",
            CaseStatus::Waiting => "Waiting",
            CaseStatus::Resolved => "Resolved",
            CaseStatus::Closed => "Closed",
        }
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(CaseStatus::Open),
            "in-progress" | "in_progress" | "inprogress" => Ok(CaseStatus::InProgress),
            "waiting" => Ok(CaseStatus::Waiting),
            "resolved" => Ok(CaseStatus::Resolved),
            "closed" => Ok(CaseStatus::Closed),
            other => Err(format!("Unknown case status: {}", other)),
        }
    }
}

/// What an external reference item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Document,
    Form,
    Template,
    Link,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Document => "Document",
            ItemKind::Form => "Form",
            ItemKind::Template => "Template",
            ItemKind::Link => "Link",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Long-form body, markdown. Only shown in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(id: String, title: String, summary: String) -> Self {
        Self {
            id,
            title,
            summary,
            details: None,
            tags: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: CaseStatus,
    #[serde(default)]
    pub assignee: String,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    pub fn new(id: String, title: String, summary: String) -> Self {
        Self {
            id,
            title,
            summary,
            details: None,
            tags: Vec::new(),
            status: CaseStatus::Open,
            assignee: String::new(),
            updated_at: Utc::now(),
        }
    }
}

/// External reference (document, form, template). Read-only in this UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ItemKind,
    pub url: String,
}

/// A named filter facet over a section's articles and cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

/// Top-level knowledge-base category. Sole owner of its child collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Theme color tag ("blue", "amber", ...) used as a CSS hook.
    #[serde(default)]
    pub theme: String,
    /// Icon tag used as a CSS hook.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub cases: Vec<Case>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub glossary: Vec<GlossaryEntry>,
}

impl Section {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            theme: String::new(),
            icon: String::new(),
            articles: Vec::new(),
            cases: Vec::new(),
            items: Vec::new(),
            subcategories: Vec::new(),
            glossary: Vec::new(),
        }
    }

    /// Total number of browsable entries (articles, cases, items).
    pub fn entry_count(&self) -> usize {
        self.articles.len() + self.cases.len() + self.items.len()
    }

    /// Most recent update across articles and cases, if any.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        let articles = self.articles.iter().map(|a| a.updated_at);
        let cases = self.cases.iter().map(|c| c.updated_at);
        articles.chain(cases).max()
    }
}

/// Entity class tag, used by search results and the renderer instead of
/// probing for optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Section,
    Article,
    Case,
    Item,
    Glossary,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Section => "Section",
            EntryKind::Article => "Article",
            EntryKind::Case => "Case",
            EntryKind::Item => "Item",
            EntryKind::Glossary => "Glossary",
        }
    }
}

/// A typed borrow of one entry inside a section.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef<'a> {
    Article(&'a Article),
    Case(&'a Case),
    Item(&'a Item),
}

impl<'a> EntryRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            EntryRef::Article(a) => &a.id,
            EntryRef::Case(c) => &c.id,
            EntryRef::Item(i) => &i.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            EntryRef::Article(a) => &a.title,
            EntryRef::Case(c) => &c.title,
            EntryRef::Item(i) => &i.title,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            EntryRef::Article(_) => EntryKind::Article,
            EntryRef::Case(_) => EntryKind::Case,
            EntryRef::Item(_) => EntryKind::Item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_status_parses_aliases() {
        use std::str::FromStr;
        assert_eq!(CaseStatus::from_str("open").unwrap(), CaseStatus::Open);
        assert_eq!(
            CaseStatus::from_str("in-progress").unwrap(),
            CaseStatus::InProgress
        );
        assert_eq!(
            CaseStatus::from_str("In_Progress").unwrap(),
            CaseStatus::InProgress
        );
        assert!(CaseStatus::from_str("done").is_err());
    }

    #[test]
    fn section_last_updated_spans_articles_and_cases() {
        let mut section = Section::new("support", "Support");
        assert_eq!(section.last_updated(), None);

        let article = Article::new("a1".into(), "A".into(), "s".into());
        let mut case = Case::new("c1".into(), "C".into(), "s".into());
        case.updated_at = article.updated_at + chrono::Duration::seconds(5);
        let expected = case.updated_at;
        section.articles.push(article);
        section.cases.push(case);

        assert_eq!(section.last_updated(), Some(expected));
    }
}
