//! # Fragment renderer
//!
//! Builds self-contained HTML fragments from content-store data: the host
//! page (or the export bundle) supplies the shell and the stylesheet, the
//! fragments supply the content. Class names double as styling hooks;
//! section theme and icon tags become `theme-*` / `icon-*` classes.
//!
//! Every piece of stored text is interpolated through [`html::escape`] or
//! [`html::highlight`]; long text is cut to a character budget in list and
//! search views and shown in full in detail views.

use pulldown_cmark::{html as md_html, Parser};

use crate::log::{AccessLog, LOG_DISPLAY_CAP};
use crate::model::{Article, Case, EntryRef, Item, Section, Subcategory};
use crate::search::SearchResult;
use crate::store::ContentStore;

pub mod html;

use html::{escape, highlight, truncate};

/// Character budget for summaries in list and search views.
pub const DEFAULT_TRUNCATE: usize = 120;

#[derive(Debug, Clone)]
pub struct Renderer {
    pub truncate_at: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE,
        }
    }
}

impl Renderer {
    pub fn new(truncate_at: usize) -> Self {
        Self { truncate_at }
    }

    fn short(&self, text: &str) -> String {
        escape(&truncate(text, self.truncate_at))
    }

    /// The home view: one card per section.
    pub fn render_home(&self, store: &ContentStore) -> String {
        let mut out = String::from("<section class=\"kb-home\">\n");
        if store.sections.is_empty() {
            out.push_str("  <p class=\"kb-empty\">This knowledge base has no sections yet.</p>\n");
        }
        for section in &store.sections {
            out.push_str(&format!(
                "  <article class=\"kb-card kb-card--section theme-{theme}\">\n    \
                 <span class=\"kb-icon icon-{icon}\"></span>\n    \
                 <h2><a href=\"#{id}\">{name}</a></h2>\n    \
                 <p>{desc}</p>\n    \
                 <span class=\"kb-count\">{count} entries</span>\n  </article>\n",
                theme = escape(&section.theme),
                icon = escape(&section.icon),
                id = escape(&section.id),
                name = escape(&section.name),
                desc = self.short(&section.description),
                count = section.entry_count(),
            ));
        }
        out.push_str("</section>\n");
        out
    }

    /// A section overview: description, subcategory chips, then cards for
    /// articles and cases (filtered when a subcategory is active), the item
    /// list, and glossary entries.
    pub fn render_section(&self, section: &Section, filter: Option<&Subcategory>) -> String {
        let mut out = format!(
            "<section class=\"kb-section theme-{theme}\" data-section=\"{id}\">\n\
             <header>\n  <span class=\"kb-icon icon-{icon}\"></span>\n  \
             <h1>{name}</h1>\n  <p>{desc}</p>\n</header>\n",
            theme = escape(&section.theme),
            id = escape(&section.id),
            icon = escape(&section.icon),
            name = escape(&section.name),
            desc = escape(&section.description),
        );

        if !section.subcategories.is_empty() {
            out.push_str("<nav class=\"kb-subcategories\">\n");
            let all_class = if filter.is_none() {
                "kb-chip kb-chip--active"
            } else {
                "kb-chip"
            };
            out.push_str(&format!(
                "  <a class=\"{all_class}\" href=\"#{id}\">All</a>\n",
                id = escape(&section.id)
            ));
            for sub in &section.subcategories {
                let active = filter.map(|f| f.id == sub.id).unwrap_or(false);
                let class = if active {
                    "kb-chip kb-chip--active"
                } else {
                    "kb-chip"
                };
                out.push_str(&format!(
                    "  <a class=\"{class}\" href=\"#{sid}/{sub_id}\">{name}</a>\n",
                    sid = escape(&section.id),
                    sub_id = escape(&sub.id),
                    name = escape(&sub.name),
                ));
            }
            out.push_str("</nav>\n");
        }

        let in_filter = |tags: &[String]| match filter {
            Some(sub) => tags.iter().any(|t| t == &sub.id),
            None => true,
        };

        let articles: Vec<&Article> = section
            .articles
            .iter()
            .filter(|a| in_filter(&a.tags))
            .collect();
        let cases: Vec<&Case> = section.cases.iter().filter(|c| in_filter(&c.tags)).collect();

        if !articles.is_empty() {
            out.push_str("<div class=\"kb-articles\">\n");
            for article in articles {
                out.push_str(&self.article_card(section, article));
            }
            out.push_str("</div>\n");
        }
        if !cases.is_empty() {
            out.push_str("<div class=\"kb-cases\">\n");
            for case in cases {
                out.push_str(&self.case_card(section, case));
            }
            out.push_str("</div>\n");
        }

        // Items and glossary are facets of the section, not of a filter.
        if filter.is_none() {
            if !section.items.is_empty() {
                out.push_str("<ul class=\"kb-items\">\n");
                for item in &section.items {
                    out.push_str(&self.item_row(section, item));
                }
                out.push_str("</ul>\n");
            }
            if !section.glossary.is_empty() {
                out.push_str("<dl class=\"kb-glossary\">\n");
                for entry in &section.glossary {
                    out.push_str(&format!(
                        "  <dt>{term}</dt>\n  <dd>{definition}</dd>\n",
                        term = escape(&entry.term),
                        definition = escape(&entry.definition),
                    ));
                }
                out.push_str("</dl>\n");
            }
        }

        out.push_str("</section>\n");
        out
    }

    fn tag_badges(&self, tags: &[String]) -> String {
        if tags.is_empty() {
            return String::new();
        }
        let badges: Vec<String> = tags
            .iter()
            .map(|t| format!("<span class=\"kb-tag\">{}</span>", escape(t)))
            .collect();
        format!("    <div class=\"kb-tags\">{}</div>\n", badges.join(""))
    }

    fn card_actions(&self, section: &Section, id: &str, editable: bool) -> String {
        let view = format!(
            "<a class=\"kb-action\" href=\"#{sid}/{id}\">View</a>",
            sid = escape(&section.id),
            id = escape(id),
        );
        if editable {
            format!(
                "    <div class=\"kb-actions\">{view}<button class=\"kb-action\" \
                 data-edit=\"{sid}/{id}\">Edit</button></div>\n",
                sid = escape(&section.id),
                id = escape(id),
            )
        } else {
            format!("    <div class=\"kb-actions\">{view}</div>\n")
        }
    }

    fn article_card(&self, section: &Section, article: &Article) -> String {
        format!(
            "  <article class=\"kb-card kb-card--article\" data-id=\"{id}\">\n    \
             <h3>{title}</h3>\n    <p>{summary}</p>\n{tags}    \
             <time datetime=\"{date}\">Updated {date}</time>\n{actions}  </article>\n",
            id = escape(&article.id),
            title = escape(&article.title),
            summary = self.short(&article.summary),
            tags = self.tag_badges(&article.tags),
            date = article.updated_at.format("%Y-%m-%d"),
            actions = self.card_actions(section, &article.id, true),
        )
    }

    fn case_card(&self, section: &Section, case: &Case) -> String {
        let assignee = if case.assignee.is_empty() {
            String::new()
        } else {
            format!(
                "    <span class=\"kb-assignee\">{}</span>\n",
                escape(&case.assignee)
            )
        };
        format!(
            "  <article class=\"kb-card kb-card--case\" data-id=\"{id}\">\n    \
             <h3>{title}</h3>\n    \
             <span class=\"kb-status kb-status--{status_class}\">{status}</span>\n{assignee}    \
             <p>{summary}</p>\n{tags}{actions}  </article>\n",
            id = escape(&case.id),
            title = escape(&case.title),
            status_class = format!("{:?}", case.status).to_lowercase(),
            status = case.status.label(),
            summary = self.short(&case.summary),
            tags = self.tag_badges(&case.tags),
            actions = self.card_actions(section, &case.id, true),
        )
    }

    fn item_row(&self, section: &Section, item: &Item) -> String {
        format!(
            "  <li class=\"kb-item kb-item--{kind_class}\" data-id=\"{id}\">\n    \
             <a href=\"{url}\" rel=\"noopener\">{title}</a>\n    \
             <span class=\"kb-item-kind\">{kind}</span>\n    <p>{desc}</p>\n{actions}  </li>\n",
            kind_class = format!("{:?}", item.kind).to_lowercase(),
            id = escape(&item.id),
            url = escape(&item.url),
            title = escape(&item.title),
            kind = item.kind.label(),
            desc = self.short(&item.description),
            actions = self.card_actions(section, &item.id, false),
        )
    }

    /// Detail view for one entry: full text, no truncation. Long-form
    /// details are markdown and rendered to HTML here; pulldown-cmark
    /// escapes text events itself, so stored markup stays literal.
    pub fn render_entry_detail(&self, section: &Section, entry: EntryRef<'_>) -> String {
        let mut out = format!(
            "<article class=\"kb-detail theme-{theme}\" data-id=\"{id}\">\n\
             <nav class=\"kb-breadcrumb\">\n  <a href=\"#home\">Home</a>\n  \
             <a href=\"#{sid}\">{sname}</a>\n</nav>\n<h1>{title}</h1>\n",
            theme = escape(&section.theme),
            id = escape(entry.id()),
            sid = escape(&section.id),
            sname = escape(&section.name),
            title = escape(entry.title()),
        );

        match entry {
            EntryRef::Article(article) => {
                out.push_str(&format!(
                    "<p class=\"kb-summary\">{}</p>\n",
                    escape(&article.summary)
                ));
                out.push_str(&self.tag_badges(&article.tags));
                out.push_str(&format!(
                    "<time datetime=\"{date}\">Updated {date}</time>\n",
                    date = article.updated_at.format("%Y-%m-%d"),
                ));
                if let Some(details) = &article.details {
                    out.push_str("<div class=\"kb-details\">\n");
                    out.push_str(&markdown(details));
                    out.push_str("</div>\n");
                }
            }
            EntryRef::Case(case) => {
                out.push_str(&format!(
                    "<span class=\"kb-status kb-status--{class}\">{label}</span>\n",
                    class = format!("{:?}", case.status).to_lowercase(),
                    label = case.status.label(),
                ));
                if !case.assignee.is_empty() {
                    out.push_str(&format!(
                        "<span class=\"kb-assignee\">Assigned to {}</span>\n",
                        escape(&case.assignee)
                    ));
                }
                out.push_str(&format!(
                    "<p class=\"kb-summary\">{}</p>\n",
                    escape(&case.summary)
                ));
                out.push_str(&self.tag_badges(&case.tags));
                if let Some(details) = &case.details {
                    out.push_str("<div class=\"kb-details\">\n");
                    out.push_str(&markdown(details));
                    out.push_str("</div>\n");
                }
            }
            EntryRef::Item(item) => {
                out.push_str(&format!(
                    "<span class=\"kb-item-kind\">{}</span>\n<p>{}</p>\n\
                     <a class=\"kb-action\" href=\"{}\" rel=\"noopener\">Open</a>\n",
                    item.kind.label(),
                    escape(&item.description),
                    escape(&item.url),
                ));
            }
        }

        out.push_str("</article>\n");
        out
    }

    /// Search results with every query occurrence wrapped in `<mark>`.
    pub fn render_search_results(&self, results: &[SearchResult], query: &str) -> String {
        let mut out = format!(
            "<section class=\"kb-search-results\" data-query=\"{}\">\n",
            escape(query)
        );
        if results.is_empty() {
            out.push_str(&format!(
                "  <p class=\"kb-empty\">No results for \u{201c}{}\u{201d}.</p>\n",
                escape(query)
            ));
        }
        for result in results {
            let summary = truncate(&result.summary, self.truncate_at);
            out.push_str(&format!(
                "  <article class=\"kb-result kb-result--{kind} theme-{theme}\">\n    \
                 <span class=\"kb-result-kind\">{kind_label}</span>\n    \
                 <h3><a href=\"#{sid}/{id}\">{title}</a></h3>\n    <p>{summary}</p>\n    \
                 <span class=\"kb-result-section\">{sname}</span>\n  </article>\n",
                kind = format!("{:?}", result.kind).to_lowercase(),
                theme = escape(&result.theme),
                kind_label = result.kind.label(),
                sid = escape(&result.section_id),
                id = escape(&result.id),
                title = highlight(&result.title, query),
                summary = highlight(&summary, query),
                sname = escape(&result.section_name),
            ));
        }
        out.push_str("</section>\n");
        out
    }

    /// Empty state shown while the query is below the minimum length.
    pub fn render_search_prompt(&self) -> String {
        "<section class=\"kb-search-results kb-search-results--empty\">\n  \
         <p class=\"kb-empty\">Type at least 2 characters to search.</p>\n</section>\n"
            .to_string()
    }

    /// The access-log table: newest first, capped, with the total stated
    /// when rows were cut.
    pub fn render_access_log(&self, log: &AccessLog) -> String {
        let mut out = String::from(
            "<table class=\"kb-access-log\">\n<thead>\n<tr>\
             <th>User</th><th>Entry</th><th>Section</th><th>Type</th><th>When</th>\
             </tr>\n</thead>\n<tbody>\n",
        );
        for entry in log.recent() {
            out.push_str(&format!(
                "<tr><td>{user}</td><td>{item}</td><td>{section}</td>\
                 <td>{kind}</td><td>{at}</td></tr>\n",
                user = escape(&entry.user),
                item = escape(&entry.item),
                section = escape(&entry.section),
                kind = entry.kind.label(),
                at = entry.at.format("%Y-%m-%d %H:%M"),
            ));
        }
        out.push_str("</tbody>\n</table>\n");
        if log.len() > LOG_DISPLAY_CAP {
            out.push_str(&format!(
                "<p class=\"kb-log-note\">Showing {} of {} entries.</p>\n",
                LOG_DISPLAY_CAP,
                log.len()
            ));
        }
        out
    }

    /// Recoverable "not found" view for an unresolvable route.
    pub fn render_not_found(&self, fragment: &str) -> String {
        format!(
            "<section class=\"kb-not-found\">\n  <h1>Not found</h1>\n  \
             <p>Nothing matches <code>{}</code>.</p>\n  \
             <a class=\"kb-action\" href=\"#home\">Back to home</a>\n</section>\n",
            escape(fragment)
        )
    }

    /// Top-level error view (e.g. the content store failed to load).
    pub fn render_error(&self, message: &str) -> String {
        format!(
            "<section class=\"kb-error\">\n  <h1>Something went wrong</h1>\n  \
             <p>{}</p>\n</section>\n",
            escape(message)
        )
    }
}

fn markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, EntryKind, Section};
    use crate::store::memory::fixtures::StoreFixture;

    fn renderer() -> Renderer {
        Renderer::default()
    }

    #[test]
    fn stored_markup_renders_as_literal_text() {
        let mut section = Section::new("support", "Support");
        section.articles.push(Article::new(
            "a1".into(),
            "<script>alert('x')</script>".into(),
            "safe & sound".into(),
        ));
        let fragment = renderer().render_section(&section, None);
        assert!(!fragment.contains("<script>"));
        assert!(fragment.contains("&lt;script&gt;"));
        assert!(fragment.contains("safe &amp; sound"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let store = StoreFixture::support_kb();
        let section = store.section("support").unwrap();
        let first = renderer().render_section(section, None);
        let second = renderer().render_section(section, None);
        assert_eq!(first, second);
    }

    #[test]
    fn subcategory_filter_hides_untagged_articles() {
        let mut store = StoreFixture::support_kb();
        store.section_mut("support").unwrap().articles[0]
            .tags
            .push("tickets".into());
        let section = store.section("support").unwrap();
        let sub = section.subcategories[0].clone();

        let filtered = renderer().render_section(section, Some(&sub));
        assert!(filtered.contains("High Priority Ticket"));
        assert!(!filtered.contains("Password Reset Walkthrough"));

        let unfiltered = renderer().render_section(section, None);
        assert!(unfiltered.contains("Password Reset Walkthrough"));
    }

    #[test]
    fn section_view_truncates_long_summaries() {
        let mut section = Section::new("s", "S");
        let long = "word ".repeat(60);
        section
            .articles
            .push(Article::new("a1".into(), "Long".into(), long.clone()));
        let fragment = Renderer::new(40).render_section(&section, None);
        assert!(fragment.contains('…'));
        assert!(!fragment.contains(&long));
    }

    #[test]
    fn detail_view_shows_full_text_and_markdown() {
        let mut section = Section::new("s", "S");
        let mut article = Article::new("a1".into(), "Long".into(), "word ".repeat(60));
        article.details = Some("# Heading\n\nBody".into());
        section.articles.push(article);

        let fragment =
            Renderer::new(40).render_entry_detail(&section, EntryRef::Article(&section.articles[0]));
        assert!(!fragment.contains('…'));
        assert!(fragment.contains("<h1>Heading</h1>"));
    }

    #[test]
    fn search_results_highlight_the_query() {
        let store = StoreFixture::support_kb();
        let results = crate::search::search(&store, "priority");
        let fragment = renderer().render_search_results(&results, "priority");
        assert!(fragment.contains("<mark>Priority</mark>"));
    }

    #[test]
    fn access_log_renders_newest_first_with_total() {
        let mut log = AccessLog::new();
        for i in 0..22 {
            log.record("ana", format!("entry-{}", i), "support", EntryKind::Article);
        }
        let fragment = renderer().render_access_log(&log);
        assert!(fragment.contains("Showing 20 of 22 entries."));
        let first_row = fragment.find("entry-21").unwrap();
        let second_row = fragment.find("entry-20").unwrap();
        assert!(first_row < second_row);
        assert!(!fragment.contains("entry-1<"));
    }

    #[test]
    fn not_found_escapes_the_offending_fragment() {
        let fragment = renderer().render_not_found("#<img onerror=x>");
        assert!(fragment.contains("&lt;img"));
        assert!(!fragment.contains("<img"));
    }
}
