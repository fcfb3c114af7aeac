//! # Navigation controller
//!
//! Resolves a parsed [`Route`] against the content store and tracks the
//! browsing history. Resolution applies one unambiguous lookup order:
//!
//! 1. a lone trailing segment is tried as a subcategory id, then as an
//!    entry id (articles, then cases, then items);
//! 2. with two trailing segments, the first must be a subcategory and the
//!    second must be an entry.
//!
//! Anything unmatched is a NotFound view. Nothing is ever guessed to be an
//! item id; NotFound is a recoverable, user-visible state, not an error.

use crate::route::Route;
use crate::store::ContentStore;

/// A fully resolved view, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    SectionOverview {
        section_id: String,
        /// Active subcategory filter, if any.
        subcategory: Option<String>,
    },
    EntryDetail {
        section_id: String,
        /// Filter that was active when the entry was opened; preserved so
        /// closing the detail returns to the filtered overview.
        subcategory: Option<String>,
        entry_id: String,
    },
    NotFound {
        fragment: String,
    },
}

/// Resolve a route against the store. Pure read.
pub fn resolve(store: &ContentStore, route: &Route) -> View {
    let not_found = || View::NotFound {
        fragment: route.fragment(),
    };

    match route {
        Route::Home => View::Home,
        Route::Section { section, segments } => {
            let Some(sec) = store.section(section) else {
                return not_found();
            };
            match segments.as_slice() {
                [] => View::SectionOverview {
                    section_id: sec.id.clone(),
                    subcategory: None,
                },
                [seg] => {
                    if sec.subcategories.iter().any(|sc| &sc.id == seg) {
                        View::SectionOverview {
                            section_id: sec.id.clone(),
                            subcategory: Some(seg.clone()),
                        }
                    } else if store.entry(&sec.id, seg).is_some() {
                        View::EntryDetail {
                            section_id: sec.id.clone(),
                            subcategory: None,
                            entry_id: seg.clone(),
                        }
                    } else {
                        not_found()
                    }
                }
                [sub, entry] => {
                    if sec.subcategories.iter().any(|sc| &sc.id == sub)
                        && store.entry(&sec.id, entry).is_some()
                    {
                        View::EntryDetail {
                            section_id: sec.id.clone(),
                            subcategory: Some(sub.clone()),
                            entry_id: entry.clone(),
                        }
                    } else {
                        not_found()
                    }
                }
                _ => not_found(),
            }
        }
    }
}

/// State machine over the current route plus the visited-fragment history.
/// Navigation is unbounded and cyclic; there is no terminal state.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    history: Vec<String>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::start(Route::Home)
    }
}

impl Navigator {
    /// Initial state, normally parsed from the fragment present at load.
    pub fn start(initial: Route) -> Self {
        let history = vec![initial.fragment()];
        Self {
            current: initial,
            history,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Transition to `route`: resolve it and make it current. A history
    /// entry is pushed only when the canonical fragment differs from the
    /// current one, so idempotent navigation leaves history untouched.
    pub fn navigate(&mut self, store: &ContentStore, route: Route) -> View {
        let view = resolve(store, &route);
        if route.fragment() != self.current.fragment() {
            self.history.push(route.fragment());
        }
        self.current = route;
        view
    }

    /// Re-resolve the current route without touching history. Used after a
    /// store mutation so the open view (and its active filter) is rebuilt.
    pub fn refresh(&self, store: &ContentStore) -> View {
        resolve(store, &self.current)
    }
}
