//! # Route grammar
//!
//! Views are addressed by URL-fragment style routes:
//!
//! ```text
//! #home
//! #section
//! #section/subcategory
//! #section/entry
//! #section/subcategory/entry
//! ```
//!
//! Parsing here is purely syntactic; whether a middle segment names a
//! subcategory or an entry is decided against the content store during
//! resolution (see [`crate::nav`]). `Display` produces the canonical
//! fragment, which is what history comparison uses.

use std::fmt;
use std::str::FromStr;

/// The home pseudo-section id.
pub const HOME: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Section {
        section: String,
        /// One or two trailing segments, still unresolved.
        segments: Vec<String>,
    },
}

impl Route {
    pub fn section(id: impl Into<String>) -> Self {
        Route::Section {
            section: id.into(),
            segments: Vec::new(),
        }
    }

    pub fn with_segments(id: impl Into<String>, segments: Vec<String>) -> Self {
        Route::Section {
            section: id.into(),
            segments,
        }
    }

    /// Canonical fragment, with the leading `#`.
    pub fn fragment(&self) -> String {
        format!("#{}", self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "{}", HOME),
            Route::Section { section, segments } => {
                write!(f, "{}", section)?;
                for seg in segments {
                    write!(f, "/{}", seg)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let s = s.trim().trim_matches('/');
        if s.is_empty() || s == HOME {
            return Ok(Route::Home);
        }

        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() > 3 {
            return Err(format!("Route has too many segments: {}", s));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(format!("Route has an empty segment: {}", s));
        }

        Ok(Route::Section {
            section: parts[0].to_string(),
            segments: parts[1..].iter().map(|p| p.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_forms() {
        assert_eq!(Route::from_str("").unwrap(), Route::Home);
        assert_eq!(Route::from_str("#home").unwrap(), Route::Home);
        assert_eq!(Route::from_str("#support").unwrap(), Route::section("support"));
        assert_eq!(
            Route::from_str("support/tickets").unwrap(),
            Route::with_segments("support", vec!["tickets".into()])
        );
        assert_eq!(
            Route::from_str("#support/tickets/sup001").unwrap(),
            Route::with_segments("support", vec!["tickets".into(), "sup001".into()])
        );
    }

    #[test]
    fn rejects_malformed_routes() {
        assert!(Route::from_str("a/b/c/d").is_err());
        assert!(Route::from_str("a//b").is_err());
    }

    #[test]
    fn display_round_trips_the_canonical_fragment() {
        for raw in ["home", "support", "support/tickets", "support/tickets/sup001"] {
            let route = Route::from_str(raw).unwrap();
            assert_eq!(route.to_string(), raw);
            assert_eq!(route.fragment(), format!("#{}", raw));
        }
    }

    #[test]
    fn leading_hash_and_trailing_slash_are_tolerated() {
        assert_eq!(
            Route::from_str("#support/").unwrap(),
            Route::section("support")
        );
    }
}
