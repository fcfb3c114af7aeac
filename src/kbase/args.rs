use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kb")]
#[command(about = "Browse and edit a knowledge base, rendering HTML fragments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Content file (defaults to ./kb.json, then the user data dir)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Display name recorded in the access log
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sections
    #[command(alias = "ls")]
    Sections,

    /// Render one or more views by route (e.g. support, support/tickets, support/sup001)
    #[command(alias = "v")]
    View {
        /// Routes to render, in order
        #[arg(required = true, num_args = 1..)]
        routes: Vec<String>,

        /// Append the session access log after the views
        #[arg(long)]
        log: bool,
    },

    /// Search all sections
    #[command(alias = "s")]
    Search {
        /// Free-text query (min 2 characters)
        query: String,
    },

    /// Add an article, case, or subsection
    Add {
        #[command(subcommand)]
        entity: AddEntity,
    },

    /// Edit an existing article or case
    Edit {
        #[command(subcommand)]
        entity: EditEntity,
    },

    /// Export the whole knowledge base as a static tar.gz bundle
    Export {
        /// Output path (defaults to kbase-<timestamp>.tar.gz)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (user, truncate)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create a starter knowledge base file
    Init,
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    /// Add an article to a section
    Article {
        /// Section id
        section: String,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        summary: String,

        /// Long-form body (markdown)
        #[arg(short, long)]
        details: Option<String>,

        /// Tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },

    /// Add a case to a section
    Case {
        /// Section id
        section: String,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        summary: String,

        /// Workflow status (open, in-progress, waiting, resolved, closed)
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        /// Tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },

    /// Add a subsection (filter facet) to a section
    Subsection {
        /// Section id
        section: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EditEntity {
    /// Edit an article; omitted fields are preserved
    Article {
        /// Section id
        section: String,

        /// Article id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        summary: Option<String>,

        #[arg(short, long)]
        details: Option<String>,

        /// Replace the tag list (repeatable)
        #[arg(long)]
        tag: Option<Vec<String>>,
    },

    /// Edit a case; omitted fields are preserved
    Case {
        /// Section id
        section: String,

        /// Case id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        summary: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        /// Replace the tag list (repeatable)
        #[arg(long)]
        tag: Option<Vec<String>>,
    },
}
