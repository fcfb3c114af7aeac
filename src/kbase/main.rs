use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kbase::api::{CmdMessage, KbApi, MessageLevel, SectionSummary};
use kbase::config::KbConfig;
use kbase::error::{KbError, Result};
use kbase::forms::{ArticleDraft, ArticlePatch, CaseDraft, CasePatch, SubcategoryDraft};
use kbase::model::CaseStatus;
use kbase::render::Renderer;
use kbase::session::LocalSession;
use kbase::store::fs::FileStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{AddEntity, Cli, Commands, EditEntity};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

const CONTENT_FILENAME: &str = "kb.json";

fn run() -> Result<()> {
    let cli = Cli::parse();
    let content_path = resolve_content_path(&cli);
    let config_dir = content_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = KbConfig::load(&config_dir).unwrap_or_default();

    // Init and config work without a loadable knowledge base.
    match &cli.command {
        Some(Commands::Init) => return handle_init(&content_path),
        Some(Commands::Config { key, value }) => {
            return handle_config(&config_dir, config, key.clone(), value.clone());
        }
        _ => {}
    }

    let user = cli.user.clone().or_else(|| config.user.clone());
    let session = LocalSession::new(user);
    let renderer = Renderer::new(config.truncate);
    let backend = FileStore::new(&content_path);
    let mut api = KbApi::open(backend, renderer, session)?;

    match cli.command {
        Some(Commands::Sections) | None => handle_sections(&api),
        Some(Commands::View { routes, log }) => handle_view(&mut api, routes, log),
        Some(Commands::Search { query }) => handle_search(&api, query),
        Some(Commands::Add { entity }) => handle_add(&mut api, entity),
        Some(Commands::Edit { entity }) => handle_edit(&mut api, entity),
        Some(Commands::Export { output }) => handle_export(&api, output),
        Some(Commands::Config { .. }) | Some(Commands::Init) => unreachable!("handled above"),
    }
}

/// Pick the content file: --file, then ./kb.json, then the user data dir.
fn resolve_content_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.file {
        return path.clone();
    }
    let local = PathBuf::from(CONTENT_FILENAME);
    if local.exists() {
        return local;
    }
    match ProjectDirs::from("com", "kbase", "kbase") {
        Some(dirs) => dirs.data_dir().join(CONTENT_FILENAME),
        None => local,
    }
}

fn handle_sections(api: &KbApi<FileStore>) -> Result<()> {
    let result = api.sections()?;
    print_sections(&result.sections);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &mut KbApi<FileStore>, routes: Vec<String>, with_log: bool) -> Result<()> {
    for route in routes {
        let result = api.view(&route)?;
        if let Some(fragment) = &result.fragment {
            println!("{}", fragment);
        }
        print_messages(&result.messages);
    }
    if with_log {
        let result = api.access_log()?;
        if let Some(fragment) = &result.fragment {
            println!("{}", fragment);
        }
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_search(api: &KbApi<FileStore>, query: String) -> Result<()> {
    let result = api.search(&query)?;
    if let Some(fragment) = &result.fragment {
        println!("{}", fragment);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut KbApi<FileStore>, entity: AddEntity) -> Result<()> {
    let result = match entity {
        AddEntity::Article {
            section,
            title,
            summary,
            details,
            tag,
        } => api.add_article(
            &section,
            ArticleDraft {
                title,
                summary,
                details,
                tags: tag,
            },
        )?,
        AddEntity::Case {
            section,
            title,
            summary,
            status,
            assignee,
            tag,
        } => api.add_case(
            &section,
            CaseDraft {
                title,
                summary,
                details: None,
                tags: tag,
                status: parse_status(status)?,
                assignee,
            },
        )?,
        AddEntity::Subsection {
            section,
            name,
            description,
        } => api.add_subcategory(&section, SubcategoryDraft { name, description })?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut KbApi<FileStore>, entity: EditEntity) -> Result<()> {
    let result = match entity {
        EditEntity::Article {
            section,
            id,
            title,
            summary,
            details,
            tag,
        } => api.edit_article(
            &section,
            &id,
            ArticlePatch {
                title,
                summary,
                details,
                tags: tag,
            },
        )?,
        EditEntity::Case {
            section,
            id,
            title,
            summary,
            status,
            assignee,
            tag,
        } => api.edit_case(
            &section,
            &id,
            CasePatch {
                title,
                summary,
                details: None,
                tags: tag,
                status: parse_status(status)?,
                assignee,
            },
        )?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(api: &KbApi<FileStore>, output: Option<PathBuf>) -> Result<()> {
    let result = api.export(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    mut config: KbConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            println!("user = {}", config.get("user")?);
            println!("truncate = {}", config.get("truncate")?);
        }
        (Some(key), None) => println!("{} = {}", key, config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            println!("{}", format!("{} set to {}", key, value).green());
        }
    }
    Ok(())
}

fn handle_init(content_path: &Path) -> Result<()> {
    FileStore::new(content_path).init()?;
    println!(
        "{}",
        format!("Created starter knowledge base at {}", content_path.display()).green()
    );
    Ok(())
}

fn parse_status(status: Option<String>) -> Result<Option<CaseStatus>> {
    status
        .map(|s| CaseStatus::from_str(&s).map_err(KbError::Validation))
        .transpose()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 32;
const TIME_WIDTH: usize = 14;

fn print_sections(sections: &[SectionSummary]) {
    if sections.is_empty() {
        println!("No sections found.");
        return;
    }

    for summary in sections {
        let name = truncate_to_width(&summary.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let updated = summary
            .last_updated
            .map(format_time_ago)
            .unwrap_or_else(|| format!("{:>width$}", "-", width = TIME_WIDTH));
        println!(
            "{}{}{}  {:>3} entries  {}",
            name.bold(),
            " ".repeat(padding),
            summary.id.dimmed(),
            summary.entry_count,
            updated.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
