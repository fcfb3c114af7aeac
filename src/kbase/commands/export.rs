use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KbError, Result};
use crate::render::Renderer;
use crate::store::ContentStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Export the whole knowledge base as a static bundle: one page per
/// section plus an index, packed into a tar.gz.
pub fn run(store: &ContentStore, renderer: &Renderer, output: Option<PathBuf>) -> Result<CmdResult> {
    if store.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to export."));
        return Ok(res);
    }

    let filename = output.unwrap_or_else(|| {
        PathBuf::from(format!("kbase-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H%M%S")))
    });
    let file = File::create(&filename).map_err(KbError::Io)?;
    write_archive(file, store, renderer)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} sections to {}",
        store.sections.len(),
        filename.display()
    )));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, store: &ContentStore, renderer: &Renderer) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    append_page(&mut tar, "kbase/index.html", "Knowledge base", &renderer.render_home(store))?;
    for section in &store.sections {
        let body = renderer.render_section(section, None);
        let name = format!("kbase/{}.html", sanitize_filename(&section.id));
        append_page(&mut tar, &name, &section.name, &body)?;
    }

    tar.finish().map_err(KbError::Io)?;
    Ok(())
}

fn append_page<W: Write>(
    tar: &mut tar::Builder<W>,
    entry_name: &str,
    title: &str,
    body: &str,
) -> Result<()> {
    let page = shell(title, body);

    let mut header = tar::Header::new_gnu();
    header.set_size(page.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();

    tar.append_data(&mut header, entry_name, page.as_bytes())
        .map_err(KbError::Io)?;
    Ok(())
}

/// Minimal shell page around a fragment. The bundle carries no stylesheet;
/// the class hooks are there for whoever embeds it.
fn shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        crate::render::html::escape(title),
        body
    )
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
