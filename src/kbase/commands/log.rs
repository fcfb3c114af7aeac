use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::log::AccessLog;
use crate::render::Renderer;

pub fn run(log: &AccessLog, renderer: &Renderer) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_fragment(renderer.render_access_log(log));
    if log.is_empty() {
        result.add_message(CmdMessage::info("No views recorded this session."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;

    #[test]
    fn empty_log_still_renders_a_table() {
        let log = AccessLog::new();
        let result = run(&log, &Renderer::default()).unwrap();
        assert!(result.fragment.unwrap().contains("kb-access-log"));
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn recorded_views_show_up() {
        let mut log = AccessLog::new();
        log.record("ana", "Some article", "Support", EntryKind::Article);
        let result = run(&log, &Renderer::default()).unwrap();
        assert!(result.fragment.unwrap().contains("Some article"));
    }
}
