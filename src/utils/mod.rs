use chrono::Utc;
use uuid::Uuid;

/// Fresh opaque identifier for server-side created entities.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time as an ISO-8601 string, the timestamp format the frontend
/// stores and displays.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Render markdown to HTML for AI-produced text (summaries, tutor replies).
pub fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_emphasis_and_tables() {
        let html = render_markdown("**clé** et ~~barré~~");
        assert!(html.contains("<strong>clé</strong>"));
        assert!(html.contains("<del>barré</del>"));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(new_id(), new_id());
    }
}
