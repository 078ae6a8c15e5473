//! Human-readable one-line summaries of tool calls.

use serde_json::Value;

/// Display category for a tool call, each with a distinct leading glyph so
/// tool activity can be scanned at a glance in a chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressKind {
    Run,
    Write,
    Read,
    Fetch,
    Search,
}

/// Substring → category table. First match on the lower-cased tool name
/// wins, so order is the priority order.
const CATEGORIES: &[(&[&str], ProgressKind)] = &[
    (&["bash", "shell", "command"], ProgressKind::Run),
    (&["write"], ProgressKind::Write),
    (&["read", "file"], ProgressKind::Read),
    (&["web", "fetch", "browse"], ProgressKind::Fetch),
    (&["search", "grep", "glob"], ProgressKind::Search),
];

/// Produce a short progress line for one completed tool call.
pub fn format_tool_progress(tool_name: &str, params: &Value) -> String {
    let tool = tool_name.to_lowercase();
    for (needles, kind) in CATEGORIES {
        if needles.iter().any(|needle| tool.contains(needle)) {
            return render(*kind, params);
        }
    }
    format!("🔧 {tool_name}")
}

fn render(kind: ProgressKind, params: &Value) -> String {
    match kind {
        ProgressKind::Run => format!(
            "⚙️ Running: `{}`",
            truncate_chars(str_param(params, &["command"]).unwrap_or(""), 80)
        ),
        ProgressKind::Write => format!(
            "✏️ Writing: {}",
            truncate_chars(path_param(params), 80)
        ),
        ProgressKind::Read => format!(
            "📄 Reading: {}",
            truncate_chars(path_param(params), 80)
        ),
        ProgressKind::Fetch => format!(
            "🌐 Fetching: {}",
            truncate_chars(str_param(params, &["url"]).unwrap_or(""), 80)
        ),
        ProgressKind::Search => format!(
            "🔍 Searching: {}",
            truncate_chars(str_param(params, &["pattern", "query"]).unwrap_or(""), 60)
        ),
    }
}

fn str_param<'a>(params: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| params.get(*key).and_then(Value::as_str))
}

fn path_param(params: &Value) -> &str {
    str_param(params, &["path", "file_path"]).unwrap_or("file")
}

/// Hard character cap, not word-aware.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
