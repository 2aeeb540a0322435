use serde_json::Value;

use crate::logic::Renderers;
use crate::state::Variable;

/// Format one value for plain-text output; strings are printed without quotes.
fn plain(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `key=value` pairs of a variable in map order.
fn pairs(v: &Variable) -> String {
    v.values
        .iter()
        .map(|(k, val)| format!("{k}={}", plain(val)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Default line: id followed by all `key=value` pairs.
fn render_default(v: &Variable) -> String {
    format!("#{} {}", v.id, pairs(v))
}

/// Compact line: id and the bare values.
fn render_compact(v: &Variable) -> String {
    let vals: Vec<String> = v.values.values().map(plain).collect();
    format!("{} {}", v.id, vals.join(" "))
}

/// Tab-separated row: id, level, last update, pairs.
fn render_table(v: &Variable) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        v.id,
        v.level.map_or_else(|| "-".to_string(), |l| l.to_string()),
        v.updated_at.format("%Y-%m-%d %H:%M"),
        pairs(v)
    )
}

/// One JSON document per line.
fn render_json(v: &Variable) -> String {
    serde_json::to_string(v).unwrap_or_default()
}

/// What: Built-in text layouts for the command-line front-end.
///
/// Output:
/// - Renderers for `compact`, `table` and `json`; any other key uses the default line.
#[must_use]
pub fn text_renderers() -> Renderers<String> {
    Renderers::new(render_default)
        .with_layout("compact", render_compact)
        .with_layout("table", render_table)
        .with_layout("json", render_json)
}
