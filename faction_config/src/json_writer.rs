//! Canonical-output helpers shared by the schema writers.
//!
//! Output is pretty-printed with a 2-space indent and a fixed field
//! order decided by each schema. Only `\` and `"` are escaped; the
//! restricted character set these configs use needs nothing more.

pub(crate) fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

pub(crate) fn string_field(key: &str, value: &str) -> String {
    format!("\"{key}\": \"{}\"", escape(value))
}

pub(crate) fn int_field(key: &str, value: i32) -> String {
    format!("\"{key}\": {value}")
}

/// Render `fields` as an object whose closing brace sits at `indent`.
pub(crate) fn render_object(fields: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent + 2);
    let mut out = String::from("{\n");
    for (i, field) in fields.iter().enumerate() {
        out.push_str(&inner);
        out.push_str(field);
        if i + 1 < fields.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&pad);
    out.push('}');
    out
}

/// Render pre-rendered `items` as a multi-line array whose closing
/// bracket sits at `indent`. Empty arrays collapse to `[]`.
pub(crate) fn render_array(items: &[String], indent: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent + 2);
    let mut out = String::from("[\n");
    for (i, item) in items.iter().enumerate() {
        out.push_str(&inner);
        out.push_str(item);
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&pad);
    out.push(']');
    out
}

/// Render a string array inline: `["A", "B"]`.
pub(crate) fn render_string_array(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|value| format!("\"{}\"", escape(value)))
        .collect();
    format!("[{}]", quoted.join(", "))
}
