use crate::element::{AttrValue, Content, Element};

const RESERVED: &[&str] = &["id", "class", "style", "disabled"];

/// Serialize an element tree to markup.
///
/// Attribute order is fixed: `id`, `class`, `style`, then the remaining
/// attributes sorted by name. Boolean attributes are written bare when true
/// and dropped when false. Attribute entries named after a dedicated field
/// (`id`, `class`, `style`, `disabled`) are ignored.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if let Some(id) = &element.id {
        push_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }
    if !element.style.is_empty() {
        push_attr(out, "style", &element.style.to_css());
    }
    if element.disabled {
        out.push_str(" disabled");
    }

    for (name, value) in element.attributes.iter() {
        if RESERVED.contains(&name) {
            continue;
        }
        match value {
            AttrValue::Str(s) => push_attr(out, name, s),
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Bool(false) => {}
        }
    }
    out.push('>');

    if element.tag.is_void() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
