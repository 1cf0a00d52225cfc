// src/core/rules/admonitions.rs
use once_cell::sync::Lazy;
use regex::Regex;

pub static ADMONITION_BEGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#\+BEGIN_(\w+)").expect("valid admonition regex"));

/// Begin marker followed only by whitespace up to the end of its line.
static BEGIN_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#\+BEGIN_(\w+)\s*\n").expect("valid admonition begin regex"));

/// Callout type used for admonitions without a mapping.
pub const DEFAULT_CALLOUT: &str = "note";

/// Maps an admonition name to its callout type, case-insensitively.
#[must_use]
pub fn callout_type(admonition: &str) -> &'static str {
    match admonition.to_uppercase().as_str() {
        "TIP" => "tip",
        "WARNING" => "warning",
        "CAUTION" => "caution",
        "IMPORTANT" => "important",
        "QUOTE" => "quote",
        "EXAMPLE" => "example",
        "PINNED" => "info",
        _ => DEFAULT_CALLOUT,
    }
}

fn end_marker(admonition: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)#\+END_{}\b", regex::escape(admonition))).ok()
}

/// Rewrites `#+BEGIN_TYPE ... #+END_TYPE` regions into callout blocks.
///
/// The header keeps whatever preceded the begin marker on its line; body lines
/// are trimmed, blank ones dropped, and each is quoted at the indentation of the
/// begin line. A begin marker without a matching end marker is left alone.
#[must_use]
pub fn convert_admonitions(content: &str) -> (String, u64) {
    let mut output = String::with_capacity(content.len());
    let mut converted: u64 = 0;
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(caps) = BEGIN_LINE_RE.captures_at(content, search_from) {
        let (Some(begin), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = begin.end();

        let Some(end) = end_marker(name.as_str()).and_then(|re| re.find_at(content, body_start))
        else {
            search_from = name.end();
            continue;
        };

        let line_start = content[..begin.start()].rfind('\n').map_or(0, |i| i + 1);
        let indent: String = content[line_start..begin.start()]
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect();

        output.push_str(&content[cursor..begin.start()]);
        output.push_str(&format!("> [!{}]", callout_type(name.as_str())));
        for line in content[body_start..end.start()].trim().split('\n') {
            let line = line.trim();
            if !line.is_empty() {
                output.push('\n');
                output.push_str(&indent);
                output.push_str("> ");
                output.push_str(line);
            }
        }

        converted = converted.saturating_add(1);
        cursor = end.end();
        search_from = end.end();
    }

    output.push_str(&content[cursor..]);
    (output, converted)
}
