//! Result printing.

use anyhow::Result;
use jsonsieve::{FilteredItem, HIGHLIGHT_CLASS};

/// Renders results as pretty JSON; `null` when no search is active.
pub fn render_json(results: Option<&[FilteredItem]>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&results)?)
}

/// Renders results as plain text blocks.
///
/// The title property heads each block; the other matched properties follow,
/// indented. Highlights become `[...]` and the HTML line breaks and spacing
/// are turned back into plain whitespace.
pub fn render_text(results: Option<&[FilteredItem]>, title_property: &str) -> String {
    let Some(results) = results else {
        return "no active search\n".to_string();
    };
    if results.is_empty() {
        return "no matches\n".to_string();
    }

    let mut out = String::new();
    for item in results {
        let heading = item
            .get(title_property)
            .map(terminal_text)
            .or_else(|| item.id().map(|id| id.to_string()))
            .unwrap_or_else(|| "(untitled)".to_string());
        out.push_str(&heading);
        out.push('\n');

        for (name, display) in item.fields().filter(|(name, _)| *name != title_property) {
            let text = terminal_text(display).replace('\n', "\n    ");
            out.push_str(&format!("  {}: {}\n", name, text));
        }
    }
    out
}

/// Converts highlight markup into terminal-friendly text.
///
/// Each highlight opening tag and the first `</span>` after it become `[`
/// and `]`; any other `</span>` is left alone. `<br/>` and `&nbsp;` are
/// undone everywhere, so record text that literally contains them is
/// rewritten too.
pub fn terminal_text(display: &str) -> String {
    unwrap_highlights(display)
        .replace("<br/>", "")
        .replace("&nbsp;", " ")
}

const SPAN_CLOSE: &str = "</span>";

fn unwrap_highlights(display: &str) -> String {
    let open = format!("<span class=\"{}\">", HIGHLIGHT_CLASS);
    let mut out = String::with_capacity(display.len());
    let mut rest = display;
    while let Some(start) = rest.find(&open) {
        out.push_str(&rest[..start]);
        let inner = &rest[start + open.len()..];
        let Some(end) = inner.find(SPAN_CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };
        out.push('[');
        out.push_str(&inner[..end]);
        out.push(']');
        rest = &inner[end + SPAN_CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonsieve::{filter_items, FilterConfig};
    use serde_json::json;

    fn banana_results() -> Vec<FilteredItem> {
        let records = vec![
            json!({"_id": "a", "name": "Apple", "color": "red"}),
            json!({"_id": "b", "name": "Banana", "color": "yellow"}),
        ];
        let config = FilterConfig::new().with_search_properties(["name", "color"]);
        filter_items(&records, Some("yel"), &config).unwrap().unwrap()
    }

    #[test]
    fn json_null_when_inactive() {
        assert_eq!(render_json(None).unwrap(), "null");
    }

    #[test]
    fn json_empty_array_when_no_matches() {
        assert_eq!(render_json(Some(&[][..])).unwrap(), "[]");
    }

    #[test]
    fn json_results() {
        let results = banana_results();
        let text = render_json(Some(results.as_slice())).unwrap();
        assert!(text.contains("\"_id\": \"b\""));
        assert!(text.contains("yel</span>low"));
    }

    #[test]
    fn text_results() {
        let results = banana_results();
        assert_eq!(
            render_text(Some(results.as_slice()), "name"),
            "Banana\n  color: [yel]low\n"
        );
    }

    #[test]
    fn text_states() {
        assert_eq!(render_text(None, "name"), "no active search\n");
        assert_eq!(render_text(Some(&[][..]), "name"), "no matches\n");
    }

    #[test]
    fn terminal_text_unwraps_markup() {
        let display = "{<br/>\n&nbsp;&nbsp;&nbsp;&nbsp;\"city\": \"<span class=\"highlight\">Lyon</span>\"\n<br/>}";
        assert_eq!(terminal_text(display), "{\n    \"city\": \"[Lyon]\"\n}");
    }

    #[test]
    fn terminal_text_keeps_unpaired_closing_tags() {
        let display = "a</span> <span class=\"highlight\">b</span> c</span>";
        assert_eq!(terminal_text(display), "a</span> [b] c</span>");
    }

    #[test]
    fn terminal_text_keeps_unclosed_opening_tag() {
        let display = "x <span class=\"highlight\">y";
        assert_eq!(terminal_text(display), display);
    }
}
