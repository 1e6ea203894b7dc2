//! Typst markup for a generated `Topic`.

use crate::generation::topic::Topic;

/// Section headings, in output order.
pub const HEADINGS: [&str; 5] = [
    "Title",
    "Introduction",
    "Tech Stack",
    "Methodology",
    "Future Scope",
];

/// Renders one `=` heading per field. List fields are joined with `"\n- "`,
/// so the first item carries no dash and an empty list renders as nothing.
pub fn render_topic(topic: &Topic) -> String {
    let title = normalize_newlines(&topic.title)
        .split('\n')
        .collect::<Vec<_>>()
        .join(" ");
    let title = escape_markup(&title);

    format!(
        "= {}: \"{}\"\n\n= {}\n{}\n\n= {}\n{}\n\n= {}\n{}\n\n= {}\n{}\n",
        HEADINGS[0],
        title,
        HEADINGS[1],
        escape_markup(&topic.introduction),
        HEADINGS[2],
        render_list(&topic.tech_stack),
        HEADINGS[3],
        render_list(&topic.methodology),
        HEADINGS[4],
        render_list(&topic.future_scope),
    )
}

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| escape_markup(item))
        .collect::<Vec<_>>()
        .join("\n- ")
}

/// Folds every line break Typst recognises (`\r\n`, `\r`, U+2028, U+2029)
/// into `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace(['\r', '\u{2028}', '\u{2029}'], "\n")
}

/// Escapes characters Typst would interpret as markup, and any `=` that
/// would otherwise start a heading line.
fn escape_markup(text: &str) -> String {
    let text = normalize_newlines(text);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let indent = line.len() - line.trim_start().len();
        out.push_str(&line[..indent]);
        let rest = &line[indent..];
        if rest.starts_with('=') {
            out.push('\\');
        }
        for c in rest.chars() {
            if matches!(c, '\\' | '#' | '$' | '*' | '_' | '`' | '@' | '<') {
                out.push('\\');
            }
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading_lines(markup: &str) -> Vec<&str> {
        markup.lines().filter(|l| l.starts_with("= ")).collect()
    }

    fn sample_topic() -> Topic {
        Topic {
            title: "ttyDB".to_string(),
            introduction: "Query data in natural language.".to_string(),
            tech_stack: vec!["Rust".into(), "DuckDB".into()],
            methodology: vec!["Parse".into(), "Plan".into(), "Execute".into()],
            future_scope: vec!["Charts".into()],
        }
    }

    #[test]
    fn test_renders_expected_document() {
        let markup = render_topic(&sample_topic());
        assert_eq!(
            markup,
            "= Title: \"ttyDB\"\n\n\
             = Introduction\nQuery data in natural language.\n\n\
             = Tech Stack\nRust\n- DuckDB\n\n\
             = Methodology\nParse\n- Plan\n- Execute\n\n\
             = Future Scope\nCharts\n"
        );
    }

    #[test]
    fn test_five_headings_in_fixed_order() {
        let markup = render_topic(&sample_topic());
        let headings = heading_lines(&markup);

        assert_eq!(headings.len(), 5);
        assert!(headings[0].starts_with("= Title"));
        for (line, name) in headings.iter().zip(HEADINGS).skip(1) {
            assert_eq!(*line, format!("= {name}"));
        }
    }

    #[test]
    fn test_empty_lists_render_without_dash() {
        let topic = Topic {
            title: String::new(),
            introduction: String::new(),
            ..Topic::default()
        };
        let markup = render_topic(&topic);

        assert_eq!(heading_lines(&markup).len(), 5);
        assert!(!markup.contains('-'));
        assert!(markup.contains("= Tech Stack\n\n\n= Methodology"));
    }

    #[test]
    fn test_content_cannot_add_headings() {
        let topic = Topic {
            title: "Multi\nline".to_string(),
            introduction: "= Not a heading\nplain".to_string(),
            tech_stack: vec!["= sneaky".into(), "ok".into()],
            methodology: vec![],
            future_scope: vec!["x\n== deeper".into()],
        };
        let markup = render_topic(&topic);

        assert_eq!(heading_lines(&markup).len(), 5);
        assert!(markup.contains("= Title: \"Multi line\""));
        assert!(markup.contains("\\= Not a heading"));
        assert!(markup.contains("\\= sneaky\n- ok"));
    }

    #[test]
    fn test_other_line_breaks_cannot_add_headings() {
        let topic = Topic {
            title: "One\r= Two".to_string(),
            introduction: "x\u{2028}= Heading".to_string(),
            tech_stack: vec!["a\r\n= b".into()],
            methodology: vec!["c\r= d".into()],
            future_scope: vec!["e\u{2029}= f".into()],
        };
        let markup = render_topic(&topic);

        assert_eq!(heading_lines(&markup).len(), 5);
        assert!(markup.contains("= Title: \"One = Two\""));
        assert!(markup.contains("x\n\\= Heading"));
        assert!(!markup.contains(['\r', '\u{2028}', '\u{2029}']));
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        assert_eq!(
            escape_markup("C# and $5 *bold* _it_ @ref <label>"),
            "C\\# and \\$5 \\*bold\\* \\_it\\_ \\@ref \\<label>"
        );
        assert_eq!(escape_markup("plain text"), "plain text");
    }
}
