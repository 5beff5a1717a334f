//! Style tags embedded in rendered messages
//!
//! Messages mark emphasis with paired tags such as `<primary>name<primary>`.
//! [`tokenize`] turns a rendered message into [`Span`]s and [`Styler`] paints
//! them for the terminal.

use std::io::IsTerminal;

use anstyle::Style;

use crate::theme;

/// Semantic emphasis of a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    PlainText,
    Primary,
    Secondary,
    Error,
}

const TAGGED: [SpanStyle; 3] = [SpanStyle::Primary, SpanStyle::Secondary, SpanStyle::Error];

impl SpanStyle {
    /// Marker that opens and closes this style, `None` for plain text.
    #[must_use]
    pub fn tag(self) -> Option<&'static str> {
        match self {
            SpanStyle::PlainText => None,
            SpanStyle::Primary => Some("<primary>"),
            SpanStyle::Secondary => Some("<secondary>"),
            SpanStyle::Error => Some("<error>"),
        }
    }

    fn terminal_style(self) -> Style {
        match self {
            SpanStyle::PlainText => Style::new(),
            SpanStyle::Primary => theme::PRIMARY,
            SpanStyle::Secondary => theme::SECONDARY,
            SpanStyle::Error => theme::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: SpanStyle,
    pub text: String,
}

impl Span {
    fn new(style: SpanStyle, text: &str) -> Self {
        Span {
            style,
            text: text.to_string(),
        }
    }
}

/// Split `text` into plain and tagged spans.
///
/// A tag without a matching closing tag is kept as plain text. Tags inside a
/// tagged span are not interpreted.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    loop {
        let next = TAGGED
            .iter()
            .filter_map(|style| {
                let tag = style.tag()?;
                rest.find(tag).map(|start| (start, *style, tag))
            })
            .min_by_key(|(start, _, _)| *start);
        let Some((start, style, tag)) = next else {
            plain.push_str(rest);
            break;
        };

        let (before, opened) = rest.split_at(start);
        let inner = &opened[tag.len()..];
        if let Some(end) = inner.find(tag) {
            plain.push_str(before);
            if !plain.is_empty() {
                spans.push(Span::new(SpanStyle::PlainText, &plain));
                plain.clear();
            }
            if end > 0 {
                spans.push(Span::new(style, &inner[..end]));
            }
            rest = &inner[end + tag.len()..];
        } else {
            plain.push_str(before);
            plain.push_str(tag);
            rest = inner;
        }
    }

    if !plain.is_empty() {
        spans.push(Span::new(SpanStyle::PlainText, &plain));
    }
    spans
}

/// Paints spans with terminal colours, or drops the tags when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    /// Colour only when stderr is a terminal.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub fn colored() -> Self {
        Self { color: true }
    }

    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn apply(&self, style: Style, text: &str) -> String {
        if self.color && style != Style::new() {
            format!("{style}{text}{style:#}")
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn paint(&self, spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| self.apply(span.style.terminal_style(), &span.text))
            .collect()
    }

    /// Tokenize and paint a rendered message.
    #[must_use]
    pub fn style_message(&self, message: &str) -> String {
        self.paint(&tokenize(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(
            tokenize("no tags here"),
            vec![Span::new(SpanStyle::PlainText, "no tags here")]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_mixed_tags() {
        let spans = tokenize("Running <primary>build<primary> from <secondary>cbf.yml<secondary>\n");
        insta::assert_debug_snapshot!(spans, @r#"
        [
            Span {
                style: PlainText,
                text: "Running ",
            },
            Span {
                style: Primary,
                text: "build",
            },
            Span {
                style: PlainText,
                text: " from ",
            },
            Span {
                style: Secondary,
                text: "cbf.yml",
            },
            Span {
                style: PlainText,
                text: "\n",
            },
        ]
        "#);
    }

    #[test]
    fn test_unclosed_tag_is_plain() {
        assert_eq!(
            tokenize("a <error>b"),
            vec![Span::new(SpanStyle::PlainText, "a <error>b")]
        );
        assert_eq!(
            tokenize("<error>x <primary>y<primary>"),
            vec![
                Span::new(SpanStyle::PlainText, "<error>x "),
                Span::new(SpanStyle::Primary, "y"),
            ]
        );
    }

    #[test]
    fn test_nested_tags_are_literal() {
        assert_eq!(
            tokenize("<primary>a <error>b<error><primary>"),
            vec![Span::new(SpanStyle::Primary, "a <error>b<error>")]
        );
    }

    #[test]
    fn test_plain_styler_drops_tags() {
        let styler = Styler::plain();
        assert_eq!(
            styler.style_message("<error>cbf.txt<error> is an invalid yaml filename"),
            "cbf.txt is an invalid yaml filename"
        );
    }

    #[test]
    fn test_colored_styler_emits_escapes() {
        let styler = Styler::colored();
        let painted = styler.style_message("see <primary>cbf<primary>");
        assert!(painted.starts_with("see \x1b["));
        assert!(painted.contains("cbf"));
        assert!(painted.ends_with("\x1b[0m"));
        assert!(!painted.contains("<primary>"));
    }
}
