use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Bold,
    Italic,
}

impl TextStyle {
    fn markup_tag(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
        }
    }
}

/// Byte range of `StyledText::text` rendered with `style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledText {
    pub text: String,
    pub spans: Vec<StyleSpan>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Styles the first occurrence of `substring`; text without it stays plain.
    pub fn with_span(text: impl Into<String>, substring: &str, style: TextStyle) -> Self {
        let text = text.into();
        let spans = text
            .find(substring)
            .map(|start| StyleSpan {
                start,
                end: start + substring.len(),
                style,
            })
            .into_iter()
            .collect();
        Self { text, spans }
    }

    /// Styles `range` of `text`; ranges outside the text or off a char
    /// boundary leave it plain.
    pub fn with_range(text: impl Into<String>, range: Range<usize>, style: TextStyle) -> Self {
        let text = text.into();
        let spans = text
            .get(range.clone())
            .map(|_| StyleSpan {
                start: range.start,
                end: range.end,
                style,
            })
            .into_iter()
            .collect();
        Self { text, spans }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Pango markup. Overlapping spans are not supported.
    pub fn to_markup(&self) -> String {
        let mut spans: Vec<&StyleSpan> = self
            .spans
            .iter()
            .filter(|span| span.start < span.end && span.end <= self.text.len())
            .collect();
        spans.sort_by_key(|span| span.start);

        let mut out = String::with_capacity(self.text.len() + 16);
        let mut cursor = 0;
        for span in spans {
            if span.start < cursor {
                continue;
            }
            let (Some(before), Some(inner)) = (
                self.text.get(cursor..span.start),
                self.text.get(span.start..span.end),
            ) else {
                continue;
            };
            push_escaped(&mut out, before);
            let tag = span.style.markup_tag();
            out.push_str(&format!("<{tag}>"));
            push_escaped(&mut out, inner);
            out.push_str(&format!("</{tag}>"));
            cursor = span.end;
        }
        push_escaped(&mut out, self.text.get(cursor..).unwrap_or_default());
        out
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}
