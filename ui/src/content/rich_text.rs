/// A run of localized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: bool,
}

/// Localized text with inline emphasis spans, authored as `plain *bold* plain`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    /// Split on `*` pairs. An opening marker without a partner stays literal.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = raw;

        while let Some(open) = rest.find('*') {
            let after_open = &rest[open + 1..];
            let Some(close) = after_open.find('*') else {
                break;
            };
            push(&mut segments, &rest[..open], false);
            push(&mut segments, &after_open[..close], true);
            rest = &after_open[close + 1..];
        }
        push(&mut segments, rest, false);

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text with the markers stripped.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

fn push(segments: &mut Vec<Segment>, text: &str, emphasis: bool) {
    if !text.is_empty() {
        segments.push(Segment {
            text: text.to_string(),
            emphasis,
        });
    }
}
