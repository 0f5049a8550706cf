//! Core data types shared by the classifier, walker and renderer.

use serde::Serialize;

use super::path::NodePath;

/// Closed set of classifier outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    #[serde(rename = "primitive-string")]
    String,
    #[serde(rename = "primitive-number")]
    Number,
    #[serde(rename = "primitive-boolean")]
    Boolean,
    Null,
    /// `undefined`, or a reference that no longer resolves.
    Absent,
    Callable,
    #[serde(rename = "unique-symbol")]
    Symbol,
    #[serde(rename = "arbitrary-precision-integer")]
    BigInt,
    #[serde(rename = "calendar-date")]
    Date,
    Pattern,
    Exception,
    #[serde(rename = "structured-object")]
    Object,
    #[serde(rename = "ordered-list")]
    List,
    #[serde(rename = "associative-map")]
    Map,
    #[serde(rename = "distinct-value-set")]
    Set,
}

impl Tag {
    /// Every tag, in classifier dispatch order.
    pub const ALL: [Tag; 15] = [
        Tag::Null,
        Tag::Absent,
        Tag::List,
        Tag::Date,
        Tag::Pattern,
        Tag::Exception,
        Tag::Map,
        Tag::Set,
        Tag::BigInt,
        Tag::String,
        Tag::Number,
        Tag::Boolean,
        Tag::Symbol,
        Tag::Callable,
        Tag::Object,
    ];

    /// Stable name used in JSON output and logs.
    pub fn name(self) -> &'static str {
        match self {
            Tag::String => "primitive-string",
            Tag::Number => "primitive-number",
            Tag::Boolean => "primitive-boolean",
            Tag::Null => "null",
            Tag::Absent => "absent",
            Tag::Callable => "callable",
            Tag::Symbol => "unique-symbol",
            Tag::BigInt => "arbitrary-precision-integer",
            Tag::Date => "calendar-date",
            Tag::Pattern => "pattern",
            Tag::Exception => "exception",
            Tag::Object => "structured-object",
            Tag::List => "ordered-list",
            Tag::Map => "associative-map",
            Tag::Set => "distinct-value-set",
        }
    }

    /// Tags that never have children.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            Tag::String
                | Tag::Number
                | Tag::Boolean
                | Tag::Null
                | Tag::Absent
                | Tag::Symbol
                | Tag::BigInt
                | Tag::Date
                | Tag::Pattern
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic style category. Resolved to a colour by [`super::theme::ThemeColors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    String,
    Number,
    Boolean,
    Null,
    Callable,
    Symbol,
    Date,
    Pattern,
    Error,
    Container,
    Key,
    Guide,
    Marker,
    Title,
}

/// Disclosure state of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Nothing to expand; toggling has no visible effect.
    Leaf,
    Collapsed,
    Expanded,
}

/// What a row shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowKind {
    /// A classified value.
    Node {
        tag: Tag,
        summary: String,
        state: NodeState,
    },
    /// A child that is the same value as one of its ancestors.
    Circular { tag: Tag, target: NodePath },
    /// A child whose accessor raised.
    AccessFailed { message: String },
    /// Children past the node's window; `path` on the row is the parent's.
    Truncated { remaining: usize },
}

/// One visible line of the inspector tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectorRow {
    pub path: NodePath,
    pub depth: usize,
    /// Key shown before the summary; `None` for the root and truncation rows.
    pub label: Option<String>,
    #[serde(flatten)]
    pub kind: RowKind,
}

impl InspectorRow {
    /// Disclosure state; every non-node row is a leaf.
    pub fn state(&self) -> NodeState {
        match &self.kind {
            RowKind::Node { state, .. } => *state,
            _ => NodeState::Leaf,
        }
    }

    /// Tag of the value on this row, if the row shows one.
    pub fn tag(&self) -> Option<Tag> {
        match &self.kind {
            RowKind::Node { tag, .. } | RowKind::Circular { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Summary text of a node row.
    pub fn summary(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Node { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

/// A single line of styled output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment {
                text: text.to_string(),
                ..Default::default()
            }],
        }
    }

    /// Concatenated text with styling dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with 24-bit SGR escapes, reset at the end of every styled segment.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let mut codes = Vec::new();
            if segment.bold {
                codes.push("1".to_string());
            }
            if segment.italic {
                codes.push("3".to_string());
            }
            if let Some([r, g, b]) = segment.fg {
                codes.push(format!("38;2;{r};{g};{b}"));
            }
            if codes.is_empty() {
                out.push_str(&segment.text);
            } else {
                out.push_str(&format!("\x1b[{}m{}\x1b[0m", codes.join(";"), segment.text));
            }
        }
        out
    }
}

/// A segment of styled text within a line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Foreground color as [r, g, b].
    pub fg: Option<[u8; 3]>,
    /// Whether this segment is bold.
    pub bold: bool,
    /// Whether this segment is italic.
    pub italic: bool,
}
