use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// A heading level, `1..=6` (`h1`..`h6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    const NAMES: [&'static str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn name(self) -> &'static str {
        Self::NAMES[usize::from(self.0 - 1)]
    }
}

/// Element tags known by name. Anything else lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Heading(HeadingLevel),
    Img,
    A,
    Button,
    Input,
    Select,
    Textarea,
    Label,
    Form,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    Main,
    Nav,
    Header,
    Footer,
    Aside,
    Div,
    Span,
    P,
    Other(String),
}

impl Tag {
    pub fn parse(name: &str) -> Self {
        match name {
            "img" => Tag::Img,
            "a" => Tag::A,
            "button" => Tag::Button,
            "input" => Tag::Input,
            "select" => Tag::Select,
            "textarea" => Tag::Textarea,
            "label" => Tag::Label,
            "form" => Tag::Form,
            "table" => Tag::Table,
            "thead" => Tag::Thead,
            "tbody" => Tag::Tbody,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,
            "main" => Tag::Main,
            "nav" => Tag::Nav,
            "header" => Tag::Header,
            "footer" => Tag::Footer,
            "aside" => Tag::Aside,
            "div" => Tag::Div,
            "span" => Tag::Span,
            "p" => Tag::P,
            other => match other.as_bytes() {
                [b'h', d @ b'1'..=b'6'] => match HeadingLevel::new(d - b'0') {
                    Some(level) => Tag::Heading(level),
                    None => Tag::Other(other.to_string()),
                },
                _ => Tag::Other(other.to_string()),
            },
        }
    }


    pub fn as_str(&self) -> &str {
        match self {
            Tag::Heading(level) => level.name(),
            Tag::Img => "img",
            Tag::A => "a",
            Tag::Button => "button",
            Tag::Input => "input",
            Tag::Select => "select",
            Tag::Textarea => "textarea",
            Tag::Label => "label",
            Tag::Form => "form",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Main => "main",
            Tag::Nav => "nav",
            Tag::Header => "header",
            Tag::Footer => "footer",
            Tag::Aside => "aside",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::P => "p",
            Tag::Other(name) => name,
        }
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Tag::Heading(level) => Some(level.get()),
            _ => None,
        }
    }

    /// Sectioning tags that open a landmark region.
    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Tag::Main | Tag::Nav | Tag::Header | Tag::Footer | Tag::Aside
        )
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Tag::Button | Tag::A | Tag::Input | Tag::Select)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node is: a plain element, or a composite component whose
/// internals are not inspectable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element(Tag),
    Component(String),
}

impl NodeKind {
    pub fn element(name: &str) -> Self {
        NodeKind::Element(Tag::parse(name))
    }

    pub fn tag(&self) -> Option<&Tag> {
        match self {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Component(_) => None,
        }
    }

    /// Label used in violation snapshots: the tag name, or `Component`.
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Element(tag) => tag.as_str(),
            NodeKind::Component(_) => "Component",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Element(tag) => f.write_str(tag.as_str()),
            NodeKind::Component(name) => write!(f, "<{name}>"),
        }
    }
}

/// Violation severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// A single property value.
///
/// Event handlers carry no payload: rules only ever ask whether one is
/// attached.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Handler,
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    /// JavaScript-style truthiness, which is what markup authors expect.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::Handler | PropValue::List(_) | PropValue::Map(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key inside a `Map` value (e.g. a `style` object).
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        match self {
            PropValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Convert a JSON value. `key` decides whether a value marks an event handler.
    pub fn from_json(key: &str, value: &serde_json::Value) -> Self {
        use serde_json::Value;
        if is_handler_key(key) && matches!(value, Value::String(_) | Value::Bool(true)) {
            return PropValue::Handler;
        }
        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(*b),
            Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => PropValue::Text(s.clone()),
            Value::Array(items) => {
                PropValue::List(items.iter().map(|v| PropValue::from_json("", v)).collect())
            }
            Value::Object(map) => PropValue::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), PropValue::from_json(k, v)))
                    .collect(),
            ),
        }
    }
}

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `onClick`, `onKeyDown`, ... : `on` followed by an uppercase letter.
pub fn is_handler_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next() == Some('o')
        && chars.next() == Some('n')
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_none(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            // Integral values go back out as integers, as they came in.
            PropValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::Text(s) => serializer.serialize_str(s),
            PropValue::Handler => serializer.serialize_str("[handler]"),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropValue {
    fn from(entries: [(&str, &str); N]) -> Self {
        PropValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), PropValue::from(v)))
                .collect(),
        )
    }
}

/// The property bag of a node. Any key may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when the key is present and truthy.
    pub fn truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Props(iter.into_iter().collect())
    }
}

/// One entry in a node's child list. Only `Node` children are walked.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Text(String),
    Opaque(PropValue),
}

impl Child {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Child::Node(_) => true,
            Child::Text(s) => !s.is_empty(),
            Child::Opaque(v) => v.is_truthy(),
        }
    }
}

/// One element of the inspected UI tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub props: Props,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// An element node, e.g. `Node::element("img")`.
    pub fn element(name: &str) -> Self {
        Self::new(NodeKind::element(name))
    }

    pub fn component(name: &str) -> Self {
        Self::new(NodeKind::Component(name.to_string()))
    }

    pub fn prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Attach an event handler marker under `key` (e.g. `onClick`).
    pub fn handler(mut self, key: &str) -> Self {
        self.props.insert(key, PropValue::Handler);
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.kind.tag()
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }

    /// Direct children that are nodes, in order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Whether the node has any truthy child content.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Child::is_truthy)
    }

    /// The text of a node whose only child is a single text run.
    pub fn text_content(&self) -> Option<&str> {
        match self.children.as_slice() {
            [Child::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.child_nodes().map(Node::subtree_len).sum::<usize>()
    }
}

/// Errors that can occur while loading a tree document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an element object at {path}")]
    NotAnElement { path: String },

    #[error("props at {path} must be an object")]
    InvalidProps { path: String },
}
