//! Generic element tree carried as stanza payload.

use std::collections::BTreeMap;
use std::fmt;

/// A namespaced element with attributes, child elements and text.
///
/// The `Display` implementation renders escaped XML and is meant for log
/// output; parsing wire data is the transport layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Self>,
    text: Option<String>,
}

impl Element {
    /// Creates an empty element without a namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Creates an empty element in `namespace`.
    #[must_use]
    pub fn namespaced(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name).with_namespace(namespace)
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child element in place.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns `true` when name and namespace both match.
    #[must_use]
    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.namespace() == Some(namespace)
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns all child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<{}", self.name)?;
        if let Some(namespace) = &self.namespace {
            write!(formatter, " xmlns=\"{}\"", escape(namespace))?;
        }
        for (key, value) in &self.attributes {
            write!(formatter, " {key}=\"{}\"", escape(value))?;
        }
        if self.children.is_empty() && self.text.is_none() {
            return formatter.write_str("/>");
        }
        formatter.write_str(">")?;
        if let Some(text) = &self.text {
            formatter.write_str(&escape(text))?;
        }
        for child in &self.children {
            write!(formatter, "{child}")?;
        }
        write!(formatter, "</{}>", self.name)
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
