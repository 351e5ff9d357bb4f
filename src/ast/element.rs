use crate::ast::{Aggregator, Operator};

/// One parsed piece of a filter expression.
///
/// Elements are created by the extraction and resolution stages, bound to a
/// placeholder in the session's symbol table, and read by the compiler.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Field reference
    ///
    /// # Examples
    /// ```text
    /// [[year]]
    /// [[album.artist]]
    /// ```
    Key(String),

    /// Literal value, carried as raw text
    ///
    /// The braces are stripped; quotes and escaped markers are kept.
    ///
    /// # Examples
    /// ```text
    /// {"2018"}
    /// {"2018", "2019"}
    /// ```
    Value(String),

    /// Comparison operator
    Operator(Operator),

    /// Boolean aggregator
    Aggregator(Aggregator),

    /// A parenthesized (or top-level) group
    Composite(Composite),
}

impl Element {
    /// Short name of the element kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Key(_) => "key",
            Element::Value(_) => "value",
            Element::Operator(_) => "operator",
            Element::Aggregator(_) => "aggregator",
            Element::Composite(_) => "group",
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Element::Composite(c) => Some(c),
            _ => None,
        }
    }
}

/// Ordered children of one group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composite {
    pub elements: Vec<Element>,
}

impl Composite {
    pub fn new(elements: Vec<Element>) -> Self {
        Composite { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Nesting depth of this group, counting itself as 1.
    pub fn depth(&self) -> usize {
        1 + self
            .elements
            .iter()
            .filter_map(Element::as_composite)
            .map(Composite::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Composite {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
