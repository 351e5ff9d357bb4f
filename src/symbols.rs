use std::collections::HashMap;

use crate::ast::Element;

/// Placeholder-to-element bindings for one translation.
///
/// Placeholders are named `<prefix>ELEM<seq>` where `seq` counts up from 0
/// for the lifetime of the table. A table belongs to exactly one session and
/// is dropped with it.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    prefix: String,
    counter: usize,
    elements: HashMap<String, Element>,
}

impl SymbolTable {
    pub fn new(prefix: impl Into<String>) -> Self {
        SymbolTable {
            prefix: prefix.into(),
            counter: 0,
            elements: HashMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bind `element` to a fresh placeholder and return the placeholder.
    pub fn bind(&mut self, element: Element) -> String {
        let placeholder = format!("{}ELEM{:02}", self.prefix, self.counter);
        self.counter += 1;
        tracing::trace!(%placeholder, kind = element.kind(), "bound element");
        self.elements.insert(placeholder.clone(), element);
        placeholder
    }

    pub fn get(&self, placeholder: &str) -> Option<&Element> {
        self.elements.get(placeholder)
    }

    pub fn contains(&self, placeholder: &str) -> bool {
        self.elements.contains_key(placeholder)
    }

    /// Number of bindings made so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every binding and restart the counter.
    pub fn clear(&mut self) {
        self.counter = 0;
        self.elements.clear();
    }
}

#[test]
fn test_placeholders_are_sequential() {
    let mut table = SymbolTable::new("@@");
    assert_eq!(table.bind(Element::Key("a".into())), "@@ELEM00");
    assert_eq!(table.bind(Element::Value("1".into())), "@@ELEM01");
    assert_eq!(table.get("@@ELEM00"), Some(&Element::Key("a".into())));
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.bind(Element::Key("b".into())), "@@ELEM00");
}
