//! Symbol table builder
//!
//! Walks the node tree once and records one [`Symbol`] per well-formed
//! property, keyed by its JSON Pointer. Root is `""`, object members append
//! `/<key>`, array elements append `/<index>`. Keys are used verbatim.

use indexmap::IndexMap;
use tracing::debug;

use crate::parser::types::{Node, NodeKind, Span};

/// Key that marks a property as a reference
pub const REF_KEY: &str = "$ref";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub pointer: String,
    /// Span of the whole property (key through value)
    pub span: Span,
    /// Span of the value node, quotes included for strings
    pub value_span: Span,
    /// Raw `$ref` value; present only for references
    pub refers_to: Option<String>,
}

impl Symbol {
    pub fn is_reference(&self) -> bool {
        self.refers_to.is_some()
    }
}

/// Pointer -> symbol for exactly one version of one document.
///
/// Duplicate keys at the same level collide on the pointer and the last
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.pointer.clone(), symbol);
    }

    pub fn get(&self, pointer: &str) -> Option<&Symbol> {
        self.symbols.get(pointer)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in traversal order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn pointers(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn references(&self) -> impl Iterator<Item = &Symbol> {
        self.iter().filter(|symbol| symbol.is_reference())
    }

    /// The reference whose value span contains `offset`
    pub fn reference_at(&self, offset: usize) -> Option<&Symbol> {
        self.references()
            .find(|symbol| symbol.value_span.contains(offset))
    }
}

/// Builds the table for a freshly parsed tree. No tree means an empty table.
pub fn build(root: Option<&Node>) -> SymbolTable {
    let mut table = SymbolTable::default();

    if let Some(root) = root {
        visit(root, "", &mut table);
    }

    debug!(
        symbols = table.len(),
        references = table.references().count(),
        "Built symbol table"
    );
    table
}

fn visit(node: &Node, path: &str, table: &mut SymbolTable) {
    match &node.kind {
        NodeKind::Object(members) => {
            for member in members {
                visit(member, path, table);
            }
        }
        NodeKind::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                visit(element, &format!("{path}/{index}"), table);
            }
        }
        NodeKind::Property(_) => visit_property(node, path, table),
        NodeKind::String(_) | NodeKind::Number(_) | NodeKind::Boolean(_) | NodeKind::Null => {}
    }
}

fn visit_property(property: &Node, path: &str, table: &mut SymbolTable) {
    // incomplete property: its value cannot be trusted either
    let [key, value] = property.children() else {
        return;
    };
    let Some(key) = key.as_str() else {
        return;
    };

    let pointer = format!("{path}/{key}");
    let refers_to = match (key, &value.kind) {
        (REF_KEY, NodeKind::String(target)) => Some(target.clone()),
        _ => None,
    };

    table.insert(Symbol {
        pointer: pointer.clone(),
        span: property.span,
        value_span: value.span,
        refers_to,
    });

    if value.is_composite() {
        visit(value, &pointer, table);
    }
}
