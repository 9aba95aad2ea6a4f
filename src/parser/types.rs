//! Owned node tree produced by the parser

/// Byte range of a node within its document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Half-open containment: `offset..offset + length`
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Members are `Property` nodes
    Object(Vec<Node>),
    Array(Vec<Node>),
    /// `[key, value]` when well-formed, fewer children for incomplete input
    Property(Vec<Node>),
    /// Decoded string value
    String(String),
    /// Raw number literal
    Number(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            span: Span::new(offset, length),
        }
    }

    /// Child nodes of composite kinds; empty for leaves
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Object(children)
            | NodeKind::Array(children)
            | NodeKind::Property(children) => children,
            NodeKind::String(_) | NodeKind::Number(_) | NodeKind::Boolean(_) | NodeKind::Null => {
                &[]
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Object(_) | NodeKind::Array(_))
    }
}
