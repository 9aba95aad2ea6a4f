//! Go-to-definition for `$ref` values
//!
//! Misses are never errors: a cursor outside every reference value yields
//! `None`, and a target that is not open (or a pointer it does not contain)
//! yields a link to the start of the target document.

use tower_lsp::lsp_types::{LocationLink, Position, Range, Url};
use tracing::debug;

use crate::analysis::reference::ReferenceTarget;
use crate::document::{DocumentRegistry, TextDocument};
use crate::parser::types::Span;

/// Resolves the reference under `position` in the document at `uri`.
pub fn on_definition_requested(
    registry: &DocumentRegistry,
    uri: &Url,
    position: Position,
) -> Option<LocationLink> {
    let document = registry.get(uri)?;
    resolve_definition(registry, document, document.position_to_offset(position))
}

/// Resolves the reference whose value contains `offset`.
pub fn resolve_definition(
    registry: &DocumentRegistry,
    document: &TextDocument,
    offset: usize,
) -> Option<LocationLink> {
    let symbols = document.symbols();
    if symbols.is_empty() {
        return None;
    }

    let symbol = symbols.reference_at(offset)?;
    let refers_to = symbol.refers_to.as_deref()?;
    let target = ReferenceTarget::resolve(document.uri(), refers_to)?;
    let target_range = target_range(registry, &target);

    debug!(
        "Resolved {} at {} in {} to {} {:?}",
        symbol.pointer,
        offset,
        document.uri(),
        target.document,
        target_range
    );

    Some(LocationLink {
        origin_selection_range: Some(origin_selection_range(document, symbol.value_span)),
        target_uri: target.document,
        target_range,
        target_selection_range: target_range,
    })
}

/// The value span without its surrounding quotes
fn origin_selection_range(document: &TextDocument, value: Span) -> Range {
    let start = value.offset + 1;
    let end = value.end().saturating_sub(1).max(start);
    Range::new(
        document.offset_to_position(start),
        document.offset_to_position(end),
    )
}

/// Span of the pointed-at property, or (0,0)-(0,0) when the target is not
/// open or has no such pointer.
fn target_range(registry: &DocumentRegistry, target: &ReferenceTarget) -> Range {
    let Some(document) = registry.get(&target.document) else {
        return Range::default();
    };

    target
        .pointer
        .as_deref()
        .and_then(|pointer| document.symbols().get(pointer))
        .map(|symbol| document.span_to_range(symbol.span))
        .unwrap_or_default()
}
