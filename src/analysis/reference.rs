//! `$ref` value -> target address
//!
//! A `$ref` value is a URI reference. The path part is resolved against the
//! referencing document's URI; the fragment, when present, is a JSON Pointer
//! into the target document.

use std::borrow::Cow;

use tower_lsp::lsp_types::Url;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTarget {
    /// Absolute document identity, without fragment
    pub document: Url,
    /// Percent-decoded JSON Pointer
    pub pointer: Option<String>,
}

impl ReferenceTarget {
    /// Returns `None` when `reference` is not a valid URI reference.
    pub fn resolve(base: &Url, reference: &str) -> Option<Self> {
        let mut document = base
            .join(reference)
            .inspect_err(|e| debug!("Cannot resolve reference {:?}: {}", reference, e))
            .ok()?;

        let pointer = document.fragment().map(|fragment| {
            urlencoding::decode(fragment)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| fragment.to_string())
        });
        document.set_fragment(None);

        Some(Self { document, pointer })
    }
}
