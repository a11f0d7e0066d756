//! Shadow-aware focus resolution.
//!
//! The element that really holds focus may sit arbitrarily deep inside
//! nested shadow trees. Resolution is a bounded descent over an explicit
//! resolver interface: start from the document's focused element and keep
//! stepping into shadow-internal focus until none remains.

/// Opaque identifier for an element in the host tree.
///
/// Integration layers convert their own node handles to `ElementId` at the
/// boundary, keeping this crate UI-framework-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    pub fn from_raw(raw: u64) -> Self {
        ElementId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Resolves focus at the document level and through shadow boundaries.
///
/// A host without shadow trees simply returns `None` from
/// [`shadow_focused`](FocusResolver::shadow_focused) and the descent stops
/// at the document's focused element.
pub trait FocusResolver {
    /// The element holding focus at the document level, if any.
    fn focused(&self) -> Option<ElementId>;

    /// The element focused inside `element`'s shadow tree, if it hosts one.
    fn shadow_focused(&self, element: ElementId) -> Option<ElementId>;
}

/// Whether `input` is the element that really holds focus.
///
/// Recomputed in full on every call; focus can change at any time outside
/// the caller's control, so the result is never cached.
pub fn is_active(resolver: &impl FocusResolver, input: ElementId) -> bool {
    let Some(mut element) = resolver.focused() else {
        return false;
    };
    while let Some(inner) = resolver.shadow_focused(element) {
        element = inner;
    }
    element == input
}

/// Engine-facing handle for the host's native input node, bundling the node
/// with shadow-aware focus resolution.
#[derive(Debug)]
pub struct ShadowInput<R> {
    input: ElementId,
    resolver: R,
}

impl<R: FocusResolver> ShadowInput<R> {
    pub fn new(input: ElementId, resolver: R) -> Self {
        ShadowInput { input, resolver }
    }

    /// The wrapped native input node.
    pub fn input(&self) -> ElementId {
        self.input
    }

    /// Whether this mask control is currently active.
    pub fn is_active(&self) -> bool {
        is_active(&self.resolver, self.input)
    }
}
