//! Interface to the host input widget.

use crate::focus::ElementId;

/// Identifies one validator registration.
///
/// Registration hands back an id instead of growing an anonymous list, so
/// attach/detach lifecycles stay symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorId(u64);

impl ValidatorId {
    pub fn from_raw(raw: u64) -> Self {
        ValidatorId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Context the host hands each validator during a sweep.
#[derive(Debug, Clone, Copy)]
pub struct ValidateCtx {
    /// The host widget's `required` flag at sweep time.
    pub required: bool,
}

/// One entry in the host's validator pipeline. Returns a human-readable
/// violation message, or `None` when the value is acceptable.
pub type ValidatorFn = Box<dyn Fn(&ValidateCtx) -> Option<String>>;

/// The widget owning the literal input node.
///
/// The host keeps an ordered validator list and runs it on
/// [`validate`](HostWidget::validate); registrations from this crate are
/// append-only and never assume they are the only entry.
pub trait HostWidget {
    /// Handle of the host's native input node.
    fn native_input(&self) -> ElementId;

    /// Whether the field must be non-empty to validate.
    fn required(&self) -> bool;

    /// Append `validator` to the host's validator list.
    fn register_validator(&mut self, validator: ValidatorFn) -> ValidatorId;

    /// Remove a previously registered validator.
    fn remove_validator(&mut self, id: ValidatorId);

    /// Run the full validator sweep, passing each entry a
    /// [`ValidateCtx`] built from current widget state.
    fn validate(&mut self);
}
