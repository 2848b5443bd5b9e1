use serde::Serialize;

use crate::domain::Country;

/// Opaque caller-supplied handle naming the input element that should
/// receive focus after a country selection. The host owns focus; the
/// normalizer only requests the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FocusTarget(pub u64);

/// Notifications emitted by the normalizer, delivered synchronously and
/// in-order as the return value of each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NormalizerEvent {
    /// The canonical value propagated to the owning form changed.
    /// `None` means the field was cleared.
    ValueChanged { value: Option<String> },
    /// A different country became the selected one.
    CountryChanged { country: Country },
    /// Something the host should re-validate or re-render changed.
    StateChanged,
    /// The host should move input focus to the given target.
    FocusRequested { target: FocusTarget },
}

/// Country adoption deferred by one host tick after an externally assigned
/// value, so a hosting form-control harness can settle first. Produced by
/// `assign_external_value_deferred` and consumed by `apply_pending_update`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCountryUpdate {
    pub(super) iso2: String,
}

impl PendingCountryUpdate {
    pub fn iso2(&self) -> &str {
        &self.iso2
    }
}
