/// Snapshot of the host form field, passed into the normalizer instead of
/// being inherited from a framework base class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFieldState {
    pub focused: bool,
    pub touched: bool,
}
