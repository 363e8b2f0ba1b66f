use crate::models::{CurrencyConverter, OperationLog};

/// The composition contract consumed by the HTTP boundary.
///
/// An implementation owns the process-wide converter and operation log and
/// hands out shared references to them. Request handlers go through this
/// trait instead of holding their own instances, which keeps the single-log
/// invariant in one place and lets the boundary's tests swap in their own
/// composition.
pub trait Application {
    /// The converter pricing conversions against the loaded rate table.
    fn converter(&self) -> &CurrencyConverter;

    /// The shared log of recorded conversions.
    fn operations(&self) -> &OperationLog;
}
