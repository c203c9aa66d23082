//! Identifier generator port.
//!
//! Payments and favorites get string ids from an injected generator so that
//! production code can use random UUIDs while tests use predictable ids.

/// Port trait for unique identifier generation.
///
/// Implementations must never return the same id twice for the lifetime of
/// the process. The ledger calls `next_id` once per payment and once per
/// favorite it creates.
pub trait IdGenerator {
    /// Returns a fresh identifier.
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
