use super::AggregateId;

/// Aggregate root of the system: a keyed record with a short caption.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id: AggregateId;

    /// Key of the record
    fn id(&self) -> Self::Id;

    /// Short caption for confirmations and notifications
    fn description(&self) -> String;
}
