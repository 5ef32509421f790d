//! Identity of durable records.

use core::fmt::Debug;
use core::hash::Hash;

/// A record stored by id in one of the durable collections (events,
/// inventory items, recipes). The persistence façade keys on [`Entity::id`]
/// and never looks at the rest of the record.
pub trait Entity {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;
}
