//! Fetched list pages per entity, and which pages a mutation makes stale.

use contracts::domain::common::{EntityKind, MutationKind};
use contracts::shared::envelope::Page;
use leptos::prelude::*;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Entity pages to drop after a server-confirmed mutation.
///
/// Voucher create/delete moves stock, so inventory pages go stale with them.
/// Renaming an item or an employee changes the joined names on vouchers.
pub const INVALIDATION_TABLE: &[(EntityKind, MutationKind, &[EntityKind])] = &[
    (EntityKind::Voucher, MutationKind::Create, &[EntityKind::Voucher, EntityKind::Inventory]),
    (EntityKind::Voucher, MutationKind::Update, &[EntityKind::Voucher]),
    (EntityKind::Voucher, MutationKind::Delete, &[EntityKind::Voucher, EntityKind::Inventory]),
    (EntityKind::Inventory, MutationKind::Create, &[EntityKind::Inventory]),
    (EntityKind::Inventory, MutationKind::Update, &[EntityKind::Inventory, EntityKind::Voucher]),
    (EntityKind::Inventory, MutationKind::Delete, &[EntityKind::Inventory]),
    (EntityKind::Employee, MutationKind::Create, &[EntityKind::Employee]),
    (EntityKind::Employee, MutationKind::Update, &[EntityKind::Employee, EntityKind::Voucher]),
    (EntityKind::Employee, MutationKind::Delete, &[EntityKind::Employee]),
];

pub fn invalidation_targets(kind: EntityKind, mutation: MutationKind) -> &'static [EntityKind] {
    INVALIDATION_TABLE
        .iter()
        .find(|(k, m, _)| *k == kind && *m == mutation)
        .map(|(_, _, targets)| *targets)
        .unwrap_or(&[])
}

type Entry = Arc<dyn Any + Send + Sync>;

/// Pages keyed by entity and encoded query
#[derive(Clone, Copy)]
pub struct QueryCache {
    entries: StoredValue<HashMap<(EntityKind, String), Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: StoredValue::new(HashMap::new()),
        }
    }

    pub fn get_page<E>(&self, kind: EntityKind, query: &str) -> Option<Page<E>>
    where
        E: Clone + Send + Sync + 'static,
    {
        self.entries.with_value(|entries| {
            entries
                .get(&(kind, query.to_string()))
                .and_then(|entry| entry.downcast_ref::<Page<E>>())
                .cloned()
        })
    }

    pub fn put_page<E>(&self, kind: EntityKind, query: String, page: Page<E>)
    where
        E: Send + Sync + 'static,
    {
        self.entries.update_value(|entries| {
            entries.insert((kind, query), Arc::new(page));
        });
    }

    pub fn invalidate(&self, kind: EntityKind) {
        self.entries.update_value(|entries| entries.retain(|(k, _), _| *k != kind));
    }

    /// Drop every page the mutation made stale
    pub fn apply_mutation(&self, kind: EntityKind, mutation: MutationKind) {
        let targets = invalidation_targets(kind, mutation);
        log::debug!("{:?} {} invalidates {:?}", mutation, kind, targets);
        for target in targets {
            self.invalidate(*target);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.with_value(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
