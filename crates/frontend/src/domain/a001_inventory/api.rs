//! Inventory operations over `/inventario`.

use crate::shared::api::{ApiResult, Gateway, Operations, Resource, Transport};
use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use crate::shared::list_view::ListQuery;
use contracts::domain::a001_inventory::aggregate::{InventoryItem, Sku};
use contracts::domain::common::EntityKind;
use contracts::shared::envelope::Page;
use std::cmp::Ordering;

/// Free-text filter on the item name
pub const SEARCH_FILTER: &str = "search";

pub struct InventoryResource;

impl Resource for InventoryResource {
    type Entity = InventoryItem;
    type Wire = InventoryItem;
    type Draft = InventoryItem;

    const KIND: EntityKind = EntityKind::Inventory;
    const DEFAULT_SORT: &'static str = "sku";

    const CREATED: &'static str = "Artículo creado exitosamente";
    const UPDATED: &'static str = "Artículo actualizado exitosamente";
    const DELETED: &'static str = "Artículo eliminado exitosamente";
    const THE_ELEMENT: &'static str = "el artículo";

    fn from_wire(wire: InventoryItem) -> InventoryItem {
        wire
    }
}

pub type InventoryGateway<T> = Gateway<InventoryResource, T>;

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => self.sku.cmp(&other.sku),
            "nombre" => cmp_text(&self.name, &other.name),
            "cantidad" => self.quantity.cmp(&other.quantity),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for InventoryItem {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter) || self.sku.to_string().contains(filter)
    }
}

pub async fn fetch_items<T: Transport>(transport: &T) -> ApiResult<Vec<InventoryItem>> {
    InventoryGateway::new(transport.clone()).list().await
}

pub async fn fetch_items_page<T: Transport>(
    transport: &T,
    query: &ListQuery,
) -> ApiResult<Page<InventoryItem>> {
    InventoryGateway::new(transport.clone()).list_paged(query).await
}

pub async fn fetch_item<T: Transport>(transport: &T, sku: Sku) -> ApiResult<InventoryItem> {
    InventoryGateway::new(transport.clone()).get(sku).await
}

pub async fn create_item<T: Transport>(transport: &T, item: &InventoryItem) -> ApiResult<InventoryItem> {
    InventoryGateway::new(transport.clone()).create(item).await
}

pub async fn update_item<T: Transport>(
    transport: &T,
    sku: Sku,
    item: &InventoryItem,
) -> ApiResult<InventoryItem> {
    InventoryGateway::new(transport.clone()).update(sku, item).await
}

pub async fn delete_item<T: Transport>(transport: &T, sku: Sku) -> ApiResult<()> {
    InventoryGateway::new(transport.clone()).delete(sku).await
}

impl Operations for InventoryResource {
    async fn fetch_page<T: Transport>(transport: &T, query: &ListQuery) -> ApiResult<Page<InventoryItem>> {
        fetch_items_page(transport, query).await
    }

    async fn fetch_one<T: Transport>(transport: &T, key: Sku) -> ApiResult<InventoryItem> {
        fetch_item(transport, key).await
    }

    async fn create<T: Transport>(transport: &T, draft: &InventoryItem) -> ApiResult<InventoryItem> {
        create_item(transport, draft).await
    }

    async fn update<T: Transport>(transport: &T, key: Sku, draft: &InventoryItem) -> ApiResult<InventoryItem> {
        update_item(transport, key, draft).await
    }

    async fn remove<T: Transport>(transport: &T, key: Sku) -> ApiResult<()> {
        delete_item(transport, key).await
    }
}
