//! Typed CRUD over one REST collection.
//!
//! A `Resource` names the collection and its wire types; `Gateway` turns
//! list/get/create/update/delete/list_paged calls into requests and unwraps
//! the `{ meta, data }` envelope. Drafts are forwarded as they are.

use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::shared::list_view::query::{encode_query, ListQuery};
use contracts::domain::common::{AggregateId, AggregateRoot, EntityKind};
use contracts::shared::envelope::{Meta, Page};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Key type of a resource's entity
pub type Key<R> = <<R as Resource>::Entity as AggregateRoot>::Id;

#[allow(async_fn_in_trait)]
pub trait Resource: Sized + Send + Sync + 'static {
    type Entity: AggregateRoot + Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Shape the server answers with
    type Wire: DeserializeOwned;
    /// Shape posted on create/update
    type Draft: Serialize + Clone + Debug + Send + Sync + 'static;

    const KIND: EntityKind;
    /// Primary sort field, used when the address bar names none
    const DEFAULT_SORT: &'static str;
    /// False when update answers with a message instead of the record
    const UPDATE_RETURNS_ENTITY: bool = true;

    const CREATED: &'static str;
    const UPDATED: &'static str;
    const DELETED: &'static str;
    /// Noun with article for error messages, e.g. "el artículo"
    const THE_ELEMENT: &'static str;

    fn from_wire(wire: Self::Wire) -> Self::Entity;

    /// One page of the collection; the server pages by default
    async fn list_paged<T: Transport>(
        gateway: &Gateway<Self, T>,
        query: &ListQuery,
    ) -> ApiResult<Page<Self::Entity>> {
        gateway.fetch_paged(query).await
    }
}

pub struct Gateway<R, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone> Clone for Gateway<R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T: Transport> Gateway<R, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn collection_path() -> String {
        format!("/{}", R::KIND.collection_name())
    }

    fn item_path(key: &Key<R>) -> String {
        format!("/{}/{}", R::KIND.collection_name(), key.as_string())
    }

    fn encode(draft: &R::Draft) -> ApiResult<String> {
        serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))
    }

    async fn call<D: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<D> {
        let outcome = match self.transport.send(&request).await {
            Ok(response) => unwrap_envelope(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::warn!("{} {} failed: {}", request.method, request.path, e);
        }
        outcome
    }

    pub async fn list(&self) -> ApiResult<Vec<R::Entity>> {
        let wire: Vec<R::Wire> = self.call(HttpRequest::get(Self::collection_path())).await?;
        Ok(wire.into_iter().map(R::from_wire).collect())
    }

    pub async fn get(&self, key: Key<R>) -> ApiResult<R::Entity> {
        let wire: R::Wire = self.call(HttpRequest::get(Self::item_path(&key))).await?;
        Ok(R::from_wire(wire))
    }

    pub async fn create(&self, draft: &R::Draft) -> ApiResult<R::Entity> {
        log::debug!("create {}: {:?}", R::KIND, draft);
        let body = Self::encode(draft)?;
        let wire: R::Wire = self
            .call(HttpRequest::post(Self::collection_path(), body))
            .await?;
        Ok(R::from_wire(wire))
    }

    pub async fn update(&self, key: Key<R>, draft: &R::Draft) -> ApiResult<R::Entity> {
        log::debug!("update {} {}: {:?}", R::KIND, key.as_string(), draft);
        let request = HttpRequest::put(Self::item_path(&key), Self::encode(draft)?);
        if R::UPDATE_RETURNS_ENTITY {
            let wire: R::Wire = self.call(request).await?;
            Ok(R::from_wire(wire))
        } else {
            let _: serde_json::Value = self.call(request).await?;
            self.get(key).await
        }
    }

    pub async fn delete(&self, key: Key<R>) -> ApiResult<()> {
        log::debug!("delete {} {}", R::KIND, key.as_string());
        let _: serde_json::Value = self.call(HttpRequest::delete(Self::item_path(&key))).await?;
        Ok(())
    }

    pub async fn list_paged(&self, query: &ListQuery) -> ApiResult<Page<R::Entity>> {
        R::list_paged(self, query).await
    }

    /// `GET /{collection}/paginated?{query}`
    pub async fn fetch_paged(&self, query: &ListQuery) -> ApiResult<Page<R::Entity>> {
        let request = HttpRequest::get(format!("{}/paginated", Self::collection_path()))
            .with_query(encode_query(query));
        let page: Page<R::Wire> = self.call(request).await?;
        Ok(page.map(R::from_wire))
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    meta: Meta,
    #[serde(default)]
    data: serde_json::Value,
}

fn failure_message(data: &serde_json::Value) -> Option<String> {
    data.get("mensaje")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// Check the HTTP status and envelope status, then decode `data`
pub fn unwrap_envelope<D: DeserializeOwned>(response: HttpResponse) -> ApiResult<D> {
    if !response.is_success() {
        let message = serde_json::from_str::<RawEnvelope>(&response.body)
            .ok()
            .and_then(|env| failure_message(&env.data))
            .unwrap_or_else(|| {
                let body = response.body.trim();
                if body.is_empty() {
                    "sin detalle".to_string()
                } else {
                    body.chars().take(200).collect()
                }
            });
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }

    let envelope: RawEnvelope = serde_json::from_str(&response.body)?;
    if !envelope.meta.is_ok() {
        let message = failure_message(&envelope.data)
            .unwrap_or_else(|| format!("Operación rechazada ({})", envelope.meta.status));
        return Err(ApiError::Envelope(message));
    }
    Ok(serde_json::from_value(envelope.data)?)
}
