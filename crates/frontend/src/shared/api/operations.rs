//! Operations the list and form pages call.
//!
//! Each entity implements this with the functions in its `api` module, so
//! view models never build requests or gateways themselves.

use super::error::ApiResult;
use super::gateway::{Key, Resource};
use super::transport::Transport;
use crate::shared::list_view::query::ListQuery;
use contracts::shared::envelope::Page;

#[allow(async_fn_in_trait)]
pub trait Operations: Resource {
    async fn fetch_page<T: Transport>(transport: &T, query: &ListQuery) -> ApiResult<Page<Self::Entity>>;

    async fn fetch_one<T: Transport>(transport: &T, key: Key<Self>) -> ApiResult<Self::Entity>;

    async fn create<T: Transport>(transport: &T, draft: &Self::Draft) -> ApiResult<Self::Entity>;

    async fn update<T: Transport>(
        transport: &T,
        key: Key<Self>,
        draft: &Self::Draft,
    ) -> ApiResult<Self::Entity>;

    async fn remove<T: Transport>(transport: &T, key: Key<Self>) -> ApiResult<()>;
}
