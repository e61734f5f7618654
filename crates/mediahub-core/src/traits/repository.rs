//! Generic read repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read access to an aggregate by primary key.
///
/// Defined with generic type parameters so that each aggregate gets a
/// strongly typed repository. Aggregate-specific query methods live on the
/// concrete repository structs.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an aggregate by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;
}
