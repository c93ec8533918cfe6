//! Resource handlers: one module per resource, each a fixed function group
//! keyed by action.

pub mod contacts;

use crate::context::RequestContext;
use crate::error::AppError;
use crate::response::Reply;
use async_trait::async_trait;

/// One function per convention slot. Each action produces either a reply or
/// an error that serializes to the failure envelope; nothing escapes to a
/// global handler.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Path segment this resource answers to.
    fn name(&self) -> &'static str;

    async fn index(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
    async fn show(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
    async fn search(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
    async fn create(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
    async fn update(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
    async fn delete(&self, ctx: &RequestContext) -> Result<Reply, AppError>;
}
