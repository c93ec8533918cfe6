//! restdirect: convention-driven REST dispatcher.
//!
//! Request paths of the form `/<resource>/<action>/<params...>` resolve
//! against a static resource registry and a fixed action/verb table, then
//! run simple CRUD against SQLite and reply with JSON.

pub mod context;
pub mod error;
pub mod registry;
pub mod resources;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

pub use context::RequestContext;
pub use error::AppError;
pub use registry::ResourceRegistry;
pub use resources::Resource;
pub use response::{Envelope, Reply};
pub use router::{Action, RequestPath};
pub use routes::app;
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_schema};
