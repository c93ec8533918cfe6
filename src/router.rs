//! Path parsing, the action/verb convention, and dispatch.
//!
//! A path reads as `/<resource>/<action>/<params...>`. The resource selects
//! a handler from the registry, the action selects one of its six functions,
//! and the remaining segments are passed through as positional params.

use crate::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Form, FromRequest, Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

/// The closed action set. Resolving through an enum instead of a string
/// lookup means a request can only ever reach these six functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Index,
    Show,
    Search,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Named actions map directly; anything else, a missing segment
    /// included, falls back to the default `index`.
    pub fn from_segment(segment: Option<&str>) -> Action {
        match segment {
            Some("show") => Action::Show,
            Some("search") => Action::Search,
            Some("create") => Action::Create,
            Some("update") => Action::Update,
            Some("delete") => Action::Delete,
            _ => Action::Index,
        }
    }

    /// The verb convention is fixed, not configurable.
    pub fn required_method(self) -> Method {
        match self {
            Action::Index | Action::Show | Action::Search => Method::GET,
            Action::Create | Action::Update | Action::Delete => Method::POST,
        }
    }
}

/// A request path decomposed into resource, action, and positional params.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestPath {
    pub resource: String,
    pub action: Action,
    pub params: Vec<String>,
}

impl RequestPath {
    /// Segment 0 is the root and ignored; segment 1 names the resource,
    /// segment 2 the action, and everything after becomes positional
    /// params. `None` when there is no resource segment.
    pub fn parse(path: &str) -> Option<RequestPath> {
        let mut segments = path.split('/');
        segments.next(); // empty root segment before the leading '/'
        let resource = segments.next().filter(|s| !s.is_empty())?.to_string();
        let action = Action::from_segment(segments.next());
        let params = segments.map(str::to_string).collect();
        Some(RequestPath {
            resource,
            action,
            params,
        })
    }
}

/// Fallback handler behind the fixed routes: resolves the path against the
/// verb table and the registry, then runs the action.
pub async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let Some(path) = RequestPath::parse(req.uri().path()) else {
        // No resource segment, nothing to dispatch.
        return AppError::NotFound.into_response();
    };
    if *req.method() != path.action.required_method() {
        // Same body as an unknown route: a wrong verb must not reveal that
        // the action exists.
        return AppError::NotFound.into_response();
    }
    let Some(resource) = state.registry.get(&path.resource).cloned() else {
        return AppError::NotFound.into_response();
    };

    tracing::debug!(resource = %path.resource, action = ?path.action, "dispatch");

    let fields = if *req.method() == Method::POST {
        form_fields(req).await
    } else {
        HashMap::new()
    };
    let ctx = RequestContext {
        params: path.params,
        fields,
        pool: state.pool.clone(),
    };

    let result = match path.action {
        Action::Index => resource.index(&ctx).await,
        Action::Show => resource.show(&ctx).await,
        Action::Search => resource.search(&ctx).await,
        Action::Create => resource.create(&ctx).await,
        Action::Update => resource.update(&ctx).await,
        Action::Delete => resource.delete(&ctx).await,
    };
    match result {
        Ok(reply) => reply.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Form fields from a POST body. A missing or non-form body reads as no
/// fields; the action reports whatever is then absent.
async fn form_fields(req: Request) -> HashMap<String, String> {
    match Form::<HashMap<String, String>>::from_request(req, &()).await {
        Ok(Form(fields)) => fields,
        Err(_) => HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resource_only() {
        let path = RequestPath::parse("/contacts").unwrap();
        assert_eq!(path.resource, "contacts");
        assert_eq!(path.action, Action::Index);
        assert!(path.params.is_empty());
    }

    #[test]
    fn parse_trailing_slash_is_still_index() {
        let path = RequestPath::parse("/contacts/").unwrap();
        assert_eq!(path.action, Action::Index);
        assert!(path.params.is_empty());
    }

    #[test]
    fn parse_action_and_params() {
        let path = RequestPath::parse("/contacts/show/5").unwrap();
        assert_eq!(path.action, Action::Show);
        assert_eq!(path.params, vec!["5".to_string()]);
    }

    #[test]
    fn parse_keeps_empty_trailing_param() {
        // `/contacts/search/` carries one empty param: the empty term.
        let path = RequestPath::parse("/contacts/search/").unwrap();
        assert_eq!(path.action, Action::Search);
        assert_eq!(path.params, vec![String::new()]);
    }

    #[test]
    fn parse_without_resource_is_none() {
        assert_eq!(RequestPath::parse("/"), None);
        assert_eq!(RequestPath::parse(""), None);
    }

    #[test]
    fn unknown_action_falls_back_to_index() {
        let path = RequestPath::parse("/contacts/archive/3").unwrap();
        assert_eq!(path.action, Action::Index);
        assert_eq!(path.params, vec!["3".to_string()]);
    }

    #[test]
    fn verb_table() {
        assert_eq!(Action::Index.required_method(), Method::GET);
        assert_eq!(Action::Show.required_method(), Method::GET);
        assert_eq!(Action::Search.required_method(), Method::GET);
        assert_eq!(Action::Create.required_method(), Method::POST);
        assert_eq!(Action::Update.required_method(), Method::POST);
        assert_eq!(Action::Delete.required_method(), Method::POST);
    }
}
