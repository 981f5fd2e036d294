//! HTTP method override for clients that can only send GET and POST.
//!
//! A POST carrying `X-HTTP-Method-Override: PUT|DELETE|PATCH` is rewritten
//! to that method. The layer must wrap the router (not be added via
//! `Router::layer`) so the rewrite happens before route matching.

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Method, Request};
use tower::{Layer, Service};

/// Header checked for the override value.
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Methods a POST may be rewritten to.
const ALLOWED_OVERRIDES: [Method; 3] = [Method::PUT, Method::DELETE, Method::PATCH];

/// Layer that applies [`MethodOverride`] to the wrapped service.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodOverrideLayer;

impl<S> Layer<S> for MethodOverrideLayer {
    type Service = MethodOverride<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MethodOverride { inner }
    }
}

/// Middleware service that rewrites the request method before routing.
#[derive(Debug, Clone)]
pub struct MethodOverride<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for MethodOverride<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(requested) = override_method(&req) {
                tracing::debug!(method = %requested, "Applying method override");
                *req.method_mut() = requested;
            }
        }
        self.inner.call(req)
    }
}

/// Resolve the override header to a permitted method, if any.
///
/// Unknown or disallowed values are ignored rather than rejected, matching
/// the pass-through behavior for requests without the header.
fn override_method(req: &Request<Body>) -> Option<Method> {
    let value = req.headers().get(METHOD_OVERRIDE_HEADER)?.to_str().ok()?;
    let method: Method = value.to_ascii_uppercase().parse().ok()?;
    ALLOWED_OVERRIDES.contains(&method).then_some(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_override(value: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(METHOD_OVERRIDE_HEADER, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn delete_override_is_resolved() {
        assert_eq!(
            override_method(&post_with_override("DELETE")),
            Some(Method::DELETE)
        );
    }

    #[test]
    fn override_value_is_case_insensitive() {
        assert_eq!(
            override_method(&post_with_override("put")),
            Some(Method::PUT)
        );
    }

    #[test]
    fn disallowed_methods_are_ignored() {
        assert_eq!(override_method(&post_with_override("GET")), None);
        assert_eq!(override_method(&post_with_override("TRACE")), None);
        assert_eq!(override_method(&post_with_override("nonsense")), None);
    }

    #[test]
    fn absent_header_is_ignored() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        assert_eq!(override_method(&req), None);
    }
}
