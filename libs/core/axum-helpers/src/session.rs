//! Member-session context.
//!
//! Authentication lives outside this codebase; requests may carry a member
//! cookie issued by the external identity service. This middleware surfaces
//! it as a request extension so any handler can read the (optional) member
//! identity without knowing where it came from. No route requires it.

use axum::{extract::Request, http::header, middleware::Next, response::Response};

/// Cookie set by the external identity service.
pub const MEMBER_COOKIE: &str = "taskflow-member";

/// Per-request member context, present on every request (the member id
/// itself is optional).
#[derive(Clone, Debug, Default)]
pub struct MemberSession {
    pub member_id: Option<String>,
}

impl MemberSession {
    pub fn is_member(&self) -> bool {
        self.member_id.is_some()
    }
}

/// Middleware that attaches a [`MemberSession`] to every request.
pub async fn member_context(mut request: Request, next: Next) -> Response {
    let member_id = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(member_id_from_cookies);

    request
        .extensions_mut()
        .insert(MemberSession { member_id });
    next.run(request).await
}

fn member_id_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(MEMBER_COOKIE)?.strip_prefix('='))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
