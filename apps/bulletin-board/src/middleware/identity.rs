//! Acting-user identity extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

/// Header the portal's reverse proxy sets to the authenticated username.
pub const FORWARDED_USER_HEADER: &str = "X-Forwarded-User";

/// Identity attributed to requests that carry no usable header.
pub const ANONYMOUS: &str = "Anonymous";

/// Acting user, trusted as supplied by the hosting portal.
///
/// Use this in handlers to resolve authorship:
/// ```ignore
/// async fn whoami(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user)
/// }
/// ```
///
/// Extraction never fails; a request without the header acts as
/// [`ANONYMOUS`]. The widget performs no authentication of its own.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: String,
}

impl Identity {
    fn resolve(req: &HttpRequest) -> Self {
        let user = req
            .headers()
            .get(FORWARDED_USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .unwrap_or(ANONYMOUS);

        Self {
            user: user.to_string(),
        }
    }
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Identity::resolve(req)))
    }
}
