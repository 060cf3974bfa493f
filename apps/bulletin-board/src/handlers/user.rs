//! Acting user endpoint.

use actix_web::HttpResponse;
use kiosk_shared::UserBody;

use crate::middleware::identity::Identity;

/// GET /api/user - identity the portal attributed to this request.
pub async fn current_user(identity: Identity) -> HttpResponse {
    HttpResponse::Ok().json(UserBody {
        user: identity.user,
    })
}
