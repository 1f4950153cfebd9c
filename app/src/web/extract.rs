// app/src/web/extract.rs

use crate::errors::AppError;
use crate::visitors::VISITOR_COOKIE;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{FromRequest, HttpRequest, HttpResponseBuilder};
use uuid::Uuid;

/// The browser's visitor id, taken from the `canteen_visitor` cookie.
///
/// A missing or malformed cookie yields a fresh id; responses for a fresh id
/// must set the cookie via [`VisitorId::remember`].
#[derive(Debug, Clone, Copy)]
pub struct VisitorId {
  pub id: Uuid,
  pub fresh: bool,
}

impl VisitorId {
  pub fn remember(&self, response: &mut HttpResponseBuilder) {
    if self.fresh {
      response.cookie(
        Cookie::build(VISITOR_COOKIE, self.id.to_string())
          .path("/")
          .http_only(true)
          .same_site(SameSite::Lax)
          .finish(),
      );
    }
  }
}

impl FromRequest for VisitorId {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let known = req
      .cookie(VISITOR_COOKIE)
      .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
    let visitor = match known {
      Some(id) => VisitorId { id, fresh: false },
      None => VisitorId {
        id: Uuid::new_v4(),
        fresh: true,
      },
    };
    futures_util::future::ready(Ok(visitor))
  }
}
