// app/src/web/handlers/mod.rs

pub mod auth_handlers;
pub mod cart_handlers;
pub mod checkout_handlers;
pub mod dashboard_handlers;
pub mod site_handlers;

use crate::errors::AppError;
use crate::state::AppState;
use crate::visitors::Visitor;
use crate::web::extract::VisitorId;
use canteen::CanteenError;
use std::sync::Arc;

/// The visitor behind a request that needs a logged-in student.
pub(crate) async fn authenticated_visitor(state: &AppState, visitor: &VisitorId) -> Result<Arc<Visitor>, AppError> {
  if visitor.fresh {
    return Err(CanteenError::Unauthenticated.into());
  }
  match state.visitors.find(visitor.id).await? {
    Some(known) if known.session().is_authenticated() => Ok(known),
    _ => Err(CanteenError::Unauthenticated.into()),
  }
}
