// core/src/auth.rs

//! Login and logout against an injected [`SessionStore`].

use crate::api::{CanteenApi, LoginResponse, RegistrationRequest};
use crate::error::{CanteenError, CanteenResult};
use crate::session::{AuthTokens, SessionStore};
use tracing::{info, instrument, warn};

/// Validates the credentials, exchanges them for tokens and stores the session.
///
/// The session store is written only after the upstream accepted the
/// credentials; any failure leaves it exactly as it was.
#[instrument(name = "auth::sign_in", skip(api, session, password), err(Display))]
pub async fn sign_in(
  api: &dyn CanteenApi,
  session: &SessionStore,
  username: &str,
  password: &str,
) -> CanteenResult<LoginResponse> {
  let username = username.trim();
  if username.is_empty() {
    return Err(CanteenError::validation("Username is required."));
  }
  if password.is_empty() {
    return Err(CanteenError::validation("Password is required."));
  }

  let response = match api.login(username, password).await {
    Ok(response) => response,
    Err(e) => {
      warn!(error = %e, "Login rejected.");
      return Err(e);
    }
  };

  session
    .set_session(
      AuthTokens {
        access: response.access.clone(),
        refresh: response.refresh.clone(),
      },
      response.user.clone(),
    )
    .await?;
  info!("Login successful.");
  Ok(response)
}

#[instrument(name = "auth::sign_out", skip_all, err(Display))]
pub async fn sign_out(session: &SessionStore) -> CanteenResult<()> {
  session.clear_session().await
}

/// Registration is anonymous and never touches the session.
#[instrument(name = "auth::register", skip_all, fields(username = %request.username), err(Display))]
pub async fn register(api: &dyn CanteenApi, request: &RegistrationRequest) -> CanteenResult<String> {
  if request.username.trim().is_empty() {
    return Err(CanteenError::validation("Username is required."));
  }
  if request.password.is_empty() {
    return Err(CanteenError::validation("Password is required."));
  }
  api.register(request).await
}
