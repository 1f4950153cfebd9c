// core/src/dashboard/view_model.rs

use crate::api::CanteenApi;
use crate::cart::{Cart, CartLine};
use crate::checkout::{place_order, CheckoutGate, CheckoutReport};
use crate::error::{CanteenError, CanteenResult};
use crate::models::{DuesSummary, FoodId, FoodItem, Order};
use crate::session::SessionStore;
use crate::shared::Shared;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
  #[default]
  Menu,
  Orders,
}

/// Everything fetched from the upstream in one successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
  pub menu: Vec<FoodItem>,
  pub orders: Vec<Order>,
  pub dues: DuesSummary,
}

#[derive(Debug)]
pub enum LoadState {
  /// No access token; nothing was requested.
  Unauthenticated,
  Ready(DashboardData),
  /// At least one fetch failed; nothing from this load was kept.
  Failed(CanteenError),
}

/// Result of [`Dashboard::load_sections`], one entry per fetch.
#[derive(Debug)]
pub struct SectionedLoad {
  pub menu: CanteenResult<Vec<FoodItem>>,
  pub orders: CanteenResult<Vec<Order>>,
  pub dues: CanteenResult<DuesSummary>,
}

impl SectionedLoad {
  pub fn all_succeeded(&self) -> bool {
    self.menu.is_ok() && self.orders.is_ok() && self.dues.is_ok()
  }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ViewState {
  pub menu: Vec<FoodItem>,
  pub orders: Vec<Order>,
  pub dues: Option<DuesSummary>,
  pub tab: ActiveTab,
  pub last_error: Option<String>,
}

/// View-model behind the student dashboard.
///
/// All methods take `&self`; state lives in [`Shared`] cells and no guard is
/// held across a network call, so one dashboard can be shared between
/// concurrent requests of the same visitor.
pub struct Dashboard {
  api: Arc<dyn CanteenApi>,
  session: Arc<SessionStore>,
  state: Shared<ViewState>,
  cart: Shared<Cart>,
  gate: CheckoutGate,
}

impl std::fmt::Debug for Dashboard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Dashboard")
      .field("session", &self.session)
      .field("cart_lines", &self.cart.read().len())
      .field("checkout_busy", &self.gate.is_busy())
      .finish()
  }
}

impl Dashboard {
  /// A fresh dashboard starts with an empty cart on the menu tab.
  pub fn new(api: Arc<dyn CanteenApi>, session: Arc<SessionStore>) -> Self {
    Self {
      api,
      session,
      state: Shared::default(),
      cart: Shared::default(),
      gate: CheckoutGate::new(),
    }
  }

  pub fn session(&self) -> &Arc<SessionStore> {
    &self.session
  }

  pub fn api(&self) -> &Arc<dyn CanteenApi> {
    &self.api
  }

  /// Fetches menu, orders and dues concurrently and keeps them only if all
  /// three succeed.
  #[instrument(name = "Dashboard::load_all", skip(self))]
  pub async fn load_all(&self) -> LoadState {
    if self.session.access_token().is_none() {
      info!("No access token; dashboard stays unauthenticated.");
      return LoadState::Unauthenticated;
    }

    let fetched = tokio::try_join!(self.api.list_foods(), self.api.list_orders(), self.api.student_dues());
    match fetched {
      Ok((menu, orders, dues)) => {
        let data = DashboardData { menu, orders, dues };
        self.state.update(|s| {
          s.menu = data.menu.clone();
          s.orders = data.orders.clone();
          s.dues = Some(data.dues.clone());
          s.last_error = None;
        });
        info!(menu = data.menu.len(), orders = data.orders.len(), "Dashboard loaded.");
        LoadState::Ready(data)
      }
      Err(e) => {
        warn!(error = %e, "Dashboard load failed.");
        self.state.update(|s| s.last_error = Some(e.user_message()));
        LoadState::Failed(e)
      }
    }
  }

  /// Like [`load_all`](Self::load_all) but lets each section succeed or fail
  /// on its own; successful sections replace what is shown.
  #[instrument(name = "Dashboard::load_sections", skip(self), err(Display))]
  pub async fn load_sections(&self) -> CanteenResult<SectionedLoad> {
    if self.session.access_token().is_none() {
      return Err(CanteenError::Unauthenticated);
    }

    let (menu, orders, dues) = tokio::join!(self.api.list_foods(), self.api.list_orders(), self.api.student_dues());
    let load = SectionedLoad { menu, orders, dues };
    self.state.update(|s| {
      if let Ok(menu) = &load.menu {
        s.menu = menu.clone();
      }
      if let Ok(orders) = &load.orders {
        s.orders = orders.clone();
      }
      if let Ok(dues) = &load.dues {
        s.dues = Some(dues.clone());
      }
      s.last_error = [load.menu.as_ref().err(), load.orders.as_ref().err(), load.dues.as_ref().err()]
        .into_iter()
        .flatten()
        .next()
        .map(CanteenError::user_message);
    });
    Ok(load)
  }

  /// Applies `edit` unless a checkout is running.
  ///
  /// The gate is checked under the cart's write lock. A checkout takes the
  /// gate before it copies the cart, so an edit either lands before that
  /// copy or is refused; it can never be wiped by the clear that follows a
  /// successful checkout without having been submitted.
  fn edit_cart<R>(&self, edit: impl FnOnce(&mut Cart) -> R) -> CanteenResult<R> {
    self.cart.update(|cart| {
      if self.gate.is_busy() {
        return Err(CanteenError::CheckoutInProgress);
      }
      Ok(edit(cart))
    })
  }

  /// Selects or deselects a food from the last loaded menu.
  pub fn toggle(&self, food_id: FoodId) -> CanteenResult<bool> {
    let food = self
      .state
      .read()
      .menu
      .iter()
      .find(|f| f.id == food_id)
      .cloned()
      .ok_or_else(|| CanteenError::validation(format!("Food item {food_id} is not on the menu.")))?;
    self.edit_cart(|cart| cart.toggle(&food))
  }

  /// `Ok(None)` when the food is not in the cart.
  pub fn set_quantity(&self, food_id: FoodId, quantity: i64) -> CanteenResult<Option<u32>> {
    self.edit_cart(|cart| cart.set_quantity(food_id, quantity))
  }

  pub fn increment(&self, food_id: FoodId) -> CanteenResult<Option<u32>> {
    self.edit_cart(|cart| cart.increment(food_id))
  }

  pub fn decrement(&self, food_id: FoodId) -> CanteenResult<Option<u32>> {
    self.edit_cart(|cart| cart.decrement(food_id))
  }

  pub fn cart_total(&self) -> BigDecimal {
    self.cart.read().total()
  }

  pub fn cart_lines(&self) -> Vec<CartLine> {
    self.cart.read().lines().cloned().collect()
  }

  pub fn cart(&self) -> Cart {
    self.cart.snapshot()
  }

  pub fn active_tab(&self) -> ActiveTab {
    self.state.read().tab
  }

  pub fn select_tab(&self, tab: ActiveTab) {
    self.state.update(|s| s.tab = tab);
  }

  pub fn checkout_in_progress(&self) -> bool {
    self.gate.is_busy()
  }

  /// Places every cart line as its own order.
  ///
  /// On full success the cart is cleared, the dashboard reloads and the
  /// order history tab is shown. If a line fails the cart and tab are left
  /// untouched and the report tells which lines were already placed; those
  /// stay placed upstream. Call [`discard_placed_lines`](Self::discard_placed_lines)
  /// before retrying to avoid ordering them twice.
  #[instrument(name = "Dashboard::checkout", skip(self), err(Display))]
  pub async fn checkout(&self) -> CanteenResult<CheckoutReport> {
    let _permit = self.gate.try_acquire()?;
    if self.session.access_token().is_none() {
      return Err(CanteenError::Unauthenticated);
    }

    let cart = self.cart.snapshot();
    let api = Arc::clone(&self.api);
    let report = place_order(&cart, |food_id, quantity| {
      let api = Arc::clone(&api);
      async move { api.place_order_line(food_id, quantity).await }
    })
    .await?;

    if let Some(e) = report.first_error() {
      self.state.update(|s| s.last_error = Some(e.user_message()));
      return Ok(report);
    }

    // Still holding the permit, so the cart is exactly what was submitted.
    self.cart.update(Cart::clear);
    match self.load_all().await {
      LoadState::Ready(_) => self.select_tab(ActiveTab::Orders),
      LoadState::Failed(e) => {
        warn!(error = %e, "Orders placed but the refresh afterwards failed.");
        self.select_tab(ActiveTab::Orders);
      }
      // Logged out while the last line was in flight; the reset view stays.
      LoadState::Unauthenticated => info!("Session ended during checkout; not switching tabs."),
    }
    Ok(report)
  }

  /// Drops the lines a partial checkout already placed.
  pub fn discard_placed_lines(&self, report: &CheckoutReport) -> CanteenResult<()> {
    let placed = report.placed_ids();
    self.edit_cart(|cart| cart.drop_lines(&placed))
  }

  /// Clears the session and forgets everything shown for it.
  #[instrument(name = "Dashboard::logout", skip(self), err(Display))]
  pub async fn logout(&self) -> CanteenResult<()> {
    self.session.clear_session().await?;
    self.cart.update(Cart::clear);
    self.state.replace(ViewState::default());
    Ok(())
  }

  pub(crate) fn view_state(&self) -> ViewState {
    self.state.snapshot()
  }
}
