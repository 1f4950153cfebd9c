// core/tests/checkout_tests.rs
mod common;
use bigdecimal::BigDecimal;
use canteen::checkout::EMPTY_CART_MESSAGE;
use canteen::{place_order, Cart, CanteenError, LineOutcome, Order};
use chrono::Utc;
use common::*;
use parking_lot::Mutex;
use serial_test::serial;
use std::sync::Arc;

fn order_for(food_id: u64, quantity: u32) -> Order {
  Order {
    id: food_id * 10,
    student: None,
    food: None,
    quantity,
    total_price: BigDecimal::from(0),
    ordered_at: Utc::now(),
    cleared: false,
  }
}

fn three_line_cart() -> Cart {
  let mut cart = Cart::new();
  for item in sample_menu() {
    cart.toggle(&item);
  }
  cart.set_quantity(1, 2);
  cart
}

#[tokio::test]
#[serial]
async fn test_empty_cart_fails_validation_without_submitting() {
  setup_tracing();
  let calls = Arc::new(Mutex::new(0usize));
  let counter = calls.clone();
  let result = place_order(&Cart::new(), move |food_id, quantity| {
    *counter.lock() += 1;
    async move { Ok(order_for(food_id, quantity)) }
  })
  .await;

  match result {
    Err(CanteenError::Validation(message)) => assert_eq!(message, EMPTY_CART_MESSAGE),
    other => panic!("Expected a validation failure, got {:?}", other),
  }
  assert_eq!(*calls.lock(), 0);
}

#[tokio::test]
#[serial]
async fn test_all_lines_submitted_sequentially_in_cart_order() {
  setup_tracing();
  let cart = three_line_cart();
  let log = Arc::new(Mutex::new(Vec::new()));
  let in_flight = Arc::new(Mutex::new(0usize));

  let (log_c, in_flight_c) = (log.clone(), in_flight.clone());
  let report = place_order(&cart, move |food_id, quantity| {
    let (log, in_flight) = (log_c.clone(), in_flight_c.clone());
    async move {
      {
        let mut n = in_flight.lock();
        *n += 1;
        assert_eq!(*n, 1, "submissions must not overlap");
      }
      tokio::time::sleep(std::time::Duration::from_millis(5)).await;
      log.lock().push((food_id, quantity));
      *in_flight.lock() -= 1;
      Ok(order_for(food_id, quantity))
    }
  })
  .await
  .unwrap();

  assert!(report.is_complete());
  assert_eq!(report.attempted(), 3);
  assert_eq!(*log.lock(), vec![(1, 2), (2, 1), (3, 1)]);
  assert_eq!(report.placed_ids(), vec![1, 2, 3]);
  assert!(report.first_error().is_none());
  // The orchestrator itself never touches the cart.
  assert_eq!(cart.len(), 3);
}

#[tokio::test]
#[serial]
async fn test_failed_line_stops_the_run_and_reports_every_line() {
  setup_tracing();
  let cart = three_line_cart();
  let attempted = Arc::new(Mutex::new(Vec::new()));
  let attempted_c = attempted.clone();

  let report = place_order(&cart, move |food_id, quantity| {
    attempted_c.lock().push(food_id);
    async move {
      if food_id == 2 {
        Err(CanteenError::Http {
          status: 400,
          detail: "Chicken Thali is sold out".to_string(),
        })
      } else {
        Ok(order_for(food_id, quantity))
      }
    }
  })
  .await
  .unwrap();

  assert_eq!(*attempted.lock(), vec![1, 2]);
  assert!(!report.is_complete());
  assert_eq!(report.attempted(), 2);
  assert_eq!(report.placed_ids(), vec![1]);
  assert_eq!(report.pending_ids(), vec![2, 3]);
  assert_eq!(
    report.first_error().map(|e| e.user_message()).as_deref(),
    Some("Chicken Thali is sold out")
  );
  assert!(matches!(report.lines[2].outcome, LineOutcome::NotAttempted));
  assert_eq!(report.lines[2].outcome.label(), "not_attempted");
}

#[tokio::test]
#[serial]
async fn test_failure_on_first_line_attempts_nothing_else() {
  setup_tracing();
  let cart = three_line_cart();
  let report = place_order(&cart, |_food_id, _quantity| async move {
    Err::<Order, _>(CanteenError::Unauthenticated)
  })
  .await
  .unwrap();

  assert_eq!(report.attempted(), 1);
  assert!(report.placed_ids().is_empty());
  assert_eq!(report.pending_ids(), vec![1, 2, 3]);
}
