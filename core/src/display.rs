// core/src/display.rs

use bigdecimal::BigDecimal;

/// Formats an amount the way the canteen prints prices: `Rs. 120.00`.
pub fn rupees(amount: &BigDecimal) -> String {
  format!("Rs. {}", amount.with_scale(2))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  fn always_prints_two_decimals() {
    assert_eq!(rupees(&BigDecimal::from(420)), "Rs. 420.00");
    assert_eq!(rupees(&BigDecimal::from_str("120.5").unwrap()), "Rs. 120.50");
  }
}
