// core/src/models/dues.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Outstanding balance of the logged-in student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuesSummary {
  pub due_amount: BigDecimal,
}
