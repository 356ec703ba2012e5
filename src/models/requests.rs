use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::BuyerType;

/// Query parameters for the listings endpoint
///
/// Mirrors the two viewer form controls: a budget ceiling and a buyer
/// category selector.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingsQuery {
    #[validate(range(min = 1))]
    #[serde(alias = "max_budget", rename = "maxBudget")]
    pub max_budget: Option<u64>,
    #[serde(alias = "buyer_type", rename = "buyerType")]
    pub buyer_type: Option<BuyerType>,
}
