use bigdecimal::BigDecimal;

use super::{DealFilter, parse_decimal};
use crate::error::AppResult;
use crate::models::{Category, Deal, PRIMARY_STORE_ID};

const EPIC_STORE_ID: &str = "25";

/// `storeID == 1` and `salePrice < 15`
pub struct Unter15Filter;

impl DealFilter for Unter15Filter {
    fn matches(&self, deal: &Deal) -> AppResult<bool> {
        if deal.store_id != PRIMARY_STORE_ID {
            return Ok(false);
        }
        let price = parse_decimal(deal, "salePrice", &deal.sale_price)?;
        Ok(price < BigDecimal::from(15))
    }

    fn category(&self) -> Category {
        Category::Unter15
    }
}

/// `storeID == 1`
pub struct AllFilter;

impl DealFilter for AllFilter {
    fn matches(&self, deal: &Deal) -> AppResult<bool> {
        Ok(deal.store_id == PRIMARY_STORE_ID)
    }

    fn category(&self) -> Category {
        Category::All
    }
}

/// `storeID == 1` and `savings >= 50`
pub struct HalfPriceFilter;

impl DealFilter for HalfPriceFilter {
    fn matches(&self, deal: &Deal) -> AppResult<bool> {
        if deal.store_id != PRIMARY_STORE_ID {
            return Ok(false);
        }
        let savings = parse_decimal(deal, "savings", &deal.savings)?;
        Ok(savings >= BigDecimal::from(50))
    }

    fn category(&self) -> Category {
        Category::HalfPrice
    }
}

/// `storeID == 25` and `savings >= 40`
pub struct EpicFilter;

impl DealFilter for EpicFilter {
    fn matches(&self, deal: &Deal) -> AppResult<bool> {
        if deal.store_id != EPIC_STORE_ID {
            return Ok(false);
        }
        let savings = parse_decimal(deal, "savings", &deal.savings)?;
        Ok(savings >= BigDecimal::from(40))
    }

    fn category(&self) -> Category {
        Category::Epic
    }
}
