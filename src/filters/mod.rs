//! Per-category deal filters.
//!
//! Each category owns one `DealFilter` implementation; `get_filter` maps a
//! category to its rule and `apply_filter` runs a rule over a listing.

mod rules;

pub use rules::{AllFilter, EpicFilter, HalfPriceFilter, Unter15Filter};

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{Category, Deal};

/// Predicate deciding whether a deal belongs to a category.
pub trait DealFilter: Send + Sync {
    /// Returns `Err` when a numeric field the rule needs is malformed.
    fn matches(&self, deal: &Deal) -> AppResult<bool>;

    fn category(&self) -> Category;
}

static UNTER15: Unter15Filter = Unter15Filter;
static ALL: AllFilter = AllFilter;
static HALF_PRICE: HalfPriceFilter = HalfPriceFilter;
static EPIC: EpicFilter = EpicFilter;

pub fn get_filter(category: Category) -> &'static dyn DealFilter {
    match category {
        Category::Unter15 => &UNTER15,
        Category::All => &ALL,
        Category::HalfPrice => &HALF_PRICE,
        Category::Epic => &EPIC,
    }
}

/// Keeps the deals matching `filter`, in listing order.
///
/// The first malformed numeric field aborts the whole category.
pub fn apply_filter(filter: &dyn DealFilter, deals: &[Deal]) -> AppResult<Vec<Deal>> {
    let mut matched = Vec::new();
    for deal in deals {
        if filter.matches(deal)? {
            matched.push(deal.clone());
        }
    }
    Ok(matched)
}

/// Parses a decimal string field of a deal.
pub(crate) fn parse_decimal(deal: &Deal, field: &str, value: &str) -> AppResult<BigDecimal> {
    BigDecimal::from_str(value.trim()).map_err(|_| AppError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
        deal: deal.title.clone(),
    })
}
