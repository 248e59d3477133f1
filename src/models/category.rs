//! The fixed set of notification categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A named notification channel with its own filter rule, state file and webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Primary-store deals below 15
    Unter15,
    /// Every primary-store deal
    All,
    /// Primary-store deals with at least 50% savings
    HalfPrice,
    /// Epic Games Store deals with at least 40% savings
    Epic,
}

impl Category {
    /// All categories in processing order.
    pub const ALL: [Category; 4] = [
        Category::Unter15,
        Category::All,
        Category::HalfPrice,
        Category::Epic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unter15 => "unter15",
            Category::All => "all",
            Category::HalfPrice => "halfprice",
            Category::Epic => "epic",
        }
    }

    /// Key under which the last-seen titles are persisted.
    pub fn state_file(&self) -> &'static str {
        match self {
            Category::Unter15 => "last_unter15.txt",
            Category::All => "last_all.txt",
            Category::HalfPrice => "last_half.txt",
            Category::Epic => "last_epic.txt",
        }
    }

    /// Legacy environment variable holding the category's webhook URL.
    pub fn webhook_env_var(&self) -> &'static str {
        match self {
            Category::Unter15 => "WEBHOOK_UNTER15",
            Category::All => "WEBHOOK_ALL",
            Category::HalfPrice => "WEBHOOK_HALFPRICE",
            Category::Epic => "WEBHOOK_EPIC",
        }
    }

    /// Human-readable name used in notification headers.
    ///
    /// Dashes become spaces, the first letter is upper-cased and the rest
    /// lower-cased.
    pub fn display_name(&self) -> String {
        let spaced = self.as_str().replace('-', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| AppError::Validation {
                field: "category".to_string(),
                reason: format!(
                    "Unknown category '{}'. Valid categories are: unter15, all, halfprice, epic",
                    s
                ),
            })
    }
}
