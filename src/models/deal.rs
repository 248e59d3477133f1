//! Deal record as returned by the upstream listing API.

use serde::{Deserialize, Serialize};

/// Store identifier of the primary storefront (Steam).
pub const PRIMARY_STORE_ID: &str = "1";

/// A single discounted-item record.
///
/// Numeric fields stay as the decimal strings the API sends; they are only
/// parsed when a filter needs them, so a malformed value surfaces as an
/// error at that point instead of failing the whole listing decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub title: String,
    #[serde(rename = "salePrice")]
    pub sale_price: String,
    #[serde(rename = "normalPrice")]
    pub normal_price: String,
    pub savings: String,
    #[serde(rename = "storeID")]
    pub store_id: String,
    #[serde(rename = "dealID")]
    pub deal_id: String,
    #[serde(rename = "steamAppID", default)]
    pub steam_app_id: Option<String>,
}

impl Deal {
    /// Whether the deal is listed on the primary store.
    pub fn is_primary_store(&self) -> bool {
        self.store_id == PRIMARY_STORE_ID
    }

    /// The storefront app id, if one is present.
    ///
    /// The API reports "no app" as `null`, an empty string or `"0"`.
    pub fn app_id(&self) -> Option<&str> {
        self.steam_app_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != "0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "internalName": "PORTAL2",
            "title": "Portal 2",
            "metacriticLink": "/game/pc/portal-2",
            "dealID": "abc%3D%3D",
            "storeID": "1",
            "gameID": "4",
            "salePrice": "1.99",
            "normalPrice": "9.99",
            "isOnSale": "1",
            "savings": "80.080080",
            "steamAppID": "620",
            "dealRating": "9.6"
        }"#;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.title, "Portal 2");
        assert_eq!(deal.sale_price, "1.99");
        assert_eq!(deal.normal_price, "9.99");
        assert_eq!(deal.store_id, "1");
        assert_eq!(deal.deal_id, "abc%3D%3D");
        assert_eq!(deal.app_id(), Some("620"));
        assert!(deal.is_primary_store());
    }

    #[test]
    fn test_missing_and_null_app_id() {
        let json = r#"{"title":"X","salePrice":"1","normalPrice":"2","savings":"50",
            "storeID":"25","dealID":"d"}"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.app_id(), None);

        let json = r#"{"title":"X","salePrice":"1","normalPrice":"2","savings":"50",
            "storeID":"25","dealID":"d","steamAppID":null}"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.app_id(), None);
        assert!(!deal.is_primary_store());
    }

    #[test]
    fn test_zero_app_id_is_absent() {
        let json = r#"{"title":"X","salePrice":"1","normalPrice":"2","savings":"50",
            "storeID":"1","dealID":"d","steamAppID":"0"}"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.app_id(), None);
    }
}
