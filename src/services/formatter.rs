//! Rendering of matched deals into notification text.

use crate::models::{Category, Deal};

const STOREFRONT_APP_URL: &str = "https://store.steampowered.com/app/";
const REDIRECT_URL: &str = "https://www.cheapshark.com/redirect?dealID=";

/// Purchase link for a deal.
///
/// Primary-store deals with an app id link straight to the storefront page;
/// everything else goes through the redirect endpoint keyed by deal id.
pub fn resolve_url(deal: &Deal) -> String {
    match deal.app_id() {
        Some(app_id) if deal.is_primary_store() => format!("{}{}", STOREFRONT_APP_URL, app_id),
        _ => format!("{}{}", REDIRECT_URL, deal.deal_id),
    }
}

pub fn format_deal(deal: &Deal) -> String {
    format!(
        "**{}** – {} € (statt {} €)\n{}\n\n",
        deal.title,
        deal.sale_price,
        deal.normal_price,
        resolve_url(deal)
    )
}

/// One paragraph per deal, in order.
pub fn format_deals(deals: &[Deal]) -> String {
    deals.iter().map(format_deal).collect()
}

pub fn format_header(category: Category) -> String {
    format!("**Neue Angebote – {}**\n\n", category.display_name())
}

/// Complete message body: header followed by the deal paragraphs.
pub fn format_notification(category: Category, deals: &[Deal]) -> String {
    let mut content = format_header(category);
    content.push_str(&format_deals(deals));
    content
}
