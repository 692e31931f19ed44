use serde::{Deserialize, Serialize};

/// Sentinel price for books whose listing carries no price element.
pub const FREE_PRICE: &str = "Free";

/// One qualifying record from the Kindle listing.
///
/// A book without a title is never constructed; the extractor skips the
/// whole container instead. Field names are serialized with the exact
/// column headers of the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Price")]
    pub price: String,

    /// Absolute detail URL with the affiliate tag already appended.
    /// `None` when the listing container had no anchor; the affiliate
    /// suffix is never concatenated onto an absent link.
    #[serde(rename = "Link")]
    pub link: Option<String>,

    #[serde(rename = "Image URL")]
    pub image_url: Option<String>,
}
