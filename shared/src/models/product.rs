//! Product Model

use serde::{Deserialize, Serialize};

/// Default number of rows requested by the list view
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Ranking defaults sent with every new product
pub const DEFAULT_MAIN_BOOST: f64 = 1.0;
pub const DEFAULT_LOW_VALUE_FLAG: f64 = 0.0;
pub const DEFAULT_POPULARITY: f64 = 0.0;

/// Product entity
///
/// The list endpoint returns a projection, so everything except
/// `product_id` decodes with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned identity key
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-facing identifier, used in routes
    pub product_id: i64,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub brand_logo: Option<String>,
    #[serde(default)]
    pub price_cash: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, first one is the main image
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: Vec<String>,
    #[serde(default)]
    pub show_in_app: bool,
    #[serde(default)]
    pub new_product: bool,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default, alias = "spare_part")]
    pub is_spare_part: bool,
    #[serde(default)]
    pub main_boost: Option<f64>,
    #[serde(default)]
    pub low_value_flag: Option<f64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Image URLs with blank entries removed
    pub fn image_links(&self) -> impl Iterator<Item = &str> {
        self.link
            .iter()
            .map(String::as_str)
            .filter(|l| !l.trim().is_empty())
    }

    /// True when at least one non-blank image URL is present
    pub fn has_images(&self) -> bool {
        self.image_links().next().is_some()
    }

    /// Price formatted as `$0.00`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price_cash.unwrap_or(0.0))
    }

    /// Product code shortened for table cells, `N/A` when missing
    pub fn short_code(&self) -> String {
        match self.product_code.as_deref() {
            Some(code) if !code.is_empty() => {
                if code.chars().count() > 15 {
                    let head: String = code.chars().take(15).collect();
                    format!("{head}...")
                } else {
                    code.to_string()
                }
            }
            _ => "N/A".to_string(),
        }
    }

    /// "Active" / "Inactive" label for the visibility flag
    pub fn status_label(&self) -> &'static str {
        if self.show_in_app { "Active" } else { "Inactive" }
    }
}

/// `"link": null` is treated as an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_code: String,
    pub main_boost: f64,
    pub low_value_flag: f64,
    pub popularity: f64,
    pub product_name: String,
    pub category_name: String,
    pub brand_name: String,
    pub brand_logo: String,
    pub description: String,
    pub link: Vec<String>,
    pub show_in_app: bool,
    pub new_product: bool,
    /// Serialized as `null` when absent
    pub discount: Option<String>,
    pub is_spare_part: bool,
}

/// Update product payload (editable subset only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub product_name: String,
    pub category_name: String,
    pub brand_name: String,
    pub brand_logo: String,
    pub description: String,
    pub link: Vec<String>,
    pub show_in_app: bool,
    pub new_product: bool,
    /// Serialized as `null` when absent
    pub discount: Option<String>,
    pub is_spare_part: bool,
}

/// Query parameters for `GET /products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_app: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Build the list query from the search box and the active-only toggle.
    ///
    /// An empty search term is omitted, and the toggle is only sent when on.
    pub fn new(search: &str, active_only: bool, limit: u32) -> Self {
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            show_in_app: active_only.then_some(true),
            limit: Some(limit),
        }
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new("", false, DEFAULT_LIST_LIMIT)
    }
}
