//! In-memory product store

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Deserializer};
use shared::{Product, ProductQuery};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// How a product is addressed in a route: numeric `product_id` or the
/// storage identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Id(i64),
    Identity(String),
}

impl ProductKey {
    /// Integers address `product_id`; anything else is matched against `_id`
    /// exactly as stored (simple or hyphenated UUID, ObjectId hex, ...).
    pub fn parse(raw: &str) -> ApiResult<Self> {
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(ProductKey::Id(id));
        }
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(ApiError::InvalidId);
        }
        Ok(ProductKey::Identity(raw.to_string()))
    }
}

/// Body of `POST /products`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct NewProduct {
    pub product_code: Option<String>,
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub category_name: String,
    #[validate(length(min = 1))]
    pub brand_name: String,
    pub brand_logo: Option<String>,
    pub price_cash: Option<f64>,
    pub description: Option<String>,
    pub link: Vec<String>,
    pub show_in_app: bool,
    pub new_product: bool,
    pub discount: Option<String>,
    #[serde(alias = "spare_part")]
    pub is_spare_part: bool,
    pub main_boost: Option<f64>,
    pub low_value_flag: Option<f64>,
    pub popularity: Option<f64>,
}

impl Default for NewProduct {
    fn default() -> Self {
        Self {
            product_code: None,
            product_name: String::new(),
            category_name: String::new(),
            brand_name: String::new(),
            brand_logo: None,
            price_cash: None,
            description: None,
            link: Vec::new(),
            show_in_app: true,
            new_product: false,
            discount: None,
            is_spare_part: false,
            main_boost: None,
            low_value_flag: None,
            popularity: None,
        }
    }
}

/// Fields checked on create, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["product_name", "category_name", "brand_name"];

impl NewProduct {
    /// Required-field check; reports the first missing field in
    /// [`REQUIRED_FIELDS`] order.
    pub fn check(&self) -> ApiResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        let missing = REQUIRED_FIELDS
            .into_iter()
            .find(|f| fields.contains_key(*f))
            .unwrap_or(REQUIRED_FIELDS[0]);
        Err(ApiError::MissingField(missing))
    }
}

/// Body of `PUT /products/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    pub brand_logo: Option<String>,
    pub description: Option<String>,
    pub link: Option<Vec<String>>,
    pub show_in_app: Option<bool>,
    pub new_product: Option<bool>,
    /// `null` clears the discount, absence keeps it
    #[serde(deserialize_with = "present_or_null")]
    pub discount: Option<Option<String>>,
    #[serde(alias = "spare_part")]
    pub is_spare_part: Option<bool>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.category_name.is_none()
            && self.brand_name.is_none()
            && self.brand_logo.is_none()
            && self.description.is_none()
            && self.link.is_none()
            && self.show_in_app.is_none()
            && self.new_product.is_none()
            && self.discount.is_none()
            && self.is_spare_part.is_none()
    }

    fn apply(self, product: &mut Product) {
        if let Some(v) = self.product_name {
            product.product_name = v;
        }
        if let Some(v) = self.category_name {
            product.category_name = v;
        }
        if let Some(v) = self.brand_name {
            product.brand_name = v;
        }
        if let Some(v) = self.brand_logo {
            product.brand_logo = Some(v);
        }
        if let Some(v) = self.description {
            product.description = Some(v);
        }
        if let Some(v) = self.link {
            product.link = v;
        }
        if let Some(v) = self.show_in_app {
            product.show_in_app = v;
        }
        if let Some(v) = self.new_product {
            product.new_product = v;
        }
        if let Some(v) = self.discount {
            product.discount = v;
        }
        if let Some(v) = self.is_spare_part {
            product.is_spare_part = v;
        }
    }
}

/// Outcome of an update
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    Modified(Product),
    Unchanged(Product),
}

/// Products keyed by `product_id`
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<BTreeMap<i64, Product>>,
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn find_id(products: &BTreeMap<i64, Product>, key: &ProductKey) -> Option<i64> {
    match key {
        ProductKey::Id(id) => products.contains_key(id).then_some(*id),
        ProductKey::Identity(identity) => products
            .values()
            .find(|p| p.id.as_deref() == Some(identity.as_str()))
            .map(|p| p.product_id),
    }
}

impl ProductStore {
    /// Seed the store. A later product with an already seen `product_id`
    /// replaces the earlier one.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut map = BTreeMap::new();
        for product in products {
            let product_id = product.product_id;
            if map.insert(product_id, product).is_some() {
                tracing::warn!(product_id, "duplicate product_id in seed, keeping the last one");
            }
        }
        Self {
            products: RwLock::new(map),
        }
    }

    /// Products matching the query, ordered by `product_id`.
    ///
    /// `search` is a case-insensitive substring match on the name.
    pub async fn list(&self, query: &ProductQuery) -> Vec<Product> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        self.products
            .read()
            .await
            .values()
            .filter(|p| match &needle {
                Some(n) => p.product_name.to_lowercase().contains(n),
                None => true,
            })
            .filter(|p| query.show_in_app != Some(true) || p.show_in_app)
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, key: &ProductKey) -> Option<Product> {
        let products = self.products.read().await;
        find_id(&products, key).and_then(|id| products.get(&id).cloned())
    }

    /// Insert a product, assigning identity, `product_id` and timestamps
    pub async fn insert(&self, new: NewProduct) -> Product {
        let mut products = self.products.write().await;
        let product_id = products.keys().next_back().map_or(1, |last| last + 1);
        let ts = now();
        let product = Product {
            id: Some(Uuid::new_v4().simple().to_string()),
            product_id,
            product_code: new.product_code,
            product_name: new.product_name,
            category_name: new.category_name,
            brand_name: new.brand_name,
            brand_logo: new.brand_logo,
            price_cash: Some(new.price_cash.unwrap_or(0.0)),
            description: Some(new.description.unwrap_or_default()),
            link: new.link,
            show_in_app: new.show_in_app,
            new_product: new.new_product,
            discount: new.discount,
            is_spare_part: new.is_spare_part,
            main_boost: new.main_boost,
            low_value_flag: new.low_value_flag,
            popularity: new.popularity,
            created_at: Some(ts.clone()),
            updated_at: Some(ts),
        };
        products.insert(product_id, product.clone());
        product
    }

    pub async fn update(&self, key: &ProductKey, patch: ProductPatch) -> ApiResult<UpdateOutcome> {
        if patch.is_empty() {
            return Err(ApiError::NoFields);
        }
        let mut products = self.products.write().await;
        let id = find_id(&products, key).ok_or(ApiError::NotFound)?;
        let product = products.get_mut(&id).ok_or(ApiError::NotFound)?;

        let before = product.clone();
        patch.apply(product);
        if *product == before {
            return Ok(UpdateOutcome::Unchanged(before));
        }
        product.updated_at = Some(now());
        Ok(UpdateOutcome::Modified(product.clone()))
    }

    /// Hide the product from the app. Returns `false` when it already was.
    pub async fn soft_delete(&self, key: &ProductKey) -> ApiResult<bool> {
        let mut products = self.products.write().await;
        let id = find_id(&products, key).ok_or(ApiError::NotFound)?;
        let product = products.get_mut(&id).ok_or(ApiError::NotFound)?;
        if !product.show_in_app {
            return Ok(false);
        }
        product.show_in_app = false;
        product.updated_at = Some(now());
        Ok(true)
    }
}
