//! Commands issued by screens and the results that come back to them

use catalog_client::{ImageStatus, Product, ProductCreate, ProductList, ProductQuery, ProductUpdate};

/// Screen addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(i64),
    Create,
    Edit(i64),
}

/// Side effect requested by a screen; executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchList(ProductQuery),
    FetchProduct(i64),
    CreateProduct(ProductCreate),
    UpdateProduct(i64, ProductUpdate),
    DeleteProduct(i64),
    ProbeImage { index: usize, url: String },
    Navigate(Route),
    Quit,
}

/// Completed command. Errors are already turned into display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ListLoaded(Result<ProductList, String>),
    ProductLoaded(Result<Product, String>),
    ProductCreated(Result<Product, String>),
    ProductUpdated(Result<Product, String>),
    ProductDeleted {
        product_id: i64,
        result: Result<(), String>,
    },
    ImageProbed { index: usize, status: ImageStatus },
}

/// Outcome addressed to the screen mounted as `seq`
#[derive(Debug, Clone, PartialEq)]
pub struct AppEvent {
    pub seq: u64,
    pub outcome: Outcome,
}

/// Remote state of a screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

impl<T> From<Result<T, String>> for Loadable<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(v) => Loadable::Loaded(v),
            Err(e) => Loadable::Failed(e),
        }
    }
}
