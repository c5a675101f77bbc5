//! Product form state shared by the create and edit screens

use shared::catalog::{BRAND_LOGOS, BRANDS, CATEGORIES, cycle_option};
use shared::models::{DEFAULT_LOW_VALUE_FLAG, DEFAULT_MAIN_BOOST, DEFAULT_POPULARITY};
use shared::{Product, ProductCreate, ProductUpdate};

/// Banner text when a required field is blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// One focusable row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductCode,
    ProductName,
    Category,
    Brand,
    BrandLogo,
    Description,
    Discount,
    ShowInApp,
    NewProduct,
    IsSparePart,
    Link(usize),
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
    Flag,
}

impl Field {
    pub fn label(&self) -> String {
        match self {
            Field::ProductCode => "Product Code *".into(),
            Field::ProductName => "Product Name *".into(),
            Field::Category => "Category *".into(),
            Field::Brand => "Brand *".into(),
            Field::BrandLogo => "Brand Logo *".into(),
            Field::Description => "Description *".into(),
            Field::Discount => "Discount".into(),
            Field::ShowInApp => "Show in App".into(),
            Field::NewProduct => "New Product".into(),
            Field::IsSparePart => "Spare Part".into(),
            Field::Link(i) => format!("Image URL {}", i + 1),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Category => FieldKind::Choice(CATEGORIES),
            Field::Brand => FieldKind::Choice(BRANDS),
            Field::BrandLogo => FieldKind::Choice(BRAND_LOGOS),
            Field::ShowInApp | Field::NewProduct | Field::IsSparePart => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub product_code: String,
    pub product_name: String,
    pub category_name: String,
    pub brand_name: String,
    pub brand_logo: String,
    pub description: String,
    pub link: Vec<String>,
    pub show_in_app: bool,
    pub new_product: bool,
    pub discount: String,
    pub is_spare_part: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            product_name: String::new(),
            category_name: String::new(),
            brand_name: String::new(),
            brand_logo: String::new(),
            description: String::new(),
            link: vec![String::new()],
            show_in_app: true,
            new_product: false,
            discount: String::new(),
            is_spare_part: false,
        }
    }
}

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

impl ProductForm {
    /// Pre-fill from a fetched product
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone().unwrap_or_default(),
            product_name: product.product_name.clone(),
            category_name: product.category_name.clone(),
            brand_name: product.brand_name.clone(),
            brand_logo: product.brand_logo.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            link: if product.link.is_empty() {
                vec![String::new()]
            } else {
                product.link.clone()
            },
            show_in_app: product.show_in_app,
            new_product: product.new_product,
            discount: product.discount.clone().unwrap_or_default(),
            is_spare_part: product.is_spare_part,
        }
    }

    /// Focus order for `mode`; one `Link` row per URL slot
    pub fn fields(&self, mode: FormMode) -> Vec<Field> {
        let mut fields = Vec::with_capacity(10 + self.link.len());
        if mode == FormMode::Create {
            fields.push(Field::ProductCode);
        }
        fields.extend([
            Field::ProductName,
            Field::Category,
            Field::Brand,
            Field::BrandLogo,
            Field::Description,
            Field::Discount,
            Field::ShowInApp,
            Field::NewProduct,
            Field::IsSparePart,
        ]);
        fields.extend((0..self.link.len()).map(Field::Link));
        fields
    }

    /// Current value of a text or choice field
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::ProductCode => &self.product_code,
            Field::ProductName => &self.product_name,
            Field::Category => &self.category_name,
            Field::Brand => &self.brand_name,
            Field::BrandLogo => &self.brand_logo,
            Field::Description => &self.description,
            Field::Discount => &self.discount,
            Field::Link(i) => return self.link.get(i).map(String::as_str),
            Field::ShowInApp | Field::NewProduct | Field::IsSparePart => return None,
        };
        Some(value.as_str())
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::ProductCode => self.product_code = value,
            Field::ProductName => self.product_name = value,
            Field::Category => self.category_name = value,
            Field::Brand => self.brand_name = value,
            Field::BrandLogo => self.brand_logo = value,
            Field::Description => self.description = value,
            Field::Discount => self.discount = value,
            Field::Link(i) => {
                if let Some(slot) = self.link.get_mut(i) {
                    *slot = value;
                }
            }
            Field::ShowInApp | Field::NewProduct | Field::IsSparePart => {}
        }
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::ShowInApp => Some(self.show_in_app),
            Field::NewProduct => Some(self.new_product),
            Field::IsSparePart => Some(self.is_spare_part),
            _ => None,
        }
    }

    pub fn toggle(&mut self, field: Field) {
        match field {
            Field::ShowInApp => self.show_in_app = !self.show_in_app,
            Field::NewProduct => self.new_product = !self.new_product,
            Field::IsSparePart => self.is_spare_part = !self.is_spare_part,
            _ => {}
        }
    }

    /// Step a choice field through its option list
    pub fn cycle(&mut self, field: Field, delta: isize) {
        if let FieldKind::Choice(options) = field.kind() {
            let current = self.text(field).unwrap_or_default();
            let next = cycle_option(options, current, delta);
            self.set_text(field, next);
        }
    }

    pub fn add_link(&mut self) {
        self.link.push(String::new());
    }

    /// Remove a URL slot; the last remaining slot is kept.
    pub fn remove_link(&mut self, index: usize) -> bool {
        if self.link.len() > 1 && index < self.link.len() {
            self.link.remove(index);
            true
        } else {
            false
        }
    }

    /// Fields that must be non-blank before submitting
    pub fn required(mode: FormMode) -> &'static [Field] {
        match mode {
            FormMode::Create => &[
                Field::ProductCode,
                Field::ProductName,
                Field::Category,
                Field::Brand,
                Field::BrandLogo,
                Field::Description,
            ],
            FormMode::Edit => &[
                Field::ProductName,
                Field::Category,
                Field::Brand,
                Field::BrandLogo,
                Field::Description,
            ],
        }
    }

    pub fn missing_required(&self, mode: FormMode) -> Vec<Field> {
        Self::required(mode)
            .iter()
            .copied()
            .filter(|f| self.text(*f).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }

    pub fn validate(&self, mode: FormMode) -> Result<(), &'static str> {
        if self.missing_required(mode).is_empty() {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE)
        }
    }

    fn clean_links(&self) -> Vec<String> {
        self.link
            .iter()
            .filter(|l| !l.trim().is_empty())
            .cloned()
            .collect()
    }

    fn clean_discount(&self) -> Option<String> {
        let d = self.discount.trim();
        (!d.is_empty()).then(|| d.to_string())
    }

    pub fn to_create(&self) -> ProductCreate {
        ProductCreate {
            product_code: trimmed(&self.product_code),
            main_boost: DEFAULT_MAIN_BOOST,
            low_value_flag: DEFAULT_LOW_VALUE_FLAG,
            popularity: DEFAULT_POPULARITY,
            product_name: trimmed(&self.product_name),
            category_name: trimmed(&self.category_name),
            brand_name: trimmed(&self.brand_name),
            brand_logo: self.brand_logo.clone(),
            description: trimmed(&self.description),
            link: self.clean_links(),
            show_in_app: self.show_in_app,
            new_product: self.new_product,
            discount: self.clean_discount(),
            is_spare_part: self.is_spare_part,
        }
    }

    pub fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            product_name: trimmed(&self.product_name),
            category_name: trimmed(&self.category_name),
            brand_name: trimmed(&self.brand_name),
            brand_logo: self.brand_logo.clone(),
            description: trimmed(&self.description),
            link: self.clean_links(),
            show_in_app: self.show_in_app,
            new_product: self.new_product,
            discount: self.clean_discount(),
            is_spare_part: self.is_spare_part,
        }
    }
}
