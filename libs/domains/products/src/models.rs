use entity_crud::{Entity, Rule, RuleSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum accepted stock when none is configured
pub const DEFAULT_MIN_STOCK: i32 = 1;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, generated on creation
    #[schema(example = "0f8fad5b-d9cb-469f-a165-70867728950e")]
    pub id: String,
    #[schema(example = "Wireless Mouse")]
    pub name: String,
    #[schema(example = "Ergonomic 2.4GHz mouse")]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 29.99)]
    pub price: Decimal,
    /// Category reference; existence is not checked
    #[schema(example = "1b4e28ba-2fa1-41d2-883f-0016d3cca427")]
    pub category_id: String,
    #[schema(example = 100)]
    pub stock: i32,
}

/// DTO for creating a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Required, not blank
    #[schema(example = "Wireless Mouse")]
    pub name: Option<String>,
    /// Required, not blank
    #[schema(example = "Ergonomic 2.4GHz mouse")]
    pub description: Option<String>,
    /// Required, zero or more
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 29.99)]
    pub price: Option<Decimal>,
    /// Required, not blank
    #[schema(example = "1b4e28ba-2fa1-41d2-883f-0016d3cca427")]
    pub category_id: Option<String>,
    /// Defaults to 0; must reach the configured minimum
    #[schema(example = 100)]
    pub stock: Option<i32>,
}

impl Entity for Product {
    type Request = CreateProduct;

    const RESOURCE: &'static str = "Product";
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_request(id: String, request: CreateProduct) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            price: request.price.unwrap_or_default(),
            category_id: request.category_id.unwrap_or_default(),
            stock: request.stock.unwrap_or(0),
        }
    }
}

/// Rule table for product creation
pub fn rules(min_stock: i32) -> RuleSet<CreateProduct> {
    RuleSet::new()
        .rule(Rule::not_blank("name", |r: &CreateProduct| r.name.as_deref()))
        .rule(Rule::not_blank("description", |r: &CreateProduct| {
            r.description.as_deref()
        }))
        .rule(Rule::not_null("price", |r: &CreateProduct| r.price.as_ref()))
        .rule(Rule::minimum("price", Decimal::ZERO, |r: &CreateProduct| r.price))
        .rule(Rule::not_blank("categoryId", |r: &CreateProduct| {
            r.category_id.as_deref()
        }))
        .rule(Rule::minimum("stock", min_stock, |r: &CreateProduct| {
            Some(r.stock.unwrap_or(0))
        }))
}
