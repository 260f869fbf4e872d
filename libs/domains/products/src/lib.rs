//! Products Domain
//!
//! Product resource on top of the generic CRUD engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP layer (documented wrappers)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │EntityService│  ← rule table from `rules(min_stock)`
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← in-memory or MongoDB
//! └─────────────┘
//! ```
//!
//! The minimum accepted stock is configuration, so the rule table is built
//! at startup:
//!
//! ```rust,ignore
//! use domain_products::{handlers, rules, Product};
//! use entity_crud::{BoundaryOptions, EntityService, MongoRepository};
//!
//! let repo = MongoRepository::<Product>::new(&db);
//! let service = EntityService::new(repo, rules(1));
//! let router = handlers::router(service, BoundaryOptions::default());
//! ```

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{CreateProduct, DEFAULT_MIN_STOCK, Product, rules};

/// Entity service specialised for products
pub type ProductService<R> = entity_crud::EntityService<Product, R>;
