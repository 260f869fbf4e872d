//! Categories Domain
//!
//! Category resource on top of the generic CRUD engine: model, rule table and
//! documented HTTP handlers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_categories::{handlers, rules, Category};
//! use entity_crud::{BoundaryOptions, EntityService, InMemoryRepository};
//!
//! let service = EntityService::new(InMemoryRepository::<Category>::new(), rules());
//! let router = handlers::router(service, BoundaryOptions::default());
//! ```

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{Category, CreateCategory, rules};

/// Entity service specialised for categories
pub type CategoryService<R> = entity_crud::EntityService<Category, R>;
