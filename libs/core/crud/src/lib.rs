//! Entity CRUD engine
//!
//! Generic create/read machinery shared by every catalog resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← axum extractors, `uri=<path>` error context
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← rule table, id generation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and MongoDB backends
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← resource type and its creation request
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_crud::{EntityService, InMemoryRepository, RuleSet, Rule};
//!
//! let rules = RuleSet::new()
//!     .rule(Rule::not_blank("name", |r: &CreateCategory| r.name.as_deref()));
//! let service = EntityService::new(InMemoryRepository::<Category>::new(), rules);
//!
//! let validated = service.validate(request, "uri=/api/v1/categories")?;
//! let category = service.save(validated).await?;
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mongodb;
pub mod repository;
pub mod responses;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{CrudError, CrudResult};
pub use handlers::{BoundaryOptions, CrudState};
pub use mongodb::MongoRepository;
pub use repository::{InMemoryRepository, Repository};
pub use service::EntityService;
pub use validation::{Rule, RuleSet, Validated, ValidationFailure};
