//! API routes module
//!
//! Wires the category and product routers onto the configured storage backend.

pub mod health;

use axum::Router;
use domain_categories::Category;
use domain_products::Product;
use entity_crud::{BoundaryOptions, EntityService, InMemoryRepository, MongoRepository, Repository};

use crate::config::CatalogConfig;
use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let catalog = &state.config.catalog;
    let resources = match &state.db {
        Some(db) => resource_routes(
            MongoRepository::<Category>::new(db),
            MongoRepository::<Product>::new(db),
            catalog,
        ),
        None => resource_routes(
            InMemoryRepository::<Category>::new(),
            InMemoryRepository::<Product>::new(),
            catalog,
        ),
    };

    resources.merge(health::router(state.clone()))
}

/// Category and product routers over the given repositories
pub fn resource_routes<C, P>(categories: C, products: P, catalog: &CatalogConfig) -> Router
where
    C: Repository<Category> + 'static,
    P: Repository<Product> + 'static,
{
    let options = BoundaryOptions {
        include_timestamp: catalog.include_timestamps,
    };

    let category_service = EntityService::new(categories, domain_categories::rules());
    let product_service = EntityService::new(
        products,
        domain_products::rules(catalog.product_min_stock),
    );

    Router::new()
        .nest(
            "/v1/categories",
            domain_categories::handlers::router(category_service, options),
        )
        .nest(
            "/v1/products",
            domain_products::handlers::router(product_service, options),
        )
}
