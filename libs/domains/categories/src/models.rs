use entity_crud::{Entity, Rule, RuleSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier, generated on creation
    #[schema(example = "1b4e28ba-2fa1-41d2-883f-0016d3cca427")]
    pub id: String,
    #[schema(example = "Electronics")]
    pub name: String,
    #[schema(example = "Devices and accessories")]
    pub description: String,
}

/// DTO for creating a category
///
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCategory {
    /// Required, not blank
    #[schema(example = "Electronics")]
    pub name: Option<String>,
    /// Required, not blank
    #[schema(example = "Devices and accessories")]
    pub description: Option<String>,
}

impl Entity for Category {
    type Request = CreateCategory;

    const RESOURCE: &'static str = "Category";
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_request(id: String, request: CreateCategory) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
        }
    }
}

/// Rule table for category creation
pub fn rules() -> RuleSet<CreateCategory> {
    RuleSet::new()
        .rule(Rule::not_blank("name", |r: &CreateCategory| r.name.as_deref()))
        .rule(Rule::not_blank("description", |r: &CreateCategory| {
            r.description.as_deref()
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_reported() {
        let request = CreateCategory {
            name: Some(String::new()),
            description: Some(String::new()),
        };

        let failure = rules().validate(request, "uri=/api/v1/categories").unwrap_err();
        assert_eq!(failure.errors.len(), 2);
        assert_eq!(failure.errors["name"], "must not be blank");
        assert_eq!(failure.errors["description"], "must not be blank");
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let request: CreateCategory = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let failure = rules().validate(request, "uri=/api/v1/categories").unwrap_err();

        assert!(failure.errors.contains_key("name"));
        assert!(failure.errors.contains_key("description"));
    }

    #[test]
    fn test_request_ignores_client_id() {
        let request: CreateCategory =
            serde_json::from_str(r#"{"id": "x", "name": "Books", "description": "Paper"}"#)
                .unwrap();
        let validated = rules().validate(request, "uri=/api/v1/categories").unwrap();

        let category = Category::from_request("generated".to_string(), validated.into_inner());
        assert_eq!(category.id, "generated");
        assert_eq!(category.name, "Books");
    }
}
