use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A catalog resource the engine can validate, store and serve.
///
/// `Request` is the creation payload: the entity minus its `id`. Fields a
/// rule may report as missing should be `Option`s so that absent or `null`
/// JSON values reach the rule table instead of failing deserialization.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    type Request: Debug + DeserializeOwned + Send + Sync + 'static;

    /// Name used in client-facing messages ("Category not found with this id: ...")
    const RESOURCE: &'static str;

    /// MongoDB collection holding this resource
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Builds the canonical entity from an already validated request.
    fn from_request(id: String, request: Self::Request) -> Self;
}
