use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Product entity - a catalog record
///
/// Immutable value: updates produce a new `Product` with the same id.
/// The id is assigned exactly once, at creation, by
/// [`IdService`](crate::id::IdService) and never changes afterwards.
///
/// No validation is enforced on `title` or `price`; an empty title and a
/// negative price are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, the store's primary key
    pub id: String,
    /// Product title (arbitrary, may be empty)
    pub title: String,
    /// Product price (any signed integer)
    pub price: i64,
}

/// DTO for creating a new product
///
/// Never persisted directly; the service attaches a freshly generated id
/// and persists the resulting [`Product`].
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewProduct {
    pub title: String,
    pub price: i64,
}

/// DTO for partially updating an existing product
///
/// Each field is an explicit `Option`: `None` means "leave unchanged",
/// never "clear". Supplying neither field is legal and re-saves the
/// record as-is.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateProduct {
    /// New title, or absent to retain the current one
    pub title: Option<String>,
    /// New price, or absent to retain the current one
    pub price: Option<i64>,
}

impl Product {
    /// Build a product from a creation payload and an assigned id
    pub fn new(id: String, input: NewProduct) -> Self {
        Self {
            id,
            title: input.title,
            price: input.price,
        }
    }

    /// Apply updates from an UpdateProduct DTO
    ///
    /// Supplied fields replace the current values; absent fields are
    /// retained. The id is untouched.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}
