use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

/// A stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// The mutable part of an item, everything but its id
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ItemFields {
    pub fn into_item(self, id: u64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Request body for creating an item
#[serde_as]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
    /// Numbers and numeric strings such as "9.99" are accepted
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: f64,
}

/// Request body for replacing an item
#[serde_as]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: f64,
}

/// Checks a decoded body before it reaches the store
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn check_price(price: f64) -> Result<(), String> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(format!("price: expected a finite number, got {}", price))
    }
}

impl Validate for CreateItemRequest {
    fn validate(&self) -> Result<(), String> {
        check_price(self.price)
    }
}

impl Validate for UpdateItemRequest {
    fn validate(&self) -> Result<(), String> {
        check_price(self.price)
    }
}

macro_rules! into_item_fields {
    ($($request:ty),*) => {
        $(
            impl From<$request> for ItemFields {
                fn from(request: $request) -> Self {
                    Self {
                        name: request.name,
                        description: request.description,
                        price: request.price,
                    }
                }
            }
        )*
    };
}

into_item_fields!(CreateItemRequest, UpdateItemRequest);
