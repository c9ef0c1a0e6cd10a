use {
    crate::kernel::entities::{
        Amount,
        ProductId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
};

/// Status of a product in the catalog service. The engine drives the
/// Pending -> Active transition at auction creation and the Active ->
/// Sold/Unsold transition at settlement; everything else belongs to the
/// catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Pending,
    Active,
    Sold,
    Unsold,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "PENDING",
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Sold => "SOLD",
            ProductStatus::Unsold => "UNSOLD",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id:          ProductId,
    pub product_name:        String,
    pub product_description: String,
    pub price:               Amount,
    pub seller_name:         String,
    pub status:              ProductStatus,
}
