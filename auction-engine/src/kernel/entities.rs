use uuid::Uuid;

/// Monetary value in minor currency units (cents).
pub type Amount = u64;

pub type ProductId = Uuid;
