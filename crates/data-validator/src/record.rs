//! Normalized car record and the fixed field schema

use serde::{Deserialize, Serialize};

/// Input fields in the order they are checked and fed to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Company,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "km_driven")]
    KmDriven,
    #[serde(rename = "fuel")]
    Fuel,
    #[serde(rename = "transmission")]
    Transmission,
    #[serde(rename = "owner")]
    Owner,
    #[serde(rename = "seller_type")]
    SellerType,
    #[serde(rename = "seats")]
    Seats,
}

impl Field {
    /// All required fields, in check order
    pub const ALL: [Field; 8] = [
        Field::Company,
        Field::Year,
        Field::KmDriven,
        Field::Fuel,
        Field::Transmission,
        Field::Owner,
        Field::SellerType,
        Field::Seats,
    ];

    /// JSON key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Company => "Company",
            Field::Year => "year",
            Field::KmDriven => "km_driven",
            Field::Fuel => "fuel",
            Field::Transmission => "transmission",
            Field::Owner => "owner",
            Field::SellerType => "seller_type",
            Field::Seats => "seats",
        }
    }

    /// Whether the field is coerced to an integer
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Year | Field::KmDriven | Field::Seats)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, type-coerced prediction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Manufacturer, title-cased ("Toyota")
    #[serde(rename = "Company")]
    pub company: String,
    pub year: i64,
    pub km_driven: i64,
    pub fuel: String,
    pub transmission: String,
    pub owner: String,
    pub seller_type: String,
    pub seats: i64,
}

impl CarRecord {
    /// Categorical value for a string field, `None` for numeric fields
    pub fn categorical(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => Some(&self.company),
            Field::Fuel => Some(&self.fuel),
            Field::Transmission => Some(&self.transmission),
            Field::Owner => Some(&self.owner),
            Field::SellerType => Some(&self.seller_type),
            Field::Year | Field::KmDriven | Field::Seats => None,
        }
    }

    /// Numeric value for an integer field, `None` for categorical fields
    pub fn numeric(&self, field: Field) -> Option<i64> {
        match field {
            Field::Year => Some(self.year),
            Field::KmDriven => Some(self.km_driven),
            Field::Seats => Some(self.seats),
            _ => None,
        }
    }
}
