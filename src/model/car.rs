use std::fmt;

use serde::{Deserialize, Serialize};

/// A single car record offered for sale.
///
/// The entity enforces nothing itself; [`CarEntry::validate`](super::CarEntry::validate)
/// is the only place cars are built from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub manufacturer: String,
    pub model: String,
    pub info: String,
    pub year: i32,
    pub price: i32,
    pub kilometers: f64,
}

impl Car {
    /// Creates a car from already-validated values.
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        info: impl Into<String>,
        year: i32,
        price: i32,
        kilometers: f64,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            info: info.into(),
            year,
            price,
            kilometers,
        }
    }
}

#[mutants::skip]
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.manufacturer, self.model)
    }
}
