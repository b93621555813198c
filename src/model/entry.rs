//! Raw add-car form input and the pipeline that turns it into a [`Car`].

use super::car::Car;
use super::validation::{
    ValidationError, parse_kilometers, parse_price, parse_year, recheck_year,
    validate_kilometers_precision, validate_kilometers_range, validate_manufacturer_chars,
    validate_manufacturer_length, validate_manufacturer_meaning, validate_model_length,
    validate_model_meaning, validate_price_range, validate_year_digits, validate_year_range,
};

/// The six raw text fields of the add-car form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarEntry {
    pub manufacturer: String,
    pub model: String,
    pub info: String,
    pub year: String,
    pub price: String,
    pub kilometers: String,
}

/// Numeric values that survived the flat checks.
struct Parsed {
    year: i32,
    price: i32,
    kilometers: f64,
}

impl CarEntry {
    /// Validates the entry and builds a [`Car`] from it.
    ///
    /// Flat checks run first and every one of them runs, so the error list may
    /// hold several entries in field order. Only when all flat checks pass does
    /// the semantic chain run; it stops at its first failure and reports exactly
    /// one error.
    pub fn validate(&self) -> Result<Car, Vec<ValidationError>> {
        let parsed = self.flat_checks()?;
        self.semantic_chain(&parsed).map_err(|e| vec![e])?;

        Ok(Car::new(
            self.manufacturer.trim(),
            self.model.trim(),
            self.info.trim(),
            parsed.year,
            parsed.price,
            parsed.kilometers,
        ))
    }

    fn flat_checks(&self) -> Result<Parsed, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = validate_manufacturer_length(&self.manufacturer) {
            errors.push(e);
        }
        if let Err(e) = validate_manufacturer_chars(&self.manufacturer) {
            errors.push(e);
        }
        if let Err(e) = validate_model_length(&self.model) {
            errors.push(e);
        }

        let year = match parse_year(&self.year) {
            Ok(year) => {
                if let Err(e) = validate_year_digits(&self.year) {
                    errors.push(e);
                }
                if let Err(e) = validate_year_range(year) {
                    errors.push(e);
                }
                Some(year)
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let price = parse_price(&self.price)
            .and_then(|price| validate_price_range(price).map(|()| price))
            .map_err(|e| errors.push(e))
            .ok();

        let kilometers = parse_kilometers(&self.kilometers)
            .and_then(|km| validate_kilometers_range(km).map(|()| km))
            .map_err(|e| errors.push(e))
            .ok();

        match (year, price, kilometers) {
            (Some(year), Some(price), Some(kilometers)) if errors.is_empty() => Ok(Parsed {
                year,
                price,
                kilometers,
            }),
            _ => Err(errors),
        }
    }

    fn semantic_chain(&self, parsed: &Parsed) -> Result<(), ValidationError> {
        validate_manufacturer_meaning(&self.manufacturer)?;
        recheck_year(parsed.year)?;
        validate_model_meaning(&self.model)?;
        validate_kilometers_precision(&self.kilometers)
    }
}
