mod car;
mod entry;
mod validation;

pub use car::Car;
pub use entry::CarEntry;
pub use validation::{
    ValidationError, has_long_word, parse_kilometers, parse_price, parse_year, recheck_year,
    validate_kilometers_precision, validate_kilometers_range, validate_manufacturer_chars,
    validate_manufacturer_length, validate_manufacturer_meaning, validate_model_length,
    validate_model_meaning, validate_price_range, validate_year_digits, validate_year_range,
};
