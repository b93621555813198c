use thiserror::Error;

/// Shortest accepted manufacturer name, after trimming.
pub const MANUFACTURER_MIN_LEN: usize = 3;
/// Longest accepted manufacturer name, after trimming.
pub const MANUFACTURER_MAX_LEN: usize = 15;
/// Shortest accepted model name, after trimming.
pub const MODEL_MIN_LEN: usize = 2;
/// Longest accepted model name, after trimming.
pub const MODEL_MAX_LEN: usize = 10;
/// Latest accepted model year.
pub const YEAR_MAX: i32 = 2021;
/// Years must be strictly after this one.
pub const YEAR_FLOOR: i32 = 1900;
/// Cheapest accepted price.
pub const PRICE_MIN: i32 = 9_999;
/// Most expensive accepted price.
pub const PRICE_MAX: i32 = 100_000_000;
/// Highest accepted odometer reading.
pub const KILOMETERS_MAX: f64 = 500_000.0;

/// Validation errors for the add-car form fields.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The \"Manufacturer\" field must contain at least 3 characters and at most 15")]
    ManufacturerLength,
    #[error("The \"Manufacturer\" field must contain alphabets only")]
    ManufacturerNotAlphabetic,
    #[error(
        "An error has occurred due to incorrect \"Manufacturer\" text field data.\nThis text field must contain a word of more than two characters."
    )]
    ManufacturerTooShort,
    #[error("The \"Model\" field must contain at least 2 characters and at most 10")]
    ModelLength,
    #[error(
        "An error has occurred due to incorrect \"Model\" text field data.\nThis text field must contain a word of more than two characters."
    )]
    ModelTooShort,
    #[error("The \"Year\" field must contain numerical digits only")]
    YearNotNumeric,
    #[error("The \"Year\" field must contain four numeric digits only")]
    YearNotFourDigits,
    #[error(
        "An error has occurred due to incorrect \"Year\" text field data.\nThis text field must be in the form YYYY, e.g. 2007."
    )]
    YearOutOfRange,
    #[error("The \"Price\" field must contain a valid integer with no decimal places and no \",\"")]
    PriceNotInteger,
    #[error("The \"Price\" field must contain a valid integer between 9,999 and 100,000,000")]
    PriceOutOfRange,
    #[error("The \"Km Traveled\" field must contain a number")]
    KilometersNotNumeric,
    #[error("The \"Km Traveled\" field must contain a number between 0 and 500000")]
    KilometersOutOfRange,
    #[error(
        "An error has occurred due to incorrect \"Km Traveled\" text field data.\nThis text field must contain a number with one decimal place only."
    )]
    KilometersPrecision,
    #[error(
        "An unknown error has occurred. Please ensure your fields meet the following requirements:\nThe \"Year\" field must contain four numeric digits only\nThe \"Price\" field must contain a valid integer with no decimal places\nThe \"Km Traveled\" field must contain a number which can have a maximum of one decimal place"
    )]
    Unrecognised,
}

/// Validates the manufacturer length: 3 to 15 characters after trimming.
pub fn validate_manufacturer_length(manufacturer: &str) -> Result<(), ValidationError> {
    let len = manufacturer.trim().chars().count();
    if (MANUFACTURER_MIN_LEN..=MANUFACTURER_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::ManufacturerLength)
    }
}

/// Validates that every manufacturer character is an ASCII letter.
///
/// Works on raw character codes: anything below `A` (65), between `Z` and `a`
/// (91..=96), or above `z` (122) is rejected. Non-ASCII letters are rejected too.
pub fn validate_manufacturer_chars(manufacturer: &str) -> Result<(), ValidationError> {
    let rejected = |code: u32| code < 65 || (91..=96).contains(&code) || code > 122;
    if manufacturer.trim().chars().any(|c| rejected(u32::from(c))) {
        Err(ValidationError::ManufacturerNotAlphabetic)
    } else {
        Ok(())
    }
}

/// Validates the model length: 2 to 10 characters after trimming.
pub fn validate_model_length(model: &str) -> Result<(), ValidationError> {
    let len = model.trim().chars().count();
    if (MODEL_MIN_LEN..=MODEL_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::ModelLength)
    }
}

/// Returns `true` if any space-delimited word is longer than two characters.
pub fn has_long_word(text: &str) -> bool {
    text.split(' ').any(|word| word.chars().count() > 2)
}

/// Checks that the manufacturer holds at least one word longer than two characters.
pub fn validate_manufacturer_meaning(manufacturer: &str) -> Result<(), ValidationError> {
    if has_long_word(manufacturer.trim()) {
        Ok(())
    } else {
        Err(ValidationError::ManufacturerTooShort)
    }
}

/// Checks that the model holds at least one word longer than two characters.
pub fn validate_model_meaning(model: &str) -> Result<(), ValidationError> {
    if has_long_word(model.trim()) {
        Ok(())
    } else {
        Err(ValidationError::ModelTooShort)
    }
}

/// Parses the year field as a signed 32-bit integer.
pub fn parse_year(year: &str) -> Result<i32, ValidationError> {
    year.trim()
        .parse()
        .map_err(|_| ValidationError::YearNotNumeric)
}

/// Validates that the trimmed year text is exactly four characters long.
pub fn validate_year_digits(year: &str) -> Result<(), ValidationError> {
    if year.trim().chars().count() == 4 {
        Ok(())
    } else {
        Err(ValidationError::YearNotFourDigits)
    }
}

/// Validates `1900 < year <= 2021`.
pub fn validate_year_range(year: i32) -> Result<(), ValidationError> {
    if year > YEAR_FLOOR && year <= YEAR_MAX {
        Ok(())
    } else {
        Err(ValidationError::YearOutOfRange)
    }
}

/// Inclusive year recheck used by the semantic chain: `1900 <= year <= 2021`.
pub fn recheck_year(year: i32) -> Result<(), ValidationError> {
    if (YEAR_FLOOR..=YEAR_MAX).contains(&year) {
        Ok(())
    } else {
        Err(ValidationError::YearOutOfRange)
    }
}

/// Parses the price field as a signed 32-bit integer. Overflow is a parse failure.
pub fn parse_price(price: &str) -> Result<i32, ValidationError> {
    price
        .trim()
        .parse()
        .map_err(|_| ValidationError::PriceNotInteger)
}

/// Validates `9999 <= price <= 100000000`.
pub fn validate_price_range(price: i32) -> Result<(), ValidationError> {
    if (PRICE_MIN..=PRICE_MAX).contains(&price) {
        Ok(())
    } else {
        Err(ValidationError::PriceOutOfRange)
    }
}

/// Parses the kilometers field as a decimal number.
pub fn parse_kilometers(kilometers: &str) -> Result<f64, ValidationError> {
    kilometers
        .trim()
        .parse()
        .map_err(|_| ValidationError::KilometersNotNumeric)
}

/// Validates `0 <= kilometers <= 500000`. NaN and infinities are out of range.
pub fn validate_kilometers_range(kilometers: f64) -> Result<(), ValidationError> {
    if (0.0..=KILOMETERS_MAX).contains(&kilometers) {
        Ok(())
    } else {
        Err(ValidationError::KilometersOutOfRange)
    }
}

/// Checks the decimal places of the kilometers text.
///
/// Text is split on `.` with empty pieces skipped. Without a second piece the
/// value is accepted. A one-character fraction is accepted; a longer fraction is
/// accepted only when every digit after its first is zero (`3.00`, `12.30`).
/// A fraction that does not parse as an integer yields
/// [`ValidationError::Unrecognised`].
pub fn validate_kilometers_precision(kilometers: &str) -> Result<(), ValidationError> {
    let mut pieces = kilometers.trim().split('.').filter(|piece| !piece.is_empty());
    pieces.next();
    let Some(fraction) = pieces.next() else {
        return Ok(());
    };

    let len = fraction.chars().count();
    if len == 1 {
        return Ok(());
    }

    let value: i32 = fraction
        .parse()
        .map_err(|_| ValidationError::Unrecognised)?;
    let trailing = i32::try_from(len - 1).unwrap_or(i32::MAX);
    if f64::from(value) % 10_f64.powi(trailing) == 0.0 {
        Ok(())
    } else {
        Err(ValidationError::KilometersPrecision)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn letters(seed: &[u8], len: usize) -> String {
        (0..len)
            .map(|i| {
                let b = seed.get(i).copied().unwrap_or(0) % 52;
                if b < 26 {
                    (b'A' + b) as char
                } else {
                    (b'a' + b - 26) as char
                }
            })
            .collect()
    }

    // --- manufacturer ---

    #[test]
    fn manufacturer_simple() {
        assert_eq!(validate_manufacturer_length("Toyota"), Ok(()));
        assert_eq!(validate_manufacturer_chars("Toyota"), Ok(()));
        assert_eq!(validate_manufacturer_meaning("Toyota"), Ok(()));
    }

    #[test]
    fn manufacturer_length_bounds() {
        assert_eq!(validate_manufacturer_length("Kia"), Ok(()));
        assert_eq!(validate_manufacturer_length("Mercedesbenzzzz"), Ok(()));
        assert_eq!(
            validate_manufacturer_length("VW"),
            Err(ValidationError::ManufacturerLength)
        );
        assert_eq!(
            validate_manufacturer_length("Mercedesbenzzzzz"),
            Err(ValidationError::ManufacturerLength)
        );
    }

    #[test]
    fn manufacturer_length_is_trimmed() {
        assert_eq!(
            validate_manufacturer_length("  VW  "),
            Err(ValidationError::ManufacturerLength)
        );
        assert_eq!(validate_manufacturer_length("  Kia  "), Ok(()));
    }

    #[test]
    fn manufacturer_empty() {
        assert_eq!(
            validate_manufacturer_length(""),
            Err(ValidationError::ManufacturerLength)
        );
        assert_eq!(validate_manufacturer_chars(""), Ok(()));
    }

    #[test]
    fn manufacturer_rejects_digits_spaces_and_symbols() {
        for bad in ["Peugeot206", "Alfa Romeo", "Rolls-Royce", "Ford_", "Citroën"] {
            assert_eq!(
                validate_manufacturer_chars(bad),
                Err(ValidationError::ManufacturerNotAlphabetic),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn manufacturer_rejects_codes_between_cases() {
        for bad in ["Ab[", "Ab\\", "Ab]", "Ab^", "Ab`", "Ab{", "Ab@"] {
            assert_eq!(
                validate_manufacturer_chars(bad),
                Err(ValidationError::ManufacturerNotAlphabetic),
                "{bad} should be rejected"
            );
        }
    }

    #[quickcheck]
    fn manufacturer_of_letters_in_range_is_valid(seed: Vec<u8>, len: u8) -> bool {
        let len = usize::from(len % 13) + 3; // 3-15
        let name = letters(&seed, len);
        validate_manufacturer_length(&name).is_ok()
            && validate_manufacturer_chars(&name).is_ok()
            && validate_manufacturer_meaning(&name).is_ok()
    }

    #[quickcheck]
    fn manufacturer_with_non_letter_is_rejected(seed: Vec<u8>, pos: u8, bad: u8) -> bool {
        let mut name: Vec<char> = letters(&seed, 6).chars().collect();
        let bad = match bad % 3 {
            0 => '7',
            1 => '@',
            _ => '-',
        };
        name[usize::from(pos) % 6] = bad;
        let name: String = name.into_iter().collect();
        validate_manufacturer_chars(&name).is_err()
    }

    // --- model ---

    #[test]
    fn model_length_bounds() {
        assert_eq!(validate_model_length("C4"), Ok(()));
        assert_eq!(validate_model_length("Landcruise"), Ok(()));
        assert_eq!(validate_model_length("X"), Err(ValidationError::ModelLength));
        assert_eq!(
            validate_model_length("Landcruiser"),
            Err(ValidationError::ModelLength)
        );
    }

    #[test]
    fn model_meaning_needs_a_long_word() {
        assert_eq!(validate_model_meaning("Corolla"), Ok(()));
        assert_eq!(validate_model_meaning("A 4 GTI"), Ok(()));
        assert_eq!(validate_model_meaning("C4"), Err(ValidationError::ModelTooShort));
        assert_eq!(
            validate_model_meaning("A4 S4 RS"),
            Err(ValidationError::ModelTooShort)
        );
    }

    #[test]
    fn long_word_ignores_repeated_spaces() {
        assert!(!has_long_word("ab  cd"));
        assert!(has_long_word("ab   cde"));
        assert!(!has_long_word(""));
    }

    // --- year ---

    #[test]
    fn year_valid() {
        assert_eq!(parse_year("2007"), Ok(2007));
        assert_eq!(validate_year_digits("2007"), Ok(()));
        assert_eq!(validate_year_range(2007), Ok(()));
    }

    #[test]
    fn year_three_digits() {
        assert_eq!(parse_year("999"), Ok(999));
        assert_eq!(
            validate_year_digits("999"),
            Err(ValidationError::YearNotFourDigits)
        );
    }

    #[test]
    fn year_range_bounds() {
        assert_eq!(
            validate_year_range(1900),
            Err(ValidationError::YearOutOfRange)
        );
        assert_eq!(validate_year_range(1901), Ok(()));
        assert_eq!(validate_year_range(2021), Ok(()));
        assert_eq!(
            validate_year_range(2022),
            Err(ValidationError::YearOutOfRange)
        );
    }

    #[test]
    fn year_recheck_is_inclusive() {
        assert_eq!(recheck_year(1900), Ok(()));
        assert_eq!(recheck_year(2021), Ok(()));
        assert_eq!(recheck_year(1899), Err(ValidationError::YearOutOfRange));
    }

    #[test]
    fn year_not_numeric() {
        assert_eq!(parse_year("abcd"), Err(ValidationError::YearNotNumeric));
        assert_eq!(parse_year(""), Err(ValidationError::YearNotNumeric));
        assert_eq!(parse_year("20.7"), Err(ValidationError::YearNotNumeric));
    }

    #[test]
    fn year_is_trimmed() {
        assert_eq!(parse_year(" 2007 "), Ok(2007));
        assert_eq!(validate_year_digits(" 2007 "), Ok(()));
    }

    // --- price ---

    #[test]
    fn price_bounds() {
        assert_eq!(validate_price_range(9_999), Ok(()));
        assert_eq!(
            validate_price_range(9_998),
            Err(ValidationError::PriceOutOfRange)
        );
        assert_eq!(validate_price_range(100_000_000), Ok(()));
        assert_eq!(
            validate_price_range(100_000_001),
            Err(ValidationError::PriceOutOfRange)
        );
    }

    #[test]
    fn price_not_integer() {
        assert_eq!(parse_price("15000.50"), Err(ValidationError::PriceNotInteger));
        assert_eq!(parse_price("15,000"), Err(ValidationError::PriceNotInteger));
        assert_eq!(parse_price("cheap"), Err(ValidationError::PriceNotInteger));
    }

    #[test]
    fn price_overflow_is_not_integer() {
        assert_eq!(
            parse_price("99999999999"),
            Err(ValidationError::PriceNotInteger)
        );
    }

    #[test]
    fn negative_price_parses_then_fails_range() {
        assert_eq!(parse_price("-15000"), Ok(-15_000));
        assert_eq!(
            validate_price_range(-15_000),
            Err(ValidationError::PriceOutOfRange)
        );
    }

    #[quickcheck]
    fn price_in_range_always_accepted(n: u32) -> bool {
        let price = PRICE_MIN + (n % (PRICE_MAX - PRICE_MIN + 1) as u32) as i32;
        parse_price(&price.to_string()) == Ok(price) && validate_price_range(price).is_ok()
    }

    // --- kilometers ---

    #[test]
    fn kilometers_range() {
        assert_eq!(parse_kilometers("500000"), Ok(500_000.0));
        assert_eq!(validate_kilometers_range(500_000.0), Ok(()));
        assert_eq!(validate_kilometers_range(0.0), Ok(()));
        assert_eq!(
            validate_kilometers_range(-1.0),
            Err(ValidationError::KilometersOutOfRange)
        );
        assert_eq!(
            validate_kilometers_range(500_000.1),
            Err(ValidationError::KilometersOutOfRange)
        );
    }

    #[test]
    fn kilometers_nan_and_infinity_out_of_range() {
        let nan = parse_kilometers("NaN").unwrap();
        assert_eq!(
            validate_kilometers_range(nan),
            Err(ValidationError::KilometersOutOfRange)
        );
        let inf = parse_kilometers("inf").unwrap();
        assert_eq!(
            validate_kilometers_range(inf),
            Err(ValidationError::KilometersOutOfRange)
        );
    }

    #[test]
    fn kilometers_not_numeric() {
        assert_eq!(
            parse_kilometers("far"),
            Err(ValidationError::KilometersNotNumeric)
        );
        assert_eq!(
            parse_kilometers(""),
            Err(ValidationError::KilometersNotNumeric)
        );
    }

    #[test]
    fn kilometers_precision_accepts_one_place() {
        assert_eq!(validate_kilometers_precision("500000"), Ok(()));
        assert_eq!(validate_kilometers_precision("500000.0"), Ok(()));
        assert_eq!(validate_kilometers_precision("45000.5"), Ok(()));
    }

    #[test]
    fn kilometers_precision_trailing_zeros() {
        assert_eq!(validate_kilometers_precision("12.30"), Ok(()));
        assert_eq!(validate_kilometers_precision("3.00"), Ok(()));
        assert_eq!(validate_kilometers_precision("3.000"), Ok(()));
        assert_eq!(validate_kilometers_precision("3.100"), Ok(()));
    }

    #[test]
    fn kilometers_precision_rejects_extra_digits() {
        assert_eq!(
            validate_kilometers_precision("12.34"),
            Err(ValidationError::KilometersPrecision)
        );
        assert_eq!(
            validate_kilometers_precision("3.05"),
            Err(ValidationError::KilometersPrecision)
        );
        assert_eq!(
            validate_kilometers_precision("3.110"),
            Err(ValidationError::KilometersPrecision)
        );
    }

    #[test]
    fn kilometers_precision_skips_empty_pieces() {
        assert_eq!(validate_kilometers_precision("5."), Ok(()));
        assert_eq!(validate_kilometers_precision(".5"), Ok(()));
        assert_eq!(validate_kilometers_precision(".25"), Ok(()));
    }

    #[test]
    fn kilometers_precision_unparsable_fraction() {
        assert_eq!(
            validate_kilometers_precision("1.5e3"),
            Err(ValidationError::Unrecognised)
        );
        assert_eq!(
            validate_kilometers_precision("1.12345678901"),
            Err(ValidationError::Unrecognised)
        );
    }

    #[test]
    fn kilometers_precision_long_zero_fraction() {
        assert_eq!(validate_kilometers_precision("3.000000000000"), Ok(()));
    }

    #[quickcheck]
    fn kilometers_one_decimal_always_accepted(whole: u32, tenth: u8) -> bool {
        let text = format!("{}.{}", whole % 500_000, tenth % 10);
        parse_kilometers(&text)
            .and_then(validate_kilometers_range)
            .and_then(|()| validate_kilometers_precision(&text))
            .is_ok()
    }

    #[quickcheck]
    fn kilometers_nonzero_second_decimal_rejected(whole: u32, first: u8, second: u8) -> bool {
        let second = (second % 9) + 1; // 1-9
        let text = format!("{}.{}{}", whole % 500_000, first % 10, second);
        validate_kilometers_precision(&text) == Err(ValidationError::KilometersPrecision)
    }
}
