use unicode_classifier::{DecimalValue, NumericValue, ABSENT_DIGIT};
use unicode_data_source::CodepointRecord;

use crate::PrepareError;

/// числовое значение кодпоинта
///
/// в UnicodeData.txt значение записано либо десятичным числом ("5", "-3", "0.5"),
/// либо дробью ("1/4", "-1/2"). всё остальное, как и деление на ноль - ошибка
pub fn numeric_value(code: u32, text: &str) -> Result<f64, PrepareError>
{
    let invalid = || PrepareError::InvalidNumericValue {
        code,
        value: text.to_owned(),
    };

    let value = match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = plain_decimal(numerator).ok_or_else(invalid)?;
            let denominator = plain_decimal(denominator).ok_or_else(invalid)?;

            if denominator == 0.0 {
                return Err(invalid());
            }

            numerator / denominator
        }
        None => plain_decimal(text).ok_or_else(invalid)?,
    };

    match value.is_finite() {
        true => Ok(value),
        false => Err(invalid()),
    }
}

/// число вида [+-]цифры[.цифры]
///
/// f64::from_str понимает также "inf", "NaN" и экспоненту - в UCD их не бывает
fn plain_decimal(text: &str) -> Option<f64>
{
    let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !is_digits(integer) || !fraction.map_or(true, is_digits) {
        return None;
    }

    text.parse().ok()
}

/// запись для секции числовых значений
pub fn numeric_entry(record: &CodepointRecord) -> Result<Option<NumericValue>, PrepareError>
{
    match record.numeric.as_deref() {
        Some(text) => Ok(Some(NumericValue {
            code: record.code,
            value: numeric_value(record.code, text)?,
        })),
        None => Ok(None),
    }
}

/// запись для секции decimal / digit, если есть хотя бы одно из значений
pub fn decimal_entry(record: &CodepointRecord) -> Option<DecimalValue>
{
    if record.decimal.is_none() && record.digit.is_none() {
        return None;
    }

    Some(DecimalValue {
        code: record.code,
        decimal: record.decimal.unwrap_or(ABSENT_DIGIT),
        digit: record.digit.unwrap_or(ABSENT_DIGIT),
    })
}
