use super::PropertiesError;

/// Numeric_Type = Decimal / Digit
/// берется из UCD: 6 и 7 колонки UnicodeData.txt, каждое значение - из своей колонки.
/// допустимы только цифры от 0 до 9
pub fn parse_digit(value: &str) -> Result<Option<i8>, PropertiesError>
{
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<i8>() {
        Ok(digit @ 0 ..= 9) => Ok(Some(digit)),
        _ => Err(PropertiesError::InvalidDigit(value.to_owned())),
    }
}

/// Numeric_Value
/// берется из UCD: 8 колонка UnicodeData.txt
///
/// значение сохраняется текстом: это может быть как целое число, так и дробь ("1/4", "-1/2").
/// вычисляется оно при подготовке таблиц
pub fn parse_numeric(value: &str) -> Option<String>
{
    match value.is_empty() {
        true => None,
        false => Some(value.to_owned()),
    }
}
