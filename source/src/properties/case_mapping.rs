use super::PropertiesError;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[inline]
pub fn parse_mapping(value: &str) -> Result<Option<u32>, PropertiesError>
{
    if value.is_empty() {
        return Ok(None);
    }

    match u32::from_str_radix(value, 16) {
        Ok(code) => Ok(Some(code)),
        Err(_) => Err(PropertiesError::InvalidMapping(value.to_owned())),
    }
}
