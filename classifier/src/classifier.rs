use crate::data::*;
use crate::{DecodeError, GeneralCategory};

/// классификатор кодпоинтов по данным бинарной таблицы
///
/// запросы никогда не завершаются ошибкой: кодпоинт, отсутствующий в таблице, имеет категорию
/// Cn (Unassigned) и не имеет числовых значений и пар в другом регистре
#[derive(Debug, Clone)]
pub struct UnicodeClassifier
{
    tables: UnicodeTables,
}

impl UnicodeClassifier
{
    /// разобрать бинарную таблицу
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError>
    {
        Ok(Self::from_tables(UnicodeTables::decode(data)?))
    }

    /// таблицы уже в памяти (например, сразу после подготовки)
    pub fn from_tables(tables: UnicodeTables) -> Self
    {
        Self { tables }
    }

    pub fn tables(&self) -> &UnicodeTables
    {
        &self.tables
    }

    /// основная категория кодпоинта
    #[inline]
    pub fn category_of(&self, code: u32) -> GeneralCategory
    {
        if (code as usize) < LATIN_TABLE_SIZE {
            return self.tables.latin[code as usize];
        }

        // диапазоны не пересекаются, поэтому отсортированы и по концу
        let ranges = &self.tables.ranges;
        let index = ranges.partition_point(|r| r.to < code);

        if let Some(range) = ranges.get(index) {
            if range.contains(code) {
                return range.category;
            }
        }

        match find(&self.tables.points, code, |p| p.code) {
            Some(point) => point.category,
            None => GeneralCategory::Unassigned,
        }
    }

    /// числовое значение (в т.ч. дробное)
    #[inline]
    pub fn numeric_value_of(&self, code: u32) -> Option<f64>
    {
        find(&self.tables.values, code, |v| v.code).map(|v| v.value)
    }

    /// десятичная цифра (Numeric_Type = Decimal)
    #[inline]
    pub fn decimal_digit_of(&self, code: u32) -> Option<u8>
    {
        find(&self.tables.decimals, code, |d| d.code).and_then(|d| digit(d.decimal))
    }

    /// цифра (Numeric_Type = Digit или Decimal)
    #[inline]
    pub fn digit_value_of(&self, code: u32) -> Option<u8>
    {
        find(&self.tables.decimals, code, |d| d.code).and_then(|d| digit(d.digit))
    }

    /// соответствующая строчная буква
    #[inline]
    pub fn lowercase_of(&self, code: u32) -> Option<u32>
    {
        find(&self.tables.lowercase, code, |l| l.code).map(|l| l.lower)
    }

    /// соответствующая прописная буква
    #[inline]
    pub fn uppercase_of(&self, code: u32) -> Option<u32>
    {
        if let Some(unique) = find(&self.tables.case_unique, code, |c| c.code) {
            return Some(unique.upper);
        }

        find(&self.tables.case_double, code, |c| c.code).map(|c| c.upper)
    }

    /// соответствующая заглавная буква
    #[inline]
    pub fn titlecase_of(&self, code: u32) -> Option<u32>
    {
        if let Some(unique) = find(&self.tables.case_unique, code, |c| c.code) {
            return Some(unique.upper);
        }

        find(&self.tables.case_double, code, |c| c.code).map(|c| c.title)
    }

    #[inline]
    pub fn category_of_char(&self, c: char) -> GeneralCategory
    {
        self.category_of(u32::from(c))
    }

    /// символ в верхнем регистре, или он же, если пары нет
    pub fn to_uppercase_char(&self, c: char) -> char
    {
        map_char(c, self.uppercase_of(u32::from(c)))
    }

    /// символ в нижнем регистре, или он же, если пары нет
    pub fn to_lowercase_char(&self, c: char) -> char
    {
        map_char(c, self.lowercase_of(u32::from(c)))
    }

    /// заглавный вариант символа, или он же, если пары нет
    pub fn to_titlecase_char(&self, c: char) -> char
    {
        map_char(c, self.titlecase_of(u32::from(c)))
    }
}

/// двоичный поиск записи в секции, отсортированной по кодпоинтам
#[inline]
fn find<T>(entries: &[T], code: u32, key: impl FnMut(&T) -> u32) -> Option<&T>
{
    entries
        .binary_search_by_key(&code, key)
        .ok()
        .map(|index| &entries[index])
}

#[inline]
fn digit(value: i8) -> Option<u8>
{
    match value == ABSENT_DIGIT {
        true => None,
        false => u8::try_from(value).ok(),
    }
}

#[inline]
fn map_char(c: char, mapped: Option<u32>) -> char
{
    mapped.and_then(char::from_u32).unwrap_or(c)
}
