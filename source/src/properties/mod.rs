mod case_mapping;
mod numeric;

pub use case_mapping::parse_mapping;
pub use numeric::parse_digit;
pub use numeric::parse_numeric;

use thiserror::Error;
use unicode_classifier::{GeneralCategory, UnknownCategory};

/// кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct CodepointRecord
{
    /// код символа
    pub code: u32,
    /// категория символа (general category)
    pub category: GeneralCategory,
    /// числовое значение в исходном виде, например "5" или "1/4"
    pub numeric: Option<String>,
    /// десятичная цифра (колонка 6)
    pub decimal: Option<i8>,
    /// цифра (колонка 7)
    pub digit: Option<i8>,
    /// соответствующая прописная буква
    pub upper: Option<u32>,
    /// соответствующая строчная буква
    pub lower: Option<u32>,
    /// соответствующая заглавная буква
    pub title: Option<u32>,
}

impl CodepointRecord
{
    /// кодпоинт без свойств, кроме категории
    pub fn new(code: u32, category: GeneralCategory) -> Self
    {
        Self {
            code,
            category,
            numeric: None,
            decimal: None,
            digit: None,
            upper: None,
            lower: None,
            title: None,
        }
    }
}

/// ошибка разбора отдельной строки UnicodeData.txt
#[derive(Debug, Error, PartialEq, Clone)]
pub enum PropertiesError
{
    #[error("ожидалось 15 полей, получено {0}")]
    FieldCount(usize),
    #[error("некорректный код символа: {0:?}")]
    InvalidCode(String),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("некорректное значение цифры: {0:?}, допустимы только 0 ..= 9")]
    InvalidDigit(String),
    #[error("некорректный кодпоинт в поле регистра: {0:?}")]
    InvalidMapping(String),
}
