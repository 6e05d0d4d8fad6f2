use crate::GeneralCategory;

/// количество кодпоинтов (U+0000 ..= U+00FF), категории которых хранятся в плоской таблице
pub const LATIN_TABLE_SIZE: usize = 256;
/// отсутствующее значение decimal / digit
pub const ABSENT_DIGIT: i8 = -1;
/// длина счётчика записей в начале каждой секции (u32, little-endian)
pub const COUNT_LEN: usize = 4;

/// диапазон кодпоинтов одной категории (включительно)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CategoryRange
{
    pub from: u32,
    pub to: u32,
    pub category: GeneralCategory,
}

impl CategoryRange
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.from <= code && code <= self.to
    }

    #[inline]
    pub fn is_point(&self) -> bool
    {
        self.from == self.to
    }
}

/// диапазон, состоящий из одного кодпоинта
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CategoryPoint
{
    pub code: u32,
    pub category: GeneralCategory,
}

/// числовое значение (Numeric_Value), дроби уже вычислены
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NumericValue
{
    pub code: u32,
    pub value: f64,
}

/// десятичная цифра и цифра (Decimal / Digit), ABSENT_DIGIT - значения нет
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DecimalValue
{
    pub code: u32,
    pub decimal: i8,
    pub digit: i8,
}

/// соответствующая строчная буква
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LowercaseMapping
{
    pub code: u32,
    pub lower: u32,
}

/// прописная и заглавная буквы совпадают
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CaseUnique
{
    pub code: u32,
    pub upper: u32,
}

/// прописная и заглавная буквы различаются
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CaseDouble
{
    pub code: u32,
    pub upper: u32,
    pub title: u32,
}

/// все секции бинарной таблицы, в порядке их записи
///
/// каждая секция, кроме latin, отсортирована по возрастанию кодпоинта
#[derive(Debug, PartialEq, Clone)]
pub struct UnicodeTables
{
    /// категории U+0000 ..= U+00FF
    pub latin: [GeneralCategory; LATIN_TABLE_SIZE],
    /// диапазоны длиной больше одного кодпоинта, начинающиеся после U+00FF
    pub ranges: Vec<CategoryRange>,
    /// диапазоны из одного кодпоинта после U+00FF
    pub points: Vec<CategoryPoint>,
    pub values: Vec<NumericValue>,
    pub decimals: Vec<DecimalValue>,
    pub lowercase: Vec<LowercaseMapping>,
    pub case_unique: Vec<CaseUnique>,
    pub case_double: Vec<CaseDouble>,
}

impl Default for UnicodeTables
{
    fn default() -> Self
    {
        Self {
            latin: [GeneralCategory::Unassigned; LATIN_TABLE_SIZE],
            ranges: vec![],
            points: vec![],
            values: vec![],
            decimals: vec![],
            lowercase: vec![],
            case_unique: vec![],
            case_double: vec![],
        }
    }
}
