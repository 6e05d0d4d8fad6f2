mod cases;
mod partition;
mod ranges;
mod values;

pub use cases::*;
pub use partition::*;
pub use ranges::*;
pub use values::*;

use log::debug;
use unicode_classifier::*;
use unicode_data_source::{CodepointRecord, ParseOptions};

use crate::PrepareError;

/// состояние сборки таблиц: проекции записей на каждое из свойств
///
/// записи добавляются строго по возрастанию кодпоинтов, поэтому и все проекции
/// оказываются отсортированными
#[derive(Debug, Default)]
pub struct TableBuilder
{
    categories: Vec<(u32, GeneralCategory)>,
    values: Vec<NumericValue>,
    decimals: Vec<DecimalValue>,
    lowercase: Vec<LowercaseMapping>,
    uppercase: Vec<(u32, u32)>,
    titlecase: Vec<(u32, u32)>,
}

impl TableBuilder
{
    /// добавить запись о кодпоинте
    pub fn push(&mut self, record: &CodepointRecord) -> Result<(), PrepareError>
    {
        let code = record.code;

        if let Some(&(previous, _)) = self.categories.last() {
            if previous == code {
                return Err(PrepareError::DuplicateCodepoint(code));
            }

            if previous > code {
                return Err(PrepareError::Unordered { previous, code });
            }
        }

        self.categories.push((code, record.category));

        if let Some(value) = numeric_entry(record)? {
            self.values.push(value);
        }

        if let Some(decimal) = decimal_entry(record) {
            self.decimals.push(decimal);
        }

        if let Some(lower) = record.lower {
            self.lowercase.push(LowercaseMapping { code, lower });
        }

        if let Some(upper) = record.upper {
            self.uppercase.push((code, upper));
        }

        if let Some(title) = record.title {
            self.titlecase.push((code, title));
        }

        Ok(())
    }

    /// собрать секции таблицы
    pub fn build(self) -> Result<UnicodeTables, PrepareError>
    {
        let ranges = build_ranges(&self.categories)?;

        debug!(
            "{} кодпоинтов сведены в {} диапазонов",
            self.categories.len(),
            ranges.len()
        );

        let partition = partition(&ranges);

        debug!(
            "после U+00FF: {} диапазонов, {} точек",
            partition.ranges.len(),
            partition.points.len()
        );

        let cases = resolve_cases(&self.uppercase, &self.titlecase);

        Ok(UnicodeTables {
            latin: partition.latin,
            ranges: partition.ranges,
            points: partition.points,
            values: self.values,
            decimals: self.decimals,
            lowercase: self.lowercase,
            case_unique: cases.unique,
            case_double: cases.double,
        })
    }
}

/// подготавливаем таблицы из записей о кодпоинтах (в любом порядке)
pub fn prepare(mut records: Vec<CodepointRecord>) -> Result<UnicodeTables, PrepareError>
{
    if records.is_empty() {
        return Err(PrepareError::EmptyInput);
    }

    records.sort_by_key(|r| r.code);

    let mut builder = TableBuilder::default();

    for record in records.iter() {
        builder.push(record)?;
    }

    builder.build()
}

/// подготавливаем таблицы из текста UnicodeData.txt
pub fn prepare_source(data: &str, options: &ParseOptions) -> Result<UnicodeTables, PrepareError>
{
    let records = unicode_data_source::parse(data, options)?;

    debug!("прочитано {} записей", records.len());

    prepare(records)
}
