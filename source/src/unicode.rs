use thiserror::Error;
use unicode_classifier::GeneralCategory;

use crate::properties::*;

/// настройки разбора UnicodeData.txt
#[derive(Debug, Clone)]
pub struct ParseOptions
{
    /// строки с кодпоинтами от этого значения и выше пропускаются
    pub code_limit: u32,
}

impl Default for ParseOptions
{
    fn default() -> Self
    {
        Self {
            code_limit: 0x110000,
        }
    }
}

/// ошибка разбора UnicodeData.txt, номера строк начинаются с 1
#[derive(Debug, Error, PartialEq, Clone)]
pub enum SourceError
{
    #[error("строка {line}: {error}")]
    Line
    {
        line: usize,
        #[source]
        error: PropertiesError,
    },
    #[error("строка {line}: начало блока {name:?} без окончания")]
    UnclosedBlock
    {
        line: usize,
        name: String,
    },
    #[error("строка {line}: окончание блока {name:?} не соответствует началу")]
    UnopenedBlock
    {
        line: usize,
        name: String,
    },
}

/// разобранная строка UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a>
{
    /// название символа (колонка 1)
    pub name: &'a str,
    pub record: CodepointRecord,
}

impl<'a> Row<'a>
{
    /// строка открывает блок: "<CJK Ideograph, First>"
    pub fn is_block_start(&self) -> bool
    {
        self.name.starts_with('<') && self.name.ends_with(", First>")
    }

    /// строка закрывает блок: "<CJK Ideograph, Last>"
    pub fn is_block_end(&self) -> bool
    {
        self.name.starts_with('<') && self.name.ends_with(", Last>")
    }
}

/// разбор строки UnicodeData.txt
///
/// используемые колонки:
///     0 - код, 1 - название, 2 - категория,
///     6 - decimal, 7 - digit, 8 - numeric,
///     12, 13, 14 - прописная, строчная, заглавная буквы
pub fn parse_line(line: &str) -> Result<Row<'_>, PropertiesError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != 15 {
        return Err(PropertiesError::FieldCount(props.len()));
    }

    let code = u32::from_str_radix(props[0], 16)
        .map_err(|_| PropertiesError::InvalidCode(props[0].to_owned()))?;

    // пропускаем колонки 3, 4, 5, 9, 10, 11:
    //
    // * CCC, Bidi класс, декомпозиция, Bidi Mirrored
    // * Unicode_1_Name (Obsolete as of 6.2.0)
    // * ISO_Comment (Obsolete as of 5.2.0; Deprecated and Stabilized as of 6.0.0)

    let record = CodepointRecord {
        code,
        category: GeneralCategory::try_from(props[2])?,
        numeric: parse_numeric(props[8]),
        decimal: parse_digit(props[6])?,
        digit: parse_digit(props[7])?,
        upper: parse_mapping(props[12])?,
        lower: parse_mapping(props[13])?,
        title: parse_mapping(props[14])?,
    };

    Ok(Row {
        name: props[1],
        record,
    })
}

/// разбор UnicodeData.txt из UCD
///
/// блоки, заданные парой строк "<..., First>" / "<..., Last>" (иероглифы CJK, хангыль,
/// тангутский, суррогаты, private use), разворачиваются в записи для каждого кодпоинта блока
pub fn parse(data: &str, options: &ParseOptions) -> Result<Vec<CodepointRecord>, SourceError>
{
    let mut records = vec![];

    // пригодится, когда встретим блок: (номер строки, начало блока)
    let mut block_start: Option<(usize, Row<'_>)> = None;

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let row = parse_line(line).map_err(|error| SourceError::Line {
            line: line_number,
            error,
        })?;

        if let Some((start_line, start)) = block_start.take() {
            let matches = row.is_block_end()
                && row.record.category == start.record.category
                && row.record.code >= start.record.code;

            if !matches {
                return Err(SourceError::UnclosedBlock {
                    line: start_line,
                    name: start.name.to_owned(),
                });
            }

            let last = row.record.code.min(options.code_limit.saturating_sub(1));

            // кодпоинты блока получают только его категорию
            for code in start.record.code ..= last {
                records.push(CodepointRecord::new(code, start.record.category));
            }

            continue;
        }

        if row.record.code >= options.code_limit {
            continue;
        }

        if row.is_block_start() {
            block_start = Some((line_number, row));
            continue;
        }

        if row.is_block_end() {
            return Err(SourceError::UnopenedBlock {
                line: line_number,
                name: row.name.to_owned(),
            });
        }

        records.push(row.record);
    }

    if let Some((line, start)) = block_start {
        return Err(SourceError::UnclosedBlock {
            line,
            name: start.name.to_owned(),
        });
    }

    Ok(records)
}
