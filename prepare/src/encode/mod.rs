use unicode_classifier::varint::push_varint;
use unicode_classifier::*;

use crate::PrepareError;

/// размер записанной секции, для статистики
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSize
{
    pub name: &'static str,
    pub entries: usize,
    pub bytes: usize,
}

/// бинарная таблица и размеры её секций
#[derive(Debug, Clone)]
pub struct Encoded
{
    pub data: Vec<u8>,
    pub sections: Vec<SectionSize>,
}

/// кодируем таблицы
///
/// порядок секций:
///     1. latin - 256 байт, номер категории для каждого кодпоинта U+0000 ..= U+00FF
///     2. диапазоны - from (varint), to (varint), категория (u8)
///     3. точки - code (varint), категория (u8)
///     4. числовые значения - code (varint), значение (f64, little-endian)
///     5. decimal / digit - code (varint), decimal (i8), digit (i8), -1 - значения нет
///     6. строчные буквы - code (varint), lower (varint)
///     7. прописная = заглавная - code (varint), upper (varint)
///     8. прописная != заглавная - code (varint), upper (varint), title (varint)
///
/// перед каждой секцией, кроме первой, записано количество её записей (u32, little-endian)
pub fn encode(tables: &UnicodeTables) -> Result<Encoded, PrepareError>
{
    let mut encoder = Encoder::default();

    encoder.output.extend(tables.latin.iter().map(|&c| u8::from(c)));
    encoder.sections.push(SectionSize {
        name: "latin",
        entries: LATIN_TABLE_SIZE,
        bytes: LATIN_TABLE_SIZE,
    });

    encoder.section("ranges", &tables.ranges, |output, range| {
        push_varint(range.from, output);
        push_varint(range.to, output);
        output.push(u8::from(range.category));
    })?;

    encoder.section("points", &tables.points, |output, point| {
        push_varint(point.code, output);
        output.push(u8::from(point.category));
    })?;

    encoder.section("values", &tables.values, |output, value| {
        push_varint(value.code, output);
        output.extend_from_slice(&value.value.to_le_bytes());
    })?;

    encoder.section("decimals", &tables.decimals, |output, decimal| {
        push_varint(decimal.code, output);
        output.push(decimal.decimal as u8);
        output.push(decimal.digit as u8);
    })?;

    encoder.section("lowercase", &tables.lowercase, |output, mapping| {
        push_varint(mapping.code, output);
        push_varint(mapping.lower, output);
    })?;

    encoder.section("case unique", &tables.case_unique, |output, mapping| {
        push_varint(mapping.code, output);
        push_varint(mapping.upper, output);
    })?;

    encoder.section("case double", &tables.case_double, |output, mapping| {
        push_varint(mapping.code, output);
        push_varint(mapping.upper, output);
        push_varint(mapping.title, output);
    })?;

    Ok(Encoded {
        data: encoder.output,
        sections: encoder.sections,
    })
}

#[derive(Default)]
struct Encoder
{
    output: Vec<u8>,
    sections: Vec<SectionSize>,
}

impl Encoder
{
    /// счётчик записей и сами записи
    fn section<T>(
        &mut self,
        name: &'static str,
        entries: &[T],
        mut write: impl FnMut(&mut Vec<u8>, &T),
    ) -> Result<(), PrepareError>
    {
        let start = self.output.len();

        let count = u32::try_from(entries.len()).map_err(|_| PrepareError::SectionTooLarge {
            section: name,
            len: entries.len(),
        })?;

        self.output.extend_from_slice(&count.to_le_bytes());

        for entry in entries {
            write(&mut self.output, entry);
        }

        self.sections.push(SectionSize {
            name,
            entries: entries.len(),
            bytes: self.output.len() - start,
        });

        Ok(())
    }
}
