use crate::data::*;
use crate::varint::decode_varint;
use crate::{DecodeError, GeneralCategory};

/// последовательное чтение бинарной таблицы
struct Reader<'a>
{
    data: &'a [u8],
    offset: usize,
    /// читаемая секция, для сообщений об ошибках
    section: &'static str,
}

impl<'a> Reader<'a>
{
    fn new(data: &'a [u8]) -> Self
    {
        Self {
            data,
            offset: 0,
            section: "latin",
        }
    }

    fn remaining(&self) -> usize
    {
        self.data.len() - self.offset
    }

    fn unexpected_end(&self) -> DecodeError
    {
        DecodeError::UnexpectedEnd {
            section: self.section,
            offset: self.offset,
        }
    }

    fn bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError>
    {
        if self.remaining() < N {
            return Err(self.unexpected_end());
        }

        let mut result = [0u8; N];
        result.copy_from_slice(&self.data[self.offset .. self.offset + N]);
        self.offset += N;

        Ok(result)
    }

    fn byte(&mut self) -> Result<u8, DecodeError>
    {
        Ok(self.bytes::<1>()?[0])
    }

    fn category(&mut self) -> Result<GeneralCategory, DecodeError>
    {
        GeneralCategory::try_from(self.byte()?)
    }

    fn varint(&mut self) -> Result<u32, DecodeError>
    {
        match decode_varint(&self.data[self.offset ..])? {
            Some((value, len)) => {
                self.offset += len;
                Ok(value)
            }
            None => Err(self.unexpected_end()),
        }
    }

    fn double(&mut self) -> Result<f64, DecodeError>
    {
        Ok(f64::from_le_bytes(self.bytes::<8>()?))
    }

    fn signed(&mut self) -> Result<i8, DecodeError>
    {
        Ok(self.byte()? as i8)
    }

    /// секция: счётчик записей и сами записи
    fn section<T>(
        &mut self,
        section: &'static str,
        mut entry: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError>
    {
        self.section = section;

        let count = u32::from_le_bytes(self.bytes::<COUNT_LEN>()?) as usize;

        // каждая запись занимает не меньше двух байт, счётчик из повреждённых данных не должен
        // приводить к огромной аллокации
        let mut entries = Vec::with_capacity(count.min(self.remaining() / 2));

        for _ in 0 .. count {
            entries.push(entry(self)?);
        }

        Ok(entries)
    }
}

impl UnicodeTables
{
    /// разобрать бинарную таблицу
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError>
    {
        let mut reader = Reader::new(data);
        let mut latin = [GeneralCategory::Unassigned; LATIN_TABLE_SIZE];

        for category in latin.iter_mut() {
            *category = reader.category()?;
        }

        let ranges = reader.section("ranges", |r| {
            Ok(CategoryRange {
                from: r.varint()?,
                to: r.varint()?,
                category: r.category()?,
            })
        })?;

        let points = reader.section("points", |r| {
            Ok(CategoryPoint {
                code: r.varint()?,
                category: r.category()?,
            })
        })?;

        let values = reader.section("values", |r| {
            Ok(NumericValue {
                code: r.varint()?,
                value: r.double()?,
            })
        })?;

        let decimals = reader.section("decimals", |r| {
            Ok(DecimalValue {
                code: r.varint()?,
                decimal: r.signed()?,
                digit: r.signed()?,
            })
        })?;

        let lowercase = reader.section("lowercase", |r| {
            Ok(LowercaseMapping {
                code: r.varint()?,
                lower: r.varint()?,
            })
        })?;

        let case_unique = reader.section("case unique", |r| {
            Ok(CaseUnique {
                code: r.varint()?,
                upper: r.varint()?,
            })
        })?;

        let case_double = reader.section("case double", |r| {
            Ok(CaseDouble {
                code: r.varint()?,
                upper: r.varint()?,
                title: r.varint()?,
            })
        })?;

        if reader.remaining() != 0 {
            return Err(DecodeError::TrailingBytes(reader.remaining()));
        }

        let tables = Self {
            latin,
            ranges,
            points,
            values,
            decimals,
            lowercase,
            case_unique,
            case_double,
        };

        tables.validate()?;

        Ok(tables)
    }

    /// проверяем инварианты, от которых зависит поиск
    fn validate(&self) -> Result<(), DecodeError>
    {
        for range in self.ranges.iter() {
            if range.from >= range.to {
                return Err(DecodeError::InvalidRange {
                    from: range.from,
                    to: range.to,
                });
            }
        }

        // диапазоны не пересекаются: каждый следующий начинается после конца предыдущего
        for pair in self.ranges.windows(2) {
            if pair[1].from <= pair[0].to {
                return Err(DecodeError::Unordered {
                    section: "ranges",
                    code: pair[1].from,
                });
            }
        }

        if let Some(first) = self.ranges.first() {
            if (first.from as usize) < LATIN_TABLE_SIZE {
                return Err(DecodeError::LatinCodepoint(first.from));
            }
        }

        if let Some(first) = self.points.first() {
            if (first.code as usize) < LATIN_TABLE_SIZE {
                return Err(DecodeError::LatinCodepoint(first.code));
            }
        }

        ascending("points", self.points.iter().map(|e| e.code))?;

        // у каждого кодпоинта - не больше одной категории
        for point in self.points.iter() {
            let index = self.ranges.partition_point(|r| r.to < point.code);

            if matches!(self.ranges.get(index), Some(range) if range.contains(point.code)) {
                return Err(DecodeError::PointInRange(point.code));
            }
        }

        ascending("values", self.values.iter().map(|e| e.code))?;
        ascending("decimals", self.decimals.iter().map(|e| e.code))?;
        ascending("lowercase", self.lowercase.iter().map(|e| e.code))?;
        ascending("case unique", self.case_unique.iter().map(|e| e.code))?;
        ascending("case double", self.case_double.iter().map(|e| e.code))?;

        Ok(())
    }
}

/// кодпоинты секции строго возрастают
fn ascending(section: &'static str, codes: impl Iterator<Item = u32>) -> Result<(), DecodeError>
{
    let mut previous: Option<u32> = None;

    for code in codes {
        if matches!(previous, Some(previous) if previous >= code) {
            return Err(DecodeError::Unordered { section, code });
        }

        previous = Some(code);
    }

    Ok(())
}
