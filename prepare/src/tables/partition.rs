use unicode_classifier::{CategoryPoint, CategoryRange, GeneralCategory, LATIN_TABLE_SIZE};

/// диапазоны, разнесённые по секциям таблицы
#[derive(Debug, PartialEq)]
pub struct Partition
{
    /// категории U+0000 ..= U+00FF, по байту на кодпоинт
    pub latin: [GeneralCategory; LATIN_TABLE_SIZE],
    /// диапазоны длиннее одного кодпоинта, начинающиеся после U+00FF
    pub ranges: Vec<CategoryRange>,
    /// диапазоны из одного кодпоинта после U+00FF
    pub points: Vec<CategoryPoint>,
}

/// разносим максимальные диапазоны по секциям
///
/// кодпоинты до U+00FF запрашиваются чаще всего, поэтому их категории хранятся в плоской таблице.
/// диапазон, пересекающий границу U+00FF / U+0100, делится: его продолжение после границы попадает
/// в секцию диапазонов (или точек, если от него остался один кодпоинт)
pub fn partition(ranges: &[CategoryRange]) -> Partition
{
    let mut latin = [GeneralCategory::Unassigned; LATIN_TABLE_SIZE];
    let mut upper_ranges = vec![];
    let mut points = vec![];

    let boundary = LATIN_TABLE_SIZE as u32;

    for range in ranges {
        if range.from < boundary {
            for code in range.from ..= range.to.min(boundary - 1) {
                latin[code as usize] = range.category;
            }

            if range.to < boundary {
                continue;
            }
        }

        let range = CategoryRange {
            from: range.from.max(boundary),
            ..*range
        };

        match range.is_point() {
            true => points.push(CategoryPoint {
                code: range.from,
                category: range.category,
            }),
            false => upper_ranges.push(range),
        }
    }

    Partition {
        latin,
        ranges: upper_ranges,
        points,
    }
}
