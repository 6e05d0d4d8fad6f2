use unicode_classifier::{CategoryRange, GeneralCategory};

use crate::PrepareError;

/// собираем максимальные диапазоны кодпоинтов одной категории
///
/// на входе - пары (кодпоинт, категория) строго по возрастанию кодпоинтов. пропущенные кодпоинты
/// (в том числе перед первой записью) считаются неназначенными (Cn), так что диапазоны покрывают
/// всё пространство от U+0000 до последнего кодпоинта без пропусков. соседние диапазоны всегда
/// имеют разные категории
pub fn build_ranges(codes: &[(u32, GeneralCategory)]) -> Result<Vec<CategoryRange>, PrepareError>
{
    if codes.is_empty() {
        return Err(PrepareError::EmptyInput);
    }

    let mut ranges = RangesBuilder::default();
    let mut previous: Option<u32> = None;

    for &(code, category) in codes {
        let gap_start = match previous {
            Some(previous) if previous == code => {
                return Err(PrepareError::DuplicateCodepoint(code));
            }
            Some(previous) if previous > code => {
                return Err(PrepareError::Unordered { previous, code });
            }
            Some(previous) => previous + 1,
            None => 0,
        };

        if code > gap_start {
            ranges.push(gap_start, code - 1, GeneralCategory::Unassigned);
        }

        ranges.push(code, code, category);
        previous = Some(code);
    }

    Ok(ranges.finish())
}

/// открытый диапазон и уже закрытые
#[derive(Default)]
struct RangesBuilder
{
    closed: Vec<CategoryRange>,
    open: Option<CategoryRange>,
}

impl RangesBuilder
{
    /// добавить отрезок, следующий сразу за открытым диапазоном
    fn push(&mut self, from: u32, to: u32, category: GeneralCategory)
    {
        if let Some(open) = self.open.as_mut() {
            if open.category == category {
                open.to = to;
                return;
            }

            self.closed.push(*open);
        }

        self.open = Some(CategoryRange { from, to, category });
    }

    /// закрыть последний диапазон
    fn finish(mut self) -> Vec<CategoryRange>
    {
        if let Some(open) = self.open.take() {
            self.closed.push(open);
        }

        self.closed
    }
}
