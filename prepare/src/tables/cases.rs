use std::collections::HashMap;

use log::{debug, warn};
use unicode_classifier::{CaseDouble, CaseUnique};

/// прописные и заглавные пары строчных букв
#[derive(Debug, Default, PartialEq)]
pub struct CaseMappings
{
    /// прописная и заглавная буквы совпадают
    pub unique: Vec<CaseUnique>,
    /// прописная и заглавная буквы различаются (например, U+01C6 -> U+01C4 / U+01C5)
    pub double: Vec<CaseDouble>,
}

/// объединяем прописные и заглавные соответствия по кодпоинту
///
/// кодпоинты, у которых есть только одно из соответствий, в результат не попадают.
/// порядок результата - порядок списка прописных букв
pub fn resolve_cases(uppercase: &[(u32, u32)], titlecase: &[(u32, u32)]) -> CaseMappings
{
    let titles: HashMap<u32, u32> = titlecase.iter().copied().collect();
    let mut mappings = CaseMappings::default();

    for &(code, upper) in uppercase {
        let title = match titles.get(&code) {
            Some(&title) => title,
            None => continue,
        };

        match upper == title {
            true => mappings.unique.push(CaseUnique { code, upper }),
            false => mappings.double.push(CaseDouble { code, upper, title }),
        }
    }

    let joined = mappings.unique.len() + mappings.double.len();
    let dropped = (
        uppercase.len().saturating_sub(joined),
        titlecase.len().saturating_sub(joined),
    );

    debug!(
        "регистр: {} уникальных, {} двойных",
        mappings.unique.len(),
        mappings.double.len()
    );

    if dropped != (0, 0) {
        warn!(
            "регистр: отброшено {} прописных и {} заглавных соответствий без пары",
            dropped.0, dropped.1
        );
    }

    mappings
}
