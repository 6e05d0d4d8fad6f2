#[macro_use]
extern crate lazy_static;

use unicode_classifier::UnicodeClassifier;
use unicode_data_prepare::{encode::encode, prepare_source};
use unicode_data_source::ParseOptions;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// та же выдержка из UnicodeData.txt, что и в тестах
const DATA: &str = include_str!("./../../tests/data/UnicodeData.txt");

lazy_static! {
    /// бинарная таблица
    pub static ref ENCODED: Vec<u8> = encoded();
}

fn encoded() -> Vec<u8>
{
    let tables = match prepare_source(DATA, &ParseOptions::default()) {
        Ok(tables) => tables,
        Err(e) => panic!("не удалось подготовить таблицы: {}", e),
    };

    match encode(&tables) {
        Ok(encoded) => encoded.data,
        Err(e) => panic!("не удалось закодировать таблицы: {}", e),
    }
}

/// классификатор, прочитанный из бинарной таблицы
pub fn classifier() -> UnicodeClassifier
{
    match UnicodeClassifier::from_bytes(&ENCODED) {
        Ok(classifier) => classifier,
        Err(e) => panic!("не удалось прочитать таблицу: {}", e),
    }
}

/// кодпоинты для замеров: каждый step-й из диапазона
pub fn codes(from: u32, to: u32, step: usize) -> Vec<u32>
{
    (from ..= to).step_by(step).collect()
}
