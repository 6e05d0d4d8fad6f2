use std::collections::HashMap;

use unicode_classifier::{GeneralCategory, UnicodeClassifier, UnicodeTables};
use unicode_data_prepare::{encode::encode, prepare};
use unicode_data_source::{parse, CodepointRecord, ParseOptions};

/// выдержка из UnicodeData.txt: латиница, греческий, кириллица, числовые формы,
/// а также блоки CJK, хангыля, суррогатов и private use
const DATA: &str = include_str!("./../data/UnicodeData.txt");

lazy_static! {
    /// записи о кодпоинтах, блоки развёрнуты
    pub static ref RECORDS: Vec<CodepointRecord> = parse(DATA, &ParseOptions::default()).unwrap();
    /// записи по кодпоинтам
    pub static ref UNICODE: HashMap<u32, CodepointRecord> =
        RECORDS.iter().map(|r| (r.code, r.clone())).collect();
    /// подготовленные таблицы
    pub static ref TABLES: UnicodeTables = prepare(RECORDS.clone()).unwrap();
    /// бинарная таблица
    pub static ref ENCODED: Vec<u8> = encode(&TABLES).unwrap().data;
    /// классификатор, прочитанный из бинарной таблицы
    pub static ref CLASSIFIER: UnicodeClassifier = UnicodeClassifier::from_bytes(&ENCODED).unwrap();
}

/// категория кодпоинта по исходным данным
pub fn expected_category(code: u32) -> GeneralCategory
{
    match UNICODE.get(&code) {
        Some(record) => record.category,
        None => GeneralCategory::Unassigned,
    }
}
