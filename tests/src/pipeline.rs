use std::collections::BTreeMap;

use unicode_classifier::GeneralCategory::*;
use unicode_classifier::{GeneralCategory, UnicodeClassifier};
use unicode_data_prepare::{encode::encode, output, prepare, PrepareError};
use unicode_data_source::CodepointRecord;

/// записи -> бинарная таблица -> классификатор
fn roundtrip(records: Vec<CodepointRecord>) -> (Vec<u8>, UnicodeClassifier)
{
    let tables = prepare(records).unwrap();

    let mut data = vec![];
    output::write(&tables, &mut data).unwrap();

    let classifier = UnicodeClassifier::from_bytes(&data).unwrap();

    (data, classifier)
}

fn record(code: u32, category: GeneralCategory) -> CodepointRecord
{
    CodepointRecord::new(code, category)
}

#[test]
fn latin_letters()
{
    let (data, classifier) = roundtrip(vec![
        record(0x41, UppercaseLetter),
        record(0x42, UppercaseLetter),
        record(0x43, LowercaseLetter),
    ]);

    assert_eq!(data[0x41], u8::from(UppercaseLetter));
    assert_eq!(data[0x42], u8::from(UppercaseLetter));
    assert_eq!(data[0x43], u8::from(LowercaseLetter));

    assert!(classifier.tables().ranges.is_empty());
    assert!(classifier.tables().points.is_empty());

    assert_eq!(classifier.category_of(0x40), Unassigned);
    assert_eq!(classifier.category_of(0x42), UppercaseLetter);
    assert_eq!(classifier.category_of(0x43), LowercaseLetter);
}

#[test]
fn same_letters_after_latin()
{
    let (_, classifier) = roundtrip(vec![
        record(0, Control),
        record(0x141, UppercaseLetter),
        record(0x142, UppercaseLetter),
        record(0x143, LowercaseLetter),
    ]);

    let tables = classifier.tables();

    assert_eq!(
        tables
            .ranges
            .iter()
            .map(|r| (r.from, r.to, r.category))
            .collect::<Vec<_>>(),
        [(0x100, 0x140, Unassigned), (0x141, 0x142, UppercaseLetter)]
    );
    assert_eq!(
        tables
            .points
            .iter()
            .map(|p| (p.code, p.category))
            .collect::<Vec<_>>(),
        [(0x143, LowercaseLetter)]
    );

    assert_eq!(classifier.category_of(0x142), UppercaseLetter);
    assert_eq!(classifier.category_of(0x143), LowercaseLetter);
    assert_eq!(classifier.category_of(0x144), Unassigned);
}

#[test]
fn numeric_values()
{
    let mut quarter = record(0xBC, OtherNumber);
    quarter.numeric = Some("1/4".to_owned());

    let mut five = record(0x35, DecimalNumber);
    five.numeric = Some("5".to_owned());
    five.decimal = Some(5);
    five.digit = Some(5);

    let (_, classifier) = roundtrip(vec![record(0, Control), quarter, five]);

    assert_eq!(classifier.numeric_value_of(0xBC), Some(0.25));
    assert_eq!(classifier.numeric_value_of(0x35), Some(5.0));
    assert_eq!(classifier.decimal_digit_of(0x35), Some(5));
    assert_eq!(classifier.digit_value_of(0x35), Some(5));

    let mut broken = record(0xBD, OtherNumber);
    broken.numeric = Some("one half".to_owned());

    assert!(matches!(
        prepare(vec![record(0, Control), broken]),
        Err(PrepareError::InvalidNumericValue { code: 0xBD, .. })
    ));
}

#[test]
fn unique_and_double_case()
{
    let mut same = record(0x101, LowercaseLetter);
    same.upper = Some(0x100);
    same.title = Some(0x100);

    let mut different = record(0x103, LowercaseLetter);
    different.upper = Some(0x100);
    different.title = Some(0x101);

    let (_, classifier) = roundtrip(vec![record(0, Control), same, different]);

    assert_eq!(classifier.tables().case_unique.len(), 1);
    assert_eq!(classifier.tables().case_double.len(), 1);

    assert_eq!(classifier.uppercase_of(0x101), Some(0x100));
    assert_eq!(classifier.titlecase_of(0x101), Some(0x100));
    assert_eq!(classifier.uppercase_of(0x103), Some(0x100));
    assert_eq!(classifier.titlecase_of(0x103), Some(0x101));
}

/// псевдослучайный набор записей: классификатор отвечает так же, как исходные данные
#[test]
fn generated_records()
{
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut expected: BTreeMap<u32, GeneralCategory> = BTreeMap::new();
    let mut code = 0u32;
    let mut category = Control;

    while code < 0x30000 {
        // серии одинаковых категорий, перемежающиеся пропусками и одиночными кодпоинтами
        match next() % 5 {
            0 => code += (next() % 300) as u32,
            1 => category = GeneralCategory::ALL[(next() % 30) as usize],
            _ => (),
        }

        for _ in 0 .. next() % 40 {
            expected.insert(code, category);
            code += 1;
        }

        code += 1;
    }

    let records = expected
        .iter()
        .map(|(&code, &category)| record(code, category))
        .collect();

    let (_, classifier) = roundtrip(records);

    let last = expected.keys().next_back().copied().unwrap_or(0);

    for code in 0 ..= last + 10 {
        let category = expected.get(&code).copied().unwrap_or(Unassigned);

        assert_eq!(classifier.category_of(code), category, "U+{:04X}", code);
    }
}

#[test]
fn encoding_is_stable()
{
    let records = vec![
        record(0, Control),
        record(0x100, UppercaseLetter),
        record(0x2000, SpaceSeparator),
    ];

    let tables = prepare(records.clone()).unwrap();
    let again = prepare(records.into_iter().rev().collect()).unwrap();

    assert_eq!(encode(&tables).unwrap().data, encode(&again).unwrap().data);
}
