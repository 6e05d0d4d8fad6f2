use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_classifier::UnicodeClassifier;
use unicode_data_benches::{classifier, codes, ENCODED, MEASUREMENT_TIME, WARM_UP_TIME};

/// наборы кодпоинтов: latin-таблица, BMP, астральные планы
fn sets() -> Vec<(&'static str, Vec<u32>)>
{
    vec![
        ("latin", codes(0, 0xFF, 1)),
        ("bmp", codes(0x100, 0xFFFF, 61)),
        ("astral", codes(0x10000, 0x10FFFF, 4099)),
    ]
}

macro_rules! group {
    ($fn: ident, $group: expr, $query: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let classifier = classifier();

            group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

            for (name, codes) in sets() {
                group.bench_with_input(
                    BenchmarkId::new(name, codes.len()),
                    &(&classifier, codes),
                    |b, data| {
                        b.iter(|| {
                            for &code in data.1.iter() {
                                black_box($query(data.0, black_box(code)));
                            }
                        })
                    },
                );
            }

            group.finish();
        }
    };
}

group!(category, "category", |c: &UnicodeClassifier, code: u32| c.category_of(code));
group!(numeric, "numeric", |c: &UnicodeClassifier, code: u32| c.numeric_value_of(code));
group!(uppercase, "uppercase", |c: &UnicodeClassifier, code: u32| c.uppercase_of(code));

/// разбор бинарной таблицы целиком
fn decode(c: &mut Criterion)
{
    c.bench_function("decode", |b| {
        b.iter(|| UnicodeClassifier::from_bytes(black_box(&ENCODED)))
    });
}

criterion_group!(benches, category, numeric, uppercase, decode);
criterion_main!(benches);
