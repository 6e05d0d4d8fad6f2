use std::io::Write;

use unicode_classifier::UnicodeTables;

use crate::encode::encode;
use crate::PrepareError;

mod stats;

pub use stats::summary;

/// пишем бинарную таблицу, возвращаем количество записанных байт
pub fn write(tables: &UnicodeTables, output: &mut impl Write) -> Result<usize, PrepareError>
{
    let encoded = encode(tables)?;

    output.write_all(&encoded.data)?;
    output.flush()?;

    stats::print(&encoded.sections, encoded.data.len());

    Ok(encoded.data.len())
}
