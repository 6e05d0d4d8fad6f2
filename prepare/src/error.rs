use thiserror::Error;
use unicode_data_source::SourceError;

/// ошибки подготовки таблиц. любая из них означает, что таблица не может быть записана
#[derive(Debug, Error)]
pub enum PrepareError
{
    #[error("нет ни одной записи о кодпоинтах")]
    EmptyInput,
    #[error("повторная запись о кодпоинте U+{0:04X}")]
    DuplicateCodepoint(u32),
    #[error("кодпоинты не по возрастанию: U+{code:04X} после U+{previous:04X}")]
    Unordered
    {
        previous: u32,
        code: u32,
    },
    #[error("U+{code:04X}: некорректное числовое значение {value:?}")]
    InvalidNumericValue
    {
        code: u32,
        value: String,
    },
    #[error("секция {section}: {len} записей не помещаются в счётчик")]
    SectionTooLarge
    {
        section: &'static str,
        len: usize,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
