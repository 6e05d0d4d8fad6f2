use thiserror::Error;

/// ошибки разбора бинарной таблицы
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DecodeError
{
    #[error("данные закончились при чтении секции {section} (смещение {offset})")]
    UnexpectedEnd
    {
        section: &'static str,
        offset: usize,
    },
    #[error("varint не помещается в 32 бита")]
    VarintOverflow,
    #[error("неизвестный номер категории: {0}")]
    UnknownCategory(u8),
    #[error("секция {section}: кодпоинты не по возрастанию (U+{code:04X})")]
    Unordered
    {
        section: &'static str,
        code: u32,
    },
    #[error("некорректный диапазон U+{from:04X} ..= U+{to:04X}")]
    InvalidRange
    {
        from: u32,
        to: u32,
    },
    #[error("точка U+{0:04X} попадает в диапазон")]
    PointInRange(u32),
    #[error("кодпоинт U+{0:04X} относится к latin-таблице")]
    LatinCodepoint(u32),
    #[error("лишние данные в конце таблицы: {0} байт")]
    TrailingBytes(usize),
}
