//! целые числа переменной длины (LEB128, беззнаковые, 32 бита)
//!
//! каждый байт несёт 7 бит значения, начиная с младших. старший бит байта - флаг продолжения:
//! 1 - за ним следует ещё один байт, 0 - последний байт числа.
//!
//! | значение              | байт |
//! |-----------------------|------|
//! | 0 ..= 0x7F            | 1    |
//! | 0x80 ..= 0x3FFF       | 2    |
//! | 0x4000 ..= 0x1FFFFF   | 3    |
//! | 0x200000 ..= 0xFFFFFFF| 4    |
//! | 0x10000000 ..= MAX    | 5    |
//!
//! кодпоинты Unicode (до U+10FFFF) занимают не более 3 байт.

use crate::DecodeError;

/// максимальная длина закодированного u32
pub const MAX_VARINT_LEN: usize = 5;

/// количество байт, которое займет значение
pub fn varint_len(value: u32) -> usize
{
    match value {
        0 ..= 0x7F => 1,
        0x80 ..= 0x3FFF => 2,
        0x4000 ..= 0x1F_FFFF => 3,
        0x20_0000 ..= 0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// записать значение в буфер, вернуть количество записанных байт
/// буфер должен вмещать varint_len(value) байт
pub fn encode_varint(value: u32, buf: &mut [u8]) -> usize
{
    let mut value = value;
    let mut written = 0;

    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;

        if value == 0 {
            buf[written] = byte;
            return written + 1;
        }

        buf[written] = byte | 0x80;
        written += 1;
    }
}

/// дописать значение в конец вектора
pub fn push_varint(value: u32, output: &mut Vec<u8>)
{
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = encode_varint(value, &mut buf);

    output.extend_from_slice(&buf[.. len]);
}

/// прочитать значение из начала буфера, вернуть (значение, количество прочитанных байт)
/// None - буфер закончился раньше, чем последний байт числа
pub fn decode_varint(buf: &[u8]) -> Result<Option<(u32, usize)>, DecodeError>
{
    let mut value: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 0x0F {
            return Err(DecodeError::VarintOverflow);
        }

        value |= ((byte & 0x7F) as u32) << (7 * i);

        if byte & 0x80 == 0 {
            return Ok(Some((value, i + 1)));
        }
    }

    Ok(None)
}
