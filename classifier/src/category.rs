use thiserror::Error;

use crate::DecodeError;

/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// порядковый номер варианта записывается в бинарную таблицу как один байт, поэтому значения
/// зафиксированы явно и не должны меняться. варианты сгруппированы так, что каждая общая категория
/// занимает непрерывный диапазон значений:
///
/// ```text
///     L (Lu, Ll, Lt, Lm, Lo) - 0 ..= 4
///     M (Mn, Mc, Me) - 5 ..= 7
///     N (Nd, Nl, No) - 8 ..= 10
///     Z (Zs, Zl, Zp) - 11 ..= 13
///     C (Cc, Cf, Cs, Co) - 14 ..= 17, а также Cn - 29
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - 18 ..= 24
///     S (Sm, Sc, Sk, So) - 25 ..= 28
/// ```
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Lu - прописная буква
    UppercaseLetter = 0,
    /// Ll - строчная буква
    LowercaseLetter = 1,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 2,
    /// Lm - буква-модификатор
    ModifierLetter = 3,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 4,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 5,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 6,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 7,

    /// Nd - десятичная цифра
    DecimalNumber = 8,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 9,
    /// No - прочие числовые символы
    OtherNumber = 10,

    /// Zs - разделитель-пробел
    SpaceSeparator = 11,
    /// Zl - разделитель строки
    LineSeparator = 12,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 13,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 14,
    /// Cf - управляющий символ форматирования
    Format = 15,
    /// Cs - символ-суррогат
    Surrogate = 16,
    /// Co - символ для приватного использования
    PrivateUse = 17,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 18,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 19,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 20,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 21,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 22,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 23,
    /// Po - знак препинания другого типа
    OtherPunctuation = 24,

    /// Sm - математический символ
    MathSymbol = 25,
    /// Sc - символ валюты
    CurrencySymbol = 26,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 27,
    /// So - прочие символы
    OtherSymbol = 28,

    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе в UCD
    Unassigned = 29,
}

impl GeneralCategory
{
    /// все категории в порядке их номеров
    pub const ALL: [GeneralCategory; 30] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::Unassigned,
    ];

    /// двухбуквенное сокращение, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::Unassigned => "Cn",
        }
    }

    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        u8::from(*self) <= 2
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        u8::from(*self) <= 4
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_combining_mark(&self) -> bool
    {
        (5 ..= 7).contains(&u8::from(*self))
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        (8 ..= 10).contains(&u8::from(*self))
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        (11 ..= 13).contains(&u8::from(*self))
    }

    /// относится-ли категория к управляющим символам (или не назначена) (C)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        self.is_unassigned() || (14 ..= 17).contains(&u8::from(*self))
    }

    /// относится-ли категория к пунктуации (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        (18 ..= 24).contains(&u8::from(*self))
    }

    /// относится-ли категория к символам (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        (25 ..= 28).contains(&u8::from(*self))
    }

    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        *self == Self::Unassigned
    }
}

impl Default for GeneralCategory
{
    fn default() -> Self
    {
        Self::Unassigned
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}

/// сокращение категории не найдено
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("неизвестная категория: {0:?}")]
pub struct UnknownCategory(pub String);

impl TryFrom<&str> for GeneralCategory
{
    type Error = UnknownCategory;

    /// пустое значение считаем неназначенной категорией
    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        if abbr.is_empty() {
            return Ok(Self::Unassigned);
        }

        Self::ALL
            .iter()
            .find(|c| c.abbr() == abbr)
            .copied()
            .ok_or_else(|| UnknownCategory(abbr.to_owned()))
    }
}

impl TryFrom<u8> for GeneralCategory
{
    type Error = DecodeError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(DecodeError::UnknownCategory(value))
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}
