use log::info;

use crate::encode::SectionSize;

/// информация о записанной таблице
pub fn print(sections: &[SectionSize], total: usize)
{
    info!("{}", summary(sections, total));
}

/// текстовая сводка по секциям
pub fn summary(sections: &[SectionSize], total: usize) -> String
{
    let mut lines = vec![String::from("таблица Unicode:")];

    lines.extend(sections.iter().map(|section| {
        format!(
            "  {}: {} записей, {} байт",
            section.name, section.entries, section.bytes
        )
    }));
    lines.push(format!("  общий размер: {} байт", total));

    lines.join("\n")
}
