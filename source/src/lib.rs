pub mod properties;

mod unicode;

pub use properties::CodepointRecord;
pub use properties::PropertiesError;

pub use unicode::parse;
pub use unicode::parse_line;
pub use unicode::ParseOptions;
pub use unicode::Row;
pub use unicode::SourceError;
