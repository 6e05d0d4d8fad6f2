pub use category::GeneralCategory;
pub use category::UnknownCategory;
pub use classifier::UnicodeClassifier;
pub use data::*;
pub use error::DecodeError;

mod category;
mod classifier;
mod data;
mod decode;
mod error;
pub mod varint;
