pub mod encode;
pub mod output;
pub mod tables;

mod error;

pub use error::PrepareError;
pub use tables::prepare;
pub use tables::prepare_source;
pub use tables::TableBuilder;
