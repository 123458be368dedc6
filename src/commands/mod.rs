pub mod decode;
pub mod detect;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod scope;
pub mod types;
pub mod validate;

pub use decode::DecodeCommand;
pub use detect::DetectCommand;
pub use format::FormatCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use scope::ScopeCommand;
pub use types::TypesCommand;
pub use validate::ValidateCommand;
