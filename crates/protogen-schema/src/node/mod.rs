mod r#enum;
mod field;
mod ident;
mod import;
mod message;
mod number;
mod service;
mod spec;

pub use self::r#enum::*;
pub use field::*;
pub use ident::*;
pub use import::*;
pub use message::*;
pub use number::*;
pub use service::*;
pub use spec::*;
