mod entity;
mod r#enum;
mod field;
mod model;

// pub use all node types
pub use self::entity::*;
pub use self::r#enum::*;
pub use self::field::*;
pub use self::model::*;
