mod field_label;
mod text_field;

pub use self::field_label::*;
pub use self::text_field::*;
