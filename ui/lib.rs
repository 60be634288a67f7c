mod form;

pub use self::form::*;
