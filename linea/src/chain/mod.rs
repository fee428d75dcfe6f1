pub mod callable;
pub mod compose;
pub mod mode;
