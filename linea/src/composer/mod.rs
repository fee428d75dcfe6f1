mod ops;
pub mod pipeline;

pub use self::pipeline::{Pipeline, Stage};
