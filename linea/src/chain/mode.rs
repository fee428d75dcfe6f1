use crate::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// How a stage's callable joins the callable appended after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionMode {
    /// Nothing to join with yet: the next callable becomes the whole pipeline.
    NoCompose,
    /// `g(f(..))`: the single return value is handed to the next callable.
    Regular,
    /// `g(f(..).0, f(..).1, ..)`: the returned tuple is spread over the next
    /// callable's positional parameters.
    TupleUnpack,
}

impl CompositionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoCompose => "no_compose",
            Self::Regular => "regular",
            Self::TupleUnpack => "tuple_unpack",
        }
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time tag carried by a stage; selects the join strategy.
pub trait ComposeType {
    const MODE: CompositionMode;
}

/// Stage output is handed on as a single value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regular;

/// Stage output is a tuple spread over the next stage's parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TupleUnpack;

impl ComposeType for Regular {
    const MODE: CompositionMode = CompositionMode::Regular;
}

impl ComposeType for TupleUnpack {
    const MODE: CompositionMode = CompositionMode::TupleUnpack;
}

/// Result unpacking requested by name when appending a stage.
///
/// Only tuple unpacking exists today. Unpacking a map into keyword-style
/// arguments, or an `(args, kwargs)` pair, would be added here as new variants.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unpack {
    Tuple,
}

impl Unpack {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Unpack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unpack {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tuple" => Ok(Self::Tuple),
            other => Err(PipelineError::UnsupportedUnpack(other.to_string())),
        }
    }
}

impl From<Unpack> for CompositionMode {
    fn from(unpack: Unpack) -> Self {
        match unpack {
            Unpack::Tuple => Self::TupleUnpack,
        }
    }
}
