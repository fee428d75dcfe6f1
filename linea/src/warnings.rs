use std::panic::Location;
use tracing::warn;

/// Notice emitted each time the experimental `|` call operator is used.
pub const UNSTABLE_CALL_OPERATOR: &str =
    "Operator `|` is experimental/unstable. Prefer `call` method instead.";

#[track_caller]
pub(crate) fn warn_unstable_call_operator() {
    let location = Location::caller();
    warn!(target: "linea::unstable", %location, "{}", UNSTABLE_CALL_OPERATOR);
}
