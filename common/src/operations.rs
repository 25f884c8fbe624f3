//! Abstract operations.

/// Operation to persist a value outside of the current process state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Persist<T>(pub T);
