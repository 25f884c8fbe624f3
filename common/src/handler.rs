//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous and runs to completion: a [`Handler`] may mutate
/// its own state, but never suspends.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails. The meaning is defined by implementors.
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
