//! # Assembly Errors
//!
//! A recipe fails either while deriving its plan or inside the kernel.
//! Kernel failures keep the kernel's own error as the source and name the
//! operation that raised it.

use mechanism_profiles::MechanismError;
use thiserror::Error;

/// Errors raised while assembling a mechanism.
#[derive(Debug, Error)]
pub enum AssemblyError<E>
where
    E: std::error::Error + 'static,
{
    /// The plan could not be derived.
    #[error(transparent)]
    Mechanism(#[from] MechanismError),

    /// The kernel rejected an operation.
    #[error("Kernel operation '{operation}' failed: {source}")]
    Kernel {
        /// Kernel operation name, e.g. `revolve`
        operation: &'static str,
        /// Error reported by the kernel
        #[source]
        source: E,
    },
}

impl<E> AssemblyError<E>
where
    E: std::error::Error + 'static,
{
    /// Name of the failed kernel operation, if the kernel failed.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Kernel { operation, .. } => Some(*operation),
            Self::Mechanism(_) => None,
        }
    }
}

/// Wraps a kernel error with the operation that produced it, for `map_err`.
pub(crate) fn kernel_error<E>(operation: &'static str) -> impl FnOnce(E) -> AssemblyError<E>
where
    E: std::error::Error + 'static,
{
    move |source| AssemblyError::Kernel { operation, source }
}

/// Result type alias for assembly recipes.
pub type AssemblyResult<T, E> = Result<T, AssemblyError<E>>;
