use crate::Error;

/// The outcome stored by a [`PromiseOut`](crate::PromiseOut) once it is
/// resolved. Exactly one side is ever present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E = Error> {
    Resolved(T),
    Rejected(E),
}

impl<T, E> Settled<T, E> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Settled::Resolved(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Settled::Rejected(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Settled::Resolved(value) => Some(value),
            Settled::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Settled::Resolved(_) => None,
            Settled::Rejected(err) => Some(err),
        }
    }

    pub fn as_result(&self) -> Result<&T, &E> {
        match self {
            Settled::Resolved(value) => Ok(value),
            Settled::Rejected(err) => Err(err),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T: Clone, E: Clone> Settled<T, E> {
    /// Splits the outcome into `(value, error)` slots; the unused one is `None`.
    pub fn to_pair(&self) -> (Option<T>, Option<E>) {
        (self.value().cloned(), self.error().cloned())
    }
}

impl<T, E> From<Settled<T, E>> for Result<T, E> {
    fn from(settled: Settled<T, E>) -> Self {
        match settled {
            Settled::Resolved(value) => Ok(value),
            Settled::Rejected(err) => Err(err),
        }
    }
}
