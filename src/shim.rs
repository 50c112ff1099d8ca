//! Shim module to abstract over the production and loom lock primitives.
//!
//! Production builds use `parking_lot::Mutex`. With the `loom` feature the
//! loom mutex is wrapped so that it exposes the same `lock`/`try_lock` shape,
//! letting the ring code stay identical under model checking.

#[cfg(not(feature = "loom"))]
pub mod sync {
    pub use parking_lot::{Mutex, MutexGuard};
}

#[cfg(feature = "loom")]
pub mod sync {
    use std::sync::PoisonError;

    pub use loom::sync::MutexGuard;

    /// loom mutex with a parking_lot-style API (no poisoning surfaced)
    pub struct Mutex<T>(loom::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub fn new(value: T) -> Self {
            Self(loom::sync::Mutex::new(value))
        }

        pub fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
            self.0.try_lock().ok()
        }
    }
}
