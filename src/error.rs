//! Error types for ring buffer operations
//!
//! 环形缓冲区操作的错误类型

use thiserror::Error;

/// Returned by `add` when the ring has no storage (capacity 0)
///
/// 当环形缓冲区没有存储空间（容量为 0）时由 `add` 返回
///
/// The rejected value is handed back so the caller can retry after a resize.
///
/// 被拒绝的值会被交还，调用者可以在 resize 之后重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer has no capacity to store the value")]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// Recover the value that could not be stored
    ///
    /// 取回未能存储的值
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Returned by `get` when the ring holds no elements
///
/// 当环形缓冲区中没有元素时由 `get` 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is empty")]
pub struct EmptyError;
