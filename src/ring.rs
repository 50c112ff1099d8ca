//! Locked ring buffer front-end shared by both backends
//!
//! 两种后端共用的加锁环形缓冲区前端
//!
//! Every public operation takes the instance's mutex for its whole duration and
//! then works on the unlocked `RingCore`. Operations that need more than one
//! step (resize, copy, move) run those steps on the already-locked core, so the
//! lock never has to be re-entered.
//!
//! 每个公开操作在整个执行期间持有实例的互斥锁，然后在无锁的 `RingCore` 上工作。
//! 需要多个步骤的操作（resize、复制、移动）在已加锁的核心上执行这些步骤，
//! 因此无需重入锁。

use crate::core::{Backend, RingCore};
use crate::error::{CapacityError, EmptyError};
use crate::shim::sync::{Mutex, MutexGuard};
use std::fmt;
use std::ptr;
use tracing::{debug, trace};

/// Fixed-capacity, thread-safe FIFO ring buffer over a storage backend `B`
///
/// 基于存储后端 `B` 的固定容量、线程安全的 FIFO 环形缓冲区
///
/// Use the [`ArrayRing`](crate::ArrayRing) or [`NodeRing`](crate::NodeRing)
/// aliases; both expose this same API.
///
/// 请使用 [`ArrayRing`](crate::ArrayRing) 或 [`NodeRing`](crate::NodeRing) 别名；
/// 二者提供相同的 API。
///
/// # Behavior
///
/// - Adding to a full ring overwrites the oldest element
/// - Reading from an empty ring fails instead of blocking
/// - Capacity 0 is legal: the ring is empty and rejects every `add`
///
/// # 行为
///
/// - 向已满的环添加元素会覆盖最旧的元素
/// - 从空环读取会失败而不是阻塞
/// - 容量 0 是合法的：环为空并拒绝所有 `add`
pub struct Ring<B: Backend> {
    core: Mutex<RingCore<B>>,
}

impl<B: Backend> Ring<B> {
    /// Create an empty ring with `capacity` slots
    ///
    /// 创建具有 `capacity` 个槽位的空环
    ///
    /// # Examples
    ///
    /// ```
    /// use lockring::ArrayRing;
    ///
    /// let ring: ArrayRing<u32> = ArrayRing::new(8);
    /// assert_eq!(ring.capacity(), 8);
    /// assert!(ring.is_empty());
    /// assert!(!ring.is_full());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::from_core(RingCore::new(capacity))
    }

    fn from_core(core: RingCore<B>) -> Self {
        Self {
            core: Mutex::new(core),
        }
    }

    /// Number of physical slots
    ///
    /// 物理槽位数量
    pub fn capacity(&self) -> usize {
        self.core.lock().capacity()
    }

    /// Number of elements currently held
    ///
    /// 当前持有的元素数量
    pub fn len(&self) -> usize {
        self.core.lock().len()
    }

    /// Check whether the ring holds no elements
    ///
    /// 检查环是否为空
    pub fn is_empty(&self) -> bool {
        self.core.lock().is_empty()
    }

    /// Check whether every slot holds an element (never true at capacity 0)
    ///
    /// 检查环是否已满
    pub fn is_full(&self) -> bool {
        self.core.lock().is_full()
    }

    /// Reset to empty without releasing or reallocating storage
    ///
    /// 重置为空，不释放也不重新分配存储
    pub fn clear(&self) {
        self.core.lock().clear();
    }

    /// Add `value` as the newest element
    ///
    /// 将 `value` 添加为最新元素
    ///
    /// If the ring was full, the oldest element is evicted and returned as
    /// `Ok(Some(oldest))`.
    ///
    /// 如果环已满，最旧的元素会被淘汰并以 `Ok(Some(oldest))` 返回。
    ///
    /// # Errors
    ///
    /// Returns `Err(CapacityError(value))` when the capacity is 0.
    ///
    /// 当容量为 0 时返回 `Err(CapacityError(value))`。
    ///
    /// # Examples
    ///
    /// ```
    /// use lockring::{ArrayRing, CapacityError};
    ///
    /// let ring = ArrayRing::new(2);
    /// assert_eq!(ring.add(1), Ok(None));
    /// assert_eq!(ring.add(2), Ok(None));
    /// assert_eq!(ring.add(3), Ok(Some(1)));
    ///
    /// let empty: ArrayRing<i32> = ArrayRing::new(0);
    /// assert_eq!(empty.add(42), Err(CapacityError(42)));
    /// ```
    #[doc(alias = "push")]
    pub fn add(&self, value: B::Item) -> Result<Option<B::Item>, CapacityError<B::Item>> {
        let result = self.core.lock().add(value);
        if result.is_err() {
            trace!("add rejected by zero-capacity ring");
        }
        result
    }

    /// Remove and return the oldest element, blocking only on the lock
    ///
    /// 移除并返回最旧的元素，仅在获取锁时阻塞
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyError)` if the ring holds nothing.
    ///
    /// 如果环中没有元素则返回 `Err(EmptyError)`。
    #[doc(alias = "pop")]
    pub fn get(&self) -> Result<B::Item, EmptyError> {
        self.core.lock().get()
    }

    /// Non-blocking [`get`](Self::get)
    ///
    /// 非阻塞版本的 [`get`](Self::get)
    ///
    /// Returns `None` when the lock is held elsewhere or the ring is empty.
    ///
    /// 当锁被其他地方持有或环为空时返回 `None`。
    pub fn try_get(&self) -> Option<B::Item> {
        self.core.try_lock()?.get().ok()
    }

    /// Non-blocking get into an existing slot
    ///
    /// 非阻塞地读取到已有的位置
    ///
    /// On success the oldest element is moved into `out` and `true` is
    /// returned. On failure `out` is left exactly as it was.
    ///
    /// 成功时最旧元素被移动到 `out` 并返回 `true`；失败时 `out` 保持原样。
    ///
    /// # Examples
    ///
    /// ```
    /// use lockring::NodeRing;
    ///
    /// let ring: NodeRing<i32> = NodeRing::new(0);
    /// let mut value = 42;
    /// assert!(!ring.try_get_into(&mut value));
    /// assert_eq!(value, 42);
    /// ```
    pub fn try_get_into(&self, out: &mut B::Item) -> bool {
        match self.try_get() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Change the capacity, keeping the newest elements that fit
    ///
    /// 改变容量，保留能容纳的最新元素
    ///
    /// The result is what draining the ring oldest-first into a fresh ring of
    /// `new_capacity` would produce: growing keeps everything, shrinking drops
    /// from the oldest end. Resizing to the current capacity changes nothing.
    ///
    /// 结果等同于将环按从旧到新的顺序排空并写入容量为 `new_capacity` 的新环：
    /// 扩容保留全部元素，缩容从最旧一端丢弃。调整为当前容量时不做任何改变。
    ///
    /// # Examples
    ///
    /// ```
    /// use lockring::ArrayRing;
    ///
    /// let ring = ArrayRing::new(5);
    /// for i in 1..=5 {
    ///     ring.add(i).unwrap();
    /// }
    ///
    /// ring.resize(3);
    /// assert!(ring.is_full());
    /// assert_eq!(ring.get(), Ok(3));
    /// ```
    pub fn resize(&self, new_capacity: usize) {
        let mut core = self.core.lock();
        let from = core.capacity();
        if from == new_capacity {
            return;
        }

        let discarded = core.resize(new_capacity);
        debug!(
            from,
            to = new_capacity,
            retained = core.len(),
            discarded,
            "ring resized"
        );
    }

    /// Move the storage out into a new ring (move construction)
    ///
    /// 将存储移出到新的环中（移动构造）
    ///
    /// `self` is left with capacity 0, empty, and rejects `add` until resized.
    /// No element is copied.
    ///
    /// `self` 变为容量 0 的空环，在 resize 之前拒绝 `add`。不复制任何元素。
    ///
    /// # Examples
    ///
    /// ```
    /// use lockring::ArrayRing;
    ///
    /// let source = ArrayRing::new(3);
    /// source.add(String::from("a")).unwrap();
    ///
    /// let moved = source.take();
    /// assert_eq!(source.capacity(), 0);
    /// assert!(source.add(String::from("b")).is_err());
    /// assert_eq!(moved.get().as_deref(), Ok("a"));
    /// ```
    pub fn take(&self) -> Self {
        let core = self.core.lock().take();
        trace!(capacity = core.capacity(), "ring storage moved out");
        Self::from_core(core)
    }

    /// Move `other`'s storage into `self` (move assignment)
    ///
    /// 将 `other` 的存储移动到 `self` 中（移动赋值）
    ///
    /// `self`'s previous contents are dropped, `other` is left with capacity 0.
    /// Moving a ring into itself does nothing.
    ///
    /// `self` 原有内容被 drop，`other` 变为容量 0。将环移动到自身不做任何事。
    pub fn move_from(&self, other: &Self) {
        if ptr::eq(self, other) {
            return;
        }

        let (mut target, mut source) = self.lock_pair(other);
        *target = source.take();
        trace!(capacity = target.capacity(), "ring storage moved in");
    }

    /// Lock `self` and `other` in address order; guards come back as (self, other)
    ///
    /// 按地址顺序锁定 `self` 和 `other`；返回的守卫顺序为 (self, other)
    fn lock_pair<'a>(
        &'a self,
        other: &'a Self,
    ) -> (MutexGuard<'a, RingCore<B>>, MutexGuard<'a, RingCore<B>>) {
        if ptr::from_ref(self) < ptr::from_ref(other) {
            let mine = self.core.lock();
            let theirs = other.core.lock();
            (mine, theirs)
        } else {
            let theirs = other.core.lock();
            let mine = self.core.lock();
            (mine, theirs)
        }
    }
}

impl<B: Backend> Ring<B>
where
    B::Item: Clone,
{
    /// Add clones of every value in order, under a single lock acquisition
    ///
    /// 在一次加锁内按顺序添加每个值的克隆
    ///
    /// Each value follows [`add`](Self::add) semantics, so a slice longer than
    /// the capacity leaves only its last `capacity` values in the ring.
    ///
    /// 每个值都遵循 [`add`](Self::add) 的语义，因此长于容量的切片只会在环中
    /// 留下最后 `capacity` 个值。
    ///
    /// # Returns
    ///
    /// Number of elements evicted to make room.
    ///
    /// 为腾出空间而被淘汰的元素数量。
    ///
    /// # Errors
    ///
    /// `Err(CapacityError(()))` if the capacity is 0 and `values` is not empty.
    pub fn add_slice(&self, values: &[B::Item]) -> Result<usize, CapacityError<()>> {
        if values.is_empty() {
            return Ok(0);
        }

        let mut core = self.core.lock();
        if core.capacity() == 0 {
            return Err(CapacityError(()));
        }

        let mut evicted = 0;
        for value in values {
            if let Ok(Some(_)) = core.add(value.clone()) {
                evicted += 1;
            }
        }
        Ok(evicted)
    }

    /// Replace `self` with a deep copy of `other` (copy assignment)
    ///
    /// 用 `other` 的深拷贝替换 `self`（复制赋值）
    ///
    /// Both rings stay fully independent afterwards. Assigning a ring to
    /// itself does nothing.
    ///
    /// 之后两个环完全独立。将环赋值给自身不做任何事。
    pub fn assign_from(&self, other: &Self) {
        if ptr::eq(self, other) {
            return;
        }

        let (mut target, source) = self.lock_pair(other);
        *target = source.duplicate();
        trace!(capacity = target.capacity(), "ring contents copied in");
    }
}

impl<B: Backend> Default for Ring<B> {
    /// A ring with no storage (capacity 0)
    fn default() -> Self {
        Self::new(0)
    }
}

impl<B: Backend> Clone for Ring<B>
where
    B::Item: Clone,
{
    fn clone(&self) -> Self {
        Self::from_core(self.core.lock().duplicate())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<B: Backend> fmt::Debug for Ring<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.lock();
        f.debug_struct("Ring")
            .field("capacity", &core.capacity())
            .field("len", &core.len())
            .field("full", &core.is_full())
            .finish()
    }
}
