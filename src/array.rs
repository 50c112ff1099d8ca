//! Array backend: one contiguous block of slots addressed by integer offsets
//!
//! 数组后端：由整数偏移寻址的一块连续槽位
//!
//! The block is allocated once per capacity. `start` and `end` are offsets in
//! `[0, capacity)` that advance modulo the capacity.
//!
//! 每种容量只分配一次存储块。`start` 和 `end` 是 `[0, capacity)` 内的偏移量，
//! 按容量取模前进。

use crate::core::Backend;
use crate::ring::Ring;

/// Thread-safe ring buffer backed by a contiguous slot array
///
/// 基于连续槽位数组的线程安全环形缓冲区
///
/// # Examples
///
/// ```
/// use lockring::ArrayRing;
///
/// let ring = ArrayRing::new(4);
/// for i in 1..=6 {
///     ring.add(i).unwrap();
/// }
///
/// // 1 and 2 were overwritten
/// assert!(ring.is_full());
/// assert_eq!(ring.get(), Ok(3));
/// assert_eq!(ring.get(), Ok(4));
/// ```
pub type ArrayRing<T> = Ring<ArraySlots<T>>;

/// Contiguous slot storage
///
/// 连续的槽位存储
pub struct ArraySlots<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Backend for ArraySlots<T> {
    type Item = T;
    type Cursor = usize;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn head(&self) -> usize {
        0
    }

    #[inline]
    fn advance(&self, cursor: usize) -> usize {
        let next = cursor + 1;
        if next == self.slots.len() { 0 } else { next }
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        let capacity = self.slots.len();
        if capacity == 0 {
            return 0;
        }
        (to + capacity - from) % capacity
    }

    #[inline]
    fn cursor_at(&self, offset: usize) -> usize {
        match self.slots.len() {
            0 => 0,
            capacity => offset % capacity,
        }
    }

    #[inline]
    fn slot_mut(&mut self, cursor: usize) -> &mut Option<T> {
        &mut self.slots[cursor]
    }

    fn duplicate(&self, start: usize, len: usize) -> (Self, usize, usize)
    where
        T: Clone,
    {
        // Offsets are positional already, so they carry over unchanged.
        let mut copy = Self::with_capacity(self.slots.len());
        let mut cursor = start;
        for _ in 0..len {
            copy.slots[cursor] = self.slots[cursor].clone();
            cursor = self.advance(cursor);
        }
        (copy, start, cursor)
    }
}
