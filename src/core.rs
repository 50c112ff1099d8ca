//! Core ring state machine - Shared logic for the array and node-ring backends
//!
//! 核心环形状态机 - 数组后端和节点环后端的共享逻辑
//!
//! This module holds everything that does not depend on how slots are laid out:
//! - The `Backend` trait describing a fixed ring of slots addressed by cursors
//! - `RingCore`, the unlocked start/end/full cursor logic
//! - Drain-and-refill resize and storage duplication
//!
//! 此模块包含与槽位布局无关的全部逻辑：
//! - 描述由游标寻址的固定槽位环的 `Backend` trait
//! - `RingCore`，无锁的 start/end/full 游标逻辑
//! - 排空再填充式的 resize 以及存储复制
//!
//! `RingCore` is never shared directly; `Ring` wraps it in a per-instance mutex.

use crate::error::{CapacityError, EmptyError};
use std::fmt::Debug;
use std::mem;

/// Storage strategy for a ring: a fixed cycle of `capacity` slots
///
/// 环形缓冲区的存储策略：由 `capacity` 个槽位组成的固定环
///
/// A cursor identifies one slot. Walking `advance` from `head` visits every
/// slot exactly once before returning to `head`.
///
/// 游标标识一个槽位。从 `head` 开始不断 `advance`，会在回到 `head` 之前
/// 恰好访问每个槽位一次。
///
/// Implemented by [`ArraySlots`](crate::ArraySlots) and
/// [`NodeCycle`](crate::NodeCycle).
pub trait Backend: Sized {
    /// Element type stored in the slots
    ///
    /// 槽位中存储的元素类型
    type Item;

    /// Position of a slot inside the ring
    ///
    /// 槽位在环中的位置
    type Cursor: Copy + Eq + Debug;

    /// Allocate `capacity` empty slots wired into a ring
    ///
    /// 分配 `capacity` 个空槽位并连接成环
    fn with_capacity(capacity: usize) -> Self;

    /// Number of physical slots
    ///
    /// 物理槽位数量
    fn capacity(&self) -> usize;

    /// Anchor slot; fresh and cleared rings start and end here
    ///
    /// 锚点槽位；新建和清空后的环从这里开始和结束
    fn head(&self) -> Self::Cursor;

    /// Successor of `cursor` along the ring
    ///
    /// `cursor` 在环上的后继
    fn advance(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Number of `advance` steps needed to go from `from` to `to`
    ///
    /// 从 `from` 走到 `to` 所需的 `advance` 步数
    fn distance(&self, from: Self::Cursor, to: Self::Cursor) -> usize;

    /// Cursor reached after `offset` steps from `head`, wrapping around
    ///
    /// 从 `head` 前进 `offset` 步（环绕）后到达的游标
    fn cursor_at(&self, offset: usize) -> Self::Cursor;

    /// Mutable access to the value slot under `cursor`
    ///
    /// 对 `cursor` 所指槽位值的可变访问
    fn slot_mut(&mut self, cursor: Self::Cursor) -> &mut Option<Self::Item>;

    /// Build fresh storage of the same capacity holding copies of the `len`
    /// values that follow `start`, and return it with the copied arc's
    /// start and end cursors
    ///
    /// 构建同容量的新存储，其中只包含从 `start` 开始的 `len` 个值的副本，
    /// 并返回该存储以及副本中这段弧的起止游标
    ///
    /// Slots outside the arc are left empty in the copy.
    ///
    /// 弧以外的槽位在副本中保持为空。
    fn duplicate(
        &self,
        start: Self::Cursor,
        len: usize,
    ) -> (Self, Self::Cursor, Self::Cursor)
    where
        Self::Item: Clone;
}

/// Unlocked ring state: storage plus logical read/write cursors
///
/// 无锁的环状态：存储加上逻辑读写游标
///
/// Invariants (hold between calls):
/// - `capacity == 0` implies empty and never full
/// - `start == end && !full` means empty
/// - `start == end && full` means `capacity` elements are held
/// - `start != end` implies `!full`
/// - the live elements occupy the arc from `start` (oldest) up to `end`
pub(crate) struct RingCore<B: Backend> {
    storage: B,
    start: B::Cursor,
    end: B::Cursor,
    full: bool,
}

impl<B: Backend> RingCore<B> {
    pub(crate) fn new(capacity: usize) -> Self {
        let storage = B::with_capacity(capacity);
        let head = storage.head();

        Self {
            storage,
            start: head,
            end: head,
            full: false,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else {
            self.storage.distance(self.start, self.end)
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        !self.full && self.start == self.end
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.full
    }

    /// Reset the logical window; slot contents are left in place
    pub(crate) fn clear(&mut self) {
        let head = self.storage.head();
        self.start = head;
        self.end = head;
        self.full = false;
    }

    /// Store `value` as the newest element, evicting the oldest if full
    ///
    /// 将 `value` 存为最新元素，满时淘汰最旧元素
    pub(crate) fn add(&mut self, value: B::Item) -> Result<Option<B::Item>, CapacityError<B::Item>> {
        if self.capacity() == 0 {
            return Err(CapacityError(value));
        }

        // When full, `end` sits on the oldest element, so the write overwrites it.
        let previous = self.storage.slot_mut(self.end).replace(value);
        let evicted = if self.full { previous } else { None };

        self.end = self.storage.advance(self.end);

        if self.end == self.start {
            self.full = true;
        } else if self.full {
            self.start = self.storage.advance(self.start);
        }

        Ok(evicted)
    }

    /// Remove and return the oldest element
    ///
    /// 移除并返回最旧的元素
    pub(crate) fn get(&mut self) -> Result<B::Item, EmptyError> {
        if self.is_empty() {
            return Err(EmptyError);
        }

        let value = self.storage.slot_mut(self.start).take();
        debug_assert!(value.is_some(), "live slot at {:?} holds no value", self.start);

        self.start = self.storage.advance(self.start);
        self.full = false;

        value.ok_or(EmptyError)
    }

    /// Change capacity with drain-and-refill semantics
    ///
    /// 以排空再填充的语义改变容量
    ///
    /// Returns the number of elements discarded from the oldest end.
    ///
    /// 返回从最旧一端丢弃的元素数量。
    pub(crate) fn resize(&mut self, new_capacity: usize) -> usize {
        if new_capacity == self.capacity() {
            return 0;
        }

        let mut fresh = Self::new(new_capacity);
        let mut discarded = 0;

        if new_capacity == 0 {
            discarded = self.len();
        } else {
            // Keep the read cursor at the same offset from the head as before.
            let offset = self.storage.distance(self.storage.head(), self.start) % new_capacity;
            let anchor = fresh.storage.cursor_at(offset);
            fresh.start = anchor;
            fresh.end = anchor;

            while let Ok(value) = self.get() {
                if let Ok(Some(_)) = fresh.add(value) {
                    discarded += 1;
                }
            }
        }

        *self = fresh;
        discarded
    }

    /// Deep copy of the live elements; stale slots are not cloned
    ///
    /// 深拷贝存活元素；过期槽位不会被克隆
    pub(crate) fn duplicate(&self) -> Self
    where
        B::Item: Clone,
    {
        let (storage, start, end) = self.storage.duplicate(self.start, self.len());

        Self {
            storage,
            start,
            end,
            full: self.full,
        }
    }

    /// Move the whole state out, leaving a capacity-0 ring behind
    ///
    /// 移出全部状态，原处留下容量为 0 的环
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new(0))
    }
}
