//! # Thread-Safe Bounded Ring Buffer
//!
//! 线程安全的有界环形缓冲区
//!
//! `lockring` provides a fixed-capacity FIFO ring buffer guarded by one mutex per
//! instance, with two interchangeable storage strategies behind the same API.
//!
//! `lockring` 提供由每实例一把互斥锁保护的固定容量 FIFO 环形缓冲区，
//! 在同一套 API 背后提供两种可互换的存储策略。
//!
//! ## Features
//!
//! 特性
//!
//! - **Overwrite on full** - Adding to a full buffer evicts the oldest element, writers never block
//! - **Fail on empty** - Reading an empty buffer returns an error, readers never wait for data
//! - **Non-blocking read** - `try_get` gives up instead of waiting for the lock
//! - **Resizable** - Capacity changes keep the newest elements that fit
//! - **Two backends** - [`ArrayRing`] (contiguous slots) and [`NodeRing`] (preallocated node cycle)
//!
//! - **满时覆盖** - 向已满缓冲区添加会淘汰最旧元素，写入方从不阻塞
//! - **空时失败** - 读取空缓冲区返回错误，读取方从不等待数据
//! - **非阻塞读取** - `try_get` 不等待锁，直接放弃
//! - **可调整容量** - 改变容量时保留能容纳的最新元素
//! - **两种后端** - [`ArrayRing`]（连续槽位）和 [`NodeRing`]（预分配节点环）
//!
//! ## Quick Start
//!
//! 快速开始
//!
//! ```rust
//! use lockring::ArrayRing;
//!
//! let ring = ArrayRing::new(4);
//! for i in 1..=6 {
//!     ring.add(i).unwrap();
//! }
//!
//! // Capacity 4: the two oldest values were overwritten
//! // 容量为 4：最旧的两个值已被覆盖
//! assert!(ring.is_full());
//! assert_eq!(ring.get(), Ok(3));
//! assert_eq!(ring.get(), Ok(4));
//! assert_eq!(ring.get(), Ok(5));
//!
//! // Growing keeps everything that is left
//! // 扩容保留剩余的全部元素
//! ring.resize(8);
//! assert_eq!(ring.capacity(), 8);
//! assert_eq!(ring.get(), Ok(6));
//! assert!(ring.get().is_err());
//! ```
//!
//! ## Multi-threaded Usage
//!
//! 多线程使用
//!
//! ```rust
//! use lockring::NodeRing;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let ring = Arc::new(NodeRing::new(64));
//!
//! let writers: Vec<_> = (0..4)
//!     .map(|id| {
//!         let ring = Arc::clone(&ring);
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 ring.add(id * 100 + i).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for writer in writers {
//!     writer.join().unwrap();
//! }
//!
//! assert!(ring.is_full());
//! let mut drained = 0;
//! while ring.try_get().is_some() {
//!     drained += 1;
//! }
//! assert_eq!(drained, 64);
//! ```
//!
//! ## Copy and Move
//!
//! 复制与移动
//!
//! Cloning gives an independent deep copy. [`Ring::take`] and [`Ring::move_from`]
//! transfer storage and leave the source with capacity 0.
//!
//! 克隆得到独立的深拷贝。[`Ring::take`] 和 [`Ring::move_from`] 转移存储，
//! 源对象变为容量 0。
//!
//! ```rust
//! use lockring::{ArrayRing, CapacityError};
//!
//! let original = ArrayRing::new(3);
//! original.add(1).unwrap();
//!
//! let copy = original.clone();
//! copy.add(2).unwrap();
//! assert_eq!(original.len(), 1);
//!
//! let moved = original.take();
//! assert_eq!(original.capacity(), 0);
//! assert_eq!(original.add(7), Err(CapacityError(7)));
//! assert_eq!(moved.get(), Ok(1));
//! ```
//!
//! ## Notes
//!
//! 注意事项
//!
//! - Capacity is used exactly as given (no rounding)
//! - Cross-instance operations lock both rings in address order, so opposing
//!   concurrent assignments cannot deadlock
//! - Enable the `loom` feature to model-check the locking with loom
//!
//! - 容量按给定值使用（不取整）
//! - 跨实例操作按地址顺序锁定两个环，相反方向的并发赋值不会死锁
//! - 启用 `loom` 特性可使用 loom 对加锁进行模型检查

mod array;
mod core;
mod error;
mod node;
mod ring;
mod shim;

pub use array::{ArrayRing, ArraySlots};
pub use crate::core::Backend;
pub use error::{CapacityError, EmptyError};
pub use node::{NodeCycle, NodeId, NodeRing};
pub use ring::Ring;
