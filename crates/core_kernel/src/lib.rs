//! Core Kernel - Foundational types and utilities for the hostel management system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar-date ranges and an injectable clock for billing computations
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{BedId, BuildingId, DocumentId, FloorId, PaymentId, RoomId, StudentId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{Clock, DateRange, FixedClock, SystemClock, TemporalError};
