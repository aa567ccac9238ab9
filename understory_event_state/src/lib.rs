// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: small state machines for pointer interaction.
//!
//! The types here interpret raw pointer input, meaning positions plus
//! down/move/up transitions, into higher-level intents. They do not own a
//! widget tree or an event loop. Hosts feed events in and act on the results.
//!
//! - [`swipe`]: recognizes one press-move-release cycle as a forward or
//!   backward swipe, or as a tap. Reports a live drag delta along the way.
//! - [`capture`]: a scope for the global pointer listeners a drag needs, which
//!   attaches on press and detaches on release, cancel or drop.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod capture;
pub mod swipe;
