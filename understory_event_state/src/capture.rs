// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped pointer capture.
//!
//! Once a drag starts, the host has to keep receiving pointer move and release
//! events even after the pointer leaves the widget. It usually does this by
//! registering listeners on the window or by capturing the pointer. Those
//! listeners must go away as soon as the gesture ends, or they leak into
//! unrelated interactions.
//!
//! [`Capture`] holds that registration as a scope. [`Capture::acquire`] attaches
//! the hooks at most once. [`Capture::release`] detaches them. Dropping a held
//! capture detaches as well, so tearing down the owner in the middle of a
//! gesture does not leave listeners behind.
//!
//! ```
//! use understory_event_state::capture::{Capture, PointerHooks};
//!
//! #[derive(Default)]
//! struct Window {
//!     listeners: u32,
//! }
//!
//! impl PointerHooks for Window {
//!     fn attach(&mut self) {
//!         self.listeners += 1;
//!     }
//!     fn detach(&mut self) {
//!         self.listeners -= 1;
//!     }
//! }
//!
//! let mut capture = Capture::new(Window::default());
//! capture.acquire();
//! capture.acquire(); // already held, nothing changes
//! assert_eq!(capture.hooks().listeners, 1);
//!
//! capture.release();
//! assert_eq!(capture.hooks().listeners, 0);
//! ```

/// Host-side registration of the global pointer listeners used during a drag.
pub trait PointerHooks {
    /// Start delivering pointer move/up events regardless of pointer location.
    fn attach(&mut self);
    /// Stop delivering the events enabled by [`attach`](Self::attach).
    fn detach(&mut self);
}

/// No-op hooks, for hosts that already route every pointer event to the widget.
impl PointerHooks for () {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// Pointer capture whose attached lifetime is bracketed by `acquire`/`release`.
#[derive(Debug)]
pub struct Capture<H: PointerHooks> {
    hooks: H,
    held: bool,
}

impl<H: PointerHooks> Capture<H> {
    /// Wrap `hooks` in a released capture.
    pub const fn new(hooks: H) -> Self {
        Self { hooks, held: false }
    }

    /// Attach the hooks if they are not attached yet.
    ///
    /// Returns `true` if this call attached them.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.hooks.attach();
        self.held = true;
        true
    }

    /// Detach the hooks if they are attached.
    ///
    /// Returns `true` if this call detached them.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.hooks.detach();
        self.held = false;
        true
    }

    /// Whether the hooks are currently attached.
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Shared access to the host hooks.
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the host hooks.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }
}

impl<H: PointerHooks + Default> Default for Capture<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: PointerHooks> Drop for Capture<H> {
    fn drop(&mut self) {
        self.release();
    }
}
