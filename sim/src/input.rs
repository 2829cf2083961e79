//! Explicit input state for the caller-owned simulation loop.
//!
//! There is no global input singleton: the loop owns an [`InputState`], feeds
//! host events into it each tick, and passes it by reference into component
//! ticks. This makes input fully scriptable in tests.
//!
//! # Tick protocol
//! - Call [`InputState::begin_tick`] once at the top of each tick to clear
//!   the previous tick's edge events.
//! - Record device events with [`InputState::press`] / [`InputState::release`]
//!   and [`InputState::set_axes`].
//! - Components then query [`InputState::released`] and the axis accessors.
//!
//! A release edge is only visible during the tick it was recorded in; a held
//! button produces no edges.

use crate::constants::AXIS_LIMIT;
use num_traits::{One, PrimInt};

/// Trait implemented by button enums stored in a [`ButtonMask`].
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
/// The backing integer type is chosen via the associated `Storage`.
pub trait ButtonBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // Equivalent to: 1 << index
        // NOTE: Ensure your `bit_index()` is < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A pure bitmask container for button state.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonMask<T: PrimInt> {
    bits: T,
}

impl<T: PrimInt> ButtonMask<T> {
    pub fn add<U: ButtonBitmask<Storage = T>>(&mut self, button: U) {
        self.bits = self.bits | button.mask();
    }

    pub fn remove<U: ButtonBitmask<Storage = T>>(&mut self, button: U) {
        self.bits = self.bits & !button.mask();
    }

    pub fn has<U: ButtonBitmask<Storage = T>>(&self, button: U) -> bool {
        (self.bits & button.mask()) != T::zero()
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

/// Mouse buttons, numbered by host convention (left = 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl ButtonBitmask for MouseButton {
    type Storage = u8;

    fn bit_index(&self) -> u8 {
        *self as u8
    }
}

/// Per-tick input snapshot: two smoothed analog axes plus mouse button state
/// with release-edge tracking.
///
/// The default value models "no input device": both axes read zero and no
/// buttons are down.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct InputState {
    horizontal: f32,
    vertical: f32,
    down: ButtonMask<u8>,
    released: ButtonMask<u8>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the previous tick's release edges. Axis values and held-button
    /// state persist until the host reports otherwise.
    pub fn begin_tick(&mut self) {
        self.released.clear();
    }

    /// Records the host-smoothed axis values, clamped into
    /// `[-AXIS_LIMIT, AXIS_LIMIT]`.
    pub fn set_axes(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal = horizontal.clamp(-AXIS_LIMIT, AXIS_LIMIT);
        self.vertical = vertical.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    }

    /// The horizontal axis value in `[-1, 1]`.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// The vertical axis value in `[-1, 1]`.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Records a button-down transition.
    pub fn press(&mut self, button: MouseButton) {
        self.down.add(button);
    }

    /// Records a button-up transition, raising a release edge for the current
    /// tick.
    ///
    /// The edge is raised even without a prior `press`: edges mirror what the
    /// host reports, not a reconstructed transition history.
    pub fn release(&mut self, button: MouseButton) {
        self.down.remove(button);
        self.released.add(button);
    }

    /// True while the button is held down.
    pub fn held(&self, button: MouseButton) -> bool {
        self.down.has(button)
    }

    /// True if a release edge for `button` was recorded since the last
    /// [`begin_tick`](Self::begin_tick).
    pub fn released(&self, button: MouseButton) -> bool {
        self.released.has(button)
    }
}
