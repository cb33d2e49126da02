//! Field flag bits stored in `/Ff`.
//!
//! Bit positions are 1-based in ISO 32000; masks here are the shifted values.

/// The field is read-only.
pub const READ_ONLY: u32 = 1;
/// The field must have a value when exported.
pub const REQUIRED: u32 = 1 << 1;
/// The field must not be exported.
pub const NO_EXPORT: u32 = 1 << 2;

/// Exactly one radio button must be on at all times.
pub const NO_TOGGLE_TO_OFF: u32 = 1 << 14;
/// Button field is a set of radio buttons.
pub const RADIO: u32 = 1 << 15;
/// Button field is a push button.
pub const PUSHBUTTON: u32 = 1 << 16;
/// Radio buttons sharing an on-state turn on and off together.
pub const RADIOS_IN_UNISON: u32 = 1 << 25;

/// Entry key holding the flags.
pub(crate) const FIELD_FLAGS: &str = "Ff";
