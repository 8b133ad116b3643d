//! The eleven-register bank: general-purpose A..J, plus PC, SP, and O.

use crate::error::DcpuError;
use crate::word::sanitize;

/// The eleven register names, in the bank's canonical iteration order.
pub const ALL_REGISTERS: [RegisterName; 11] = [
    RegisterName::A,
    RegisterName::B,
    RegisterName::C,
    RegisterName::X,
    RegisterName::Y,
    RegisterName::Z,
    RegisterName::I,
    RegisterName::J,
    RegisterName::Pc,
    RegisterName::Sp,
    RegisterName::O,
];

/// The general-purpose registers, in operand-encoding order (index 0..7).
pub const GENERAL_PURPOSE: [RegisterName; 8] = [
    RegisterName::A,
    RegisterName::B,
    RegisterName::C,
    RegisterName::X,
    RegisterName::Y,
    RegisterName::Z,
    RegisterName::I,
    RegisterName::J,
];

/// One of the eleven named registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterName {
    A,
    B,
    C,
    X,
    Y,
    Z,
    I,
    J,
    Pc,
    Sp,
    O,
}

impl RegisterName {
    /// Parse a register from its lowercase name, as used at the external
    /// construction boundary (§6). Unrecognized names are a [`DcpuError::KeyError`].
    pub fn from_name(name: &str) -> Result<Self, DcpuError> {
        Ok(match name {
            "a" => Self::A,
            "b" => Self::B,
            "c" => Self::C,
            "x" => Self::X,
            "y" => Self::Y,
            "z" => Self::Z,
            "i" => Self::I,
            "j" => Self::J,
            "pc" => Self::Pc,
            "sp" => Self::Sp,
            "o" => Self::O,
            other => {
                return Err(DcpuError::KeyError {
                    name: other.to_owned(),
                });
            }
        })
    }

    /// General-purpose register selected by a 3-bit operand-encoding index
    /// (`0..=7`, A..J). Returns `None` for indices outside that range.
    #[must_use]
    pub fn from_gp_index(index: u8) -> Option<Self> {
        GENERAL_PURPOSE.get(index as usize).copied()
    }
}

/// The eleven-register bank, all of uniform word width.
///
/// A fixed-size array indexed by [`RegisterName`] rather than a keyed map:
/// the set of names is closed and small (§3, §9).
#[derive(Debug, Clone)]
pub struct RegisterBank {
    width: u32,
    slots: [u64; 11],
}

impl RegisterBank {
    /// Index into the fixed-size backing array for a given register name.
    const fn slot(name: RegisterName) -> usize {
        match name {
            RegisterName::A => 0,
            RegisterName::B => 1,
            RegisterName::C => 2,
            RegisterName::X => 3,
            RegisterName::Y => 4,
            RegisterName::Z => 5,
            RegisterName::I => 6,
            RegisterName::J => 7,
            RegisterName::Pc => 8,
            RegisterName::Sp => 9,
            RegisterName::O => 10,
        }
    }

    /// Create a register bank at the given word width with all eleven
    /// registers set from `values`. `values` must cover all eleven names;
    /// use [`RegisterBank::zeroed`] for the common all-zero case.
    #[must_use]
    pub fn new(width: u32, values: [u64; 11]) -> Self {
        let mut slots = [0u64; 11];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = sanitize(value, width);
        }
        Self { width, slots }
    }

    /// A register bank at the given width with every register zeroed.
    #[must_use]
    pub const fn zeroed(width: u32) -> Self {
        Self {
            width,
            slots: [0u64; 11],
        }
    }

    /// Word width in bits this bank sanitizes writes to.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Read a register by name.
    #[must_use]
    pub fn get(&self, name: RegisterName) -> u64 {
        self.slots[Self::slot(name)]
    }

    /// Write `value mod 2^width` into a register by name.
    pub fn set(&mut self, name: RegisterName, value: u64) {
        self.slots[Self::slot(name)] = sanitize(value, self.width);
    }

    /// Read a register by its unvalidated external name (§4.2).
    ///
    /// # Errors
    /// Returns [`DcpuError::KeyError`] for an unrecognized name.
    pub fn get_by_name(&self, name: &str) -> Result<u64, DcpuError> {
        Ok(self.get(RegisterName::from_name(name)?))
    }

    /// Write a register by its unvalidated external name (§4.2).
    ///
    /// # Errors
    /// Returns [`DcpuError::KeyError`] for an unrecognized name.
    pub fn set_by_name(&mut self, name: &str, value: u64) -> Result<(), DcpuError> {
        self.set(RegisterName::from_name(name)?, value);
        Ok(())
    }

    /// Read a general-purpose register by its 3-bit operand-encoding index,
    /// as operand resolution does for register-direct and register-indirect
    /// codes (§4.4).
    #[must_use]
    pub fn get_gp(&self, index: u8) -> u64 {
        self.get(RegisterName::from_gp_index(index).expect("index must be 0..=7"))
    }

    /// Iterate the eleven register names in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RegisterName, u64)> + '_ {
        ALL_REGISTERS.iter().map(|&name| (name, self.get(name)))
    }
}
