//! Byte-addressed parameter storage.
//!
//! Generated models keep every tunable parameter in an untyped slot; the
//! slot's true type is only known by cross-referencing the data-type table.
//! `DataAddressMap` owns those slots and offers checked reinterpretation as
//! `f64` (native endianness) or as a single byte.

use crate::error::{ModelError, ModelResult};

const REAL_WIDTH: usize = std::mem::size_of::<f64>();

/// Address table: `address_index -> storage slot`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataAddressMap {
    slots: Vec<Vec<u8>>,
}

impl DataAddressMap {
    /// Create an empty address map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a zeroed slot of `width` bytes and return its address index.
    pub(crate) fn allocate(&mut self, width: usize) -> usize {
        self.slots.push(vec![0; width]);
        self.slots.len() - 1
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw bytes of a slot.
    pub fn slot(&self, index: usize) -> ModelResult<&[u8]> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ModelError::AddressOob { index, len })
    }

    /// Mutable raw bytes of a slot.
    pub fn slot_mut(&mut self, index: usize) -> ModelResult<&mut [u8]> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .map(Vec::as_mut_slice)
            .ok_or(ModelError::AddressOob { index, len })
    }

    /// Read a slot as a double.
    pub fn read_real(&self, index: usize) -> ModelResult<f64> {
        let bytes = leading::<REAL_WIDTH>(self.slot(index)?, index)?;
        Ok(f64::from_ne_bytes(bytes))
    }

    /// Write a double into a slot, bit for bit.
    pub fn write_real(&mut self, index: usize, value: f64) -> ModelResult<()> {
        let slot = self.slot_mut(index)?;
        let width = slot.len();
        let dst = slot
            .get_mut(..REAL_WIDTH)
            .ok_or(ModelError::SlotTooNarrow {
                index,
                width,
                required: REAL_WIDTH,
            })?;
        dst.copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    /// Read the first byte of a slot.
    pub fn read_byte(&self, index: usize) -> ModelResult<u8> {
        let [b] = leading::<1>(self.slot(index)?, index)?;
        Ok(b)
    }

    /// Write the first byte of a slot.
    pub fn write_byte(&mut self, index: usize, value: u8) -> ModelResult<()> {
        let slot = self.slot_mut(index)?;
        let width = slot.len();
        let dst = slot.first_mut().ok_or(ModelError::SlotTooNarrow {
            index,
            width,
            required: 1,
        })?;
        *dst = value;
        Ok(())
    }
}

fn leading<const N: usize>(slot: &[u8], index: usize) -> ModelResult<[u8; N]> {
    slot.get(..N)
        .and_then(|b| <[u8; N]>::try_from(b).ok())
        .ok_or(ModelError::SlotTooNarrow {
            index,
            width: slot.len(),
            required: N,
        })
}
