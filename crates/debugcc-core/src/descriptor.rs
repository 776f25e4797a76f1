//! Mux descriptor schema.
//!
//! A [`MuxDescriptor`] says how to route one internal clock to the shared
//! reference counter: which select code to program into the global debug
//! mux, which select code and post-divider to program into the owning
//! block's local mux, and which branch gate to open while counting.

use crate::block::BlockId;
use debugcc_common::error::{DebugccError, DebugccResult};
use serde::Serialize;

/// A register bitfield given as an unshifted mask and a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BitField {
    /// Mask of the field, right-aligned.
    pub mask: u32,
    /// Bit position of the field's least significant bit.
    pub shift: u32,
}

impl BitField {
    /// Create a bitfield.
    #[must_use]
    pub const fn new(mask: u32, shift: u32) -> Self {
        Self { mask, shift }
    }

    /// Returns true if the shifted mask lies within a 32-bit register.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.shift < 32 && (u64::from(self.mask) << self.shift) <= u64::from(u32::MAX)
    }

    /// Returns true if `value` can be stored in the field without truncation.
    #[must_use]
    pub fn fits(&self, value: u32) -> bool {
        value & self.mask == value
    }

    /// Mask of the field at its register position.
    #[must_use]
    pub fn placed_mask(&self) -> u32 {
        self.mask.checked_shl(self.shift).unwrap_or(0)
    }

    /// Replace this field of `register` with `value`.
    #[must_use]
    pub fn insert(&self, register: u32, value: u32) -> u32 {
        let placed = (value & self.mask).checked_shl(self.shift).unwrap_or(0);
        (register & !self.placed_mask()) | placed
    }

    /// Extract this field from `register`.
    #[must_use]
    pub fn extract(&self, register: u32) -> u32 {
        register.checked_shr(self.shift).unwrap_or(0) & self.mask
    }
}

/// Routing recipe for one measurable clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuxDescriptor {
    /// Clock name, unique within a table.
    pub name: &'static str,
    /// Select code for the global debug mux.
    pub intermediate_select: u32,
    /// Divide ratio applied by the global debug mux post-divider.
    pub intermediate_predivider: u32,
    /// Clock controller owning the clock.
    pub block: BlockId,
    /// Select code for the block-local debug mux.
    pub final_select: u32,
    /// Block-local select field (before `misc_select_shift`).
    pub select_field: BitField,
    /// Block-local post-divider field.
    pub post_div_field: BitField,
    /// Divide ratio of the block-local post-divider (field holds ratio - 1).
    pub post_divider: u32,
    /// Offset of the block-local mux register.
    pub mux_offset: u32,
    /// Offset of the block-local post-divider register.
    pub post_div_offset: u32,
    /// Offset of the block's debug branch gate, if it has one.
    pub cbcr_offset: Option<u32>,
    /// Extra shift for wide select fields (CPU controller).
    pub misc_select_shift: u32,
}

impl MuxDescriptor {
    /// Build a descriptor in table-column order.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        name: &'static str,
        intermediate_select: u32,
        intermediate_predivider: u32,
        block: BlockId,
        final_select: u32,
        select_mask: u32,
        select_shift: u32,
        post_div_mask: u32,
        post_div_shift: u32,
        post_divider: u32,
        mux_offset: u32,
        post_div_offset: u32,
        cbcr_offset: Option<u32>,
    ) -> Self {
        Self {
            name,
            intermediate_select,
            intermediate_predivider,
            block,
            final_select,
            select_field: BitField::new(select_mask, select_shift),
            post_div_field: BitField::new(post_div_mask, post_div_shift),
            post_divider,
            mux_offset,
            post_div_offset,
            cbcr_offset,
            misc_select_shift: 0,
        }
    }

    /// Apply an extra shift to the select field.
    #[must_use]
    pub const fn with_misc_select_shift(mut self, shift: u32) -> Self {
        self.misc_select_shift = shift;
        self
    }

    /// Select field at its final register position.
    #[must_use]
    pub fn effective_select_field(&self) -> BitField {
        BitField::new(
            self.select_field.mask,
            self.select_field.shift + self.misc_select_shift,
        )
    }

    /// Returns true if the clock passes through a block-local mux before the global one.
    #[must_use]
    pub fn has_local_stage(&self) -> bool {
        !self.block.is_global()
    }

    /// Product of every divider between the clock and the counter.
    #[must_use]
    pub fn total_divider(&self) -> u64 {
        let global = u64::from(self.intermediate_predivider);
        if self.has_local_stage() {
            global * u64::from(self.post_divider)
        } else {
            global
        }
    }

    /// Check this descriptor against its own fields and the global mux layout.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::Config`] naming the first violated constraint.
    pub fn validate(&self, layout: &DebugMuxLayout) -> DebugccResult<()> {
        let fail = |what: String| Err(DebugccError::Config(format!("{}: {what}", self.name)));

        if self.name.is_empty() {
            return Err(DebugccError::Config("descriptor with empty name".into()));
        }
        if !layout.src_sel_field.fits(self.intermediate_select) {
            return fail(format!(
                "intermediate select {:#x} does not fit mask {:#x}",
                self.intermediate_select, layout.src_sel_field.mask
            ));
        }
        if self.intermediate_predivider == 0
            || !layout
                .post_div_field
                .fits(self.intermediate_predivider - 1)
        {
            return fail(format!(
                "predivider {} not encodable in mask {:#x}",
                self.intermediate_predivider, layout.post_div_field.mask
            ));
        }
        let select = self.effective_select_field();
        if !select.is_in_range() {
            return fail(format!(
                "select field mask {:#x} shift {} exceeds 32 bits",
                select.mask, select.shift
            ));
        }
        if !select.fits(self.final_select) {
            return fail(format!(
                "select {:#x} does not fit mask {:#x}",
                self.final_select, select.mask
            ));
        }
        if !self.post_div_field.is_in_range() {
            return fail(format!(
                "post-divider field mask {:#x} shift {} exceeds 32 bits",
                self.post_div_field.mask, self.post_div_field.shift
            ));
        }
        if self.post_divider == 0 || !self.post_div_field.fits(self.post_divider - 1) {
            return fail(format!(
                "post-divider {} not encodable in mask {:#x}",
                self.post_divider, self.post_div_field.mask
            ));
        }
        Ok(())
    }
}

/// Geometry of the global debug mux and reference counter.
///
/// All offsets are within the global block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebugMuxLayout {
    /// Global debug mux select register.
    pub debug_offset: u32,
    /// Global debug mux post-divider register.
    pub post_div_offset: u32,
    /// Global debug branch gate.
    pub cbcr_offset: u32,
    /// Select field in `debug_offset`.
    pub src_sel_field: BitField,
    /// Post-divider field in `post_div_offset`.
    pub post_div_field: BitField,
    /// Counter control register.
    pub counter_ctl_offset: u32,
    /// Counter status register.
    pub counter_status_offset: u32,
    /// Gate of the reference branch clocking the counter.
    pub reference_cbcr_offset: u32,
}
