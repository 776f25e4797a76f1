//! Validated, read-only collection of mux descriptors.

use crate::block::BlockId;
use crate::descriptor::{DebugMuxLayout, MuxDescriptor};
use debugcc_common::error::{DebugccError, DebugccResult};
use std::collections::{BTreeSet, HashMap};

/// Ordered descriptor table with a name index.
///
/// Construction rejects duplicate names and any descriptor whose select
/// or divider values do not fit their register fields, so a table that
/// exists is always safe to program from.
#[derive(Debug, Clone)]
pub struct MuxDescriptorTable {
    layout: DebugMuxLayout,
    descriptors: Vec<MuxDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl MuxDescriptorTable {
    /// Build and validate a table.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::Config`] for a duplicate name, an out-of-range
    /// layout field, or a descriptor that fails validation.
    pub fn new<I>(layout: DebugMuxLayout, descriptors: I) -> DebugccResult<Self>
    where
        I: IntoIterator<Item = MuxDescriptor>,
    {
        if !layout.src_sel_field.is_in_range() || !layout.post_div_field.is_in_range() {
            return Err(DebugccError::Config(
                "global debug mux fields exceed 32 bits".into(),
            ));
        }

        let descriptors: Vec<MuxDescriptor> = descriptors.into_iter().collect();
        let mut index = HashMap::with_capacity(descriptors.len());
        for (i, desc) in descriptors.iter().enumerate() {
            desc.validate(&layout)?;
            if index.insert(desc.name, i).is_some() {
                return Err(DebugccError::Config(format!(
                    "duplicate signal name: {}",
                    desc.name
                )));
            }
        }

        Ok(Self {
            layout,
            descriptors,
            index,
        })
    }

    /// Look up a descriptor by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::UnknownSignal`] if no descriptor has this name.
    pub fn lookup(&self, name: &str) -> DebugccResult<&MuxDescriptor> {
        self.get(name)
            .ok_or_else(|| DebugccError::UnknownSignal(name.to_string()))
    }

    /// Look up a descriptor, returning `None` if absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MuxDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    /// Signal names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|desc| desc.name)
    }

    /// Descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MuxDescriptor> {
        self.descriptors.iter()
    }

    /// Global debug mux geometry.
    #[must_use]
    pub fn layout(&self) -> &DebugMuxLayout {
        &self.layout
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Blocks referenced by at least one descriptor.
    #[must_use]
    pub fn referenced_blocks(&self) -> BTreeSet<BlockId> {
        self.descriptors.iter().map(|desc| desc.block).collect()
    }

    /// Derive a table holding only `names`, keeping table order.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::Config`] if a name is not in this table.
    pub fn restrict_to<S: AsRef<str>>(&self, names: &[S]) -> DebugccResult<Self> {
        let mut wanted = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            if !self.index.contains_key(name) {
                return Err(DebugccError::Config(format!(
                    "signal {name} is not in the descriptor table"
                )));
            }
            wanted.insert(name);
        }

        Self::new(
            self.layout,
            self.descriptors
                .iter()
                .filter(|desc| wanted.contains(desc.name))
                .copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sm8150;

    fn gcc(name: &'static str, select: u32) -> MuxDescriptor {
        MuxDescriptor::new(
            name,
            select,
            1,
            BlockId::Gcc,
            select,
            0x3FF,
            0,
            0xF,
            0,
            1,
            0x62000,
            0x62004,
            Some(0x62008),
        )
    }

    #[test]
    fn test_lookup() {
        let table =
            MuxDescriptorTable::new(sm8150::LAYOUT, [gcc("a", 1), gcc("b", 2)]).unwrap();
        assert_eq!(table.lookup("b").unwrap().final_select, 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            table.lookup("c").unwrap_err(),
            DebugccError::UnknownSignal("c".into())
        );
        // Exact match only
        assert!(table.get("A").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = MuxDescriptorTable::new(sm8150::LAYOUT, [gcc("a", 1), gcc("a", 2)])
            .unwrap_err();
        assert_eq!(
            err,
            DebugccError::Config("duplicate signal name: a".into())
        );
    }

    #[test]
    fn test_overflowing_select_rejected() {
        let err = MuxDescriptorTable::new(sm8150::LAYOUT, [gcc("wide", 0x400)]).unwrap_err();
        assert!(matches!(err, DebugccError::Config(_)));
    }

    #[test]
    fn test_referenced_blocks() {
        let table = sm8150::table().unwrap();
        assert_eq!(table.referenced_blocks().len(), 8);

        let table = MuxDescriptorTable::new(sm8150::LAYOUT, [gcc("a", 1)]).unwrap();
        assert_eq!(
            table.referenced_blocks().into_iter().collect::<Vec<_>>(),
            vec![BlockId::Gcc]
        );
    }

    #[test]
    fn test_restrict_to_keeps_order() {
        let table = sm8150::table().unwrap();
        let small = table
            .restrict_to(&["gcc_gp1_clk", "cam_cc_bps_clk"])
            .unwrap();
        assert_eq!(
            small.names().collect::<Vec<_>>(),
            vec!["cam_cc_bps_clk", "gcc_gp1_clk"]
        );
        assert_eq!(
            small.referenced_blocks().into_iter().collect::<Vec<_>>(),
            vec![BlockId::Gcc, BlockId::CamCc]
        );

        assert!(table.restrict_to(&["no_such_clk"]).is_err());
    }
}
