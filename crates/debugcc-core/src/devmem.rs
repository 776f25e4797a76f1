//! Physical register access through `/dev/mem`.
//!
//! Each clock controller's register window is mapped shared and uncached
//! (`O_SYNC`) and accessed with volatile 32-bit loads and stores.

use crate::block::BlockId;
use crate::regmap::{BlockHandle, RegisterBlock};
use debugcc_common::config::BackendConfig;
use debugcc_common::error::{DebugccError, DebugccResult};
use nix::sys::mman::{mmap, munmap, MapFlags, ProtFlags};
use std::ffi::c_void;
use std::fmt;
use std::fs::OpenOptions;
use std::num::NonZeroUsize;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A clock controller's registers mapped from physical memory.
pub struct DevMemBlock {
    block: BlockId,
    base: u64,
    size: usize,
    /// Start of the page-aligned mapping.
    map: NonNull<c_void>,
    map_len: usize,
    /// Distance from `map` to `base`.
    page_offset: usize,
}

// SAFETY: the mapping is owned exclusively by this value and only accessed
// through volatile 32-bit operations, which hardware registers tolerate from
// any thread.
unsafe impl Send for DevMemBlock {}
// SAFETY: see above; `&self` methods never hand out references into the mapping.
unsafe impl Sync for DevMemBlock {}

impl DevMemBlock {
    /// Map `size` bytes of physical memory at `base` for `block`.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::BringUp`] if the device cannot be opened or
    /// mapped, and [`DebugccError::Config`] for an empty or oversized window.
    pub fn map(path: &Path, block: BlockId, base: u64, size: u64) -> DebugccResult<Self> {
        let size = usize::try_from(size)
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| DebugccError::Config(format!("{block}: invalid window size {size:#x}")))?;

        let page = page_size();
        let page_offset = usize::try_from(base % page as u64).unwrap_or(0);
        let map_base = base - page_offset as u64;
        let map_len = NonZeroUsize::new(size + page_offset)
            .ok_or_else(|| DebugccError::Config(format!("{block}: empty mapping")))?;
        let offset = libc::off_t::try_from(map_base).map_err(|_| {
            DebugccError::Config(format!("{block}: base {base:#x} beyond addressable range"))
        })?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(path)
            .map_err(|e| DebugccError::BringUp {
                what: format!("cannot open {}: {e}", path.display()),
                // The node can appear later; permission problems will not go away
                retryable: e.kind() == std::io::ErrorKind::NotFound,
            })?;

        // SAFETY: a fresh shared mapping of a device file; no Rust object
        // aliases it and it is unmapped exactly once in Drop.
        let map = unsafe {
            mmap(
                None,
                map_len,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                &file,
                offset,
            )
        }
        .map_err(|e| DebugccError::BringUp {
            what: format!("mmap of {block} at {base:#x} failed: {e}"),
            retryable: false,
        })?;

        debug!(%block, base = format_args!("{base:#x}"), size, "Mapped register block");
        Ok(Self {
            block,
            base,
            size,
            map,
            map_len: map_len.get(),
            page_offset,
        })
    }

    /// Physical base address.
    #[must_use]
    pub fn base(&self) -> u64 {
        self.base
    }

    fn register(&self, offset: u32) -> DebugccResult<*mut u32> {
        let bus_error = |reason: &str| DebugccError::BusError {
            block: self.block.name().to_string(),
            offset,
            reason: reason.to_string(),
        };

        let offset_bytes = offset as usize;
        if offset % 4 != 0 {
            return Err(bus_error("unaligned access"));
        }
        if offset_bytes.checked_add(4).map_or(true, |end| end > self.size) {
            return Err(bus_error("offset outside register window"));
        }

        // SAFETY: the offset was bounds-checked against the mapped window.
        let ptr = unsafe {
            self.map
                .as_ptr()
                .cast::<u8>()
                .add(self.page_offset + offset_bytes)
        };
        Ok(ptr.cast::<u32>())
    }
}

impl RegisterBlock for DevMemBlock {
    fn read(&self, offset: u32) -> DebugccResult<u32> {
        let reg = self.register(offset)?;
        // SAFETY: `reg` is aligned and inside the live mapping.
        Ok(unsafe { std::ptr::read_volatile(reg) })
    }

    fn write(&self, offset: u32, value: u32) -> DebugccResult<()> {
        let reg = self.register(offset)?;
        // SAFETY: `reg` is aligned and inside the live mapping.
        unsafe { std::ptr::write_volatile(reg, value) };
        Ok(())
    }
}

impl Drop for DevMemBlock {
    fn drop(&mut self) {
        // SAFETY: `map`/`map_len` come from a successful mmap and are unmapped once.
        if let Err(e) = unsafe { munmap(self.map, self.map_len) } {
            warn!(block = %self.block, error = %e, "munmap failed");
        }
    }
}

impl fmt::Debug for DevMemBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevMemBlock")
            .field("block", &self.block)
            .field("base", &format_args!("{:#x}", self.base))
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Map every block window listed in `config`.
///
/// # Errors
///
/// Fails on the first window that cannot be parsed or mapped; windows
/// mapped so far are released.
pub fn map_blocks(config: &BackendConfig) -> DebugccResult<Vec<(BlockId, BlockHandle)>> {
    let mut blocks = Vec::with_capacity(config.blocks.len());
    for window in &config.blocks {
        let id: BlockId = window.block.parse()?;
        let handle = DevMemBlock::map(&config.devmem_path, id, window.base, window.size)?;
        blocks.push((id, Arc::new(handle) as BlockHandle));
    }
    info!(
        count = blocks.len(),
        device = %config.devmem_path.display(),
        "Mapped physical register windows"
    );
    Ok(blocks)
}

fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions
    let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    usize::try_from(page).unwrap_or(4096)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A regular file stands in for `/dev/mem`.
    fn backing_file(len: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; len]).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_write_through_mapping() {
        let file = backing_file(0x2000);
        let block = DevMemBlock::map(file.path(), BlockId::CamCc, 0x1000, 0x100).unwrap();

        block.write(0x8, 0xDEAD_BEEF).unwrap();
        assert_eq!(block.read(0x8).unwrap(), 0xDEAD_BEEF);
        assert_eq!(block.read(0xC).unwrap(), 0);
        assert_eq!(block.base(), 0x1000);
    }

    #[test]
    fn test_bounds_and_alignment() {
        let file = backing_file(0x1000);
        let block = DevMemBlock::map(file.path(), BlockId::Gcc, 0, 0x10).unwrap();

        assert!(matches!(
            block.read(0x10),
            Err(DebugccError::BusError { offset: 0x10, .. })
        ));
        assert!(matches!(
            block.write(0x2, 0),
            Err(DebugccError::BusError { offset: 0x2, .. })
        ));
        block.write(0xC, 1).unwrap();
    }

    #[test]
    fn test_missing_device_is_retryable() {
        let err = DevMemBlock::map(Path::new("/nonexistent/mem"), BlockId::Gcc, 0, 0x10)
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_map_blocks_rejects_unknown_block() {
        let config = BackendConfig {
            blocks: vec![debugcc_common::config::BlockWindow {
                block: "audiocc".into(),
                base: 0,
                size: 0x10,
            }],
            ..BackendConfig::default()
        };
        assert!(matches!(map_blocks(&config), Err(DebugccError::Config(_))));
    }
}
