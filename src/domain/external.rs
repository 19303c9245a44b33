// ============================================================================
// External Data Item
// Named, fixed-size storage shared by every declaration of the same name
// ============================================================================

use parking_lot::RwLock;
use std::sync::Arc;

/// Storage block behind an external name.
///
/// Only the registry creates these; declarations hold them through
/// [`ExternalBuffer`].
#[derive(Debug)]
pub struct ExternalDataItem {
    name: String,
    size: usize,
    memory: RwLock<Box<[u8]>>,
}

/// Shared handle to an external storage block.
///
/// Cloning the handle shares the block; a write through any clone is visible
/// through every other. The size is fixed at allocation.
#[derive(Debug, Clone)]
pub struct ExternalBuffer(Arc<ExternalDataItem>);

impl ExternalBuffer {
    /// Allocate a zeroed block.
    pub(crate) fn allocate(name: &str, size: usize) -> Self {
        Self(Arc::new(ExternalDataItem {
            name: name.to_string(),
            size,
            memory: RwLock::new(vec![0u8; size].into_boxed_slice()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Size in bytes, fixed for the life of the block
    pub fn size(&self) -> usize {
        self.0.size
    }

    /// True if both handles refer to the same block.
    #[inline]
    pub fn ptr_eq(&self, other: &ExternalBuffer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Run `f` over the current contents under a shared lock.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let memory = self.0.memory.read();
        f(&memory)
    }

    /// Run `f` over the contents under an exclusive lock.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut memory = self.0.memory.write();
        f(&mut memory)
    }

    /// Copy of the current contents
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(|bytes| bytes.to_vec())
    }

    /// Copy `data` into the block starting at `offset`.
    ///
    /// Bytes that would fall past the end are dropped. Returns the number of
    /// bytes written.
    pub fn write_at(&self, offset: usize, data: &[u8]) -> usize {
        self.with_bytes_mut(|bytes| {
            if offset >= bytes.len() {
                return 0;
            }
            let n = data.len().min(bytes.len() - offset);
            bytes[offset..offset + n].copy_from_slice(&data[..n]);
            n
        })
    }

    /// Overwrite the whole block with `byte`.
    pub fn fill(&self, byte: u8) {
        self.with_bytes_mut(|bytes| bytes.fill(byte));
    }
}
