// ============================================================================
// External Field
// A data item whose value lives in registry-owned shared storage
// ============================================================================

use crate::domain::{DataItem, ExternalBuffer, MAX_CHAR_BYTES};
use crate::errors::DataResult;
use crate::interfaces::PictureItem;

/// A declared field bound to an external buffer.
///
/// The item is a local working copy. [`store`](Self::store) publishes its
/// edited text to the buffer and [`load`](Self::load) refreshes it from the
/// buffer, so every declaration of the same external name sees the same
/// bytes.
///
/// Storage layout per category:
/// - Numeric: `display_value()` as ASCII, signed fields with a leading sign
/// - National: UTF-16BE, padded with the fill character
/// - Others: UTF-8, padded with the fill byte
///
/// Text slots reserve [`MAX_CHAR_BYTES`] per character, so any value of the
/// declared width fits without loss.
#[derive(Debug, Clone)]
pub struct ExternalField {
    name: String,
    item: DataItem,
    buffer: ExternalBuffer,
}

impl ExternalField {
    pub(crate) fn new(name: String, item: DataItem, buffer: ExternalBuffer) -> Self {
        Self { name, item, buffer }
    }

    /// Data name of the declaration
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the shared storage
    pub fn external_name(&self) -> &str {
        self.buffer.name()
    }

    pub fn item(&self) -> &DataItem {
        &self.item
    }

    pub fn buffer(&self) -> &ExternalBuffer {
        &self.buffer
    }

    pub fn formatted(&self) -> String {
        self.item.formatted()
    }

    /// Assign a new value and publish it to the shared storage.
    ///
    /// # Errors
    /// Category validation errors; neither the item nor the buffer changes.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        self.item.set_value(value)?;
        self.store();
        Ok(())
    }

    /// Write the item's edited text into the shared storage.
    pub fn store(&self) {
        let bytes = encode_storage(&self.item, self.buffer.size());
        self.buffer.write_at(0, &bytes);
    }

    /// Replace the item's value with the shared storage contents.
    ///
    /// # Errors
    /// Category validation errors when the bytes are not a valid value for
    /// this declaration; the item keeps its previous value.
    pub fn load(&mut self) -> DataResult<()> {
        let text = self
            .buffer
            .with_bytes(|bytes| decode_storage(&self.item, bytes));
        self.item.set_value(&text)
    }
}

/// Encode the item's edited text into exactly `size` bytes.
pub(crate) fn encode_storage(item: &DataItem, size: usize) -> Vec<u8> {
    let fill = item.fill();
    let mut bytes: Vec<u8> = match item {
        DataItem::National(_) => item
            .formatted()
            .encode_utf16()
            .flat_map(u16::to_be_bytes)
            .collect(),
        DataItem::Numeric(numeric) => numeric.display_value().into_bytes(),
        _ => {
            let text = item.formatted();
            let mut end = text.len().min(size);
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.as_bytes()[..end].to_vec()
        },
    };

    bytes.truncate(size);
    match item {
        DataItem::National(_) => {
            let unit = (fill as u16).to_be_bytes();
            while bytes.len() + 2 <= size {
                bytes.extend_from_slice(&unit);
            }
            bytes.resize(size, 0);
        },
        _ => bytes.resize(size, fill as u8),
    }
    bytes
}

/// Decode shared storage bytes into text for the item's setter.
///
/// Text categories keep only the item's width in characters, dropping the
/// slot padding.
pub(crate) fn decode_storage(item: &DataItem, bytes: &[u8]) -> String {
    let text = match item {
        DataItem::National(_) => {
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        },
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match item {
        DataItem::Numeric(_) => text,
        _ => text.chars().take(item.width()).collect(),
    }
}
