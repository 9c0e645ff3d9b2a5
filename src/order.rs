//! Byte order selection for multi-byte accessors.
//!
//! The accessor set is closed (three multi-byte widths, two orders), so
//! the codec is dispatched statically through [`ByteOrder`] rather than
//! through a trait object.

/// Byte order of a multi-byte integer encoding.
///
/// Archive records default to little-endian; big-endian is available for
/// formats that require network byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first. The default.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// Decodes a u16 from its encoded bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u16_from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    /// Encodes a u16 into bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u16_to_bytes(self, value: u16) -> [u8; 2] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a u32 from its encoded bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Encodes a u32 into bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Decodes a u64 from its encoded bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u64_from_bytes(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::Little => u64::from_le_bytes(bytes),
            Self::Big => u64::from_be_bytes(bytes),
        }
    }

    /// Encodes a u64 into bytes in this order.
    #[inline(always)]
    #[must_use]
    pub const fn u64_to_bytes(self, value: u64) -> [u8; 8] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_little() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }

    #[test]
    fn test_u16_layout() {
        assert_eq!(ByteOrder::Little.u16_to_bytes(0x0102), [0x02, 0x01]);
        assert_eq!(ByteOrder::Big.u16_to_bytes(0x0102), [0x01, 0x02]);
        assert_eq!(ByteOrder::Little.u16_from_bytes([0x02, 0x01]), 0x0102);
        assert_eq!(ByteOrder::Big.u16_from_bytes([0x01, 0x02]), 0x0102);
    }

    #[test]
    fn test_u32_round_trip() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = order.u32_to_bytes(0xDEAD_BEEF);
            assert_eq!(order.u32_from_bytes(bytes), 0xDEAD_BEEF);
        }
    }

    #[test]
    fn test_u64_round_trip() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = order.u64_to_bytes(u64::MAX);
            assert_eq!(order.u64_from_bytes(bytes), u64::MAX);
        }
    }
}
