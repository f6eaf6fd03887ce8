use core::fmt;

/// Mutable view over a host buffer, tagged with its element type.
///
/// Hosts hand the bounded encoder whatever view the caller passed. Only
/// [`BufferView::U8`] is byte-addressable; the rest are rejected by
/// [`encode_into_view`](crate::encode_into_view).
#[derive(Debug)]
pub enum BufferView<'a> {
    /// Unsigned bytes.
    U8(&'a mut [u8]),
    /// Signed bytes.
    I8(&'a mut [i8]),
    /// Unsigned 16-bit elements.
    U16(&'a mut [u16]),
    /// Signed 16-bit elements.
    I16(&'a mut [i16]),
    /// Unsigned 32-bit elements.
    U32(&'a mut [u32]),
    /// Signed 32-bit elements.
    I32(&'a mut [i32]),
    /// 32-bit floats.
    F32(&'a mut [f32]),
    /// 64-bit floats.
    F64(&'a mut [f64]),
}

impl<'a> BufferView<'a> {
    /// Element type of the view.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::U8(_) => ElementType::U8,
            Self::I8(_) => ElementType::I8,
            Self::U16(_) => ElementType::U16,
            Self::I16(_) => ElementType::I16,
            Self::U32(_) => ElementType::U32,
            Self::I32(_) => ElementType::I32,
            Self::F32(_) => ElementType::F32,
            Self::F64(_) => ElementType::F64,
        }
    }

    /// Length in elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(s) => s.len(),
            Self::I8(s) => s.len(),
            Self::U16(s) => s.len(),
            Self::I16(s) => s.len(),
            Self::U32(s) => s.len(),
            Self::I32(s) => s.len(),
            Self::F32(s) => s.len(),
            Self::F64(s) => s.len(),
        }
    }

    /// Whether the view has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying bytes, if this is a byte view.
    pub(crate) fn into_bytes(self) -> Result<&'a mut [u8], ElementType> {
        match self {
            Self::U8(bytes) => Ok(bytes),
            other => Err(other.element_type()),
        }
    }
}

impl<'a> From<&'a mut [u8]> for BufferView<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::U8(bytes)
    }
}

/// Element type of a [`BufferView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `u8`
    U8,
    /// `i8`
    I8,
    /// `u16`
    U16,
    /// `i16`
    I16,
    /// `u32`
    U32,
    /// `i32`
    I32,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl ElementType {
    /// Width of one element in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn byte_view_unwraps() {
        let mut buf = [0u8; 3];
        let view = BufferView::from(&mut buf[..]);
        assert_eq!(view.element_type(), ElementType::U8);
        assert_eq!(view.len(), 3);
        assert_eq!(view.into_bytes().map(|b| b.len()), Ok(3));
    }

    #[rstest]
    #[case::i8(ElementType::I8, 1)]
    #[case::u16(ElementType::U16, 2)]
    #[case::i32(ElementType::I32, 4)]
    #[case::f64(ElementType::F64, 8)]
    fn sizes(#[case] ty: ElementType, #[case] size: usize) {
        assert_eq!(ty.size(), size);
    }

    #[test]
    fn other_views_are_rejected() {
        let mut words = [0u16; 2];
        let view = BufferView::U16(&mut words);
        assert!(!view.is_empty());
        assert_eq!(view.into_bytes(), Err(ElementType::U16));

        let mut floats: [f32; 0] = [];
        let view = BufferView::F32(&mut floats);
        assert!(view.is_empty());
        assert_eq!(view.into_bytes(), Err(ElementType::F32));
    }
}
