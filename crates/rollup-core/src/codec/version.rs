///
/// WireVersion
///
/// Binary format versions. Every compatibility decision for the wire form
/// is made by matching on this enum, never by probing payload contents.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireVersion {
    V1,
}

impl WireVersion {
    const V1_TAG: u8 = 1;

    /// Version written by this build.
    pub const CURRENT: Self = Self::V1;

    // Decode one raw wire tag into the version table.
    #[must_use]
    pub const fn decode(raw: u8) -> Option<Self> {
        match raw {
            Self::V1_TAG => Some(Self::V1),
            _ => None,
        }
    }

    #[must_use]
    pub const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}
