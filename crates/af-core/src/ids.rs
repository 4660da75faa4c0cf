//! Typed 32-bit indices for ants, rooms, and selected paths.
//!
//! Each id is a position in a `Vec` owned by the graph, the assignment, or
//! the simulation state.  Ids are minted from `usize` positions through a
//! checked conversion; `u32::MAX` is reserved as the `INVALID` sentinel and
//! is never issued.

use std::fmt;
use std::num::TryFromIntError;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Reserved; never returned by [`from_index`](Self::from_index)
            /// for a valid position.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id for `Vec` position `index`, or `INVALID` when the position
            /// does not fit the 32-bit id space.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self::try_from(index).unwrap_or(Self::INVALID)
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TryFromIntError;

            fn try_from(index: usize) -> Result<Self, TryFromIntError> {
                u32::try_from(index).map($name)
            }
        }
    };
}

typed_id! {
    /// An ant.  Zero-based internally; rendered 1-based in move logs.
    AgentId
}

impl AgentId {
    /// The 1-based number used in `L<n>-<room>` move records.
    #[inline]
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

typed_id! {
    /// A room of a `RoomGraph`, numbered in insertion order.
    RoomId
}

typed_id! {
    /// A path within a selected path set.
    PathId
}
