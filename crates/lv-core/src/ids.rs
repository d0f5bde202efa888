//! Strongly typed, zero-cost identifier wrappers.
//!
//! All entity ids in the model are **1-based** (floor 1 is the bottom floor,
//! elevator 1 the leftmost lane, person 1 the first person), matching the
//! external state machine's numbering.  Ids are `Copy + Ord + Hash` so they
//! can be used as map keys and sorted collection elements without ceremony.
//! `slot()` converts to the 0-based storage index.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// 0-based storage index for this 1-based id.
            ///
            /// Returns `None` for id 0 and for the `INVALID` sentinel, so
            /// snapshot accessors can fail instead of panicking on an
            /// out-of-sync id.
            #[inline(always)]
            pub fn slot(self) -> Option<usize> {
                if self == Self::INVALID {
                    return None;
                }
                (self.0 as usize).checked_sub(1)
            }

            /// Id of the entity stored at 0-based index `slot`.
            #[inline(always)]
            pub fn from_slot(slot: usize) -> $name {
                $name(slot as $inner + 1)
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for u32 {
            #[inline(always)]
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(n: u32) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// A building floor, numbered bottom-to-top starting at 1.
    pub struct FloorId(u32);
}

typed_id! {
    /// An elevator shaft, numbered left-to-right starting at 1.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// A simulated person, numbered starting at 1.
    pub struct PersonId(u32);
}
