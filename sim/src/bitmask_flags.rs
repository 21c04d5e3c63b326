use num_traits::{One, PrimInt};

/// Trait implemented by flag enums stored in a [`Flags`] set.
///
/// The bit index is usually the `#[repr(u8)]` discriminant. Pick a `Storage` wide enough
/// for the highest index.
pub trait FlagBit: Copy {
    type Storage: PrimInt;

    fn bit_index(self) -> u8;

    #[inline]
    fn mask(self) -> Self::Storage {
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain-value set of flags backed by a primitive integer.
///
/// `Copy` and cheap to snapshot, so a per-frame reader never observes a half-updated set.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Flags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> Flags<T> {
    pub fn empty() -> Self {
        Self { bits: T::zero() }
    }

    #[inline]
    pub fn insert<F: FlagBit<Storage = T>>(&mut self, flag: F) {
        self.bits = self.bits | flag.mask();
    }

    #[inline]
    pub fn remove<F: FlagBit<Storage = T>>(&mut self, flag: F) {
        self.bits = self.bits & !flag.mask();
    }

    /// Inserts or removes `flag` depending on `on`. Last write wins.
    #[inline]
    pub fn set<F: FlagBit<Storage = T>>(&mut self, flag: F, on: bool) {
        if on {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    #[inline]
    pub fn contains<F: FlagBit<Storage = T>>(&self, flag: F) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

impl<T: PrimInt, F: FlagBit<Storage = T>> FromIterator<F> for Flags<T> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for f in iter {
            flags.insert(f);
        }
        flags
    }
}

/// Declare a flag enum and implement [`FlagBit`] for it.
///
/// Example:
/// ```text
/// define_flag_bits!(Intent, u8, {
///     Forward,
///     Backward,
/// });
/// ```
#[macro_export]
macro_rules! define_flag_bits {
    ($(#[$meta:meta])* $name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::bitmask_flags::FlagBit for $name {
            type Storage = $storage;

            #[inline]
            fn bit_index(self) -> u8 {
                self as u8
            }
        }
    };
}
