//! Symbol ids for flat model storage.
//!
//! Each id is a `u32` index into the matching vector of a
//! [`SymbolModel`](crate::SymbolModel). Ids are only meaningful for the model
//! that issued them.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new id from a raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the owning vector.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_len(len: usize) -> Self {
                $name(u32::try_from(len).unwrap_or(u32::MAX))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a namespace. The global namespace is always [`NamespaceId::ROOT`].
    NamespaceId
);
define_id!(
    /// Index of a declared type.
    TypeDeclId
);
define_id!(
    /// Index of a declared method.
    MethodId
);

impl NamespaceId {
    /// The global namespace.
    pub const ROOT: NamespaceId = NamespaceId(0);

    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}
