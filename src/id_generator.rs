use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Every id is a fresh v4 uuid; nothing is ever parsed back from catalog data.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0.simple())
            }
        }
    };
}

define_id!(
    /// Identifier of an [`crate::Album`].
    AlbumId,
    "album"
);
define_id!(
    /// Identifier of an [`crate::AlbumPage`].
    PageId,
    "page"
);
define_id!(
    /// Identifier of an [`crate::AlbumElement`].
    ElementId,
    "el"
);
