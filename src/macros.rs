//! Ergonomic macro for declaring an error-kind vocabulary.
//!
//! [`error_kinds!`](crate::error_kinds) turns one declarative block into a
//! kind enum plus its [`ErrorKind`](crate::ErrorKind) implementation: each
//! variant carries a `checked`/`unchecked` category, and an optional
//! `< Parent` edge builds the subtype relation that parent-match steps walk.
//!
//! # Examples
//!
//! ```
//! use error_switch::{error_kinds, ErrorKind, KindCategory};
//!
//! error_kinds! {
//!     /// Failure kinds for an ingest worker.
//!     pub enum IngestKind {
//!         Internal: unchecked,
//!         BadRecord: unchecked < Internal,
//!         Io: checked,
//!         SourceGone: checked < Io,
//!     }
//! }
//!
//! assert_eq!(IngestKind::Io.category(), KindCategory::Checked);
//! assert!(IngestKind::SourceGone.is_strict_descendant_of(&IngestKind::Io));
//! assert!(!IngestKind::Io.is_strict_descendant_of(&IngestKind::Io));
//! ```

/// Declares a kind enum together with its [`ErrorKind`](crate::ErrorKind)
/// implementation.
///
/// # Syntax
///
/// Each variant is `Name: category` with an optional `< Parent` edge:
///
/// - `category` is `checked` or `unchecked`, becoming the variant's
///   [`KindCategory`](crate::KindCategory)
/// - `< Parent` names the direct parent variant; the descendant relation is
///   the transitive closure of these edges, and it is strict (a kind is never
///   its own descendant)
///
/// Parent edges must be acyclic. The generated enum derives `Clone`, `Copy`,
/// `PartialEq`, `Eq`, and `Debug`, and gets an inherent `parent()` method
/// returning the direct parent, if any.
///
/// # Examples
///
/// ```
/// use error_switch::{error_kinds, ErrorKind};
///
/// error_kinds! {
///     enum WireKind {
///         Protocol: unchecked,
///         BadFrame: unchecked < Protocol,
///         Io: checked,
///     }
/// }
///
/// assert_eq!(WireKind::BadFrame.parent(), Some(WireKind::Protocol));
/// assert!(WireKind::BadFrame.is_strict_descendant_of(&WireKind::Protocol));
/// assert!(!WireKind::Io.is_strict_descendant_of(&WireKind::Protocol));
/// ```
#[macro_export]
macro_rules! error_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident : $category:ident $(< $parent:ident)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Direct parent kind, if one was declared.
            $vis fn parent(&self) -> ::core::option::Option<Self> {
                match self {
                    $( Self::$variant => $crate::__kind_parent!($name $(, $parent)?), )+
                }
            }
        }

        impl $crate::ErrorKind for $name {
            fn category(&self) -> $crate::KindCategory {
                match self {
                    $( Self::$variant => $crate::__kind_category!($category), )+
                }
            }

            fn is_strict_descendant_of(&self, parent: &Self) -> bool {
                let mut cursor = self.parent();
                while let ::core::option::Option::Some(ancestor) = cursor {
                    if ancestor == *parent {
                        return true;
                    }
                    cursor = ancestor.parent();
                }
                false
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kind_category {
    (checked) => {
        $crate::KindCategory::Checked
    };
    (unchecked) => {
        $crate::KindCategory::Unchecked
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kind_parent {
    ($name:ident) => {
        ::core::option::Option::None
    };
    ($name:ident, $parent:ident) => {
        ::core::option::Option::Some($name::$parent)
    };
}
