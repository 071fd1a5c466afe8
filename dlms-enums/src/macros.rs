//! Declarative builder for catalog enumerations
//!
//! Every enumeration is declared once as a table of
//! `Member = code => "LABEL"` rows. The macro emits the newtype, its
//! member constants, the [`DlmsEnum`](crate::DlmsEnum) implementation,
//! the std conversion traits and (with the `serde` feature) serde support.
//!
//! Table consistency is checked while compiling: two members sharing a
//! code, two labels colliding under case folding, an empty label, or a
//! lower-case letter in an upper-case type all fail the build.

/// ASCII case-insensitive equality usable in const context
pub(crate) const fn labels_collide(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_uppercase() != b[i].to_ascii_uppercase() {
            return false;
        }
        i += 1;
    }
    true
}

pub(crate) const fn has_ascii_lowercase(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_lowercase() {
            return true;
        }
        i += 1;
    }
    false
}

macro_rules! dlms_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty): $case:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $code:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self($code);
            )+

            /// Every declared member, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$member),+];

            /// Wrap a wire code; undeclared codes are kept as-is
            pub const fn from_code(code: $repr) -> Self {
                Self(code)
            }

            /// Get the wire code
            pub const fn code(self) -> $repr {
                self.0
            }

            /// Get the canonical label, or `""` for an undeclared code
            pub fn label(self) -> &'static str {
                <Self as $crate::DlmsEnum>::label(self)
            }

            /// Get the member identifier, or `None` for an undeclared code
            pub fn name(self) -> Option<&'static str> {
                <Self as $crate::DlmsEnum>::member(self).map(|m| m.name)
            }

            /// Check if the code is a declared member
            pub fn is_known(self) -> bool {
                <Self as $crate::DlmsEnum>::is_known(self)
            }

            /// Parse a canonical label
            pub fn parse(input: &str) -> dlms_core::DlmsResult<Self> {
                <Self as $crate::DlmsEnum>::parse(input)
            }

            /// Iterate over every declared member, in declaration order
            pub fn all() -> impl Iterator<Item = Self> + Clone {
                Self::ALL.iter().copied()
            }
        }

        impl $crate::DlmsEnum for $name {
            type Code = $repr;

            const TYPE_NAME: &'static str = stringify!($name);
            const LABEL_CASE: $crate::LabelCase = $crate::LabelCase::$case;
            const MEMBERS: &'static [$crate::Member<Self>] = &[$(
                $crate::Member {
                    name: stringify!($member),
                    label: $label,
                    value: Self::$member,
                }
            ),+];

            fn from_code(code: $repr) -> Self {
                Self(code)
            }

            fn code(self) -> $repr {
                self.0
            }
        }

        const _: () = {
            let codes: &[$repr] = &[$($code),+];
            let labels: &[&str] = &[$($label),+];
            let upper = matches!($crate::LabelCase::$case, $crate::LabelCase::Upper);
            let mut i = 0;
            while i < codes.len() {
                assert!(!labels[i].is_empty(), concat!("empty label in ", stringify!($name)));
                assert!(
                    !(upper && $crate::macros::has_ascii_lowercase(labels[i])),
                    concat!("lower-case label in upper-case enum ", stringify!($name))
                );
                let mut j = i + 1;
                while j < codes.len() {
                    assert!(codes[i] != codes[j], concat!("duplicate code in ", stringify!($name)));
                    assert!(
                        !$crate::macros::labels_collide(labels[i], labels[j]),
                        concat!("duplicate label in ", stringify!($name))
                    );
                    j += 1;
                }
                i += 1;
            }
        };

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}::{}", stringify!($name), name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = dlms_core::DlmsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = dlms_core::DlmsError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl From<$repr> for $name {
            fn from(code: $repr) -> Self {
                Self(code)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::serde_support::serialize(*self, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::serde_support::deserialize(deserializer)
            }
        }
    };
}

pub(crate) use dlms_enum;
