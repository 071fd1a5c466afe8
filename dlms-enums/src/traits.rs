//! Generic contract shared by every enumeration in the catalog

use dlms_core::{DlmsError, DlmsResult};
use std::fmt;
use std::hash::Hash;

/// How a textual label is compared against a type's canonical labels
///
/// The mode is fixed per type because configuration files written by
/// other DLMS tools rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelCase {
    /// Labels are all upper case; the input is upper-cased before comparing.
    Upper,
    /// Labels are PascalCase or camelCase; compared with ASCII case folding.
    Insensitive,
}

impl LabelCase {
    /// Check whether `input` names `label` under this comparison rule
    pub fn matches(self, input: &str, label: &str) -> bool {
        match self {
            LabelCase::Upper => input.chars().flat_map(char::to_uppercase).eq(label.chars()),
            LabelCase::Insensitive => input.eq_ignore_ascii_case(label),
        }
    }
}

impl fmt::Display for LabelCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelCase::Upper => f.write_str("upper"),
            LabelCase::Insensitive => f.write_str("case-insensitive"),
        }
    }
}

/// One declared member of an enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<T: 'static> {
    /// Identifier of the member, e.g. `Iframe`
    pub name: &'static str,
    /// Canonical textual label, e.g. `IFRAME`
    pub label: &'static str,
    /// The member value
    pub value: T,
}

/// A DLMS enumeration: a closed set of labelled integer codes
///
/// Implementations are generated by the `dlms_enum!` macro. Values are
/// newtypes over the wire code, so codes that are not declared members
/// can still be held (and forwarded) without loss.
pub trait DlmsEnum: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Integer type carried on the wire
    type Code: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Into<i64> + TryFrom<i64>;

    /// Name of the enumeration type, e.g. `HdlcFrameType`
    const TYPE_NAME: &'static str;

    /// Comparison rule used by [`DlmsEnum::parse`]
    const LABEL_CASE: LabelCase;

    /// Declared members, in declaration order
    const MEMBERS: &'static [Member<Self>];

    /// Wrap a wire code. Total: undeclared codes are kept as-is.
    fn from_code(code: Self::Code) -> Self;

    /// Get the wire code
    fn code(self) -> Self::Code;

    /// Get the declared member for this value, if any
    fn member(self) -> Option<&'static Member<Self>> {
        Self::MEMBERS.iter().find(|m| m.value == self)
    }

    /// Get the canonical label, or an empty string for an undeclared code
    fn label(self) -> &'static str {
        self.member().map_or("", |m| m.label)
    }

    /// Check if the code is one of the declared members
    fn is_known(self) -> bool {
        self.member().is_some()
    }

    /// Parse a textual label into a member
    ///
    /// # Errors
    ///
    /// Returns `DlmsError::UnknownEnum` carrying `input` unchanged when no
    /// label matches under [`DlmsEnum::LABEL_CASE`].
    fn parse(input: &str) -> DlmsResult<Self> {
        Self::MEMBERS
            .iter()
            .find(|m| Self::LABEL_CASE.matches(input, m.label))
            .map(|m| m.value)
            .ok_or_else(|| DlmsError::unknown_enum(input))
    }

    /// Iterate over every declared member, in declaration order
    fn all() -> impl Iterator<Item = Self> + Clone {
        Self::MEMBERS.iter().map(|m| m.value)
    }
}
