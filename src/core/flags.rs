//! Formatting flags understood by the line writer
//!
//! Flags are a plain bitset. The gating core never looks inside them, it only
//! hands them to the [`LineWriter`](super::LineWriter) that renders the header.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

/// Bitset of header options.
///
/// Header parts are always rendered in the same relative order: date, time,
/// microseconds, source location.
///
/// # Examples
///
/// ```
/// use rust_vlog::Flags;
///
/// let flags = Flags::DATE | Flags::TIME;
/// assert!(flags.contains(Flags::TIME));
/// assert!(!flags.contains(Flags::SHORT_FILE));
/// assert_eq!(flags, Flags::STANDARD);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// No header at all.
    pub const NONE: Flags = Flags(0);
    /// Local date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line number: `/a/b/c/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path component and line number: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the logger name from the start of the line to just after the
    /// header, in front of the level tag.
    pub const NAME_AFTER_HEADER: Flags = Flags(1 << 6);

    /// Date and time, the usual starting point.
    pub const STANDARD: Flags = Flags(Self::DATE.0 | Self::TIME.0);
    /// Flags of the root logger when nothing else is configured.
    pub const DEFAULT: Flags =
        Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0 | Self::SHORT_FILE.0);

    const ALL_BITS: u32 = (1 << 7) - 1;

    #[inline]
    pub const fn empty() -> Self {
        Flags::NONE
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, dropping unknown bits.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(&self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether any timestamp part is requested.
    #[inline]
    pub const fn wants_timestamp(&self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Whether the caller location is requested.
    #[inline]
    pub const fn wants_location(&self) -> bool {
        self.intersects(Flags(Self::SHORT_FILE.0 | Self::LONG_FILE.0))
    }

    #[inline]
    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Sub for Flags {
    type Output = Flags;

    fn sub(self, rhs: Flags) -> Flags {
        Flags(self.0 & !rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL_BITS)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
            (Flags::NAME_AFTER_HEADER, "NAME_AFTER_HEADER"),
        ];

        if self.is_empty() {
            return write!(f, "Flags(NONE)");
        }

        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Flags({})", set.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let flags = Flags::DEFAULT;
        assert!(flags.contains(Flags::DATE));
        assert!(flags.contains(Flags::TIME));
        assert!(flags.contains(Flags::MICROSECONDS));
        assert!(flags.contains(Flags::SHORT_FILE));
        assert!(!flags.contains(Flags::UTC));
        assert!(flags.wants_timestamp());
        assert!(flags.wants_location());
    }

    #[test]
    fn test_set_operations() {
        let mut flags = Flags::empty();
        assert!(flags.is_empty());

        flags.insert(Flags::TIME);
        flags |= Flags::UTC;
        assert_eq!(flags, Flags::TIME | Flags::UTC);

        flags.remove(Flags::UTC);
        assert_eq!(flags, Flags::TIME);
        assert_eq!(Flags::DEFAULT - Flags::SHORT_FILE, Flags::STANDARD | Flags::MICROSECONDS);
        assert_eq!(Flags::DEFAULT & Flags::TIME, Flags::TIME);
    }

    #[test]
    fn test_truncate_unknown_bits() {
        assert_eq!(Flags::from_bits_truncate(u32::MAX), !Flags::NONE);
        assert_eq!(Flags::from_bits_truncate(0b11).bits(), 0b11);
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(format!("{:?}", Flags::NONE), "Flags(NONE)");
        assert_eq!(format!("{:?}", Flags::STANDARD), "Flags(DATE | TIME)");
    }

    #[test]
    fn test_serde_is_bits() {
        let json = serde_json::to_string(&Flags::STANDARD).expect("serialize");
        assert_eq!(json, "3");
        let flags: Flags = serde_json::from_str("16").expect("deserialize");
        assert_eq!(flags, Flags::SHORT_FILE);
    }
}
