//! The sixteen base16 slots.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// One named entry of a base16 palette. Names are case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Base00,
    Base01,
    Base02,
    Base03,
    Base04,
    Base05,
    Base06,
    Base07,
    Base08,
    Base09,
    Base0A,
    Base0B,
    Base0C,
    Base0D,
    Base0E,
    Base0F,
}

impl Slot {
    pub const ALL: [Slot; 16] = [
        Slot::Base00,
        Slot::Base01,
        Slot::Base02,
        Slot::Base03,
        Slot::Base04,
        Slot::Base05,
        Slot::Base06,
        Slot::Base07,
        Slot::Base08,
        Slot::Base09,
        Slot::Base0A,
        Slot::Base0B,
        Slot::Base0C,
        Slot::Base0D,
        Slot::Base0E,
        Slot::Base0F,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Base00 => "base00",
            Slot::Base01 => "base01",
            Slot::Base02 => "base02",
            Slot::Base03 => "base03",
            Slot::Base04 => "base04",
            Slot::Base05 => "base05",
            Slot::Base06 => "base06",
            Slot::Base07 => "base07",
            Slot::Base08 => "base08",
            Slot::Base09 => "base09",
            Slot::Base0A => "base0A",
            Slot::Base0B => "base0B",
            Slot::Base0C => "base0C",
            Slot::Base0D => "base0D",
            Slot::Base0E => "base0E",
            Slot::Base0F => "base0F",
        }
    }

    /// Conventional role of the slot in base16 styling.
    pub fn role(self) -> &'static str {
        match self {
            Slot::Base00 => "Default background",
            Slot::Base01 => "Lighter background",
            Slot::Base02 => "Selection background",
            Slot::Base03 => "Comments, invisibles",
            Slot::Base04 => "Dark foreground",
            Slot::Base05 => "Default foreground",
            Slot::Base06 => "Light foreground",
            Slot::Base07 => "Light background",
            Slot::Base08 => "Variables, XML tags",
            Slot::Base09 => "Integers, booleans",
            Slot::Base0A => "Classes, search text",
            Slot::Base0B => "Strings, inherited classes",
            Slot::Base0C => "Support, regex",
            Slot::Base0D => "Functions, methods",
            Slot::Base0E => "Keywords, storage",
            Slot::Base0F => "Deprecated, embedded",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

impl fmt::Display for UnknownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown base16 slot: {}", self.0)
    }
}

impl std::error::Error for UnknownSlot {}

impl FromStr for Slot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
