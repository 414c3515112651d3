use std::fmt;

/// A storage location for a reference-typed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataLocation {
    /// `storage`
    Storage,
    /// `memory`
    Memory,
    /// `calldata`
    Calldata,
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl DataLocation {
    /// Returns the string representation of the storage location.
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Memory => "memory",
            Self::Calldata => "calldata",
        }
    }

    /// Parses a location suffix word (`"storage"`, `"memory"`, `"calldata"`).
    pub fn from_suffix_word(word: &str) -> Option<Self> {
        match word {
            "storage" => Some(Self::Storage),
            "memory" => Some(Self::Memory),
            "calldata" => Some(Self::Calldata),
            _ => None,
        }
    }
}

/// How a function can mutate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StateMutability {
    /// `pure`
    Pure,
    /// `view`
    View,
    /// `payable`
    Payable,
    /// Not specified.
    #[default]
    NonPayable,
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl StateMutability {
    /// Returns the string representation of the state mutability.
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::Payable => "payable",
            Self::NonPayable => "nonpayable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_suffix_words() {
        assert_eq!(DataLocation::from_suffix_word("storage"), Some(DataLocation::Storage));
        assert_eq!(DataLocation::from_suffix_word("memory"), Some(DataLocation::Memory));
        assert_eq!(DataLocation::from_suffix_word("calldata"), Some(DataLocation::Calldata));
        assert_eq!(DataLocation::from_suffix_word("transient"), None);
    }
}
