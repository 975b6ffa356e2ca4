use std::fmt;

use serde::{Deserialize, Serialize};

/// Value kinds the host can carry for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Int32,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int32 => "Int32",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device resources exposed by a station group
///
/// `Load`, `GroupName` and `NumStations` are read from a single `GetLoad`
/// payload. `StationGroupId`, `AllowedLoad` and `PercentShed` are write-only
/// triggers for clear-shed, shed-by-allowed-load and shed-by-percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Load,
    GroupName,
    NumStations,
    StationGroupId,
    AllowedLoad,
    PercentShed,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Self::Load,
        Self::GroupName,
        Self::NumStations,
        Self::StationGroupId,
        Self::AllowedLoad,
        Self::PercentShed,
    ];

    /// Resolve a host resource name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::GroupName => "GroupName",
            Self::NumStations => "NumStations",
            Self::StationGroupId => "StationGroupId",
            Self::AllowedLoad => "AllowedLoad",
            Self::PercentShed => "PercentShed",
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Load | Self::GroupName | Self::AllowedLoad => ValueType::String,
            Self::NumStations | Self::StationGroupId | Self::PercentShed => ValueType::Int32,
        }
    }

    pub fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::StationGroupId | Self::AllowedLoad | Self::PercentShed
        )
    }

    /// True for resources whose value comes out of the `GetLoad` response
    pub fn needs_load_payload(&self) -> bool {
        matches!(self, Self::Load | Self::GroupName | Self::NumStations)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_matches_as_str() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_name(resource.as_str()), Some(resource));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Resource::from_name("load"), None);
        assert_eq!(Resource::from_name("Temperature"), None);
        assert_eq!(Resource::from_name(""), None);
    }

    #[test]
    fn test_read_and_write_sets_are_disjoint() {
        let readable: Vec<_> = Resource::ALL
            .iter()
            .filter(|r| r.needs_load_payload())
            .collect();
        let writable: Vec<_> = Resource::ALL.iter().filter(|r| r.is_writable()).collect();

        assert_eq!(readable.len(), 3);
        assert_eq!(writable.len(), 3);
        assert!(readable.iter().all(|r| !r.is_writable()));
    }

    #[test]
    fn test_value_types() {
        assert_eq!(Resource::Load.value_type(), ValueType::String);
        assert_eq!(Resource::NumStations.value_type(), ValueType::Int32);
        assert_eq!(Resource::AllowedLoad.value_type(), ValueType::String);
        assert_eq!(Resource::PercentShed.value_type(), ValueType::Int32);
        assert_eq!(Resource::StationGroupId.value_type(), ValueType::Int32);
    }
}
