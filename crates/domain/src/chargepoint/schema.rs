//! Request and response records of the vendor API.
//!
//! Field names follow the vendor's PascalCase wire names. Optional request
//! fields are left out of the encoded request when unset.

use serde::{Deserialize, Serialize};

/// Response code the vendor uses for a successful load query
pub const LOAD_SUCCESS_CODE: &str = "100";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCPNInstancesRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CpnInstance {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCPNInstancesResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(rename = "CPN", default)]
    pub cpn: Vec<CpnInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStationsRequest {
    #[serde(rename = "StationID", skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    #[serde(rename = "StationGroupID", skip_serializing_if = "Option::is_none")]
    pub station_group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_record: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stations: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Station {
    #[serde(rename = "StationID")]
    pub station_id: String,
    #[serde(default)]
    pub station_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub num_ports: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStationsResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(rename = "StationData", default)]
    pub stations: Vec<Station>,
    /// Set when more records are available past this page
    #[serde(default)]
    pub more_flag: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStationGroupsRequest {
    #[serde(rename = "OrgID", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationGroup {
    #[serde(rename = "StationGroupID")]
    pub station_group_id: i32,
    #[serde(default)]
    pub station_group_name: String,
    #[serde(rename = "OrganizationID", default)]
    pub organization_id: String,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStationGroupsResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(rename = "GroupData", default)]
    pub station_groups: Vec<StationGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShedLoadRequest {
    #[serde(rename = "StationGroupID")]
    pub station_group_id: i32,
    #[serde(rename = "StationGroupAllowedLoadKW", skip_serializing_if = "Option::is_none")]
    pub allowed_load_kw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_percent_shed: Option<i32>,
}

impl ShedLoadRequest {
    pub fn allowed_load(station_group_id: i32, allowed_load_kw: impl Into<String>) -> Self {
        Self {
            station_group_id,
            allowed_load_kw: Some(allowed_load_kw.into()),
            station_percent_shed: None,
        }
    }

    pub fn percentage(station_group_id: i32, percent: i32) -> Self {
        Self {
            station_group_id,
            allowed_load_kw: None,
            station_percent_shed: Some(percent),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShedLoadResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(default)]
    pub success: i32,
}

impl ShedLoadResponse {
    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClearShedStateRequest {
    #[serde(rename = "StationGroupID", skip_serializing_if = "Option::is_none")]
    pub station_group_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClearShedStateResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(default)]
    pub success: bool,
}

impl ClearShedStateResponse {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoadRequest {
    #[serde(rename = "StationGroupID")]
    pub station_group_id: i32,
}

/// Per-station load entry of a `GetLoad` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationLoad {
    #[serde(rename = "StationID", default)]
    pub station_id: String,
    #[serde(default)]
    pub station_name: String,
    #[serde(rename = "StationLoadKW", default)]
    pub station_load_kw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoadResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(rename = "StationGroupID", default)]
    pub station_group_id: i32,
    #[serde(default)]
    pub station_group_name: String,
    #[serde(rename = "StationGroupLoadKW", default)]
    pub station_group_load_kw: String,
    #[serde(default)]
    pub station_group_num_stations: i32,
    #[serde(default)]
    pub station_data: Vec<StationLoad>,
}

impl GetLoadResponse {
    pub fn is_success(&self) -> bool {
        self.response_code == LOAD_SUCCESS_CODE
    }
}
