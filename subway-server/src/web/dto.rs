//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// Request to create a station.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationRequest {
    /// Display name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            created_date: station.created_at,
            modified_date: station.updated_at,
        }
    }
}

/// Request to create a line with its initial section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u64,
}

/// Request to update line metadata.
///
/// Absent or empty fields keep their current value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Request to insert a section into a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u64,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    pub station_id: u64,
}

/// A line in responses, with its stations in travel order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Error body for all failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[test]
    fn station_response_uses_camel_case() {
        let station = Station::new(StationId(1), "Gangnam".to_string());
        let json = serde_json::to_value(StationResponse::from_station(&station)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Gangnam");
        assert!(json.get("createdDate").is_some());
        assert!(json.get("modifiedDate").is_some());
    }

    #[test]
    fn section_request_parses_camel_case() {
        let req: AddSectionRequest = serde_json::from_str(
            r#"{"upStationId": 1, "downStationId": 2, "distance": 10}"#,
        )
        .unwrap();
        assert_eq!(req.up_station_id, 1);
        assert_eq!(req.down_station_id, 2);
        assert_eq!(req.distance, 10);
    }
}
