//! Geo-proximity hotel search: distance specs, FTS query construction,
//! and result shaping.
//!
//! The orchestration itself lives on [`crate::DataApiClient`]; everything
//! here is pure and independently testable.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::AirportDocument;

/// FTS index consulted for hotel geo searches.
pub const HOTEL_GEO_INDEX: &str = "hotel-geo-index";

/// Maximum number of hits requested from the index.
pub const SEARCH_SIZE_CAP: usize = 20;

static DISTANCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d+)?)(km|mi)$").expect("valid regex"));

/// Unit of a distance spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Km => write!(f, "km"),
            DistanceUnit::Mi => write!(f, "mi"),
        }
    }
}

/// A validated distance spec such as `10km` or `7.5mi`.
///
/// Parsing keeps the original spelling so the outward envelope and the
/// search request echo exactly what the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
    raw: String,
}

impl Distance {
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Distance {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let captures = DISTANCE_RE.captures(raw).ok_or_else(|| Error::Validation {
            message: format!("invalid distance '{raw}': expected a value like \"10km\" or \"5mi\""),
        })?;

        // The pattern only admits decimal digits, so this parse cannot fail.
        let value = captures[1].parse().map_err(|_| Error::Validation {
            message: format!("invalid distance value in '{raw}'"),
        })?;
        let unit = match &captures[3] {
            "km" => DistanceUnit::Km,
            _ => DistanceUnit::Mi,
        };

        Ok(Distance {
            value,
            unit,
            raw: raw.to_string(),
        })
    }
}

/// Geographic point in the lon/lat order the FTS service expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Geo-distance query clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoDistanceQuery {
    pub location: GeoPoint,
    pub distance: String,
    pub field: String,
}

/// Sort clause ordering hits by distance from a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoDistanceSort {
    pub by: String,
    pub field: String,
    pub unit: String,
    pub location: GeoPoint,
}

/// Full request body sent to the FTS index endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub from: usize,
    pub size: usize,
    pub query: GeoDistanceQuery,
    pub sort: Vec<GeoDistanceSort>,
    pub fields: Vec<String>,
    #[serde(rename = "includeLocations")]
    pub include_locations: bool,
}

/// Build the geo-distance search for hotels around `location`.
///
/// Sorted ascending by distance from the same location; the sort unit
/// matches the unit the caller asked in. No server-side field filtering.
pub fn geo_search_request(location: GeoPoint, distance: &Distance) -> SearchRequest {
    SearchRequest {
        from: 0,
        size: SEARCH_SIZE_CAP,
        query: GeoDistanceQuery {
            location,
            distance: distance.as_str().to_string(),
            field: "geo".to_string(),
        },
        sort: vec![GeoDistanceSort {
            by: "geo_distance".to_string(),
            field: "geo".to_string(),
            unit: distance.unit.to_string(),
            location,
        }],
        fields: vec!["*".to_string()],
        include_locations: false,
    }
}

/// Subset of the FTS search response consumed by the shaper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
    #[serde(default)]
    pub total_hits: u64,
}

/// One hit returned by the index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub sort: Vec<Value>,
}

/// Resolve the airport's coordinates, or fail before any index call.
pub fn airport_location(airport: &AirportDocument) -> Result<GeoPoint> {
    let geo = airport.geo.as_ref();
    let (lat, lon) = match geo.map(|g| (g.lat, g.lon)) {
        Some((Some(lat), Some(lon))) => (lat, lon),
        _ => {
            return Err(Error::Validation {
                message: "geo coordinates not found".to_string(),
            })
        }
    };

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(Error::Validation {
            message: format!("geo coordinates out of range: lat={lat}, lon={lon}"),
        });
    }

    Ok(GeoPoint { lon, lat })
}

/// Outward envelope of a hotel search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchResponse {
    pub airport: AirportSummary,
    pub search_criteria: SearchCriteria,
    pub total_hotels_found: u64,
    pub hotels: Vec<Map<String, Value>>,
}

/// The resolved airport as echoed in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub distance: String,
}

/// Attach the relevance score to each hit, plus a derived distance
/// (rounded to two decimals) when the backend returned a numeric sort
/// key. Ordering is whatever the backend returned under the requested
/// sort; no client-side re-ranking.
pub fn shape_hits(hits: Vec<SearchHit>) -> Vec<Map<String, Value>> {
    hits.into_iter()
        .map(|hit| {
            let SearchHit {
                fields: mut hotel,
                score,
                sort,
            } = hit;
            if let Some(distance) = derived_distance(&sort) {
                hotel.insert("distance".to_string(), Value::from(distance));
            }
            hotel.insert("score".to_string(), Value::from(score));
            hotel
        })
        .collect()
}

// FTS returns sort keys as strings; a non-numeric key means the hit was
// not sorted by distance and gets no derived figure.
fn derived_distance(sort: &[Value]) -> Option<f64> {
    let value = match sort.first()? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    Some((value * 100.0).round() / 100.0)
}

/// Assemble the outward envelope. Zero hits is a success with an empty
/// list, never an error.
pub fn assemble_search_response(
    airport: &AirportDocument,
    location: GeoPoint,
    distance: &Distance,
    search: SearchResponse,
) -> HotelSearchResponse {
    HotelSearchResponse {
        airport: AirportSummary {
            id: airport.id.clone().unwrap_or_default(),
            code: airport.code().map(str::to_string),
            name: airport.airportname.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            coordinates: Coordinates {
                latitude: location.lat,
                longitude: location.lon,
            },
        },
        search_criteria: SearchCriteria {
            distance: distance.as_str().to_string(),
        },
        total_hotels_found: search.total_hits,
        hotels: shape_hits(search.hits),
    }
}
