//! Typed documents exchanged with the Data API.

use serde::{Deserialize, Serialize};

/// Geographic coordinates carried by an airport document.
///
/// `lat`/`lon` are optional because upstream documents are not guaranteed
/// to carry them; presence is validated by the geo search before any
/// index query is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

impl GeoCoordinates {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            alt: Some(alt),
        }
    }
}

/// An airport document as stored in the configured collection.
///
/// The backend stores documents without their key; `id` is attached by
/// the layer on reads and omitted from serialized bodies when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub airportname: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
}

impl AirportDocument {
    /// Short airport code: FAA when present, otherwise ICAO.
    pub fn code(&self) -> Option<&str> {
        self.faa.as_deref().or(self.icao.as_deref())
    }
}

/// One row of the airlines-by-airport query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRow {
    pub airline: String,
}
