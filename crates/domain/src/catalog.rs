// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog entities offered by a collective package.
//!
//! Catalog data is supplied by the package API (or the built-in fallback)
//! and is read-only from the booking flow's point of view. Only the `id`
//! and `name` of a selected entry travel with a booking; everything else
//! is descriptive.

use serde::{Deserialize, Serialize};

/// The identifying part of a catalog entry, as carried by a booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogRef {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl CatalogRef {
    /// Creates a catalog reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One day (or stage) of a program itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// Day number, starting at 1.
    pub day: u16,
    /// Short title, e.g. "Arrival in Madinah".
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
}

/// A travel program (dates, cities, itinerary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Total length of the stay.
    #[serde(default)]
    pub duration_days: u16,
    /// Nights spent in Makkah.
    #[serde(default)]
    pub makkah_nights: u16,
    /// Nights spent in Madinah.
    #[serde(default)]
    pub madinah_nights: u16,
    /// Base price per passenger, in Moroccan dirhams.
    #[serde(default)]
    pub price_mad: Option<u64>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

/// A room occupancy option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Number of travelers sharing the room.
    #[serde(default)]
    pub occupancy: u8,
    /// Price supplement per passenger, in Moroccan dirhams.
    #[serde(default)]
    pub price_mad: Option<u64>,
}

/// A visa option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Typical processing time.
    #[serde(default)]
    pub processing_days: u16,
    /// Price per passenger, in Moroccan dirhams.
    #[serde(default)]
    pub price_mad: Option<u64>,
}

/// Shared accessors for catalog entries.
pub trait CatalogEntry {
    /// The catalog identifier.
    fn id(&self) -> &str;
    /// The display name.
    fn name(&self) -> &str;
    /// The per-passenger price in dirhams, if published.
    fn price_mad(&self) -> Option<u64>;

    /// The reference carried by a booking.
    fn to_ref(&self) -> CatalogRef {
        CatalogRef::new(self.id(), self.name())
    }
}

impl CatalogEntry for Program {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn price_mad(&self) -> Option<u64> {
        self.price_mad
    }
}

impl CatalogEntry for RoomType {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn price_mad(&self) -> Option<u64> {
        self.price_mad
    }
}

impl CatalogEntry for VisaType {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn price_mad(&self) -> Option<u64> {
        self.price_mad
    }
}

/// The options a collective package offers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageCatalog {
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub rooms: Vec<RoomType>,
    #[serde(default)]
    pub visas: Vec<VisaType>,
}

impl PackageCatalog {
    /// Looks up a program by id.
    #[must_use]
    pub fn program(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Looks up a room type by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&RoomType> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks up a visa type by id.
    #[must_use]
    pub fn visa(&self, id: &str) -> Option<&VisaType> {
        self.visas.iter().find(|v| v.id == id)
    }

    /// Returns whether the catalog offers at least one option of each kind.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.programs.is_empty() && !self.rooms.is_empty() && !self.visas.is_empty()
    }

    /// The built-in catalog used when no package is published for a slug.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            programs: vec![
                Program {
                    id: String::from("program-a"),
                    name: String::from("Program A"),
                    description: String::from("Madinah first, then Makkah"),
                    duration_days: 15,
                    makkah_nights: 9,
                    madinah_nights: 5,
                    price_mad: Some(16_900),
                    itinerary: vec![
                        day(1, "Departure and arrival in Madinah"),
                        day(2, "Visit of the Prophet's Mosque"),
                        day(6, "Transfer to Makkah and Umrah"),
                        day(15, "Return flight"),
                    ],
                },
                Program {
                    id: String::from("program-b"),
                    name: String::from("Program B"),
                    description: String::from("Makkah first, then Madinah"),
                    duration_days: 12,
                    makkah_nights: 7,
                    madinah_nights: 4,
                    price_mad: Some(14_500),
                    itinerary: vec![
                        day(1, "Departure and arrival in Jeddah"),
                        day(2, "Umrah and stay in Makkah"),
                        day(8, "Transfer to Madinah"),
                        day(12, "Return flight"),
                    ],
                },
            ],
            rooms: vec![
                room("quad-room", "Quad Room", 4, 0),
                room("triple-room", "Triple Room", 3, 1_200),
                room("twin-room", "Twin Room", 2, 2_500),
            ],
            visas: vec![
                VisaType {
                    id: String::from("umrah-visa"),
                    name: String::from("Umrah Visa"),
                    description: String::from("Single-entry pilgrimage visa"),
                    processing_days: 7,
                    price_mad: Some(1_500),
                },
                VisaType {
                    id: String::from("tourist-visa"),
                    name: String::from("Tourist Visa"),
                    description: String::from("One-year multiple-entry e-visa"),
                    processing_days: 3,
                    price_mad: Some(1_900),
                },
            ],
        }
    }
}

fn day(day: u16, title: &str) -> ItineraryDay {
    ItineraryDay {
        day,
        title: title.to_string(),
        description: String::new(),
    }
}

fn room(id: &str, name: &str, occupancy: u8, price_mad: u64) -> RoomType {
    RoomType {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{occupancy} travelers per room"),
        occupancy,
        price_mad: Some(price_mad),
    }
}
