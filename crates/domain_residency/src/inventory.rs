//! Bed inventory: building, floor, room, bed hierarchy
//!
//! Each level references its parent by id; the hierarchy itself is owned by
//! the server, this module models the client-visible shape plus the local
//! rules (occupancy guards, per-bed rent overrides).

use serde::{Deserialize, Serialize};

use core_kernel::{BedId, BuildingId, FloorId, Money, RoomId, StudentId};

use crate::error::ResidencyError;

/// A building in the property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub address: Option<String>,
}

impl Building {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BuildingId::new_v7(),
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A floor within a building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub building_id: BuildingId,
    pub name: String,
}

impl Floor {
    pub fn new(building_id: BuildingId, name: impl Into<String>) -> Self {
        Self {
            id: FloorId::new_v7(),
            building_id,
            name: name.into(),
        }
    }
}

/// A room on a floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub floor_id: FloorId,
    pub room_number: String,
}

impl Room {
    pub fn new(floor_id: FloorId, room_number: impl Into<String>) -> Self {
        Self {
            id: RoomId::new_v7(),
            floor_id,
            room_number: room_number.into(),
        }
    }
}

/// Occupancy status of a bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedStatus {
    Vacant,
    Occupied,
    Maintenance,
    Reserved,
}

/// A bed within a room
///
/// `monthly_rent` overrides the default rent for whoever is assigned to
/// this bed; when absent, the student's agreed rent applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
    pub id: BedId,
    pub room_id: RoomId,
    /// Short label within the room, e.g. "A", "B"
    pub bed_number: String,
    pub status: BedStatus,
    /// Per-bed rent override
    pub monthly_rent: Option<Money>,
    /// Student currently occupying the bed
    pub occupant: Option<StudentId>,
}

impl Bed {
    pub fn new(room_id: RoomId, bed_number: impl Into<String>) -> Self {
        Self {
            id: BedId::new_v7(),
            room_id,
            bed_number: bed_number.into(),
            status: BedStatus::Vacant,
            monthly_rent: None,
            occupant: None,
        }
    }

    /// Sets the per-bed rent override
    pub fn with_monthly_rent(mut self, rent: Money) -> Self {
        self.monthly_rent = Some(rent);
        self
    }

    /// Assigns a student to this bed
    ///
    /// # Errors
    ///
    /// Returns [`ResidencyError::BedNotVacant`] unless the bed is vacant
    /// or reserved.
    pub fn assign(&mut self, student: StudentId) -> Result<(), ResidencyError> {
        match self.status {
            BedStatus::Vacant | BedStatus::Reserved => {
                self.status = BedStatus::Occupied;
                self.occupant = Some(student);
                Ok(())
            }
            _ => Err(ResidencyError::BedNotVacant(self.bed_number.clone())),
        }
    }

    /// Releases the bed after checkout
    pub fn release(&mut self) {
        self.status = BedStatus::Vacant;
        self.occupant = None;
    }

    /// Guard used before deleting a bed
    pub fn ensure_removable(&self) -> Result<(), ResidencyError> {
        if self.status == BedStatus::Occupied {
            return Err(ResidencyError::BedOccupied(self.bed_number.clone()));
        }
        Ok(())
    }
}

/// Occupancy counts across a set of beds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub occupied: usize,
    pub vacant: usize,
    pub maintenance: usize,
    pub reserved: usize,
}

impl OccupancySummary {
    /// Tallies bed statuses
    pub fn from_beds<'a>(beds: impl IntoIterator<Item = &'a Bed>) -> Self {
        let mut summary = Self::default();
        for bed in beds {
            summary.total += 1;
            match bed.status {
                BedStatus::Occupied => summary.occupied += 1,
                BedStatus::Vacant => summary.vacant += 1,
                BedStatus::Maintenance => summary.maintenance += 1,
                BedStatus::Reserved => summary.reserved += 1,
            }
        }
        summary
    }
}
