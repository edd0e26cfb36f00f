//! Region buckets for the directory listing.
//!
//! Classification is plain substring matching on the address. Variants such
//! as "Ha Noi", "Hanoi" or "TP.HCM" without the expected spacing fall into
//! [`Region::Other`].

use serde::Serialize;
use std::fmt;

use crate::catalog::PointOfInterest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    HaNoi,
    HoChiMinhCity,
    Other,
}

impl Region {
    /// Display order of the listing.
    pub const ALL: [Region; 3] = [Region::HaNoi, Region::HoChiMinhCity, Region::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::HaNoi => "Hà Nội",
            Self::HoChiMinhCity => "TP. Hồ Chí Minh",
            Self::Other => "Khác",
        }
    }

    pub fn classify(address: &str) -> Self {
        if address.contains("Hà Nội") {
            Self::HaNoi
        } else if address.contains("TP. Hồ Chí Minh") || address.contains("HCM") {
            Self::HoChiMinhCity
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All entries of one region, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct RegionGroup<'a> {
    pub region: Region,
    pub label: &'static str,
    pub points: Vec<&'a PointOfInterest>,
}

/// Split `points` into the three regions. Every region is present, even
/// when empty.
pub fn group_by_region(points: &[PointOfInterest]) -> Vec<RegionGroup<'_>> {
    let mut groups: Vec<RegionGroup<'_>> = Region::ALL
        .iter()
        .map(|&region| RegionGroup {
            region,
            label: region.label(),
            points: Vec::new(),
        })
        .collect();

    for p in points {
        let region = Region::classify(&p.address);
        if let Some(group) = groups.iter_mut().find(|g| g.region == region) {
            group.points.push(p);
        }
    }

    groups
}
