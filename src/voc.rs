//! VOC air-quality bands.
//!
//! Readings are in ppb. Six contiguous bands cover the whole real line; a value equal to a
//! threshold belongs to the higher band.

use crate::MessageKey;

/// Number of leaf icons in the indicator row.
pub const LEAF_COUNT: usize = 5;

/// Upper bound (exclusive) of the excellent band.
pub const VOC_GOOD: f64 = 150.0;
pub const VOC_MODERATE: f64 = 350.0;
pub const VOC_POOR: f64 = 660.0;
pub const VOC_UNHEALTHY: f64 = 2200.0;
/// Everything from here on is the hazardous band.
pub const VOC_HAZARDOUS: f64 = 5500.0;

const _: () = assert!(VOC_GOOD < VOC_MODERATE);
const _: () = assert!(VOC_MODERATE < VOC_POOR);
const _: () = assert!(VOC_POOR < VOC_UNHEALTHY);
const _: () = assert!(VOC_UNHEALTHY < VOC_HAZARDOUS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VocBand {
    Excellent,
    Good,
    Moderate,
    Poor,
    Unhealthy,
    Hazardous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafState {
    Active,
    Dim,
}

impl LeafState {
    pub fn css_class(&self) -> &'static str {
        match self {
            LeafState::Active => "leaf-green",
            LeafState::Dim => "leaf-grey",
        }
    }
}

impl VocBand {
    pub const ALL: [VocBand; 6] = [
        VocBand::Excellent,
        VocBand::Good,
        VocBand::Moderate,
        VocBand::Poor,
        VocBand::Unhealthy,
        VocBand::Hazardous,
    ];

    /// Returns `None` only for NaN.
    pub fn classify(ppb: f64) -> Option<VocBand> {
        if ppb.is_nan() {
            None
        } else if ppb < VOC_GOOD {
            Some(VocBand::Excellent)
        } else if ppb < VOC_MODERATE {
            Some(VocBand::Good)
        } else if ppb < VOC_POOR {
            Some(VocBand::Moderate)
        } else if ppb < VOC_UNHEALTHY {
            Some(VocBand::Poor)
        } else if ppb < VOC_HAZARDOUS {
            Some(VocBand::Unhealthy)
        } else {
            Some(VocBand::Hazardous)
        }
    }

    /// Half-open `[lower, upper)` range of the band. Open ends are infinite.
    pub fn range(&self) -> (f64, f64) {
        match self {
            VocBand::Excellent => (f64::NEG_INFINITY, VOC_GOOD),
            VocBand::Good => (VOC_GOOD, VOC_MODERATE),
            VocBand::Moderate => (VOC_MODERATE, VOC_POOR),
            VocBand::Poor => (VOC_POOR, VOC_UNHEALTHY),
            VocBand::Unhealthy => (VOC_UNHEALTHY, VOC_HAZARDOUS),
            VocBand::Hazardous => (VOC_HAZARDOUS, f64::INFINITY),
        }
    }

    /// One leaf goes dim per band, from five active down to none.
    pub fn active_leaves(&self) -> usize {
        LEAF_COUNT - *self as usize
    }

    /// Active leaves fill the row from the left.
    pub fn leaves(&self) -> [LeafState; LEAF_COUNT] {
        let active = self.active_leaves();
        std::array::from_fn(|slot| {
            if slot < active {
                LeafState::Active
            } else {
                LeafState::Dim
            }
        })
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            VocBand::Excellent => MessageKey::VocExcellent,
            VocBand::Good => MessageKey::VocGood,
            VocBand::Moderate => MessageKey::VocModerate,
            VocBand::Poor => MessageKey::VocPoor,
            VocBand::Unhealthy => MessageKey::VocUnhealthy,
            VocBand::Hazardous => MessageKey::VocHazardous,
        }
    }
}
