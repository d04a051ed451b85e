//! Battery badge for the sensor paired with the card.

/// Icon shown next to the reading, in 10 % steps.
///
/// `[0, 20)` share the lowest icon, `[90, ∞)` is a full battery. Anything that is not a
/// usable percentage (negative, NaN, non numeric or missing state) shows as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryIcon {
    Battery10,
    Battery20,
    Battery30,
    Battery40,
    Battery50,
    Battery60,
    Battery70,
    Battery80,
    Full,
    Unknown,
}

impl BatteryIcon {
    pub fn classify(percent: f64) -> BatteryIcon {
        if percent.is_nan() || percent < 0.0 {
            return BatteryIcon::Unknown;
        }
        match percent {
            p if p < 20.0 => BatteryIcon::Battery10,
            p if p < 30.0 => BatteryIcon::Battery20,
            p if p < 40.0 => BatteryIcon::Battery30,
            p if p < 50.0 => BatteryIcon::Battery40,
            p if p < 60.0 => BatteryIcon::Battery50,
            p if p < 70.0 => BatteryIcon::Battery60,
            p if p < 80.0 => BatteryIcon::Battery70,
            p if p < 90.0 => BatteryIcon::Battery80,
            _ => BatteryIcon::Full,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BatteryIcon::Battery10 => "mdi:battery-10",
            BatteryIcon::Battery20 => "mdi:battery-20",
            BatteryIcon::Battery30 => "mdi:battery-30",
            BatteryIcon::Battery40 => "mdi:battery-40",
            BatteryIcon::Battery50 => "mdi:battery-50",
            BatteryIcon::Battery60 => "mdi:battery-60",
            BatteryIcon::Battery70 => "mdi:battery-70",
            BatteryIcon::Battery80 => "mdi:battery-80",
            BatteryIcon::Full => "mdi:battery",
            BatteryIcon::Unknown => "mdi:battery-unknown",
        }
    }
}
