use serde::{Deserialize, Serialize};

/// 길이(직경) 단위. 내부 기준은 ft이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Inch,
    Meter,
    Millimeter,
}

const M_PER_FT: f64 = 0.3048;

fn to_ft(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value / 12.0,
        LengthUnit::Meter => value / M_PER_FT,
        LengthUnit::Millimeter => value / 1000.0 / M_PER_FT,
    }
}

fn from_ft(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value * 12.0,
        LengthUnit::Meter => value * M_PER_FT,
        LengthUnit::Millimeter => value * M_PER_FT * 1000.0,
    }
}

/// 길이를 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_ft(to_ft(value, from), to)
}
