use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 lb/ft³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    PoundPerCubicFoot,
    KilogramPerCubicMeter,
}

const LB_FT3_PER_KG_M3: f64 = 0.062428;

fn to_lb_ft3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::PoundPerCubicFoot => value,
        DensityUnit::KilogramPerCubicMeter => value * LB_FT3_PER_KG_M3,
    }
}

fn from_lb_ft3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::PoundPerCubicFoot => value,
        DensityUnit::KilogramPerCubicMeter => value / LB_FT3_PER_KG_M3,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    from_lb_ft3(to_lb_ft3(value, from), to)
}
