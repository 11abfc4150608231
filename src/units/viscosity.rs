use serde::{Deserialize, Serialize};

/// 동점도 단위. 내부 기준은 lb/ft·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PoundPerFootSecond,
    PascalSecond,
    Centipoise,
}

const LB_FT_S_PER_PA_S: f64 = 0.671969;

fn to_lb_ft_s(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PoundPerFootSecond => value,
        ViscosityUnit::PascalSecond => value * LB_FT_S_PER_PA_S,
        ViscosityUnit::Centipoise => value * LB_FT_S_PER_PA_S / 1000.0,
    }
}

fn from_lb_ft_s(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PoundPerFootSecond => value,
        ViscosityUnit::PascalSecond => value / LB_FT_S_PER_PA_S,
        ViscosityUnit::Centipoise => value / LB_FT_S_PER_PA_S * 1000.0,
    }
}

/// 동점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    from_lb_ft_s(to_lb_ft_s(value, from), to)
}
