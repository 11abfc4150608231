use serde::{Deserialize, Serialize};

/// 질량유량 단위. 내부 기준은 lb/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    PoundPerHour,
    PoundPerSecond,
    KilogramPerHour,
    KilogramPerSecond,
}

const LB_PER_KG: f64 = 2.20462;

fn to_lb_h(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::PoundPerHour => value,
        MassFlowUnit::PoundPerSecond => value * 3600.0,
        MassFlowUnit::KilogramPerHour => value * LB_PER_KG,
        MassFlowUnit::KilogramPerSecond => value * LB_PER_KG * 3600.0,
    }
}

fn from_lb_h(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::PoundPerHour => value,
        MassFlowUnit::PoundPerSecond => value / 3600.0,
        MassFlowUnit::KilogramPerHour => value / LB_PER_KG,
        MassFlowUnit::KilogramPerSecond => value / LB_PER_KG / 3600.0,
    }
}

/// 질량유량을 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    from_lb_h(to_lb_h(value, from), to)
}
