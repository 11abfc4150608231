use serde::{Deserialize, Serialize};

/// 냉각부하(전력) 단위. 내부 기준은 MW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Megawatt,
    Kilowatt,
    /// 냉동톤 (1 RT = 3.517 kW)
    RefrigerationTon,
    BtuPerHour,
}

/// 1 냉동톤에 해당하는 MW.
pub const MW_PER_TON: f64 = 0.003517;
/// 1 MW에 해당하는 Btu/h.
pub const BTU_PER_H_PER_MW: f64 = 3.412e6;

fn to_mw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Megawatt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::RefrigerationTon => value * MW_PER_TON,
        PowerUnit::BtuPerHour => value / BTU_PER_H_PER_MW,
    }
}

fn from_mw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Megawatt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::RefrigerationTon => value / MW_PER_TON,
        PowerUnit::BtuPerHour => value * BTU_PER_H_PER_MW,
    }
}

/// 냉각부하를 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_mw(to_mw(value, from), to)
}
