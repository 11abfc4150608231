use serde::{Deserialize, Serialize};

/// 체적유량 단위. 내부 기준은 GPM(미국 갤런/분)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    GallonPerMinute,
    CubicFootPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
}

const GPM_PER_CFS: f64 = 448.831;
const GPM_PER_M3_H: f64 = 4.40287;
const GPM_PER_L_S: f64 = 15.8503;

fn to_gpm(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::GallonPerMinute => value,
        VolumeFlowUnit::CubicFootPerSecond => value * GPM_PER_CFS,
        VolumeFlowUnit::CubicMeterPerHour => value * GPM_PER_M3_H,
        VolumeFlowUnit::LiterPerSecond => value * GPM_PER_L_S,
    }
}

fn from_gpm(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::GallonPerMinute => value,
        VolumeFlowUnit::CubicFootPerSecond => value / GPM_PER_CFS,
        VolumeFlowUnit::CubicMeterPerHour => value / GPM_PER_M3_H,
        VolumeFlowUnit::LiterPerSecond => value / GPM_PER_L_S,
    }
}

/// 체적유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    from_gpm(to_gpm(value, from), to)
}
