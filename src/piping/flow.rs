use crate::units::power::BTU_PER_H_PER_MW;

/// 냉수 비열 [Btu/lb·°F].
const WATER_CP_BTU_PER_LB_F: f64 = 1.0;

/// MW 냉각부하를 ΔT(°F) 기준 냉수 유량(GPM)으로 환산한다.
///
/// GPM = (MW × 3,412,000 Btu/h/MW) / (500 Btu/°F/GPM × ΔT°F)
pub fn mw_to_gpm(mw: f64, delta_t_f: f64) -> f64 {
    mw * BTU_PER_H_PER_MW / (500.0 * delta_t_f)
}

/// MW 냉각부하를 질량유량(lb/h)으로 환산한다.
pub fn mw_to_mass_flow_lb_per_h(mw: f64, delta_t_f: f64) -> f64 {
    mw * BTU_PER_H_PER_MW / (delta_t_f * WATER_CP_BTU_PER_LB_F)
}

/// 질량유량(lb/h)을 밀도 기준 체적유량(GPM)으로 환산한다.
pub fn mass_flow_to_gpm(mass_flow_lb_per_h: f64, density_lb_per_ft3: f64) -> f64 {
    (mass_flow_lb_per_h / 3600.0) * (1.0 / density_lb_per_ft3) * 7.48 * 60.0
}

/// IT 부하에 팬 발열을 더한 냉각부하(MW)를 계산한다.
pub fn cooling_load_mw(it_load_mw: f64, fan_heat_percent: f64) -> f64 {
    it_load_mw * (1.0 + fan_heat_percent / 100.0)
}
