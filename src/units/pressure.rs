use serde::{Deserialize, Serialize};

/// 압력(압력손실) 단위. 내부 기준은 psi이다.
///
/// 압력손실 한계는 기준 길이 100 ft 당 값으로 해석하므로 게이지/절대 구분은 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    /// lb/ft² — Darcy 식의 내부 계산 단위
    Psf,
    Bar,
    KiloPascal,
    Pascal,
}

const PSF_PER_PSI: f64 = 144.0;
const PSI_PER_BAR: f64 = 14.5038;

fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Psf => value / PSF_PER_PSI,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_BAR / 100.0,
        PressureUnit::Pascal => value * PSI_PER_BAR / 100_000.0,
    }
}

fn from_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Psf => value * PSF_PER_PSI,
        PressureUnit::Bar => value / PSI_PER_BAR,
        PressureUnit::KiloPascal => value / PSI_PER_BAR * 100.0,
        PressureUnit::Pascal => value / PSI_PER_BAR * 100_000.0,
    }
}

/// 압력을 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_psi(to_psi(value, from), to)
}
