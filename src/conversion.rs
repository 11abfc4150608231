use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `F`, `psi`, `ft`, `ft/s`, `lb/ft3`, `gpm`, `MW`, `ton` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::MassFlow => {
            let from = parse_mass_flow_unit(from_unit_str)?;
            let to = parse_mass_flow_unit(to_unit_str)?;
            Ok(convert_mass_flow(value, from, to))
        }
        QuantityKind::VolumeFlow => {
            let from = parse_volume_flow_unit(from_unit_str)?;
            let to = parse_volume_flow_unit(to_unit_str)?;
            Ok(convert_volume_flow(value, from, to))
        }
        QuantityKind::CoolingLoad => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "f" | "°f" | "degf" => Ok(TemperatureUnit::Fahrenheit),
        "c" | "°c" | "degc" => Ok(TemperatureUnit::Celsius),
        "k" => Ok(TemperatureUnit::Kelvin),
        "r" | "°r" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "f" | "°f" | "df" => Ok(TemperatureDiffUnit::Fahrenheit),
        "c" | "°c" | "dc" => Ok(TemperatureDiffUnit::Celsius),
        "k" | "dk" => Ok(TemperatureDiffUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" => Ok(PressureUnit::Psi),
        "psf" | "lb/ft2" => Ok(PressureUnit::Psf),
        "bar" => Ok(PressureUnit::Bar),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "pa" => Ok(PressureUnit::Pascal),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ft" => Ok(LengthUnit::Foot),
        "in" | "\"" => Ok(LengthUnit::Inch),
        "m" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "m/s" => Ok(VelocityUnit::MeterPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "lb/ft3" => Ok(DensityUnit::PoundPerCubicFoot),
        "kg/m3" => Ok(DensityUnit::KilogramPerCubicMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "lb/ft·s" | "lb/ft.s" | "lb/ft-s" => Ok(ViscosityUnit::PoundPerFootSecond),
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        "cp" => Ok(ViscosityUnit::Centipoise),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_flow_unit(s: &str) -> Result<MassFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "lb/h" | "lb/hr" => Ok(MassFlowUnit::PoundPerHour),
        "lb/s" => Ok(MassFlowUnit::PoundPerSecond),
        "kg/h" => Ok(MassFlowUnit::KilogramPerHour),
        "kg/s" => Ok(MassFlowUnit::KilogramPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_flow_unit(s: &str) -> Result<VolumeFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "gpm" => Ok(VolumeFlowUnit::GallonPerMinute),
        "cfs" | "ft3/s" => Ok(VolumeFlowUnit::CubicFootPerSecond),
        "m3/h" => Ok(VolumeFlowUnit::CubicMeterPerHour),
        "l/s" => Ok(VolumeFlowUnit::LiterPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mw" => Ok(PowerUnit::Megawatt),
        "kw" => Ok(PowerUnit::Kilowatt),
        "ton" | "rt" | "tons" => Ok(PowerUnit::RefrigerationTon),
        "btu/h" | "btu/hr" => Ok(PowerUnit::BtuPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
