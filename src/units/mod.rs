//! 단위 정의 및 변환 모듈 모음. 내부 기준은 Imperial(ft/lb/s/psi/°F)이다.

pub mod density;
pub mod length;
pub mod mass_flow;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod viscosity;
pub mod volume_flow;

pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use mass_flow::{convert_mass_flow, MassFlowUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
pub use volume_flow::{convert_volume_flow, VolumeFlowUnit};
