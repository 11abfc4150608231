use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Imperial(ft/lb/psi). 내부 계산 기본값.
    Imperial,
    /// SI 표시용
    SI,
}

/// 각 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub pressure: PressureUnit,
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub density: DensityUnit,
    pub viscosity: ViscosityUnit,
    pub mass_flow: MassFlowUnit,
    pub volume_flow: VolumeFlowUnit,
    pub load: PowerUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Fahrenheit,
            temperature_diff: TemperatureDiffUnit::Fahrenheit,
            pressure: PressureUnit::Psi,
            length: LengthUnit::Inch,
            velocity: VelocityUnit::FootPerSecond,
            density: DensityUnit::PoundPerCubicFoot,
            viscosity: ViscosityUnit::PoundPerFootSecond,
            mass_flow: MassFlowUnit::PoundPerHour,
            volume_flow: VolumeFlowUnit::GallonPerMinute,
            load: PowerUnit::Megawatt,
        }
    }
}

/// 사이징 프롬프트의 기본값 모음.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDefaults {
    /// 공급/환수 온도차 [°F]
    pub delta_t_f: f64,
    /// 허용 유속 [ft/s]
    pub max_velocity_ft_per_s: f64,
    /// 100 ft 당 허용 압력손실 [psi]
    pub max_pressure_drop_psi: f64,
    /// 팬 발열 가산율 [%]
    pub fan_heat_percent: f64,
    /// 기본 유체 코드
    pub fluid: String,
    /// N+% 모델 목표 여유율 [%]
    pub redundancy_percent: f64,
    /// 허용 최대 칠러 대수
    pub max_chillers: u32,
    /// 운전 부하율 하한 [%]
    pub min_loading_percent: f64,
    /// 운전 부하율 상한 [%]
    pub max_loading_percent: f64,
    /// 전력 단가 [$/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 연간 운전 시간 [h]
    pub annual_hours: f64,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            delta_t_f: 15.0,
            max_velocity_ft_per_s: 12.0,
            max_pressure_drop_psi: 20.0,
            fan_heat_percent: 5.0,
            fluid: "water".to_string(),
            redundancy_percent: 20.0,
            max_chillers: 20,
            min_loading_percent: 40.0,
            max_loading_percent: 80.0,
            electricity_rate_per_kwh: 0.12,
            annual_hours: 8760.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    pub default_units: DefaultUnits,
    pub design: DesignDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Imperial,
            language: "auto".to_string(),
            default_units: DefaultUnits::default(),
            design: DesignDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 단위 시스템 프리셋에 맞춰 표시 단위를 일괄 변경한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = match system {
            UnitSystem::Imperial => DefaultUnits::default(),
            UnitSystem::SI => DefaultUnits {
                temperature: TemperatureUnit::Celsius,
                temperature_diff: TemperatureDiffUnit::Kelvin,
                pressure: PressureUnit::KiloPascal,
                length: LengthUnit::Millimeter,
                velocity: VelocityUnit::MeterPerSecond,
                density: DensityUnit::KilogramPerCubicMeter,
                viscosity: ViscosityUnit::PascalSecond,
                mass_flow: MassFlowUnit::KilogramPerHour,
                volume_flow: VolumeFlowUnit::CubicMeterPerHour,
                load: PowerUnit::Megawatt,
            },
        };
    }
}
