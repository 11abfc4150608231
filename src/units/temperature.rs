use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 °F이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
    Rankine,
}

/// 온도차 단위. 내부 기준은 °F(=°R) 차이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
}

fn to_f(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => (value - 273.15) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Rankine => value - 459.67,
    }
}

fn from_f(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => (value - 32.0) * 5.0 / 9.0 + 273.15,
        TemperatureUnit::Rankine => value + 459.67,
    }
}

/// 온도를 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_f(to_f(value, from), to)
}

/// 온도차를 변환한다. K 차이와 °C 차이는 동일하게 취급한다.
pub fn convert_temperature_diff(value: f64, from: TemperatureDiffUnit, to: TemperatureDiffUnit) -> f64 {
    let base_f = match from {
        TemperatureDiffUnit::Fahrenheit => value,
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => value * 9.0 / 5.0,
    };
    match to {
        TemperatureDiffUnit::Fahrenheit => base_f,
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => base_f * 5.0 / 9.0,
    }
}
