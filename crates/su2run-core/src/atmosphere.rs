//! International Standard Atmosphere up to 20 km.

use crate::error::Su2Error;

const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
const LAPSE_RATE: f64 = 0.0065;
const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;
const MAX_ALTITUDE: f64 = 20_000.0;
const GAS_CONSTANT_AIR: f64 = 287.053;
const GRAVITY: f64 = 9.806_65;

/// Atmospheric state at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Kelvin.
    pub temperature: f64,
    /// Pascal.
    pub pressure: f64,
    /// kg/m^3.
    pub density: f64,
}

/// ISA state at `altitude` metres. Negative altitudes are clamped to sea level.
pub fn isa(altitude: f64) -> Result<Atmosphere, Su2Error> {
    if !altitude.is_finite() || altitude > MAX_ALTITUDE {
        return Err(Su2Error::Settings(format!(
            "altitude {altitude} m is outside the supported range (0 to {MAX_ALTITUDE} m)"
        )));
    }
    let h = altitude.max(0.0);
    let exponent = GRAVITY / (GAS_CONSTANT_AIR * LAPSE_RATE);

    let (temperature, pressure) = if h <= TROPOPAUSE_ALTITUDE {
        let t = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * h;
        (t, SEA_LEVEL_PRESSURE * (t / SEA_LEVEL_TEMPERATURE).powf(exponent))
    } else {
        let t = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * TROPOPAUSE_ALTITUDE;
        let p11 = SEA_LEVEL_PRESSURE * (t / SEA_LEVEL_TEMPERATURE).powf(exponent);
        let p = p11 * (-GRAVITY * (h - TROPOPAUSE_ALTITUDE) / (GAS_CONSTANT_AIR * t)).exp();
        (t, p)
    };

    Ok(Atmosphere {
        temperature,
        pressure,
        density: pressure / (GAS_CONSTANT_AIR * temperature),
    })
}
