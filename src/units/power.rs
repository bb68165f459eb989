use serde::{Deserialize, Serialize};

/// Fator exato da conversão CV ↔ kW. Os resultados do relatório dependem
/// deste valor bit a bit.
pub const CV_TO_KW: f64 = 0.7355;

/// Unidade de potência. A base interna é o quilowatt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    CavaloVapor,
    Kilowatt,
}

/// Converte cavalo-vapor (CV) para kW.
pub fn cv_to_kw(cv: f64) -> f64 {
    cv * CV_TO_KW
}

/// Converte kW para cavalo-vapor (CV).
pub fn kw_to_cv(kw: f64) -> f64 {
    kw / CV_TO_KW
}

fn to_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::CavaloVapor => cv_to_kw(value),
        PowerUnit::Kilowatt => value,
    }
}

fn from_kw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::CavaloVapor => kw_to_cv(value),
        PowerUnit::Kilowatt => value,
    }
}

/// Converte potência entre unidades.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kw(value, from);
    from_kw(kw, to)
}
