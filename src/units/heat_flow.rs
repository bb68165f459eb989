use serde::{Deserialize, Serialize};

/// Fator exato da conversão kW → BTU/h.
pub const KW_TO_BTU: f64 = 3412.14;
/// BTU/h por tonelada de refrigeração (TR).
pub const BTU_TO_TR: f64 = 12000.0;

/// Unidade de fluxo de calor / capacidade frigorífica. A base interna é o
/// BTU/h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatFlowUnit {
    BtuPerHour,
    TonRefrigeration,
    Kilowatt,
}

/// Converte kW para BTU/h.
pub fn kw_to_btu(kw: f64) -> f64 {
    kw * KW_TO_BTU
}

/// Converte BTU/h para TR.
pub fn btu_to_tr(btu: f64) -> f64 {
    btu / BTU_TO_TR
}

/// Converte TR para BTU/h.
pub fn tr_to_btu(tr: f64) -> f64 {
    tr * BTU_TO_TR
}

fn to_btu(value: f64, unit: HeatFlowUnit) -> f64 {
    match unit {
        HeatFlowUnit::BtuPerHour => value,
        HeatFlowUnit::TonRefrigeration => tr_to_btu(value),
        HeatFlowUnit::Kilowatt => kw_to_btu(value),
    }
}

fn from_btu(value: f64, unit: HeatFlowUnit) -> f64 {
    match unit {
        HeatFlowUnit::BtuPerHour => value,
        HeatFlowUnit::TonRefrigeration => btu_to_tr(value),
        HeatFlowUnit::Kilowatt => value / KW_TO_BTU,
    }
}

/// Converte fluxo de calor entre unidades.
pub fn convert_heat_flow(value: f64, from: HeatFlowUnit, to: HeatFlowUnit) -> f64 {
    let btu = to_btu(value, from);
    from_btu(btu, to)
}
