use serde::{Deserialize, Serialize};

use crate::thermal::equipment::EquipmentItem;
use crate::units::{btu_to_tr, tr_to_btu};

/// Razão calor sensível / calor total assumida no dimensionamento (75%).
pub const SENSIBLE_TO_TOTAL_RATIO: f64 = 0.75;
/// Margem de segurança padrão, em porcentagem.
pub const DEFAULT_MARGIN_PERCENT: f64 = 15.0;
/// Razão empírica BTU/h → m³/h da estimativa de vazão para resfriamento
/// adiabático. Valor fixo herdado da planilha original, sem derivação física.
pub const ADIABATIC_BTU_PER_M3H: f64 = 10.0;

/// Carga externa (envoltória) em BTU/h a partir da área da sala e do fator
/// de referência em BTU/h por m².
pub fn external_load_btu(area_m2: f64, reference_factor_btu_per_m2: f64) -> f64 {
    area_m2 * reference_factor_btu_per_m2
}

/// Resultado agregado do cálculo de carga térmica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTotals {
    /// Soma da dissipação dos equipamentos (BTU/h).
    pub total_equipment_btu: f64,
    /// Carga externa usada no cálculo (BTU/h).
    pub external_load_btu: f64,
    pub external_load_tr: f64,
    /// Calor sensível = só dissipação de equipamentos; a carga externa fica
    /// de fora por decisão de projeto, não por esquecimento.
    pub sensible_tr: f64,
    pub capacity_div75_tr: f64,
    pub margined_capacity_tr: f64,
    pub final_total_tr: f64,
    pub final_total_btu: f64,
    /// Recomendação de split (TR inteiros, arredondado para cima).
    pub split_recommendation_tr: f64,
    /// Recomendação de self-contained; mesma fórmula do split, exibida em
    /// outro campo.
    pub self_contained_recommendation_tr: f64,
    pub adiabatic_flow_m3_per_h: f64,
    /// Avisos de entrada suspeita (margem negativa, quantidade ≤ 0).
    pub warnings: Vec<String>,
}

/// Deriva os totais em sequência: cada passo consome o resultado do
/// anterior, na mesma ordem da planilha original.
pub fn compute_totals(
    items: &[EquipmentItem],
    external_load_btu: f64,
    margin_percent: f64,
) -> LoadTotals {
    let total_equipment_btu: f64 = items.iter().map(|item| item.dissipated_btu).sum();

    let sensible_btu = total_equipment_btu;
    let sensible_tr = btu_to_tr(sensible_btu);
    let capacity_div75_tr = sensible_tr / SENSIBLE_TO_TOTAL_RATIO;

    // Margem zero (ou não finita) cai no padrão de 15%, reproduzindo o
    // `margin || 15` da planilha original.
    let margin = if margin_percent == 0.0 || !margin_percent.is_finite() {
        DEFAULT_MARGIN_PERCENT
    } else {
        margin_percent
    };
    let margined_capacity_tr = capacity_div75_tr * (1.0 + margin / 100.0);

    // A carga externa entra depois da margem, não antes.
    let external_load_tr = btu_to_tr(external_load_btu);
    let final_total_tr = margined_capacity_tr + external_load_tr;
    let final_total_btu = tr_to_btu(final_total_tr);

    let mut warnings = Vec::new();
    if margin < 0.0 {
        warnings.push(format!(
            "Margem de segurança negativa ({margin}%); o total final fica abaixo da capacidade calculada."
        ));
    }
    for item in items {
        if item.qty <= 0 {
            warnings.push(format!(
                "Item \"{}\" com quantidade {} entra no total como está.",
                item.label, item.qty
            ));
        }
    }

    LoadTotals {
        total_equipment_btu,
        external_load_btu,
        external_load_tr,
        sensible_tr,
        capacity_div75_tr,
        margined_capacity_tr,
        final_total_tr,
        final_total_btu,
        split_recommendation_tr: final_total_tr.ceil(),
        self_contained_recommendation_tr: final_total_tr.ceil(),
        adiabatic_flow_m3_per_h: final_total_btu / ADIABATIC_BTU_PER_M3H,
        warnings,
    }
}
