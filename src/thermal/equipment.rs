use serde::{Deserialize, Serialize};

use crate::units::{cv_to_kw, kw_to_btu};

/// Fração da potência nominal dissipada como calor por inversores de
/// frequência.
pub const DISSIPATION_INVERTER: f64 = 0.03;
/// Fração dissipada por soft-starters e partidas diretas.
pub const DISSIPATION_SOFT_STARTER: f64 = 0.014;

/// Tipo de equipamento do painel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentKind {
    Inverter,
    SoftStarterOrDirect,
}

impl EquipmentKind {
    /// Fator de dissipação do tipo. Qualquer tipo que não seja inversor cai
    /// no fator de soft-starter/partida direta, mesmo fallback da planilha
    /// original.
    pub fn dissipation_factor(self) -> f64 {
        match self {
            EquipmentKind::Inverter => DISSIPATION_INVERTER,
            _ => DISSIPATION_SOFT_STARTER,
        }
    }
}

/// Item do quadro de equipamentos. Imutável depois de criado; para editar,
/// remova e adicione de novo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Identificador único dentro da sessão, usado na remoção.
    pub id: u64,
    pub kind: EquipmentKind,
    /// Texto exibido na lista, capturado da opção selecionada na criação.
    pub label: String,
    /// Potência nominal em CV (> 0).
    pub power_cv: f64,
    /// Quantidade. Zero vira 1 no parse de entrada; negativos passam como
    /// estão (fidelidade à planilha original).
    pub qty: i64,
    pub power_kw: f64,
    pub dissipated_kw: f64,
    pub dissipated_btu: f64,
}

impl EquipmentItem {
    /// Monta um item com os campos derivados pré-calculados. Potência ≤ 0 é
    /// rejeitada em silêncio (retorna `None`, nada é sinalizado ao usuário).
    pub fn new(id: u64, kind: EquipmentKind, label: &str, power_cv: f64, qty: i64) -> Option<Self> {
        if power_cv <= 0.0 {
            return None;
        }
        let power_kw = cv_to_kw(power_cv);
        let dissipated_kw = power_kw * qty as f64 * kind.dissipation_factor();
        let dissipated_btu = kw_to_btu(dissipated_kw);
        Some(Self {
            id,
            kind,
            label: label.to_string(),
            power_cv,
            qty,
            power_kw,
            dissipated_kw,
            dissipated_btu,
        })
    }
}
