use serde::{Deserialize, Serialize};

use crate::thermal::equipment::{EquipmentItem, EquipmentKind};
use crate::thermal::load::{self, LoadTotals};

/// Estado de uma sessão da calculadora. É criado no início da sessão e
/// descartado no fim; nada é persistido.
///
/// Toda mutação passa pelos métodos `set_*`/`add_item`/`remove_item`; as
/// interfaces leem o resultado chamando [`ThermalCalculator::snapshot`] após
/// cada mutação, em vez do recálculo implícito por evento da planilha
/// original.
#[derive(Debug, Clone)]
pub struct ThermalCalculator {
    area_m2: f64,
    reference_factor_btu_per_m2: f64,
    margin_percent: f64,
    items: Vec<EquipmentItem>,
    next_id: u64,
}

/// Retrato imutável do estado mais os totais derivados, pronto para
/// renderização. Função pura do estado: duas chamadas sem mutação no meio
/// produzem retratos idênticos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub area_m2: f64,
    pub reference_factor_btu_per_m2: f64,
    pub margin_percent: f64,
    pub items: Vec<EquipmentItem>,
    pub totals: LoadTotals,
}

impl ThermalCalculator {
    /// Cria uma sessão vazia com o fator de referência e a margem iniciais
    /// (normalmente os padrões do config.toml).
    pub fn new(reference_factor_btu_per_m2: f64, margin_percent: f64) -> Self {
        Self {
            area_m2: 0.0,
            reference_factor_btu_per_m2,
            margin_percent,
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn reference_factor_btu_per_m2(&self) -> f64 {
        self.reference_factor_btu_per_m2
    }

    pub fn margin_percent(&self) -> f64 {
        self.margin_percent
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn set_area(&mut self, area_m2: f64) {
        self.area_m2 = area_m2;
    }

    pub fn set_reference_factor(&mut self, factor_btu_per_m2: f64) {
        self.reference_factor_btu_per_m2 = factor_btu_per_m2;
    }

    pub fn set_margin_percent(&mut self, margin_percent: f64) {
        self.margin_percent = margin_percent;
    }

    /// Adiciona um item ao quadro. Potência ≤ 0 é rejeitada em silêncio e o
    /// quadro não muda (`None`). A quantidade é usada como veio; o parse de
    /// entrada fica em [`parse_qty_or_one`].
    pub fn add_item(
        &mut self,
        kind: EquipmentKind,
        label: &str,
        power_cv: f64,
        qty: i64,
    ) -> Option<&EquipmentItem> {
        let item = EquipmentItem::new(self.next_id, kind, label, power_cv, qty)?;
        self.next_id += 1;
        self.items.push(item);
        self.items.last()
    }

    /// Remove o item com o id dado. Id inexistente é no-op e retorna `false`.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Carga externa atual (área × fator de referência), em BTU/h.
    pub fn external_load_btu(&self) -> f64 {
        load::external_load_btu(self.area_m2, self.reference_factor_btu_per_m2)
    }

    /// Calcula os totais e devolve um retrato completo para exibição.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            area_m2: self.area_m2,
            reference_factor_btu_per_m2: self.reference_factor_btu_per_m2,
            margin_percent: self.margin_percent,
            items: self.items.clone(),
            totals: load::compute_totals(&self.items, self.external_load_btu(), self.margin_percent),
        }
    }
}

/// Política de entrada numérica: texto ausente, inválido ou não finito vira
/// o valor padrão. Nomeada de propósito para os testes cobrirem o caminho de
/// default de forma determinística.
pub fn parse_or_default(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Quantidade: falha de parse ou zero viram 1 (semântica de falsy da
/// planilha original); negativos validamente digitados passam como estão.
pub fn parse_qty_or_one(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}
