use crate::quantity::QuantityKind;
use crate::units::*;

/// Erros possíveis na conversão de unidades.
#[derive(Debug)]
pub enum ConversionError {
    /// Texto de unidade desconhecido
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unidade desconhecida: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Converte um valor recebendo as unidades como texto (`cv`, `kw`, `btu/h`,
/// `tr`). Usado pelo conversor avulso das interfaces.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::HeatFlow => {
            let from = parse_heat_flow_unit(from_unit_str)?;
            let to = parse_heat_flow_unit(to_unit_str)?;
            Ok(convert_heat_flow(value, from, to))
        }
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "cv" | "cavalo-vapor" | "hp(m)" => Ok(PowerUnit::CavaloVapor),
        "kw" | "kilowatt" | "quilowatt" => Ok(PowerUnit::Kilowatt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_heat_flow_unit(s: &str) -> Result<HeatFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "btu/h" | "btuh" | "btu" => Ok(HeatFlowUnit::BtuPerHour),
        "tr" | "ton" => Ok(HeatFlowUnit::TonRefrigeration),
        "kw" | "kilowatt" | "quilowatt" => Ok(HeatFlowUnit::Kilowatt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
