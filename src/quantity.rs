/// Tipos de grandeza tratados pelo conversor de unidades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Power,
    HeatFlow,
}
