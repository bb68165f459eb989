//! Módulos de cálculo de carga térmica para salas de CCM.

pub mod calculator;
pub mod equipment;
pub mod load;

pub use calculator::*;
pub use equipment::*;
pub use load::*;
