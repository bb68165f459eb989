//! Definições de unidades e conversões.

pub mod heat_flow;
pub mod power;

pub use heat_flow::{
    btu_to_tr, convert_heat_flow, kw_to_btu, tr_to_btu, HeatFlowUnit, BTU_TO_TR, KW_TO_BTU,
};
pub use power::{convert_power, cv_to_kw, kw_to_cv, PowerUnit, CV_TO_KW};
