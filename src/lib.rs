//! Lógica de cálculo separada em biblioteca para que a CLI e a GUI usem o
//! mesmo núcleo.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod thermal;
pub mod ui_cli;
pub mod units;
