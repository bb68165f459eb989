use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::thermal::{
    parse_or_default, parse_qty_or_one, EquipmentKind, Snapshot, ThermalCalculator,
};

/// Opções do menu principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    UnitConversion,
    Settings,
    Exit,
}

/// Mostra o menu principal e devolve a escolha.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculator),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Sessão interativa da calculadora. O estado vive só dentro desta chamada;
/// voltar ao menu principal descarta tudo.
pub fn handle_calculator(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mut calc = ThermalCalculator::new(
        cfg.default_reference_factor_btu_per_m2,
        cfg.default_margin_percent,
    );
    loop {
        println!("{}", tr.t(keys::CALC_HEADING));
        println!("{}", tr.t(keys::CALC_MENU_AREA));
        println!("{}", tr.t(keys::CALC_MENU_REF_FACTOR));
        println!("{}", tr.t(keys::CALC_MENU_ADD));
        println!("{}", tr.t(keys::CALC_MENU_REMOVE));
        println!("{}", tr.t(keys::CALC_MENU_MARGIN));
        println!("{}", tr.t(keys::CALC_MENU_REPORT));
        println!("{}", tr.t(keys::CALC_MENU_BACK));
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => {
                // Entrada segue a política de default: inválido vira 0.
                let raw = read_line(tr.t(keys::PROMPT_AREA))?;
                calc.set_area(parse_or_default(&raw, 0.0));
                print_report(tr, &calc.snapshot());
            }
            "2" => {
                let raw = read_line(tr.t(keys::PROMPT_REF_FACTOR))?;
                calc.set_reference_factor(parse_or_default(&raw, 0.0));
                print_report(tr, &calc.snapshot());
            }
            "3" => {
                let kind = loop {
                    let raw = read_line(tr.t(keys::PROMPT_EQUIP_KIND))?;
                    match raw.trim() {
                        "1" => break EquipmentKind::Inverter,
                        "2" => break EquipmentKind::SoftStarterOrDirect,
                        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
                    }
                };
                let label = match kind {
                    EquipmentKind::Inverter => tr.t(keys::KIND_INVERTER),
                    EquipmentKind::SoftStarterOrDirect => tr.t(keys::KIND_SOFT_DIRECT),
                };
                let power_raw = read_line(tr.t(keys::PROMPT_POWER_CV))?;
                let power_cv = parse_or_default(&power_raw, 0.0);
                let qty_raw = read_line(tr.t(keys::PROMPT_QTY))?;
                let qty = parse_qty_or_one(&qty_raw);
                match calc.add_item(kind, label, power_cv, qty) {
                    Some(item) => {
                        println!(
                            "{} #{} {} {}x{} CV",
                            tr.t(keys::ITEM_ADDED),
                            item.id,
                            item.label,
                            item.qty,
                            item.power_cv
                        );
                    }
                    None => println!("{}", tr.t(keys::ITEM_REJECTED)),
                }
                print_report(tr, &calc.snapshot());
            }
            "4" => {
                let raw = read_line(tr.t(keys::PROMPT_REMOVE_ID))?;
                let id = parse_or_default(&raw, 0.0) as u64;
                if calc.remove_item(id) {
                    println!("{}", tr.t(keys::ITEM_REMOVED));
                } else {
                    println!("{}", tr.t(keys::ITEM_NOT_FOUND));
                }
                print_report(tr, &calc.snapshot());
            }
            "5" => {
                let raw = read_line(tr.t(keys::PROMPT_MARGIN))?;
                calc.set_margin_percent(parse_or_default(&raw, 0.0));
                print_report(tr, &calc.snapshot());
            }
            "6" => print_report(tr, &calc.snapshot()),
            "0" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Menu do conversor de unidades avulso.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match sel.trim() {
            "1" => break QuantityKind::Power,
            "2" => break QuantityKind::HeatFlow,
            _ => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result:.4} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// Menu de configurações.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} BTU/h·m², {}%, {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.default_reference_factor_btu_per_m2,
        cfg.default_margin_percent,
        cfg.language
    );
    let raw = read_line(tr.t(keys::SETTINGS_PROMPT_REF))?;
    if !raw.trim().is_empty() {
        cfg.default_reference_factor_btu_per_m2 =
            parse_or_default(&raw, cfg.default_reference_factor_btu_per_m2);
    }
    let raw = read_line(tr.t(keys::SETTINGS_PROMPT_MARGIN))?;
    if !raw.trim().is_empty() {
        cfg.default_margin_percent = parse_or_default(&raw, cfg.default_margin_percent);
    }
    let raw = read_line(tr.t(keys::SETTINGS_PROMPT_LANG))?;
    if !raw.trim().is_empty() {
        cfg.language = raw.trim().to_string();
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// Imprime o retrato atual no formato do relatório.
pub fn print_report(tr: &Translator, snap: &Snapshot) {
    let totals = &snap.totals;
    println!("{}", tr.t(keys::REPORT_TITLE));
    println!("{} {:.1} m²", tr.t(keys::REPORT_AREA), snap.area_m2);
    println!(
        "{} {:.0} BTU/h ({:.1} TR)",
        tr.t(keys::REPORT_EXTERNAL),
        totals.external_load_btu,
        totals.external_load_tr
    );
    if !snap.items.is_empty() {
        println!("{}", tr.t(keys::REPORT_ITEMS_HEADER));
        for item in &snap.items {
            println!(
                "{} | {} | {} | {} CV ({:.2} kW, dissip. {:.2} kW) | {:.0}",
                item.id,
                item.label,
                item.qty,
                item.power_cv,
                item.power_kw,
                item.dissipated_kw,
                item.dissipated_btu
            );
        }
    }
    println!("{} {:.1} TR", tr.t(keys::REPORT_SENSIBLE), totals.sensible_tr);
    println!(
        "{} {:.1} TR",
        tr.t(keys::REPORT_CAPACITY75),
        totals.capacity_div75_tr
    );
    println!(
        "{} {:.1} TR",
        tr.t(keys::REPORT_MARGINED),
        totals.margined_capacity_tr
    );
    println!(
        "{} {:.1} TR ({:.0} BTU/h)",
        tr.t(keys::REPORT_FINAL),
        totals.final_total_tr,
        totals.final_total_btu
    );
    println!(
        "{} {:.0} TR",
        tr.t(keys::REPORT_SPLIT),
        totals.split_recommendation_tr
    );
    println!(
        "{} {:.0} TR",
        tr.t(keys::REPORT_SELF),
        totals.self_contained_recommendation_tr
    );
    println!(
        "{} ~{:.0} m³/h",
        tr.t(keys::REPORT_ADIABATIC),
        totals.adiabatic_flow_m3_per_h
    );
    if !totals.warnings.is_empty() {
        println!("{}", tr.t(keys::REPORT_WARNINGS));
        for w in &totals.warnings {
            println!("- {w}");
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
