#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Entrada da GUI desktop (eframe/egui).

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use ccm_thermal_calculator::{
    config, conversion,
    i18n::{self, keys, Translator},
    quantity::QuantityKind,
    thermal::{parse_or_default, parse_qty_or_one, EquipmentKind, Snapshot, ThermalCalculator},
};

fn main() -> Result<(), eframe::Error> {
    // Opção de idioma na linha de comando: --lang xx ou --lang=xx
    // (xx: auto/pt-br/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(900.0, 640.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = lang_cli;
    }
    eframe::run_native(
        "Calculadora Térmica CCM",
        native_options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["CCM_Calc.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Converter,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    lang_input: String,
    tab: Tab,
    calc: ThermalCalculator,
    // Sala / carga externa
    area_input: String,
    new_ref_factor_input: String,
    show_ref_modal: bool,
    // Equipamentos
    equip_kind: EquipmentKind,
    power_input: String,
    qty_input: String,
    add_feedback: Option<String>,
    // Margem
    new_margin_input: String,
    show_margin_modal: bool,
    // Conversor
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // Configurações / exportação
    show_settings_modal: bool,
    settings_status: Option<String>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = Translator::new(&resolved);
        let calc = ThermalCalculator::new(
            config.default_reference_factor_btu_per_m2,
            config.default_margin_percent,
        );
        let lang_input = config.language.clone();
        Self {
            config,
            tr,
            lang_input,
            tab: Tab::Calculator,
            calc,
            area_input: String::new(),
            new_ref_factor_input: String::new(),
            show_ref_modal: false,
            equip_kind: EquipmentKind::Inverter,
            power_input: String::new(),
            qty_input: "1".to_string(),
            add_feedback: None,
            new_margin_input: String::new(),
            show_margin_modal: false,
            conv_kind: QuantityKind::Power,
            conv_value: 0.0,
            conv_from: "kw".to_string(),
            conv_to: "cv".to_string(),
            conv_result: None,
            show_settings_modal: false,
            settings_status: None,
            export_status: None,
        }
    }

    fn kind_label(&self, kind: EquipmentKind) -> &'static str {
        match kind {
            EquipmentKind::Inverter => self.tr.t(keys::KIND_INVERTER),
            EquipmentKind::SoftStarterOrDirect => self.tr.t(keys::KIND_SOFT_DIRECT),
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_ROOM_HEADING));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("room_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::GUI_AREA_LABEL));
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.area_input).desired_width(80.0),
                    );
                    if resp.changed() {
                        self.calc.set_area(parse_or_default(&self.area_input, 0.0));
                    }
                    ui.end_row();

                    ui.label(tr.t(keys::GUI_REF_FACTOR_LABEL));
                    ui.label(format!("{:.1}", self.calc.reference_factor_btu_per_m2()));
                    if ui.button(tr.t(keys::GUI_EDIT_BUTTON)).clicked() {
                        self.new_ref_factor_input =
                            format!("{}", self.calc.reference_factor_btu_per_m2());
                        self.show_ref_modal = true;
                    }
                    ui.end_row();
                });
        });

        ui.add_space(8.0);
        ui.heading(tr.t(keys::GUI_EQUIP_HEADING));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("equip_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::GUI_KIND_LABEL));
                    let selected = self.kind_label(self.equip_kind);
                    egui::ComboBox::from_id_source("equip_kind")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for kind in
                                [EquipmentKind::Inverter, EquipmentKind::SoftStarterOrDirect]
                            {
                                let label = match kind {
                                    EquipmentKind::Inverter => tr.t(keys::KIND_INVERTER),
                                    EquipmentKind::SoftStarterOrDirect => {
                                        tr.t(keys::KIND_SOFT_DIRECT)
                                    }
                                };
                                ui.selectable_value(&mut self.equip_kind, kind, label);
                            }
                        });
                    ui.end_row();

                    ui.label(tr.t(keys::GUI_POWER_LABEL));
                    ui.add(egui::TextEdit::singleline(&mut self.power_input).desired_width(80.0));
                    ui.end_row();

                    ui.label(tr.t(keys::GUI_QTY_LABEL));
                    ui.add(egui::TextEdit::singleline(&mut self.qty_input).desired_width(80.0));
                    ui.end_row();
                });
            if ui.button(tr.t(keys::GUI_ADD_BUTTON)).clicked() {
                let power_cv = parse_or_default(&self.power_input, 0.0);
                let qty = parse_qty_or_one(&self.qty_input);
                let label = self.kind_label(self.equip_kind);
                if self.calc.add_item(self.equip_kind, label, power_cv, qty).is_some() {
                    self.power_input.clear();
                    self.qty_input = "1".to_string();
                    self.add_feedback = None;
                } else {
                    self.add_feedback = Some(tr.t(keys::GUI_ITEM_REJECTED).to_string());
                }
            }
            if let Some(msg) = &self.add_feedback {
                ui.colored_label(egui::Color32::LIGHT_RED, msg);
            }

            let snap = self.calc.snapshot();
            if !snap.items.is_empty() {
                ui.add_space(8.0);
                let mut remove_id: Option<u64> = None;
                egui::Grid::new("items_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong(tr.t(keys::GUI_COL_TYPE));
                        ui.strong(tr.t(keys::GUI_COL_QTY));
                        ui.strong(tr.t(keys::GUI_COL_POWER));
                        ui.strong(tr.t(keys::GUI_COL_DISSIPATED));
                        ui.label("");
                        ui.end_row();
                        for item in &snap.items {
                            ui.label(&item.label);
                            ui.label(format!("{}", item.qty));
                            ui.label(format!(
                                "{} CV (dissip. {:.2} kW)",
                                item.power_cv, item.dissipated_kw
                            ));
                            ui.label(format!("{:.0}", item.dissipated_btu));
                            if ui.button(tr.t(keys::GUI_REMOVE_BUTTON)).clicked() {
                                remove_id = Some(item.id);
                            }
                            ui.end_row();
                        }
                    });
                if let Some(id) = remove_id {
                    self.calc.remove_item(id);
                }
            }
        });

        ui.add_space(8.0);
        ui.heading(tr.t(keys::GUI_RESULTS_HEADING));
        let snap = self.calc.snapshot();
        let totals = &snap.totals;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::REPORT_EXTERNAL));
                    ui.label(format!(
                        "{:.0} BTU/h ({:.1} TR)",
                        totals.external_load_btu, totals.external_load_tr
                    ));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_SENSIBLE));
                    ui.label(format!("{:.1} TR", totals.sensible_tr));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_CAPACITY75));
                    ui.label(format!("{:.1} TR", totals.capacity_div75_tr));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_MARGINED));
                    ui.label(format!("{:.1} TR", totals.margined_capacity_tr));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_FINAL));
                    ui.strong(format!(
                        "{:.1} TR ({:.0} BTU/h)",
                        totals.final_total_tr, totals.final_total_btu
                    ));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_SPLIT));
                    ui.label(format!("{:.0} TR", totals.split_recommendation_tr));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_SELF));
                    ui.label(format!("{:.0} TR", totals.self_contained_recommendation_tr));
                    ui.end_row();
                    ui.label(tr.t(keys::REPORT_ADIABATIC));
                    ui.label(format!("~{:.0} m³/h", totals.adiabatic_flow_m3_per_h));
                    ui.end_row();
                });
            for w in &totals.warnings {
                ui.colored_label(egui::Color32::YELLOW, w);
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(tr.t(keys::GUI_EDIT_BUTTON).to_string() + " %").clicked() {
                    self.new_margin_input = format!("{}", snap.margin_percent);
                    self.show_margin_modal = true;
                }
                if ui.button(tr.t(keys::GUI_EXPORT_BUTTON)).clicked() {
                    if let Some(path) = FileDialog::new()
                        .set_file_name("relatorio_ccm.txt")
                        .save_file()
                    {
                        match fs::write(&path, format_report(&tr, &snap)) {
                            Ok(()) => {
                                self.export_status =
                                    Some(tr.t(keys::GUI_EXPORT_SAVED).to_string());
                            }
                            Err(e) => self.export_status = Some(format!("Erro: {e}")),
                        }
                    }
                }
                if let Some(msg) = &self.export_status {
                    ui.label(msg);
                }
            });
        });
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_TAB_CONVERTER));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND));
                    let before = self.conv_kind;
                    let options = [
                        (QuantityKind::Power, "CV / kW"),
                        (QuantityKind::HeatFlow, "BTU/h / TR / kW"),
                    ];
                    let selected = options
                        .iter()
                        .find(|(k, _)| *k == self.conv_kind)
                        .map(|(_, l)| *l)
                        .unwrap_or("");
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for (k, label) in options {
                                ui.selectable_value(&mut self.conv_kind, k, label);
                            }
                        });
                    if before != self.conv_kind {
                        let (f, t) = default_units_for_kind(self.conv_kind);
                        self.conv_from = f.to_string();
                        self.conv_to = t.to_string();
                        self.conv_result = None;
                    }
                    ui.end_row();

                    ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT));
                    egui::ComboBox::from_id_source("conv_from")
                        .selected_text(self.conv_from.clone())
                        .show_ui(ui, |ui| {
                            for unit in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_from, unit.to_string(), *unit);
                            }
                        });
                    ui.end_row();

                    ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT));
                    egui::ComboBox::from_id_source("conv_to")
                        .selected_text(self.conv_to.clone())
                        .show_ui(ui, |ui| {
                            for unit in unit_options(self.conv_kind) {
                                ui.selectable_value(&mut self.conv_to, unit.to_string(), *unit);
                            }
                        });
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(tr.t(keys::GUI_CONVERT_BUTTON)).clicked() {
                self.conv_result = match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => Some(format!("{v:.4} {}", self.conv_to.trim())),
                    Err(e) => Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                };
            }
            if let Some(res) = &self.conv_result {
                ui.label(res);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        // Barra superior
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                ui.selectable_value(&mut self.tab, Tab::Calculator, tr.t(keys::GUI_TAB_CALCULATOR));
                ui.selectable_value(&mut self.tab, Tab::Converter, tr.t(keys::GUI_TAB_CONVERTER));
                ui.separator();
                if ui.button(tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // Modal do fator de referência (equivalente ao modal da versão web)
        if self.show_ref_modal {
            let mut apply = false;
            egui::Window::new(tr.t(keys::GUI_REF_MODAL_TITLE))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_ref_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::GUI_REF_FACTOR_LABEL));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.new_ref_factor_input)
                            .desired_width(80.0),
                    );
                    if ui.button(tr.t(keys::GUI_APPLY_BUTTON)).clicked() {
                        apply = true;
                    }
                });
            if apply {
                // Valores negativos ou inválidos são descartados pela borda,
                // como no diálogo original; o núcleo não revalida.
                if let Ok(v) = self.new_ref_factor_input.trim().parse::<f64>() {
                    if v >= 0.0 {
                        self.calc.set_reference_factor(v);
                        self.show_ref_modal = false;
                    }
                }
            }
        }

        // Modal da margem de segurança
        if self.show_margin_modal {
            let mut apply = false;
            egui::Window::new(tr.t(keys::GUI_MARGIN_MODAL_TITLE))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_margin_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_MARGIN_DEFAULT));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.new_margin_input)
                            .desired_width(80.0),
                    );
                    if ui.button(tr.t(keys::GUI_APPLY_BUTTON)).clicked() {
                        apply = true;
                    }
                });
            if apply {
                if let Ok(v) = self.new_margin_input.trim().parse::<f64>() {
                    if v >= 0.0 {
                        self.calc.set_margin_percent(v);
                        self.show_margin_modal = false;
                    }
                }
            }
        }

        // Modal de configurações
        if self.show_settings_modal {
            let mut save = false;
            egui::Window::new(tr.t(keys::GUI_SETTINGS_TITLE))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_LANG));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                            ui.selectable_value(
                                &mut self.lang_input,
                                "pt-br".into(),
                                "Português (BR)",
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                        });
                    ui.separator();
                    ui.label(tr.t(keys::GUI_SETTINGS_REF_DEFAULT));
                    ui.add(
                        egui::DragValue::new(
                            &mut self.config.default_reference_factor_btu_per_m2,
                        )
                        .speed(1.0),
                    );
                    ui.label(tr.t(keys::GUI_SETTINGS_MARGIN_DEFAULT));
                    ui.add(
                        egui::DragValue::new(&mut self.config.default_margin_percent).speed(1.0),
                    );
                    ui.separator();
                    if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                        save = true;
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg);
                    }
                });
            if save {
                self.config.language = self.lang_input.clone();
                let resolved = i18n::resolve_language(&self.config.language, None);
                self.tr = Translator::new(&resolved);
                self.settings_status = match self.config.save() {
                    Ok(()) => Some(self.tr.t(keys::GUI_SETTINGS_SAVED).to_string()),
                    Err(e) => Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
                };
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Converter => self.ui_converter(ui),
                });
        });
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Power => ("kw", "cv"),
        QuantityKind::HeatFlow => ("btu/h", "tr"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Power => &["cv", "kw"],
        QuantityKind::HeatFlow => &["btu/h", "tr", "kw"],
    }
}

/// Monta o texto do relatório exportado.
fn format_report(tr: &Translator, snap: &Snapshot) -> String {
    let totals = &snap.totals;
    let mut out = String::new();
    out.push_str(tr.t(keys::REPORT_TITLE).trim_start());
    out.push('\n');
    out.push_str(&format!("{} {:.1} m²\n", tr.t(keys::REPORT_AREA), snap.area_m2));
    out.push_str(&format!(
        "{} {:.0} BTU/h ({:.1} TR)\n",
        tr.t(keys::REPORT_EXTERNAL),
        totals.external_load_btu,
        totals.external_load_tr
    ));
    for item in &snap.items {
        out.push_str(&format!(
            "- {} x{} | {} CV | {:.0} BTU/h\n",
            item.label, item.qty, item.power_cv, item.dissipated_btu
        ));
    }
    out.push_str(&format!(
        "{} {:.1} TR\n",
        tr.t(keys::REPORT_SENSIBLE),
        totals.sensible_tr
    ));
    out.push_str(&format!(
        "{} {:.1} TR\n",
        tr.t(keys::REPORT_CAPACITY75),
        totals.capacity_div75_tr
    ));
    out.push_str(&format!(
        "{} {:.1} TR\n",
        tr.t(keys::REPORT_MARGINED),
        totals.margined_capacity_tr
    ));
    out.push_str(&format!(
        "{} {:.1} TR ({:.0} BTU/h)\n",
        tr.t(keys::REPORT_FINAL),
        totals.final_total_tr,
        totals.final_total_btu
    ));
    out.push_str(&format!(
        "{} {:.0} TR\n",
        tr.t(keys::REPORT_SPLIT),
        totals.split_recommendation_tr
    ));
    out.push_str(&format!(
        "{} {:.0} TR\n",
        tr.t(keys::REPORT_SELF),
        totals.self_contained_recommendation_tr
    ));
    out.push_str(&format!(
        "{} ~{:.0} m³/h\n",
        tr.t(keys::REPORT_ADIABATIC),
        totals.adiabatic_flow_m3_per_h
    ));
    for w in &totals.warnings {
        out.push_str(&format!("! {w}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_applies_config_defaults() {
        let cfg = config::Config {
            language: "pt-br".to_string(),
            default_reference_factor_btu_per_m2: 120.0,
            default_margin_percent: 20.0,
        };
        let app = GuiApp::new(cfg);
        assert_eq!(app.calc.reference_factor_btu_per_m2(), 120.0);
        assert_eq!(app.calc.margin_percent(), 20.0);
        assert_eq!(app.tab, Tab::Calculator);
    }

    #[test]
    fn report_contains_final_total() {
        let cfg = config::Config::default();
        let mut app = GuiApp::new(cfg);
        app.calc.set_area(50.0);
        app.calc
            .add_item(EquipmentKind::Inverter, "Inversor de frequência", 10.0, 1)
            .unwrap();
        let text = format_report(&app.tr, &app.calc.snapshot());
        assert!(text.contains("TR"));
        assert!(text.contains("Inversor de frequência"));
    }
}
