use sys_locale::get_locale;

/// Namespace com as chaves de texto da interface.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_MENU_AREA: &str = "calc.menu.area";
    pub const CALC_MENU_REF_FACTOR: &str = "calc.menu.ref_factor";
    pub const CALC_MENU_ADD: &str = "calc.menu.add";
    pub const CALC_MENU_REMOVE: &str = "calc.menu.remove";
    pub const CALC_MENU_MARGIN: &str = "calc.menu.margin";
    pub const CALC_MENU_REPORT: &str = "calc.menu.report";
    pub const CALC_MENU_BACK: &str = "calc.menu.back";

    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_REF_FACTOR: &str = "prompt.ref_factor";
    pub const PROMPT_MARGIN: &str = "prompt.margin";
    pub const PROMPT_EQUIP_KIND: &str = "prompt.equip_kind";
    pub const PROMPT_POWER_CV: &str = "prompt.power_cv";
    pub const PROMPT_QTY: &str = "prompt.qty";
    pub const PROMPT_REMOVE_ID: &str = "prompt.remove_id";

    pub const KIND_INVERTER: &str = "kind.inverter";
    pub const KIND_SOFT_DIRECT: &str = "kind.soft_direct";

    pub const ITEM_ADDED: &str = "item.added";
    pub const ITEM_REJECTED: &str = "item.rejected";
    pub const ITEM_REMOVED: &str = "item.removed";
    pub const ITEM_NOT_FOUND: &str = "item.not_found";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_AREA: &str = "report.area";
    pub const REPORT_EXTERNAL: &str = "report.external";
    pub const REPORT_ITEMS_HEADER: &str = "report.items_header";
    pub const REPORT_SENSIBLE: &str = "report.sensible";
    pub const REPORT_CAPACITY75: &str = "report.capacity75";
    pub const REPORT_MARGINED: &str = "report.margined";
    pub const REPORT_FINAL: &str = "report.final";
    pub const REPORT_SPLIT: &str = "report.split";
    pub const REPORT_SELF: &str = "report.self_contained";
    pub const REPORT_ADIABATIC: &str = "report.adiabatic";
    pub const REPORT_WARNINGS: &str = "report.warnings";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_REF: &str = "settings.prompt_ref";
    pub const SETTINGS_PROMPT_MARGIN: &str = "settings.prompt_margin";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const GUI_APP_TITLE: &str = "gui.app_title";
    pub const GUI_TAB_CALCULATOR: &str = "gui.tab.calculator";
    pub const GUI_TAB_CONVERTER: &str = "gui.tab.converter";
    pub const GUI_ROOM_HEADING: &str = "gui.room.heading";
    pub const GUI_AREA_LABEL: &str = "gui.room.area";
    pub const GUI_REF_FACTOR_LABEL: &str = "gui.room.ref_factor";
    pub const GUI_EDIT_BUTTON: &str = "gui.button.edit";
    pub const GUI_EQUIP_HEADING: &str = "gui.equip.heading";
    pub const GUI_KIND_LABEL: &str = "gui.equip.kind";
    pub const GUI_POWER_LABEL: &str = "gui.equip.power";
    pub const GUI_QTY_LABEL: &str = "gui.equip.qty";
    pub const GUI_ADD_BUTTON: &str = "gui.button.add";
    pub const GUI_REMOVE_BUTTON: &str = "gui.button.remove";
    pub const GUI_COL_TYPE: &str = "gui.col.type";
    pub const GUI_COL_QTY: &str = "gui.col.qty";
    pub const GUI_COL_POWER: &str = "gui.col.power";
    pub const GUI_COL_DISSIPATED: &str = "gui.col.dissipated";
    pub const GUI_RESULTS_HEADING: &str = "gui.results.heading";
    pub const GUI_EXPORT_BUTTON: &str = "gui.button.export";
    pub const GUI_EXPORT_SAVED: &str = "gui.export.saved";
    pub const GUI_REF_MODAL_TITLE: &str = "gui.modal.ref_factor";
    pub const GUI_MARGIN_MODAL_TITLE: &str = "gui.modal.margin";
    pub const GUI_APPLY_BUTTON: &str = "gui.button.apply";
    pub const GUI_CONVERT_BUTTON: &str = "gui.button.convert";
    pub const GUI_ITEM_REJECTED: &str = "gui.item.rejected";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_LANG: &str = "gui.settings.lang";
    pub const GUI_SETTINGS_REF_DEFAULT: &str = "gui.settings.ref_default";
    pub const GUI_SETTINGS_MARGIN_DEFAULT: &str = "gui.settings.margin_default";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
    pub const GUI_SETTINGS_SAVED: &str = "gui.settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

/// Fornece os textos da interface no idioma ativo.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// Cria o tradutor a partir do código de idioma (pt/en). Códigos
    /// desconhecidos caem em pt.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Busca a tradução. Sem tradução em inglês, cai no texto em português.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// Resolve o idioma na ordem flag de CLI → configuração → sistema.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pt" => Some("pt".into()),
        "pt-br" => Some("pt-br".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Estima o idioma pelo locale do sistema.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando o programa.",
        MAIN_MENU_TITLE => "\n=== Calculadora Térmica CCM ===",
        MAIN_MENU_CALCULATOR => "1) Calculadora de carga térmica",
        MAIN_MENU_UNIT_CONVERSION => "2) Conversor de unidades",
        MAIN_MENU_SETTINGS => "3) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha do menu: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Escolha de novo.",
        CALC_HEADING => "\n-- Carga térmica da sala de CCM --",
        CALC_MENU_AREA => "1) Definir área da sala",
        CALC_MENU_REF_FACTOR => "2) Editar fator de referência externo",
        CALC_MENU_ADD => "3) Adicionar equipamento",
        CALC_MENU_REMOVE => "4) Remover equipamento",
        CALC_MENU_MARGIN => "5) Editar margem de segurança",
        CALC_MENU_REPORT => "6) Mostrar relatório",
        CALC_MENU_BACK => "0) Voltar",
        PROMPT_AREA => "Área da sala [m²]: ",
        PROMPT_REF_FACTOR => "Fator de referência [BTU/h·m²]: ",
        PROMPT_MARGIN => "Margem de segurança [%]: ",
        PROMPT_EQUIP_KIND => "Tipo (1=Inversor, 2=Soft-starter/Partida direta): ",
        PROMPT_POWER_CV => "Potência nominal [CV]: ",
        PROMPT_QTY => "Quantidade (vazio = 1): ",
        PROMPT_REMOVE_ID => "Id do item a remover: ",
        KIND_INVERTER => "Inversor de frequência",
        KIND_SOFT_DIRECT => "Soft-starter / Partida direta",
        ITEM_ADDED => "Item adicionado:",
        ITEM_REJECTED => "Potência ≤ 0; nada foi adicionado.",
        ITEM_REMOVED => "Item removido.",
        ITEM_NOT_FOUND => "Id não encontrado; nada mudou.",
        REPORT_TITLE => "\n== Relatório de carga térmica ==",
        REPORT_AREA => "Área da sala:",
        REPORT_EXTERNAL => "Carga externa:",
        REPORT_ITEMS_HEADER => "Id | Tipo | Qtd | Potência | Dissipação",
        REPORT_SENSIBLE => "Calor sensível (equipamentos):",
        REPORT_CAPACITY75 => "Capacidade total (sensível / 0,75):",
        REPORT_MARGINED => "Carga total + margem de segurança:",
        REPORT_FINAL => "Total final (com carga externa):",
        REPORT_SPLIT => "Recomendação split:",
        REPORT_SELF => "Recomendação self-contained:",
        REPORT_ADIABATIC => "Vazão adiabática estimada:",
        REPORT_WARNINGS => "Avisos:",
        UNIT_CONVERSION_HEADING => "\n-- Conversão de unidades --",
        UNIT_CONVERSION_OPTIONS => "1) Potência (CV/kW)  2) Fluxo de calor (BTU/h, TR, kW)",
        UNIT_CONVERSION_PROMPT_KIND => "Número da grandeza: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Valor: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "Unidade de origem (ex: cv, kw, btu/h, tr): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "Unidade de destino (ex: kw, cv, tr): ",
        UNIT_CONVERSION_RESULT => "Resultado:",
        UNIT_CONVERSION_UNSUPPORTED => "Número não suportado.",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT => "Valores atuais:",
        SETTINGS_PROMPT_REF => "Fator de referência padrão [BTU/h·m²] (enter mantém): ",
        SETTINGS_PROMPT_MARGIN => "Margem padrão [%] (enter mantém): ",
        SETTINGS_PROMPT_LANG => "Idioma (auto/pt-br/en-us, enter mantém): ",
        SETTINGS_SAVED => "Configurações salvas.",
        ERROR_INVALID_NUMBER => "Digite um número.",
        GUI_APP_TITLE => "Calculadora Térmica CCM",
        GUI_TAB_CALCULATOR => "Calculadora",
        GUI_TAB_CONVERTER => "Conversor",
        GUI_ROOM_HEADING => "Sala / carga externa",
        GUI_AREA_LABEL => "Área [m²]",
        GUI_REF_FACTOR_LABEL => "Fator de referência [BTU/h·m²]",
        GUI_EDIT_BUTTON => "Editar…",
        GUI_EQUIP_HEADING => "Equipamentos do painel",
        GUI_KIND_LABEL => "Tipo",
        GUI_POWER_LABEL => "Potência [CV]",
        GUI_QTY_LABEL => "Quantidade",
        GUI_ADD_BUTTON => "Adicionar",
        GUI_REMOVE_BUTTON => "Remover",
        GUI_COL_TYPE => "Tipo",
        GUI_COL_QTY => "Qtd",
        GUI_COL_POWER => "Potência",
        GUI_COL_DISSIPATED => "Dissipação [BTU/h]",
        GUI_RESULTS_HEADING => "Resultados",
        GUI_EXPORT_BUTTON => "Exportar relatório…",
        GUI_EXPORT_SAVED => "Relatório salvo.",
        GUI_REF_MODAL_TITLE => "Fator de referência externo",
        GUI_MARGIN_MODAL_TITLE => "Margem de segurança",
        GUI_APPLY_BUTTON => "Aplicar",
        GUI_CONVERT_BUTTON => "Converter",
        GUI_ITEM_REJECTED => "Potência ≤ 0; item não adicionado.",
        GUI_SETTINGS_TITLE => "Configurações",
        GUI_SETTINGS_LANG => "Idioma",
        GUI_SETTINGS_REF_DEFAULT => "Fator de referência padrão [BTU/h·m²]",
        GUI_SETTINGS_MARGIN_DEFAULT => "Margem padrão [%]",
        GUI_SETTINGS_SAVE => "Salvar",
        GUI_SETTINGS_SAVED => "Salvo.",
        _ => "[tradução ausente]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== CCM Thermal Calculator ===",
        MAIN_MENU_CALCULATOR => "1) Thermal load calculator",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- CCM room thermal load --",
        CALC_MENU_AREA => "1) Set room area",
        CALC_MENU_REF_FACTOR => "2) Edit external reference factor",
        CALC_MENU_ADD => "3) Add equipment",
        CALC_MENU_REMOVE => "4) Remove equipment",
        CALC_MENU_MARGIN => "5) Edit safety margin",
        CALC_MENU_REPORT => "6) Show report",
        CALC_MENU_BACK => "0) Back",
        PROMPT_AREA => "Room area [m²]: ",
        PROMPT_REF_FACTOR => "Reference factor [BTU/h·m²]: ",
        PROMPT_MARGIN => "Safety margin [%]: ",
        PROMPT_EQUIP_KIND => "Type (1=Inverter, 2=Soft-starter/Direct on-line): ",
        PROMPT_POWER_CV => "Rated power [CV]: ",
        PROMPT_QTY => "Quantity (empty = 1): ",
        PROMPT_REMOVE_ID => "Id of the item to remove: ",
        KIND_INVERTER => "Frequency inverter",
        KIND_SOFT_DIRECT => "Soft-starter / Direct on-line",
        ITEM_ADDED => "Item added:",
        ITEM_REJECTED => "Power ≤ 0; nothing was added.",
        ITEM_REMOVED => "Item removed.",
        ITEM_NOT_FOUND => "Id not found; nothing changed.",
        REPORT_TITLE => "\n== Thermal load report ==",
        REPORT_AREA => "Room area:",
        REPORT_EXTERNAL => "External load:",
        REPORT_ITEMS_HEADER => "Id | Type | Qty | Power | Dissipation",
        REPORT_SENSIBLE => "Sensible heat (equipment):",
        REPORT_CAPACITY75 => "Total capacity (sensible / 0.75):",
        REPORT_MARGINED => "Total load + safety margin:",
        REPORT_FINAL => "Final total (with external load):",
        REPORT_SPLIT => "Split recommendation:",
        REPORT_SELF => "Self-contained recommendation:",
        REPORT_ADIABATIC => "Estimated adiabatic airflow:",
        REPORT_WARNINGS => "Warnings:",
        UNIT_CONVERSION_HEADING => "\n-- Unit conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Power (CV/kW)  2) Heat flow (BTU/h, TR, kW)",
        UNIT_CONVERSION_PROMPT_KIND => "Quantity number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: cv, kw, btu/h, tr): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: kw, cv, tr): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current values:",
        SETTINGS_PROMPT_REF => "Default reference factor [BTU/h·m²] (enter keeps): ",
        SETTINGS_PROMPT_MARGIN => "Default margin [%] (enter keeps): ",
        SETTINGS_PROMPT_LANG => "Language (auto/pt-br/en-us, enter keeps): ",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        GUI_APP_TITLE => "CCM Thermal Calculator",
        GUI_TAB_CALCULATOR => "Calculator",
        GUI_TAB_CONVERTER => "Converter",
        GUI_ROOM_HEADING => "Room / external load",
        GUI_AREA_LABEL => "Area [m²]",
        GUI_REF_FACTOR_LABEL => "Reference factor [BTU/h·m²]",
        GUI_EDIT_BUTTON => "Edit…",
        GUI_EQUIP_HEADING => "Panel equipment",
        GUI_KIND_LABEL => "Type",
        GUI_POWER_LABEL => "Power [CV]",
        GUI_QTY_LABEL => "Quantity",
        GUI_ADD_BUTTON => "Add",
        GUI_REMOVE_BUTTON => "Remove",
        GUI_COL_TYPE => "Type",
        GUI_COL_QTY => "Qty",
        GUI_COL_POWER => "Power",
        GUI_COL_DISSIPATED => "Dissipation [BTU/h]",
        GUI_RESULTS_HEADING => "Results",
        GUI_EXPORT_BUTTON => "Export report…",
        GUI_EXPORT_SAVED => "Report saved.",
        GUI_REF_MODAL_TITLE => "External reference factor",
        GUI_MARGIN_MODAL_TITLE => "Safety margin",
        GUI_APPLY_BUTTON => "Apply",
        GUI_CONVERT_BUTTON => "Convert",
        GUI_ITEM_REJECTED => "Power ≤ 0; item not added.",
        GUI_SETTINGS_TITLE => "Settings",
        GUI_SETTINGS_LANG => "Language",
        GUI_SETTINGS_REF_DEFAULT => "Default reference factor [BTU/h·m²]",
        GUI_SETTINGS_MARGIN_DEFAULT => "Default margin [%]",
        GUI_SETTINGS_SAVE => "Save",
        GUI_SETTINGS_SAVED => "Saved.",
        _ => return None,
    })
}
