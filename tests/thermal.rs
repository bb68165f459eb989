use ccm_thermal_calculator::thermal::{
    compute_totals, external_load_btu, parse_or_default, parse_qty_or_one, EquipmentItem,
    EquipmentKind, ThermalCalculator, DEFAULT_MARGIN_PERCENT, DISSIPATION_INVERTER,
    DISSIPATION_SOFT_STARTER,
};
use ccm_thermal_calculator::units::{BTU_TO_TR, CV_TO_KW, KW_TO_BTU};

#[test]
fn external_load_from_area_and_factor() {
    let btu = external_load_btu(50.0, 100.0);
    assert!((btu - 5000.0).abs() < 1e-9);
    let tr = btu / BTU_TO_TR;
    assert!((tr - 0.4166666).abs() < 1e-4);
}

#[test]
fn inverter_dissipation_matches_formula() {
    // 10 CV → kW → 3% dissipado → BTU/h
    let item = EquipmentItem::new(1, EquipmentKind::Inverter, "Inversor", 10.0, 1).unwrap();
    let expected_kw = 10.0 * CV_TO_KW * DISSIPATION_INVERTER;
    let expected_btu = expected_kw * KW_TO_BTU;
    assert!((item.dissipated_kw - expected_kw).abs() < 1e-9);
    assert!((item.dissipated_btu - expected_btu).abs() < 1e-6);
}

#[test]
fn soft_starter_uses_lower_factor() {
    let item =
        EquipmentItem::new(1, EquipmentKind::SoftStarterOrDirect, "Partida direta", 10.0, 2)
            .unwrap();
    let expected_kw = 10.0 * CV_TO_KW * 2.0 * DISSIPATION_SOFT_STARTER;
    assert!((item.dissipated_kw - expected_kw).abs() < 1e-9);
}

#[test]
fn quantity_scales_dissipation_linearly() {
    let one = EquipmentItem::new(1, EquipmentKind::Inverter, "Inversor", 5.0, 1).unwrap();
    let three = EquipmentItem::new(2, EquipmentKind::Inverter, "Inversor", 5.0, 3).unwrap();
    assert!((three.dissipated_btu - 3.0 * one.dissipated_btu).abs() < 1e-9);
}

#[test]
fn full_pipeline_scenario() {
    // Sala de 50 m² a 100 BTU/h·m², um inversor de 10 CV, margem padrão.
    let mut calc = ThermalCalculator::new(100.0, 15.0);
    calc.set_area(50.0);
    calc.add_item(EquipmentKind::Inverter, "Inversor", 10.0, 1)
        .unwrap();
    let snap = calc.snapshot();
    let totals = &snap.totals;

    let equip_btu = 10.0 * CV_TO_KW * DISSIPATION_INVERTER * KW_TO_BTU;
    assert!((totals.total_equipment_btu - equip_btu).abs() < 1e-6);

    let sensible_tr = equip_btu / BTU_TO_TR;
    assert!((totals.sensible_tr - sensible_tr).abs() < 1e-9);

    let capacity = sensible_tr / 0.75;
    assert!((totals.capacity_div75_tr - capacity).abs() < 1e-9);

    let margined = capacity * 1.15;
    assert!((totals.margined_capacity_tr - margined).abs() < 1e-9);

    // Carga externa entra depois da margem.
    let final_tr = margined + 5000.0 / BTU_TO_TR;
    assert!((totals.final_total_tr - final_tr).abs() < 1e-9);
    assert!((totals.final_total_btu - final_tr * BTU_TO_TR).abs() < 1e-6);

    assert_eq!(totals.split_recommendation_tr, final_tr.ceil());
    assert_eq!(
        totals.self_contained_recommendation_tr,
        totals.split_recommendation_tr
    );
    assert!((totals.adiabatic_flow_m3_per_h - totals.final_total_btu / 10.0).abs() < 1e-9);
    assert!(totals.warnings.is_empty());
}

#[test]
fn empty_session_yields_zero_totals() {
    let calc = ThermalCalculator::new(100.0, 15.0);
    let totals = calc.snapshot().totals;
    assert_eq!(totals.total_equipment_btu, 0.0);
    assert_eq!(totals.sensible_tr, 0.0);
    assert_eq!(totals.final_total_tr, 0.0);
    // ceil(0) continua 0: nenhuma recomendação fantasma.
    assert_eq!(totals.split_recommendation_tr, 0.0);
}

#[test]
fn nonpositive_power_is_rejected_silently() {
    let mut calc = ThermalCalculator::new(100.0, 15.0);
    assert!(calc.add_item(EquipmentKind::Inverter, "Inversor", 0.0, 1).is_none());
    assert!(calc
        .add_item(EquipmentKind::Inverter, "Inversor", -7.5, 1)
        .is_none());
    assert!(calc.items().is_empty());
}

#[test]
fn remove_item_by_id() {
    let mut calc = ThermalCalculator::new(100.0, 15.0);
    let id_a = calc
        .add_item(EquipmentKind::Inverter, "Inversor", 10.0, 1)
        .unwrap()
        .id;
    let id_b = calc
        .add_item(EquipmentKind::SoftStarterOrDirect, "Partida direta", 5.0, 1)
        .unwrap()
        .id;
    assert_ne!(id_a, id_b);
    assert!(calc.remove_item(id_a));
    assert_eq!(calc.items().len(), 1);
    assert_eq!(calc.items()[0].id, id_b);
    // Id inexistente é no-op.
    assert!(!calc.remove_item(999));
    assert_eq!(calc.items().len(), 1);
}

#[test]
fn snapshot_is_deterministic() {
    let mut calc = ThermalCalculator::new(100.0, 15.0);
    calc.set_area(30.0);
    calc.add_item(EquipmentKind::Inverter, "Inversor", 20.0, 2)
        .unwrap();
    assert_eq!(calc.snapshot(), calc.snapshot());
}

#[test]
fn zero_margin_falls_back_to_default() {
    let item = EquipmentItem::new(1, EquipmentKind::Inverter, "Inversor", 10.0, 1).unwrap();
    let with_zero = compute_totals(std::slice::from_ref(&item), 0.0, 0.0);
    let with_default = compute_totals(std::slice::from_ref(&item), 0.0, DEFAULT_MARGIN_PERCENT);
    assert!((with_zero.margined_capacity_tr - with_default.margined_capacity_tr).abs() < 1e-12);
}

#[test]
fn negative_margin_is_applied_with_warning() {
    let item = EquipmentItem::new(1, EquipmentKind::Inverter, "Inversor", 10.0, 1).unwrap();
    let totals = compute_totals(std::slice::from_ref(&item), 0.0, -10.0);
    assert!((totals.margined_capacity_tr - totals.capacity_div75_tr * 0.9).abs() < 1e-12);
    assert_eq!(totals.warnings.len(), 1);
}

#[test]
fn nonpositive_quantity_warns_but_counts() {
    let item = EquipmentItem::new(1, EquipmentKind::Inverter, "Inversor", 10.0, -2).unwrap();
    assert!(item.dissipated_btu < 0.0);
    let totals = compute_totals(std::slice::from_ref(&item), 0.0, 15.0);
    assert!((totals.total_equipment_btu - item.dissipated_btu).abs() < 1e-9);
    assert_eq!(totals.warnings.len(), 1);
}

#[test]
fn parse_or_default_paths() {
    assert_eq!(parse_or_default("12.5", 0.0), 12.5);
    assert_eq!(parse_or_default(" 40 ", 0.0), 40.0);
    assert_eq!(parse_or_default("abc", 7.0), 7.0);
    assert_eq!(parse_or_default("", 7.0), 7.0);
    assert_eq!(parse_or_default("inf", 7.0), 7.0);
}

#[test]
fn parse_qty_or_one_paths() {
    assert_eq!(parse_qty_or_one("3"), 3);
    assert_eq!(parse_qty_or_one(""), 1);
    assert_eq!(parse_qty_or_one("abc"), 1);
    assert_eq!(parse_qty_or_one("0"), 1);
    // Negativo digitado de propósito passa como está.
    assert_eq!(parse_qty_or_one("-2"), -2);
}
