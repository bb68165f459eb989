use ccm_thermal_calculator::conversion::{convert, ConversionError};
use ccm_thermal_calculator::quantity::QuantityKind;
use ccm_thermal_calculator::units::{
    btu_to_tr, convert_heat_flow, convert_power, cv_to_kw, kw_to_btu, kw_to_cv, HeatFlowUnit,
    PowerUnit,
};

#[test]
fn cv_kw_roundtrip() {
    let kw = cv_to_kw(10.0);
    assert!((kw - 7.355).abs() < 1e-9);
    assert!((kw_to_cv(kw) - 10.0).abs() < 1e-9);
}

#[test]
fn heat_flow_base_conversions() {
    assert!((kw_to_btu(1.0) - 3412.14).abs() < 1e-9);
    assert!((btu_to_tr(12000.0) - 1.0).abs() < 1e-12);
}

#[test]
fn typed_converters() {
    let kw = convert_power(10.0, PowerUnit::CavaloVapor, PowerUnit::Kilowatt);
    assert!((kw - 7.355).abs() < 1e-9);
    let tr = convert_heat_flow(1.0, HeatFlowUnit::Kilowatt, HeatFlowUnit::TonRefrigeration);
    assert!((tr - 3412.14 / 12000.0).abs() < 1e-12);
}

#[test]
fn string_keyed_power_conversion() {
    let kw = convert(QuantityKind::Power, 10.0, "cv", "kw").unwrap();
    assert!((kw - 7.355).abs() < 1e-9);
    // Sinônimos aceitos na entrada.
    let cv = convert(QuantityKind::Power, 7.355, "quilowatt", "hp(m)").unwrap();
    assert!((cv - 10.0).abs() < 1e-9);
}

#[test]
fn string_keyed_heat_flow_conversion() {
    let tr = convert(QuantityKind::HeatFlow, 12000.0, "btu/h", "tr").unwrap();
    assert!((tr - 1.0).abs() < 1e-12);
    let btu = convert(QuantityKind::HeatFlow, 1.0, "kw", "btu/h").unwrap();
    assert!((btu - 3412.14).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(QuantityKind::Power, 1.0, "cv", "mw").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "mw"),
    }
    // Unidade de outra grandeza também é rejeitada.
    assert!(convert(QuantityKind::HeatFlow, 1.0, "cv", "tr").is_err());
}
