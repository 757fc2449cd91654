//! 控制器端到端场景

use econv::format::NO_VALUE;
use econv::{Controller, EconvError, Mode, Precision, Side, Unit};

#[test]
fn single_mode_one_hartree() {
    let mut c = Controller::new(Precision::new(10));
    let update = c.on_field_edit(Unit::Hartree, Side::Single, "1").unwrap();

    assert_eq!(update.change_for(Unit::Hartree, Side::Single), None);
    assert_eq!(c.field_text(Unit::Electronvolt, Side::Single), "27.21138625");
    assert_eq!(c.field_text(Unit::Wavenumber, Side::Single), "219474.6314");

    let mut c = Controller::default();
    c.on_field_edit(Unit::Hartree, Side::Single, "1").unwrap();
    assert_eq!(c.field_text(Unit::Electronvolt, Side::Single), "27.211386246");
}

#[test]
fn pair_mode_difference() {
    let mut c = Controller::default();
    c.on_mode_toggle();
    assert_eq!(c.mode(), Mode::Pair);

    c.on_field_edit(Unit::Hartree, Side::A, "1").unwrap();
    c.on_field_edit(Unit::Hartree, Side::B, "0").unwrap();

    assert_eq!(c.field_text(Unit::Hartree, Side::D), "1");
    assert_eq!(c.field_text(Unit::Electronvolt, Side::D), "27.211386246");
    assert_eq!(c.get_copy_text(Unit::Electronvolt).as_deref(), Some("27.211386246"));
}

#[test]
fn zero_wavelength_has_no_equivalent() {
    let mut c = Controller::default();
    c.on_field_edit(Unit::Nanometer, Side::Single, "0").unwrap();

    assert_eq!(c.field_text(Unit::Nanometer, Side::Single), "0");
    for unit in Unit::ALL.into_iter().filter(|u| *u != Unit::Nanometer) {
        assert_eq!(c.field_text(unit, Side::Single), "");
        assert_eq!(c.get_display_value(unit, Side::Single), NO_VALUE);
    }
    assert_eq!(c.swatch(), None);
}

#[test]
fn toggle_round_trip_keeps_value() {
    let mut c = Controller::default();
    c.on_field_edit(Unit::Hartree, Side::Single, "2").unwrap();

    c.on_mode_toggle();
    assert_eq!(c.field_text(Unit::Hartree, Side::A), "2");
    assert_eq!(c.field_text(Unit::Hartree, Side::B), "0");
    assert_eq!(c.field_text(Unit::Hartree, Side::D), "2");

    c.on_mode_toggle();
    assert_eq!(c.mode(), Mode::Single);
    assert_eq!(c.field_text(Unit::Hartree, Side::Single), "2");
}

#[test]
fn input_digits_raise_precision() {
    let mut c = Controller::new(Precision::new(6));
    let update = c
        .on_field_edit(Unit::Hartree, Side::Single, "3.14159265")
        .unwrap();

    assert!(update.precision_raised);
    assert_eq!(c.precision(), Precision::new(9));
    assert_eq!(c.field_text(Unit::Electronvolt, Side::Single), "85.487091");

    // 位数更少的输入不会降低精度
    let update = c.on_field_edit(Unit::Hartree, Side::Single, "2").unwrap();
    assert!(!update.precision_raised);
    assert_eq!(c.precision(), Precision::new(9));
}

#[test]
fn displayed_values_convert_back() {
    let mut c = Controller::default();
    c.on_field_edit(Unit::Electronvolt, Side::Single, "1").unwrap();
    let wavenumber = c.field_text(Unit::Wavenumber, Side::Single).to_string();
    assert_eq!(wavenumber, "8065.5439373");

    c.on_field_edit(Unit::Wavenumber, Side::Single, &wavenumber)
        .unwrap();
    let ev: f64 = c
        .field_text(Unit::Electronvolt, Side::Single)
        .parse()
        .unwrap();
    assert!((ev - 1.0).abs() < 1e-10);
}

#[test]
fn pair_mode_rejects_wavelength_sides() {
    let mut c = Controller::default();
    c.on_mode_toggle();
    assert!(matches!(
        c.on_field_edit(Unit::Nanometer, Side::B, "500"),
        Err(EconvError::FieldDisabled { .. })
    ));
    assert!(matches!(
        c.on_field_edit(Unit::Hartree, Side::Single, "1"),
        Err(EconvError::ModeMismatch { .. })
    ));
}
