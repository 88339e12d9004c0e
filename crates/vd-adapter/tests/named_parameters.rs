//! Named parameter access through the resolver and typed accessor.

use proptest::prelude::*;
use vd_adapter::{AdapterError, DoubleTrackModelWrapper, NOT_FOUND, ParameterKind};
use vd_core::bit_equal;
use vd_model::{GeneratedModel, LoopbackModel};

fn loopback() -> DoubleTrackModelWrapper<LoopbackModel> {
    DoubleTrackModelWrapper::new(LoopbackModel::new().expect("loopback model builds"))
        .expect("loopback model initializes")
}

#[test]
fn resolver_returns_first_match() {
    let dtm = loopback();
    // l_WheelbaseF_m appears at entries 1 and 5.
    assert_eq!(dtm.find_parameter_address_index("l_WheelbaseF_m"), 1);
    assert_eq!(dtm.find_parameter_data_type("l_WheelbaseF_m"), 0);
    assert_eq!(dtm.get_parameter("l_WheelbaseF_m"), 1.5);
}

#[test]
fn resolver_covers_every_table_entry() {
    let dtm = loopback();
    let mapping = dtm.model().mapping_info();
    for (i, entry) in mapping.parameters().iter().enumerate() {
        let first = mapping
            .parameters()
            .iter()
            .position(|p| p.name == entry.name)
            .unwrap();
        let expected = &mapping.parameters()[first];
        assert_eq!(
            dtm.find_parameter_address_index(&entry.name),
            expected.address_index as i32,
            "entry {i}"
        );
        assert_eq!(
            dtm.find_parameter_data_type(&entry.name),
            expected.data_type_index as i32,
            "entry {i}"
        );
    }
}

#[test]
fn not_found_sentinels() {
    let mut dtm = loopback();
    assert_eq!(dtm.set_parameter("doesNotExist", 5.0), -1);
    assert_eq!(dtm.get_parameter("doesNotExist"), 0.0);
    assert_eq!(dtm.find_parameter_address_index("doesNotExist"), NOT_FOUND);
    assert_eq!(dtm.find_parameter_data_type("doesNotExist"), NOT_FOUND);
}

#[test]
fn not_found_is_distinguishable_on_result_surface() {
    let mut dtm = loopback();
    dtm.set_parameter("m_Vehicle_kg", 0.0);
    assert_eq!(dtm.try_get_parameter("m_Vehicle_kg").unwrap(), 0.0);
    assert!(matches!(
        dtm.try_get_parameter("doesNotExist"),
        Err(AdapterError::ParameterNotFound { .. })
    ));
    assert!(matches!(
        dtm.try_set_parameter("doesNotExist", 1.0),
        Err(AdapterError::ParameterNotFound { .. })
    ));
}

#[test]
fn real_parameter_round_trip() {
    let mut dtm = loopback();
    assert_eq!(dtm.set_parameter("m_Vehicle_kg", 1250.5), 0);
    assert_eq!(dtm.get_parameter("m_Vehicle_kg"), 1250.5);
}

#[test]
fn real_parameter_passes_special_values() {
    let mut dtm = loopback();
    for v in [0.0, -0.0, -42.0, f64::MIN_POSITIVE / 4.0, f64::INFINITY, f64::NAN] {
        dtm.set_parameter("mu_Road", v);
        assert!(bit_equal(dtm.get_parameter("mu_Road"), v), "value {v}");
    }
}

#[test]
fn boolean_parameter_keeps_byte_width() {
    let mut dtm = loopback();
    assert_eq!(dtm.get_parameter("switch_TireModel"), 1.0);

    assert_eq!(dtm.set_parameter("switch_TireModel", 1.0), 2);
    assert_eq!(dtm.get_parameter("switch_TireModel"), 1.0);

    dtm.set_parameter("switch_TireModel", 2.0);
    assert_eq!(dtm.get_parameter("switch_TireModel"), 2.0);

    dtm.set_parameter("switch_TireModel", 0.0);
    assert_eq!(dtm.get_parameter("switch_TireModel"), 0.0);
}

#[test]
fn boolean_write_reports_stored_value() {
    let mut dtm = loopback();
    let write = dtm.try_set_parameter("switch_TireModel", 7.9).unwrap();
    assert_eq!(write.address_index, 2);
    assert_eq!(write.stored, 7.0);
}

#[test]
fn unsupported_type_is_silent_no_op() {
    let mut dtm = loopback();
    let addr = dtm.find_parameter_address_index("n_GearRatio");
    assert_eq!(addr, 3);
    let before = dtm.model().data_address_map().slot(3).unwrap().to_vec();

    assert_eq!(dtm.set_parameter("n_GearRatio", 4.0), addr);
    assert_eq!(dtm.model().data_address_map().slot(3).unwrap(), before.as_slice());
    assert_eq!(dtm.get_parameter("n_GearRatio"), 0.0);
}

#[test]
fn unsupported_type_is_an_error_on_result_surface() {
    let mut dtm = loopback();
    match dtm.try_set_parameter("n_GearRatio", 4.0) {
        Err(AdapterError::UnsupportedDataType {
            label,
            address_index,
            ..
        }) => {
            assert_eq!(label, "int32_T");
            assert_eq!(address_index, 3);
        }
        other => panic!("expected UnsupportedDataType, got {other:?}"),
    }
    assert_eq!(
        dtm.resolver().resolve("n_GearRatio").unwrap().kind,
        ParameterKind::Unsupported {
            label: "int32_T".into()
        }
    );
}

#[test]
fn writes_do_not_leak_into_neighbouring_slots() {
    let mut dtm = loopback();
    dtm.set_parameter("switch_TireModel", 0.0);
    dtm.set_parameter("m_Vehicle_kg", -1.0);
    assert_eq!(dtm.get_parameter("l_WheelbaseF_m"), 1.5);
    assert_eq!(dtm.get_parameter("mu_Road"), 1.0);
    // Shadowed duplicate keeps its own value.
    assert_eq!(dtm.model().data_address_map().read_real(5).unwrap(), 9.9);
}

proptest! {
    #[test]
    fn real_round_trip_is_bit_exact(bits in any::<u64>()) {
        let mut dtm = loopback();
        let v = f64::from_bits(bits);
        prop_assert_eq!(dtm.set_parameter("m_Vehicle_kg", v), 0);
        prop_assert!(bit_equal(dtm.get_parameter("m_Vehicle_kg"), v));
    }

    #[test]
    fn boolean_round_trip_matches_narrowing(v in -1.0e3_f64..1.0e3) {
        let mut dtm = loopback();
        dtm.set_parameter("switch_TireModel", v);
        let expected = (v as u8) as f64;
        prop_assert_eq!(dtm.get_parameter("switch_TireModel"), expected);
        prop_assert!((0.0..=255.0).contains(&dtm.get_parameter("switch_TireModel")));
    }

    #[test]
    fn unknown_names_never_resolve(name in "[a-z]{1,12}") {
        let mut dtm = loopback();
        prop_assert_eq!(dtm.set_parameter(&name, 1.0), -1);
        prop_assert_eq!(dtm.get_parameter(&name), 0.0);
    }
}
