use chipplan_core::{DocumentError, LoadPolicy, Units};
use chipplan_designer::serialization::{DesignFile, ShapeRecord};
use chipplan_designer::{PartitionShape, Rect};

fn parse(json: &str) -> DesignFile {
    DesignFile::from_json(json).unwrap()
}

#[test]
fn test_tolerant_load_fills_defaults() {
    let design = parse(
        r#"{
            "units": "mm",
            "shapes": [ { "type": "rect", "x": 1, "y": 2, "width": 3, "height": 4 } ]
        }"#,
    );
    let shapes = design.to_partitions(LoadPolicy::default()).unwrap();
    assert_eq!(shapes.len(), 1);

    let p = &shapes[0];
    assert!(!p.is_locked());
    assert_eq!(p.units, Units::Millimeters);
    assert!(p.properties.is_empty());
    assert!(!p.id().as_str().is_empty());
    assert_eq!(p.scene_bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_missing_units_everywhere_falls_back_to_micrometers() {
    let design = parse(r#"{ "shapes": [ { "x": 0, "y": 0, "width": 3, "height": 4 } ] }"#);
    assert_eq!(design.document_units(LoadPolicy::default()).unwrap(), None);
    let shapes = design.to_partitions(LoadPolicy::default()).unwrap();
    assert_eq!(shapes[0].units, Units::Micrometers);
}

#[test]
fn test_strict_load_requires_document_units() {
    let design = parse(r#"{ "shapes": [] }"#);
    assert_eq!(
        design.to_partitions(LoadPolicy::strict()).unwrap_err(),
        DocumentError::MissingDocumentField {
            field: "units".into()
        }
    );
}

#[test]
fn test_properties_survive_round_trip() {
    let design = parse(
        r#"{ "units": "um", "shapes": [ {
            "id": "core0", "type": "rect", "x": 0, "y": 0, "width": 10, "height": 10,
            "units": "um", "locked": true, "properties": { "name": "CPU", "power_mw": 120 }
        } ] }"#,
    );
    let shapes = design.to_partitions(LoadPolicy::strict()).unwrap();
    let p = &shapes[0];
    assert!(p.is_locked());
    assert_eq!(p.properties["name"], "CPU");
    assert_eq!(p.properties["power_mw"], 120);

    let saved = DesignFile::from_partitions(Units::Micrometers, &shapes);
    assert_eq!(saved.shapes[0], design.shapes[0]);
}

#[test]
fn test_unknown_type_rejects_document() {
    let design = parse(
        r#"{ "shapes": [
            { "type": "rect", "x": 0, "y": 0, "width": 3, "height": 4 },
            { "type": "circle", "x": 0, "y": 0, "width": 3, "height": 4 }
        ] }"#,
    );
    assert_eq!(
        design.to_partitions(LoadPolicy::default()).unwrap_err(),
        DocumentError::UnknownShapeType {
            index: 1,
            kind: "circle".into()
        }
    );
}

#[test]
fn test_missing_geometry_rejects_document() {
    let design = parse(r#"{ "shapes": [ { "type": "rect", "y": 0, "width": 3, "height": 4 } ] }"#);
    assert_eq!(
        design.to_partitions(LoadPolicy::default()).unwrap_err(),
        DocumentError::MissingField {
            index: 0,
            field: "x".into()
        }
    );
}

#[test]
fn test_negative_size_rejects_document() {
    let design = parse(r#"{ "shapes": [ { "x": 0, "y": 0, "width": -3, "height": 4 } ] }"#);
    assert!(matches!(
        design.to_partitions(LoadPolicy::default()),
        Err(DocumentError::NegativeSize { index: 0, .. })
    ));
}

#[test]
fn test_non_finite_position_is_not_a_size_error() {
    let record = ShapeRecord {
        x: Some(f64::NAN),
        y: Some(0.0),
        width: Some(3.0),
        height: Some(4.0),
        ..ShapeRecord::default()
    };
    assert_eq!(
        PartitionShape::from_record(&record, 2, LoadPolicy::default(), None).unwrap_err(),
        DocumentError::NonFiniteGeometry {
            index: 2,
            field: "x".into()
        }
    );

    let record = ShapeRecord {
        x: Some(0.0),
        height: Some(f64::INFINITY),
        ..record
    };
    assert!(matches!(
        PartitionShape::from_record(&record, 0, LoadPolicy::default(), None),
        Err(DocumentError::NonFiniteGeometry { field, .. }) if field == "height"
    ));
}

#[test]
fn test_duplicate_id_rejects_document() {
    let design = parse(
        r#"{ "shapes": [
            { "id": "p", "x": 0, "y": 0, "width": 3, "height": 4 },
            { "id": "p", "x": 9, "y": 0, "width": 3, "height": 4 }
        ] }"#,
    );
    assert_eq!(
        design.to_partitions(LoadPolicy::default()).unwrap_err(),
        DocumentError::DuplicateId { id: "p".into() }
    );
}

#[test]
fn test_unknown_unit_label_fails_to_parse() {
    assert!(DesignFile::from_json(r#"{ "units": "inch", "shapes": [] }"#).is_err());
    assert!(DesignFile::from_json(
        r#"{ "shapes": [ { "x": 0, "y": 0, "width": 1, "height": 1, "units": "cm" } ] }"#
    )
    .is_err());
}

#[test]
fn test_save_order_is_draw_order() {
    let shapes = vec![
        PartitionShape::new(Rect::new(0.0, 0.0, 1.0, 1.0), Units::Micrometers).with_id("first"),
        PartitionShape::new(Rect::new(5.0, 0.0, 1.0, 1.0), Units::Micrometers).with_id("second"),
    ];
    let design = DesignFile::from_partitions(Units::Micrometers, &shapes);
    let ids: Vec<_> = design.shapes.iter().filter_map(|s| s.id.as_deref()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}
