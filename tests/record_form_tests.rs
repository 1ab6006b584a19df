mod common;
use abq_data_entry::errors::AppError;
use abq_data_entry::form::RecordForm;
use abq_data_entry::models::{FieldDescriptor, FieldValue};
use common::HEADER;

#[test]
fn test_snapshot_has_all_fields_in_order() {
    let form = RecordForm::new();
    let snapshot = form.get();

    assert_eq!(snapshot.len(), 14);
    assert_eq!(snapshot.keys(), HEADER.to_vec());
    assert_eq!(form.field_names(), HEADER.to_vec());
}

#[test]
fn test_snapshot_keys_do_not_depend_on_edits() {
    let mut form = RecordForm::new();
    form.set("Technician", "Alice").unwrap();
    form.set("Fruit", 3i64).unwrap();

    assert_eq!(form.get().keys(), HEADER.to_vec());
}

#[test]
fn test_reset_leaves_type_appropriate_empty_values() {
    let mut form = RecordForm::new();
    form.set("Date", "1/02").unwrap();
    form.set("Humidity", 12.5).unwrap();
    form.set("Equipment Fault", true).unwrap();
    form.set("Notes", "something").unwrap();

    form.reset();
    let snapshot = form.get();

    for (name, value) in snapshot.iter() {
        match name {
            "Equipment Fault" => assert_eq!(value, &FieldValue::Bool(false)),
            _ => assert!(value.is_empty(), "{name} should be empty, got {value:?}"),
        }
    }
    assert!(snapshot.to_row().iter().enumerate().all(|(i, cell)| {
        if i == 6 { cell == "false" } else { cell.is_empty() }
    }));
}

#[test]
fn test_new_form_starts_reset() {
    let mut reset = RecordForm::new();
    reset.reset();
    assert_eq!(RecordForm::new().get(), reset.get());
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let mut form = RecordForm::new();
    form.set("Blossoms", 50i64).unwrap();

    form.reset();
    let once = form.get();
    form.reset();
    assert_eq!(form.get(), once);
}

#[test]
fn test_set_then_get_round_trips() {
    let mut form = RecordForm::new();
    form.set("Technician", "Jane").unwrap();
    form.set("Time", "16:00").unwrap();
    form.set("Equipment Fault", true).unwrap();
    form.set("Light", 10i64).unwrap();
    form.set("Median Height", 15.2).unwrap();

    let s = form.get();
    assert_eq!(s.get("Technician"), Some(&FieldValue::Text("Jane".into())));
    assert_eq!(s.get("Time"), Some(&FieldValue::Text("16:00".into())));
    assert_eq!(s.get("Equipment Fault"), Some(&FieldValue::Bool(true)));
    assert_eq!(s.get("Light"), Some(&FieldValue::Int(10)));
    assert_eq!(s.get("Median Height"), Some(&FieldValue::Float(15.2)));
}

#[test]
fn test_set_unknown_field_fails() {
    let mut form = RecordForm::new();
    let err = form.set("Weather", "sunny").unwrap_err();
    assert!(matches!(err, AppError::UnknownField(name) if name == "Weather"));
}

#[test]
fn test_groups_follow_the_layout() {
    let form = RecordForm::new();
    let titles: Vec<Option<&str>> = form.groups().iter().map(|g| g.title.as_deref()).collect();
    assert_eq!(
        titles,
        vec![
            Some("Record Information"),
            Some("Environment Data"),
            Some("Plant Data"),
            None
        ]
    );

    let sizes: Vec<usize> = form.groups().iter().map(|g| g.fields.len()).collect();
    assert_eq!(sizes, vec![3, 4, 6, 1]);

    let notes = form.groups()[3].fields[0];
    assert_eq!(form.field_at(notes).unwrap().name(), "Notes");
    assert_eq!(form.field("Humidity").unwrap().label(), "Humidity (g/m³)");
}

#[test]
#[should_panic(expected = "duplicate field name")]
fn test_duplicate_names_panic() {
    RecordForm::from_groups(vec![
        (None, vec![FieldDescriptor::toggle("Flag")]),
        (Some("Again"), vec![FieldDescriptor::toggle("Flag")]),
    ]);
}
