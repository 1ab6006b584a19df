mod common;
use abq_data_entry::core::Application;
use abq_data_entry::models::FieldValue;
use abq_data_entry::store::RecordStore;
use abq_data_entry::ui::tui::{Focus, FormView};
use common::{read_rows, setup_out_dir, today_file};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(view: &mut FormView, app: &mut Application, code: KeyCode) {
    view.handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handled");
}

fn type_str(view: &mut FormView, app: &mut Application, text: &str) {
    for c in text.chars() {
        press(view, app, KeyCode::Char(c));
    }
}

fn app_in(name: &str) -> (Application, std::path::PathBuf) {
    let dir = setup_out_dir(name);
    let app = Application::with_store(RecordStore::new(&dir, "abq_data_record"));
    (app, dir)
}

#[test]
fn test_typing_goes_to_focused_field() {
    let (mut app, _dir) = app_in("view_typing");
    let mut view = FormView::new();

    type_str(&mut view, &mut app, "12/31x");
    assert_eq!(
        app.form().get().get("Date"),
        Some(&FieldValue::Text("12/31".into()))
    );

    press(&mut view, &mut app, KeyCode::Tab);
    press(&mut view, &mut app, KeyCode::Down);
    assert_eq!(app.form().field("Time").unwrap().display_text(), "8:00");

    press(&mut view, &mut app, KeyCode::Enter);
    type_str(&mut view, &mut app, "Alice");
    assert_eq!(
        app.form().get().get("Technician"),
        Some(&FieldValue::Text("Alice".into()))
    );
}

#[test]
fn test_focus_wraps_through_save_button() {
    let (app, _dir) = app_in("view_focus");
    let mut view = FormView::new();

    for _ in 0..14 {
        view.focus_next(&app);
    }
    assert_eq!(view.focus(), Focus::Save);
    view.focus_next(&app);
    assert_eq!(view.focus(), Focus::Field(0));
    view.focus_prev(&app);
    assert_eq!(view.focus(), Focus::Save);
    view.focus_prev(&app);
    assert_eq!(view.focus(), Focus::Field(13));
}

#[test]
fn test_space_toggles_equipment_fault() {
    let (mut app, _dir) = app_in("view_toggle");
    let mut view = FormView::new();
    for _ in 0..6 {
        press(&mut view, &mut app, KeyCode::Tab);
    }
    assert_eq!(view.focus(), Focus::Field(6));

    press(&mut view, &mut app, KeyCode::Char(' '));
    assert_eq!(
        app.form().get().get("Equipment Fault"),
        Some(&FieldValue::Bool(true))
    );
}

#[test]
fn test_enter_in_notes_inserts_newline() {
    let (mut app, _dir) = app_in("view_notes");
    let mut view = FormView::new();
    press(&mut view, &mut app, KeyCode::BackTab);
    press(&mut view, &mut app, KeyCode::BackTab);
    assert_eq!(view.focus(), Focus::Field(13));

    type_str(&mut view, &mut app, "a");
    press(&mut view, &mut app, KeyCode::Enter);
    type_str(&mut view, &mut app, "b");
    assert_eq!(
        app.form().get().get("Notes"),
        Some(&FieldValue::Text("a\nb".into()))
    );
}

#[test]
fn test_ctrl_s_saves_and_resets() {
    let (mut app, dir) = app_in("view_save");
    let mut view = FormView::new();
    type_str(&mut view, &mut app, "1/02");

    view.handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
    )
    .unwrap();

    assert_eq!(app.records_saved(), 1);
    assert_eq!(
        app.form().get().get("Date"),
        Some(&FieldValue::Text(String::new()))
    );
    let rows = read_rows(&today_file(&dir));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "1/02");
}

#[test]
fn test_escape_stops_the_loop() {
    let (mut app, _dir) = app_in("view_quit");
    let mut view = FormView::new();
    assert!(view.is_running());
    press(&mut view, &mut app, KeyCode::Esc);
    assert!(!view.is_running());
}
