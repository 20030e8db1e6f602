//! Go-to-definition across notebook cells

mod common;

use cellfind::commands::Cmd;
use cellfind::messages::{EditorMsg, Msg};
use cellfind::model::{Selection, TextRange};
use cellfind::syntax::LanguageId;
use cellfind::update::update;
use common::{editor, test_model};

/// A comment covering `[0, 50)` that mentions `x` at offset 10, then a real
/// `x` at offset 60
fn comment_then_code() -> String {
    let comment = format!("#{}x", " ".repeat(9));
    let source = format!("{:<50}\npass;    x = 1\n", comment);
    assert_eq!(source.find('x'), Some(10));
    assert_eq!(source.rfind('x'), Some(60));
    source
}

#[test]
fn test_identifier_in_comment_is_skipped() {
    let source = comment_then_code();
    let (mut model, ids) = test_model(&[(&source, false)]);

    let cmd = update(
        &mut model,
        Msg::Editor(ids[0], EditorMsg::GoToDefinition("x".into())),
    );
    assert_eq!(cmd, Some(Cmd::redraw_editor(ids[0])));

    let ed = editor(&model, ids[0]);
    assert_eq!(ed.selections(), &[Selection::cursor(60)]);
    assert!(ed.has_focus);
    assert_eq!(model.notebook.focused(), Some(ids[0]));
}

#[test]
fn test_missing_name_changes_nothing() {
    let (mut model, ids) = test_model(&[("a = 1\nb = a\n", false), ("c = 2", false)]);
    update(&mut model, Msg::Editor(ids[1], EditorMsg::Focus));
    update(&mut model, Msg::Editor(ids[0], EditorMsg::SetCursor(3)));
    update(&mut model, Msg::Editor(ids[0], EditorMsg::ScrollTo(1)));

    let cmd = update(
        &mut model,
        Msg::Editor(ids[0], EditorMsg::GoToDefinition("zzz".into())),
    );
    assert_eq!(cmd, None);

    let ed = editor(&model, ids[0]);
    assert_eq!(ed.selections(), &[Selection::cursor(3)]);
    assert_eq!(ed.viewport().top_line, 1);
    assert!(!ed.has_focus);
    assert_eq!(model.notebook.focused(), Some(ids[1]));
}

#[test]
fn test_empty_name_is_not_found() {
    let (mut model, ids) = test_model(&[("x = 1", false)]);
    assert!(!model.notebook.go_to_definition(ids[0], ""));
}

#[test]
fn test_identifiers_inside_strings_are_skipped() {
    let source = "msg = f\"{value}\"\n'value'\nvalue = 3\n";
    let (mut model, ids) = test_model(&[(source, false)]);
    assert!(model.notebook.go_to_definition(ids[0], "value"));
    let offset = source.rfind("value").unwrap();
    assert_eq!(editor(&model, ids[0]).selection(), Selection::cursor(offset));
}

#[test]
fn test_definition_is_centered_in_viewport() {
    let mut source: String = (0..100).map(|i| format!("v{} = {}\n", i, i)).collect();
    source.push_str("target = 1\n");
    let (mut model, ids) = test_model(&[(&source, false)]);

    assert!(model.notebook.go_to_definition(ids[0], "target"));
    let ed = editor(&model, ids[0]);
    // Line 100 centered in a 40-line viewport
    assert_eq!(ed.viewport().top_line, 80);
    let offset = ed.selection().head;
    assert!(ed
        .visible_ranges()
        .iter()
        .any(|r| r.from <= offset && offset < r.to));
}

#[test]
fn test_focus_moves_between_cells() {
    let (mut model, ids) = test_model(&[("a = 1", false), ("b = 2", false)]);
    update(&mut model, Msg::Editor(ids[0], EditorMsg::Focus));

    let cmd = update(
        &mut model,
        Msg::Editor(ids[1], EditorMsg::GoToDefinition("b".into())),
    );
    assert_eq!(cmd, Some(Cmd::RedrawEditors(vec![ids[0], ids[1]])));
    assert!(!editor(&model, ids[0]).has_focus);
    assert!(editor(&model, ids[1]).has_focus);
}

#[test]
fn test_read_only_cells_are_navigable() {
    let (mut model, ids) = test_model(&[("answer = 42", true)]);
    assert!(model.notebook.go_to_definition(ids[0], "answer"));
    assert_eq!(editor(&model, ids[0]).selection(), Selection::cursor(0));
}

#[test]
fn test_edits_are_reparsed_before_lookup() {
    let (mut model, ids) = test_model(&[("a = 1", false)]);
    assert!(!model.notebook.go_to_definition(ids[0], "fresh"));

    update(
        &mut model,
        Msg::Editor(
            ids[0],
            EditorMsg::ReplaceRange {
                range: TextRange::new(0, 1),
                text: "fresh".into(),
            },
        ),
    );
    assert!(model.notebook.go_to_definition(ids[0], "fresh"));
    assert_eq!(editor(&model, ids[0]).selection(), Selection::cursor(0));
}

#[test]
fn test_direct_edit_waits_for_reparse() {
    let (mut model, ids) = test_model(&[("a = 1\nlongname = 2\n", false)]);
    let cell = model.notebook.editor_mut(ids[0]).unwrap();
    cell.delete(TextRange::new(0, 15));
    assert!(cell.syntax_tree.is_none());
    assert!(!model.notebook.go_to_definition(ids[0], "longname"));

    update(
        &mut model,
        Msg::Editor(
            ids[0],
            EditorMsg::InsertText {
                offset: 0,
                text: "longname ".into(),
            },
        ),
    );
    assert!(model.notebook.go_to_definition(ids[0], "longname"));
    assert_eq!(editor(&model, ids[0]).selection(), Selection::cursor(0));
}

#[test]
fn test_attribute_names_are_not_definitions() {
    let (mut model, ids) = test_model(&[("obj.x = 1\nx = 2\n", false)]);
    assert!(model.notebook.go_to_definition(ids[0], "x"));
    assert_eq!(editor(&model, ids[0]).selection(), Selection::cursor(10));
}

#[test]
fn test_function_and_parameter_names_are_definitions() {
    let source = "# greet(name)\ndef greet(name):\n    return name.upper()\n";
    let (mut model, ids) = test_model(&[(source, false)]);
    assert!(model.notebook.go_to_definition(ids[0], "greet"));
    assert_eq!(editor(&model, ids[0]).selection().head, 18);
    assert!(model.notebook.go_to_definition(ids[0], "name"));
    assert_eq!(editor(&model, ids[0]).selection().head, 24);
    assert!(!model.notebook.go_to_definition(ids[0], "upper"));
}

#[test]
fn test_plain_text_cells_have_no_definitions() {
    let (mut model, _) = test_model(&[]);
    let id = model.add_cell("x = 1", LanguageId::PlainText, false);
    assert!(!model.notebook.go_to_definition(id, "x"));
}

#[test]
fn test_rust_and_javascript_cells() {
    let (mut model, _) = test_model(&[]);
    let rust_source = "fn main() {\n    // total here\n    let s = \"total\";\n    let total = 1;\n}\n";
    let js_source = "const s = `${total}`; // total\nlet total = 1;";
    let rust = model.add_cell(rust_source, LanguageId::Rust, false);
    let js = model.add_cell(js_source, LanguageId::JavaScript, false);

    assert!(model.notebook.go_to_definition(rust, "total"));
    assert_eq!(
        editor(&model, rust).selection().head,
        rust_source.rfind("total").unwrap()
    );

    assert!(model.notebook.go_to_definition(js, "total"));
    assert_eq!(editor(&model, js).selection().head, 35);
}

#[test]
fn test_unknown_editor_is_ignored() {
    let (mut model, _) = test_model(&[("x = 1", false)]);
    let cmd = update(
        &mut model,
        Msg::Editor(
            cellfind::model::EditorId(999),
            EditorMsg::GoToDefinition("x".into()),
        ),
    );
    assert_eq!(cmd, None);
}
