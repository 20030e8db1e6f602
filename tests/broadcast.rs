//! Broadcasting the global find/replace parameters to every cell

mod common;

use cellfind::commands::Cmd;
use cellfind::messages::{EditorMsg, Msg, SearchMsg};
use cellfind::model::FindReplaceState;
use cellfind::search::{SearchQuery, SearchSpec};
use cellfind::syntax::LanguageId;
use cellfind::update::update;
use common::{editor, match_ranges, test_model};

fn foo_params() -> FindReplaceState {
    FindReplaceState {
        find_text: "foo".into(),
        case_sensitive: false,
        regexp: false,
        whole_word: false,
        ..Default::default()
    }
}

#[test]
fn test_broadcast_reaches_only_writable_cells() {
    let (mut model, ids) = test_model(&[("foo = 1", false), ("foo", true), ("FOO", false)]);
    model.find_replace = foo_params();

    let cmd = update(&mut model, Msg::Search(SearchMsg::Broadcast));
    assert_eq!(cmd, Some(Cmd::RedrawEditors(vec![ids[0], ids[2]])));

    let expected = SearchQuery::build(SearchSpec::from(&foo_params()));
    assert_eq!(editor(&model, ids[0]).query(), &expected);
    assert_eq!(editor(&model, ids[2]).query(), &expected);

    let read_only = editor(&model, ids[1]);
    assert_eq!(read_only.query().spec().search, "");
    assert_eq!(read_only.search().generation(), 0);
    assert!(read_only.decorations().is_empty());

    assert_eq!(match_ranges(&model, ids[0]), vec![(0, 3)]);
    assert_eq!(match_ranges(&model, ids[2]), vec![(0, 3)]);
}

#[test]
fn test_clear_after_any_broadcast_empties_writable_cells() {
    for params in [
        foo_params(),
        FindReplaceState {
            find_text: "(".into(),
            regexp: true,
            ..Default::default()
        },
        FindReplaceState {
            find_text: "x".into(),
            whole_word: true,
            case_sensitive: true,
            ..Default::default()
        },
    ] {
        let (mut model, ids) = test_model(&[("x foo (", false), ("x", true), ("foo", false)]);
        model.find_replace = params;
        update(&mut model, Msg::Search(SearchMsg::Broadcast));
        update(&mut model, Msg::Search(SearchMsg::Clear));

        for id in [ids[0], ids[2]] {
            let query = editor(&model, id).query();
            assert_eq!(query.spec().search, "");
            assert!(query.is_valid());
            assert!(editor(&model, id).decorations().is_empty());
        }
        assert_ne!(model.find_replace.find_text, "");
    }
}

#[test]
fn test_panel_edits_do_not_leak_without_broadcast() {
    let (mut model, ids) = test_model(&[("foo bar", false)]);
    model.find_replace = foo_params();
    assert!(editor(&model, ids[0]).decorations().is_empty());

    update(&mut model, Msg::Search(SearchMsg::Broadcast));
    model.find_replace.find_text = "bar".into();
    assert_eq!(match_ranges(&model, ids[0]), vec![(0, 3)]);
}

#[test]
fn test_new_cells_start_from_global_params() {
    let (mut model, _) = test_model(&[]);
    model.find_replace = foo_params();
    let id = model.add_cell("a foo b foo", LanguageId::Python, false);
    assert_eq!(match_ranges(&model, id), vec![(2, 5), (8, 11)]);
}

#[test]
fn test_per_cell_query_does_not_touch_other_cells() {
    let (mut model, ids) = test_model(&[("foo", false), ("foo", false)]);
    update(
        &mut model,
        Msg::Editor(ids[0], EditorMsg::SetQuery(SearchSpec::new("foo"))),
    );
    assert_eq!(match_ranges(&model, ids[0]), vec![(0, 3)]);
    assert!(match_ranges(&model, ids[1]).is_empty());

    update(&mut model, Msg::Editor(ids[0], EditorMsg::ClearQuery));
    assert!(match_ranges(&model, ids[0]).is_empty());
}

#[test]
fn test_repeated_broadcast_bumps_generation() {
    let (mut model, ids) = test_model(&[("foo", false)]);
    model.find_replace = foo_params();
    update(&mut model, Msg::Search(SearchMsg::Broadcast));
    update(&mut model, Msg::Search(SearchMsg::Broadcast));
    assert_eq!(editor(&model, ids[0]).search().generation(), 2);
    assert_eq!(match_ranges(&model, ids[0]), vec![(0, 3)]);
}

#[test]
fn test_cell_made_read_only_keeps_its_last_query() {
    let (mut model, ids) = test_model(&[("foo bar", false)]);
    model.find_replace = foo_params();
    update(&mut model, Msg::Search(SearchMsg::Broadcast));
    update(&mut model, Msg::Editor(ids[0], EditorMsg::SetReadOnly(true)));

    model.find_replace.find_text = "bar".into();
    let cmd = update(&mut model, Msg::Search(SearchMsg::Broadcast));
    assert_eq!(cmd, Some(Cmd::RedrawEditors(vec![])));
    assert_eq!(editor(&model, ids[0]).query().spec().search, "foo");
}
