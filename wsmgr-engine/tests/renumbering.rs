//! Renumbering behavior against the in-memory window manager.

use wsmgr_core::WsError;
use wsmgr_engine::WorkspaceManager;
use wsmgr_ipc::mock::MockWindowManager;
use wsmgr_ipc::{WindowManager, Workspace};

fn names<W: WindowManager>(m: &WorkspaceManager<W>) -> Vec<String> {
    m.rows().iter().map(|r| r.name.clone()).collect()
}

fn nums<W: WindowManager>(m: &WorkspaceManager<W>) -> Vec<i64> {
    m.rows().iter().map(|r| r.num).collect()
}

fn renames(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_second_pass_on_correct_list_sends_nothing() {
    let wm = MockWindowManager::with_names(&["1", "3: web", "7"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let first = m.renumber().unwrap();
    assert_eq!(first.len(), 2);
    let sent = wm.attempted().len();

    let second = m.renumber().unwrap();
    assert!(second.is_empty());
    assert_eq!(wm.attempted().len(), sent);
}

#[test]
fn test_pass_restores_contiguous_numbers() {
    let wm = MockWindowManager::with_names(&["2", "5: x", "9: y", "mail"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    m.renumber().unwrap();

    assert_eq!(nums(&m), vec![1, 2, 3, 4]);
    assert_eq!(names(&m), vec!["1", "2: x", "3: y", "4: mail"]);
    assert_eq!(wm.names(), names(&m));
}

#[test]
fn test_moved_label_keeps_its_text() {
    let wm = MockWindowManager::with_names(&["1: a", "2: b", "3: work", "4: d"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let report = m.move_row(2, 0).unwrap();

    assert_eq!(
        report.renames,
        renames(&[("3: work", "1: work"), ("1: a", "2: a"), ("2: b", "3: b")])
    );
    assert_eq!(names(&m), vec!["1: work", "2: a", "3: b", "4: d"]);
}

#[test]
fn test_moved_bare_number_gains_no_label() {
    let wm = MockWindowManager::with_names(&["1", "2", "3", "4"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let report = m.move_row(3, 1).unwrap();

    assert_eq!(
        report.renames,
        renames(&[("4", "2"), ("2", "3"), ("3", "4")])
    );
    assert_eq!(names(&m), vec!["1", "2", "3", "4"]);
    let ids: Vec<i64> = m.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4, 2, 3]);
}

#[test]
fn test_dragging_down_renumbers_in_row_order() {
    let wm = MockWindowManager::with_names(&["1: a", "2: b", "3: c"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    m.move_row(0, 2).unwrap();

    assert_eq!(
        wm.applied_text(),
        vec![
            r#"rename workspace "2: b" to "1: b""#,
            r#"rename workspace "3: c" to "2: c""#,
            r#"rename workspace "1: a" to "3: a""#,
        ]
    );
    assert_eq!(names(&m), vec!["1: b", "2: c", "3: a"]);
}

#[test]
fn test_edit_adds_missing_prefix_once() {
    for typed in ["2: bar", "bar"] {
        let wm = MockWindowManager::with_names(&["1", "2: foo"]);
        let mut m = WorkspaceManager::new(&wm).unwrap();

        m.edit_label(1, typed).unwrap();

        assert_eq!(
            wm.applied_text(),
            vec![r#"rename workspace "2: foo" to "2: bar""#],
            "typed {typed:?}"
        );
    }
}

#[test]
fn test_own_reload_triggers_no_commands() {
    for n in 0..6usize {
        let owned: Vec<String> = (2..n as i64 + 2).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
        let wm = MockWindowManager::with_names(&refs);
        let mut m = WorkspaceManager::new(&wm).unwrap();
        assert_eq!(m.suppressed_events(), n);

        let report = m.renumber().unwrap();

        assert_eq!(report.len(), n, "n = {n}");
        assert_eq!(wm.attempted().len(), n, "n = {n}");
        assert_eq!(nums(&m), (1..=n as i64).collect::<Vec<_>>());
        assert_eq!(wm.queries(), 2, "one initial load, one reload");

        m.refresh().unwrap();
        assert_eq!(wm.attempted().len(), n, "refresh must stay silent, n = {n}");
    }
}

#[test]
fn test_third_rejected_rename_stops_the_pass() {
    let wm = MockWindowManager::with_names(&["2", "3", "4", "5", "6"]).reject_command(3);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let err = m.renumber().unwrap_err();

    match &err {
        WsError::Inconsistent { applied, source } => {
            assert_eq!(*applied, 2);
            assert!(matches!(**source, WsError::RenameRejected { .. }));
        }
        other => panic!("expected Inconsistent, got {other:?}"),
    }
    assert!(err.is_fatal());
    assert_eq!(wm.applied().len(), 2);
    assert_eq!(wm.attempted().len(), 3, "no retry");
    assert_eq!(names(&m), vec!["1", "2", "4", "5", "6"]);
    assert_eq!(wm.queries(), 1, "no reload after a failed pass");
}

#[test]
fn test_name_collision_leaves_local_order() {
    let wm = MockWindowManager::with_names(&["1", "2", "3"]).reject_duplicate_names();
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let err = m.move_row(2, 0).unwrap_err();

    assert!(matches!(err, WsError::Inconsistent { applied: 0, .. }));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(names(&m), vec!["3", "1", "2"]);
}

#[test]
fn test_unavailable_window_manager_is_fatal() {
    let wm = MockWindowManager::with_names(&["1"]);
    wm.set_unavailable(true);
    let err = WorkspaceManager::new(&wm).err().unwrap();
    assert!(matches!(err, WsError::ExternalUnavailable(_)));

    let wm = MockWindowManager::with_names(&["2"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();
    wm.set_unavailable(true);
    let err = m.renumber().unwrap_err();
    assert!(matches!(err, WsError::ExternalUnavailable(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_removing_a_row_renumbers_the_rest() {
    let wm = MockWindowManager::with_names(&["1", "2", "3"]);
    let mut m = WorkspaceManager::new(&wm).unwrap();

    let report = m.remove_row(0).unwrap();

    assert_eq!(report.renames, renames(&[("2", "1"), ("3", "2")]));
}

#[test]
fn test_added_workspace_lands_after_highest_number() {
    let wm = MockWindowManager::with_names(&["1", "2: mail"]);
    let mut m = WorkspaceManager::new(&wm).unwrap().with_default_label("new");

    let name = m.add_workspace(None).unwrap();

    assert_eq!(name, "3: new");
    assert_eq!(names(&m), vec!["1", "2: mail", "3: new"]);
    assert_eq!(m.focused_index(), Some(2));
}

#[test]
fn test_focus_follows_workspace_across_renumbering() {
    let mut mail = Workspace::new(20, "5: mail");
    mail.focused = true;
    let wm = MockWindowManager::with_workspaces(vec![Workspace::new(10, "2"), mail]);
    let mut m = WorkspaceManager::new(&wm).unwrap();
    assert_eq!(m.focused_index(), Some(1));

    m.renumber().unwrap();

    assert_eq!(names(&m), vec!["1", "2: mail"]);
    assert_eq!(m.rows()[m.focused_index().unwrap()].id, 20);
}
