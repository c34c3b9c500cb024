use assert_cmd::Command;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("todoview").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let help = run_help(&[]);
    assert!(help.contains("todo"));
    assert!(help.contains("users"));
    assert!(help.contains("--data-dir"));
}

#[test]
fn test_todo_run_help_lists_view_flags() {
    let help = run_help(&["todo", "run"]);
    for flag in ["--search", "--status", "--sort", "--page", "--page-size"] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
}

#[test]
fn test_users_select_help() {
    let help = run_help(&["users", "select"]);
    assert!(help.contains("--from"));
    assert!(help.contains("--to"));
}
