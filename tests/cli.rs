use assert_cmd::Command;

fn xcalc() -> Command {
    Command::cargo_bin("xcalc").expect("binary should be built")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_postfix_and_result() {
    let assert = xcalc().arg("2+3*4").assert().success();
    let stdout = stdout_of(assert.get_output());

    assert!(stdout.contains("Postfix: 2 3 4 * +"), "stdout was: {stdout}");
    assert!(stdout.contains("Result: 14"), "stdout was: {stdout}");
}

#[test]
fn quiet_hides_postfix() {
    let assert = xcalc().args(["--quiet", "(2+3)*4"]).assert().success();
    let stdout = stdout_of(assert.get_output());

    assert!(!stdout.contains("Postfix:"), "stdout was: {stdout}");
    assert!(stdout.contains("Result: 20"), "stdout was: {stdout}");
}

#[test]
fn x_from_argument() {
    let assert = xcalc().args(["--x", "5", "x*2+1"]).assert().success();
    assert!(stdout_of(assert.get_output()).contains("Result: 11"));
}

#[test]
fn negative_x_from_argument() {
    let assert = xcalc().args(["--x", "-2", "x^2"]).assert().success();
    assert!(stdout_of(assert.get_output()).contains("Result: 4"));
}

#[test]
fn x_prompted_from_stdin() {
    let assert = xcalc().arg("x - 1").write_stdin("3\n").assert().success();
    let stdout = stdout_of(assert.get_output());

    assert!(stdout.contains("Enter x="), "stdout was: {stdout}");
    assert!(stdout.contains("Result: 2"), "stdout was: {stdout}");
}

#[test]
fn expression_prompted_from_stdin() {
    let assert = xcalc().write_stdin("-3+2\n").assert().success();
    let stdout = stdout_of(assert.get_output());

    assert!(stdout.contains("Enter expression: "), "stdout was: {stdout}");
    assert!(stdout.contains("Postfix: 3 u- 2 +"), "stdout was: {stdout}");
    assert!(stdout.contains("Result: -1"), "stdout was: {stdout}");
}

#[test]
fn errors_go_to_stderr_with_failure_status() {
    let assert = xcalc().arg("4/0").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("Error: Division by zero"), "stderr was: {stderr}");
}

#[test]
fn invalid_expression_fails() {
    let assert = xcalc().arg("foo(1)").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("Unknown function 'foo'"), "stderr was: {stderr}");
}
