use std::process::Command;

#[test]
fn logs_go_to_stderr_and_leave_stdout_to_the_screen() {
    let output = Command::new(env!("CARGO_BIN_EXE_termsweep"))
        .args(["-vvv", "-H", "2", "-W", "2", "-m", "4"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("Args {"));
    assert!(stderr.contains("Invalid configuration: 2x2 board cannot hold 4 mines"));
}
