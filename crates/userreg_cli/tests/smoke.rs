use std::process::Command;

#[test]
fn smoke_run_reports_core_and_empty_store() {
    let output = Command::new(env!("CARGO_BIN_EXE_userreg_cli"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("userreg_core ping=pong"));
    assert!(stdout.contains("userreg_core default_db=users.db"));
    assert!(stdout.contains("userreg_core store=ok users=0"));
    assert!(stdout.contains("userreg_core log_dir="));
}
