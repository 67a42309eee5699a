use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_checksum_fw"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_prints_value_and_branch() {
    let output = run(&["de010203"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0xF4 magic-header");
}

#[test]
fn cli_accepts_split_prefixed_bytes() {
    let output = run(&["0xFF", "AD"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x72 magic-second");
}

#[test]
fn cli_accepts_prefixed_bytes_in_one_argument() {
    let output = run(&["0xDE 0x01 0x02 0x03"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0xF4 magic-header");
}

#[test]
fn cli_quiet_prints_value_only() {
    let output = run(&["--quiet", "010203"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x06");
}

#[test]
fn cli_empty_input_is_zero() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x00 default");
}

#[test]
fn cli_length_truncates() {
    let output = run(&["--length", "1", "de00ad"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0xEE magic-header");
}

#[test]
fn cli_rejects_length_past_input() {
    let output = run(&["--length", "5", "0102"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("length 5 exceeds the 2 bytes available"));
}

#[test]
fn cli_rejects_bad_hex() {
    let output = run(&["zz"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid hex input"));
}
