use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const VECTOR_SECRET: &str =
    "49W385L4rePHy6PAaQUovbD2aacgN4HsKXSMeUzRg4fmwXszN91JuMFrQRj3vMDpZuRF3ZknQBuRBoWQJEfXstMw";
const VECTOR_ADDRESS: &str = "FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lilypad"))
}

fn lilypad(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("LILYPAD_SECRET")
        .env_remove("RUST_LOG")
        .output()
        .expect("run lilypad")
}

fn lilypad_with_stdin(data_dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin())
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("LILYPAD_SECRET")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lilypad");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait lilypad")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn restore_then_show_masks_secret() {
    let dir = tempfile::tempdir().unwrap();

    let restored = lilypad(dir.path(), &["restore", "--secret", VECTOR_SECRET]);
    assert!(restored.status.success(), "stderr: {}", stderr(&restored));
    assert!(stdout(&restored).contains(VECTOR_ADDRESS));
    assert!(!stdout(&restored).contains(VECTOR_SECRET));

    let shown = lilypad(dir.path(), &["show"]);
    assert!(shown.status.success());
    assert!(stdout(&shown).contains(VECTOR_ADDRESS));
    assert!(!stdout(&shown).contains(VECTOR_SECRET));

    let revealed = lilypad(dir.path(), &["show", "--reveal"]);
    assert!(stdout(&revealed).contains(VECTOR_SECRET));
}

#[test]
fn restore_reads_secret_from_stdin() {
    let dir = tempfile::tempdir().unwrap();

    let output = lilypad_with_stdin(dir.path(), &["restore"], &format!("  {VECTOR_SECRET}  \n"));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(VECTOR_ADDRESS));
}

#[test]
fn invalid_secret_gets_generic_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = lilypad(dir.path(), &["restore", "--secret", "not-base-encoded-!!!"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid private key. Please check and try again."));

    let shown = lilypad(dir.path(), &["show"]);
    assert!(stdout(&shown).contains("No wallet signed in."));
}

#[test]
fn generate_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();

    let first = lilypad(dir.path(), &["generate"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));

    let second = lilypad(dir.path(), &["generate"]);
    assert!(!second.status.success());

    let forced = lilypad(dir.path(), &["generate", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn clear_signs_out() {
    let dir = tempfile::tempdir().unwrap();

    assert!(lilypad(dir.path(), &["generate"]).status.success());
    assert!(lilypad(dir.path(), &["clear"]).status.success());
    assert!(lilypad(dir.path(), &["clear"]).status.success());

    let shown = lilypad(dir.path(), &["show"]);
    assert!(stdout(&shown).contains("No wallet signed in."));
}

#[test]
fn version_prints_without_touching_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("never-created");

    let output = lilypad(&data_dir, &["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("lilypad "));
    assert!(!data_dir.exists());
}
