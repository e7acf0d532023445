use std::io::Write;
use std::process::{ExitStatus, Stdio};
use tempfile::NamedTempFile;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// SMTP settings that point to a port on which nothing listens, so alerts fail to send.
#[allow(dead_code)] // Not dead code, used in tests.
pub fn unreachable_smtp_env() -> Vec<(&'static str, String)> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    vec![
        ("UPTIMECHECK_SMTP_USERNAME", "monitor@example.com".to_string()),
        ("UPTIMECHECK_SMTP_PASSWORD", "secret".to_string()),
        ("UPTIMECHECK_SMTP_HOST", "127.0.0.1".to_string()),
        ("UPTIMECHECK_SMTP_PORT", port.to_string()),
    ]
}

/// Writes the given JSON to a temporary checks file.
#[allow(dead_code)] // Not dead code, used in tests.
pub fn checks_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

/// Runs `cargo run -- <args>` and returns the exit status together with the log output.
pub async fn run_uptimecheck(
    args: &[&str],
    env_vars: &[(&str, String)],
    remove_vars: &[&str],
) -> (ExitStatus, Vec<String>) {
    let mut command = Command::new("cargo");
    command
        .args(["run", "--quiet", "--"])
        .args(args)
        .env("RUST_LOG", "info")
        .envs(env_vars.iter().map(|(k, v)| (*k, v.as_str())))
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    for var in remove_vars {
        command.env_remove(var);
    }
    let mut child = command
        .spawn()
        .expect("The command should spawn a child process.");

    // Capture the log output on stderr.
    let stderr = child
        .stderr
        .take()
        .expect("Stderr output should be captured.");
    let mut lines = BufReader::new(stderr).lines();
    let mut captured_lines = Vec::new();
    while let Ok(Some(line)) = lines.next_line().await {
        captured_lines.push(line);
    }

    let status = child.wait().await.expect("The command should exit.");
    (status, captured_lines)
}

pub fn check_log_output_regex(captured_lines: &[String], regex_expected_lines: Vec<&str>) {
    for expected_line in regex_expected_lines {
        let re = regex::Regex::new(expected_line).expect("Failed to compile regex");
        let found = captured_lines.iter().any(|line| re.is_match(line.as_ref()));
        assert!(
            found,
            "The output contains the line '{}'. Output: {:?}",
            expected_line, captured_lines
        );
    }
}
