use assert_cmd::Command;
use std::io::Write as _;

// Port 1 on loopback is assumed closed; every attempt fails fast with a
// transport error, which keeps these tests network-free.
fn probe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    cmd.env_remove("DBPROBE_HOST")
        .env_remove("DBPROBE_PORT")
        .env_remove("DBPROBE_DATABASE")
        .env_remove("DBPROBE_PASSWORD")
        .args(["--host", "127.0.0.1", "--port", "1", "--timeout", "2"]);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn exits_zero_when_every_candidate_fails() {
    let out = stdout_of(probe_cmd().arg("--silent"));

    assert_eq!(out.matches("testing user:").count(), 2);
    assert!(out.contains("testing user: root"));
    assert!(out.contains("testing user: admin"));
    assert_eq!(out.matches("unexpected error:").count(), 2);
    assert!(!out.contains("driver error:"));
    assert_eq!(out.matches("=== probe complete ===").count(), 1);
}

#[test]
fn prints_the_resolved_endpoint() {
    let out = stdout_of(probe_cmd().args(["--silent", "--database", "inventory"]));

    assert!(out.contains("target: 127.0.0.1:1/inventory"));
}

#[test]
fn probes_users_in_the_order_given() {
    let out = stdout_of(probe_cmd().args([
        "--silent", "--user", "alpha", "--user", "beta", "--user", "gamma",
    ]));

    let alpha = out.find("testing user: alpha").unwrap();
    let beta = out.find("testing user: beta").unwrap();
    let gamma = out.find("testing user: gamma").unwrap();
    assert!(alpha < beta && beta < gamma);
    assert_eq!(out.matches("testing user:").count(), 3);
}

#[test]
fn reads_candidates_from_a_user_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# probe candidates").unwrap();
    writeln!(file, "svc_probe").unwrap();
    file.flush().unwrap();

    let out = stdout_of(probe_cmd().args([
        "--silent",
        "--user-file",
        file.path().to_str().unwrap(),
    ]));

    assert_eq!(out.matches("testing user:").count(), 1);
    assert!(out.contains("testing user: svc_probe"));
}

#[test]
fn silent_mode_suppresses_the_banner() {
    let out = stdout_of(probe_cmd().arg("--silent"));
    assert!(!out.contains("connection prober"));

    let out = stdout_of(&mut probe_cmd());
    assert!(out.contains("A connection prober for MySQL-protocol database servers"));
}
