use std::io::Write;
use std::process::{Command, Output, Stdio};

use td_catalog::builtin_catalog;
use td_core::Domain;

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_td-cli");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("td-cli should spawn");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("stdin should accept input");
    child.wait_with_output().expect("td-cli should finish")
}

fn first_scenario_script(domain: Domain) -> String {
    let catalog = builtin_catalog(domain).expect("builtin catalog should parse");
    let mut script = String::new();
    for step in &catalog.scenarios[0].steps {
        script.push_str(&step.accepted_commands[0]);
        script.push('\n');
    }
    script.push_str(":quit\n");
    script
}

#[test]
fn agent_plays_first_scenario_of_every_domain() {
    for domain in Domain::ALL {
        let output = run_with_stdin(
            &["agent", "--domain", domain.as_str()],
            &first_scenario_script(domain),
        );
        assert!(output.status.success(), "agent failed for {}", domain);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("RESULT:OK\nEVENT:STARTED\n"));
        assert!(!stdout.contains("EVENT:REJECTED"));
        let heading = domain.scheme().completion_heading;
        assert!(
            stdout.contains(&format!("━━━ {} ━━━", heading)),
            "missing completion for {}:\n{}",
            domain,
            stdout
        );
        assert!(stdout.contains("|failed:0|completed:true"));
        assert!(stdout.trim_end().ends_with("completed:true"));
    }
}

#[test]
fn agent_reports_rejections_and_controller_commands() {
    let output = run_with_stdin(
        &["agent", "--domain", "kubernetes"],
        "not a command\n:reset\n:next\n:progress\n",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let events = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("EVENT:"))
        .collect::<Vec<_>>();
    assert_eq!(
        events,
        vec!["STARTED", "REJECTED", "RESET", "ADVANCED", "PROGRESS"]
    );
    assert!(stdout.contains("ENTRY:error|\"Command not effective. Hint: "));
    assert!(stdout.contains("PROGRESS:1/"));
    assert!(stdout.contains("|scenario:2/20|failed:0|completed:false"));
}

#[test]
fn agent_token_matcher_rejects_partial_words() {
    let catalog = builtin_catalog(Domain::Docker).expect("builtin catalog should parse");
    let accepted = &catalog.scenarios[0].steps[0].accepted_commands[0];
    let partial = format!("x{}\n", accepted);

    let substring = run_with_stdin(&["agent", "--domain", "docker"], &partial);
    assert!(String::from_utf8_lossy(&substring.stdout).contains("EVENT:MATCHED"));

    let token = run_with_stdin(
        &["agent", "--domain", "docker", "--matcher", "token"],
        &partial,
    );
    assert!(String::from_utf8_lossy(&token.stdout).contains("EVENT:REJECTED"));
}

#[test]
fn tui_falls_back_to_line_mode_without_terminal() {
    let output = run_with_stdin(
        &["tui", "--domain", "incident"],
        &first_scenario_script(Domain::Incident),
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Incident Response\n"));
    assert!(stdout.contains("🚨 [P1] Container OOMKilled in Production"));
    assert!(stdout.contains("━━━ Incident Resolved ━━━"));
    assert!(stdout.contains("incidents 1/20 |"));
    assert!(stdout.ends_with("bye\n"));
}
