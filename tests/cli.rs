use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn agora(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agora").unwrap();
    cmd.env("AGORA_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let output = agora(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "agora {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Third word of the confirmation line is the new record's ID
fn created_id(stdout: &str) -> String {
    stdout.split_whitespace().nth(2).unwrap().trim_end_matches(':').to_string()
}

fn seed_spreadsheet_scenario(dir: &TempDir) {
    run(dir, &["init"]);
    run(
        dir,
        &["project", "add", "a", "Wedding film", "15040", "-d", "2025-01-10", "-s", "received"],
    );
    run(dir, &["company", "add", "Festival", "9000", "--bonus-a", "3111.25"]);
    run(
        dir,
        &["expense", "fixed-add", "Fixed costs", "24631.42", "--date", "2025-01-01", "--paid"],
    );
    let issued = run(
        dir,
        &["boletim", "add", "a", "January", "--amount", "5215.36", "--date", "2025-01-31"],
    );
    run(dir, &["boletim", "pay", &created_id(&issued), "--date", "2025-02-01"]);
}

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();
    agora(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete (5 data files created)"));

    assert!(dir.path().join("data").join("expense_reports.json").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn empty_store_balance_is_zero() {
    let dir = TempDir::new().unwrap();
    agora(&dir)
        .args(["balance", "show", "--partner", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BALANCE").and(predicate::str::contains("€0.00")));
}

#[test]
fn spreadsheet_scenario_balance() {
    let dir = TempDir::new().unwrap();
    seed_spreadsheet_scenario(&dir);

    let stdout = run(&dir, &["balance", "show", "--partner", "a"]);
    assert!(stdout.contains("€12315.71"));
    assert!(stdout.contains("€18151.25"));
    assert!(stdout.contains("€620.18"));
    assert!(!stdout.contains("partner B"));
}

#[test]
fn verify_against_expected_balance() {
    let dir = TempDir::new().unwrap();
    seed_spreadsheet_scenario(&dir);

    agora(&dir)
        .args(["balance", "verify", "--partner", "a", "--expected-balance", "620.18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: all figures match."));

    agora(&dir)
        .args(["balance", "verify", "--partner", "a", "--expected-balance", "600"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Found 1 discrepancies"));
}

#[test]
fn invalid_partner_is_rejected() {
    let dir = TempDir::new().unwrap();
    agora(&dir)
        .args(["balance", "show", "--partner", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid partner: 'c'"));
}

#[test]
fn boletim_without_amount_needs_positive_balance() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);

    agora(&dir)
        .args(["boletim", "add", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing is owed to partner B"));

    run(&dir, &["project", "add", "b", "Ad", "250", "-d", "2025-03-01", "-s", "received"]);
    agora(&dir)
        .args(["boletim", "add", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€250.00"));
}

#[test]
fn export_json_report() {
    let dir = TempDir::new().unwrap();
    seed_spreadsheet_scenario(&dir);
    let file = dir.path().join("saldo.json");

    run(&dir, &["balance", "export", file.to_str().unwrap()]);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(value["report"]["rows"][0]["breakdown"]["balance"], "620.18");
    assert_eq!(value["metadata"]["expense_report_count"], 1);
}

#[test]
fn history_lists_twelve_months() {
    let dir = TempDir::new().unwrap();
    seed_spreadsheet_scenario(&dir);

    let stdout = run(&dir, &["balance", "history", "--partner", "a", "--year", "2025"]);
    assert!(stdout.contains("Janeiro"));
    assert!(stdout.contains("Dezembro"));
    assert_eq!(stdout.lines().count(), 14);
}

#[test]
fn mutations_are_audited() {
    let dir = TempDir::new().unwrap();
    seed_spreadsheet_scenario(&dir);

    agora(&dir)
        .args(["audit", "--count", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ExpenseReport"));
}

#[test]
fn out_of_range_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);

    agora(&dir)
        .args(["project", "add", "a", "Huge", "79228162514264337593543950000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project amount cannot exceed"));

    agora(&dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€0.00"));
}
