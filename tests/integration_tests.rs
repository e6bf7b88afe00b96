//! Integration tests for the partstock CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a partstock command
fn partstock() -> Command {
    Command::cargo_bin("partstock").unwrap()
}

/// Helper to create a test project in a temp directory
fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp
}

/// Helper to create a part, returning its id
fn create_test_part(tmp: &TempDir, name: &str, code: &str, maker: &str, price: &str) -> String {
    let output = partstock()
        .current_dir(tmp.path())
        .args([
            "part", "new", "--quiet", "--name", name, "--code", code, "--manufacturer", maker,
            "--vehicle", "Fiat Uno", "--stock", "50", "--price", price, "--category", "Motor",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find(|l| l.starts_with("PART-"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    partstock()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replacement parts"));
}

#[test]
fn test_version_displays() {
    partstock()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("partstock"));
}

#[test]
fn test_unknown_command_fails() {
    partstock().arg("unknown-command").assert().failure();
}

#[test]
fn test_completions_generate() {
    partstock()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("partstock"));
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_creates_structure() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(tmp.path().join(".partstock/config.yaml").exists());
    assert!(tmp.path().join("parts").is_dir());
    assert!(tmp.path().join("data-lake").is_dir());
}

#[test]
fn test_init_twice_warns() {
    let tmp = setup_test_project();
    partstock()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_seed_loads_catalog() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 10 sample parts"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_commands_fail_outside_project() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["part", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a partstock project"));
}

// ============================================================================
// Part CRUD
// ============================================================================

#[test]
fn test_part_new_and_show() {
    let tmp = setup_test_project();
    let id = create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");
    assert!(id.starts_with("PART-"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtro de Óleo"))
        .stdout(predicate::str::contains("25.90"));
}

#[test]
fn test_part_show_yaml_has_registration_date() {
    let tmp = setup_test_project();
    let id = create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");

    partstock()
        .current_dir(tmp.path())
        .args(["part", "show", &id, "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "registration_date: \"{}\"",
            today()
        )));
}

#[test]
fn test_part_list_filters() {
    let tmp = setup_test_project();
    create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");
    create_test_part(&tmp, "Correia Dentada", "CD321", "Gates", "75.50");

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--manufacturer", "bosch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FO123"))
        .stdout(predicate::str::contains("CD321").not());

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--price-min", "30", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_part_list_json_format() {
    let tmp = setup_test_project();
    create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"FO123\""));
}

#[test]
fn test_part_update_mutates_fields_only() {
    let tmp = setup_test_project();
    let id = create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");

    partstock()
        .current_dir(tmp.path())
        .args(["part", "update", &id, "--stock", "99", "--price", "27.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "show", &id, "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stock_quantity: 99"))
        .stdout(predicate::str::contains(format!("id: {}", id)))
        .stdout(predicate::str::contains(format!(
            "registration_date: \"{}\"",
            today()
        )));
}

#[test]
fn test_part_update_missing_id_fails() {
    let tmp = setup_test_project();

    partstock()
        .current_dir(tmp.path())
        .args([
            "part",
            "update",
            "PART-01HQ3K4N5M6P7R8S9T0VWXYZ01",
            "--stock",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no part found"));
}

#[test]
fn test_part_delete() {
    let tmp = setup_test_project();
    let id = create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");

    partstock()
        .current_dir(tmp.path())
        .args(["part", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no part found"));
}

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_import_creates_parts() {
    let tmp = setup_test_project();
    let csv_path = tmp.path().join("parts.csv");
    fs::write(
        &csv_path,
        "name,code,manufacturer,vehicle,stock,price,category\n\
         Filtro de Óleo,FO123,Bosch,Fiat Uno,50,25.90,Motor\n\
         Pastilha de Freio,PF456,Cobreq,Volkswagen Gol,30,89.90,Freio\n",
    )
    .unwrap();

    partstock()
        .current_dir(tmp.path())
        .args(["import", "parts.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 created"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));
}

#[test]
fn test_import_dry_run_creates_nothing() {
    let tmp = setup_test_project();
    let csv_path = tmp.path().join("parts.csv");
    fs::write(
        &csv_path,
        "name,code,manufacturer,vehicle,stock,price,category\n\
         Filtro de Óleo,FO123,Bosch,Fiat Uno,50,25.90,Motor\n",
    )
    .unwrap();

    partstock()
        .current_dir(tmp.path())
        .args(["import", "parts.csv", "--dry-run"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .args(["part", "list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn test_stats_counts_by_category() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .args(["stats", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Motor,4"))
        .stdout(predicate::str::contains("Freio,2"))
        .stdout(predicate::str::contains("Suspensão,2"));
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_full_inventory() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 10 part(s)"));

    let artifact = tmp.path().join(format!("data-lake/pecas-{}.csv", today()));
    assert!(artifact.exists());

    let content = fs::read_to_string(&artifact).unwrap();
    assert!(content.starts_with('\u{feff}'));
    assert!(content.contains("ID;\"Nome\";\"Código\""));
    assert!(content.contains(";\"Filtro de Óleo\";\"FO123\";\"Bosch\";\"Fiat Uno\";50;25,90;\"Motor\";"));
    // header + 10 rows
    assert_eq!(content.lines().count(), 11);
}

#[test]
fn test_export_filtered_by_manufacturer_lowercase() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .args(["export", "--manufacturer", "bosch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 part(s)"));

    let artifact = tmp
        .path()
        .join(format!("data-lake/pecas-bosch-{}.csv", today()));
    let content = fs::read_to_string(&artifact).unwrap();
    assert!(content.contains("FO123"));
    assert!(content.contains("FO124"));
    assert!(!content.contains("Cobreq"));
}

#[test]
fn test_export_category_mismatch_is_empty_but_succeeds() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .args(["export", "--category", "Transmissão"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 part(s)"));

    let artifact = tmp
        .path()
        .join(format!("data-lake/pecas-Transmissão-{}.csv", today()));
    let content = fs::read_to_string(&artifact).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_export_price_bounds_inclusive() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    // 25.90 is the exact price of FO123; the bound includes it
    partstock()
        .current_dir(tmp.path())
        .args(["export", "--price-min", "25.90", "--price-max", "25.90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 part(s)"));

    partstock()
        .current_dir(tmp.path())
        .args(["export", "--price-min", "25.91", "--price-max", "26.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 part(s)"));
}

#[test]
fn test_export_code_criterion_is_uppercased() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    // lower-case input matches the stored upper-case code
    partstock()
        .current_dir(tmp.path())
        .args(["export", "--code", "fo123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 part(s)"));

    let artifact = tmp
        .path()
        .join(format!("data-lake/pecas-codigofo123-{}.csv", today()));
    let content = fs::read_to_string(&artifact).unwrap();
    assert!(content.contains("\"FO123\""));
}

#[test]
fn test_export_same_day_same_criteria_overwrites() {
    let tmp = setup_test_project();
    let id = create_test_part(&tmp, "Filtro de Óleo", "FO123", "Bosch", "25.90");
    create_test_part(&tmp, "Correia Dentada", "CD321", "Gates", "75.50");

    partstock().current_dir(tmp.path()).arg("export").assert().success();

    let artifact = tmp.path().join(format!("data-lake/pecas-{}.csv", today()));
    let first = fs::read_to_string(&artifact).unwrap();
    assert!(first.contains("FO123"));

    partstock()
        .current_dir(tmp.path())
        .args(["part", "delete", &id, "--yes"])
        .assert()
        .success();

    partstock().current_dir(tmp.path()).arg("export").assert().success();

    let second = fs::read_to_string(&artifact).unwrap();
    assert!(!second.contains("FO123"));
    assert!(second.contains("CD321"));

    // one artifact in the content directory, flat layout
    let entries: Vec<_> = fs::read_dir(tmp.path().join("data-lake"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_export_name_encodes_all_filters() {
    let tmp = TempDir::new().unwrap();
    partstock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();

    partstock()
        .current_dir(tmp.path())
        .args([
            "export",
            "--quiet",
            "--manufacturer",
            "Volkswagen Gol",
            "--category",
            "Freio",
            "--price-min",
            "10.75",
            "--price-max",
            "99.99",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "pecas-Volkswagen_Gol-Freio-min10-max99-{}.csv",
            today()
        )));
}
