use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "spendbook";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn purchases_file(&self) -> PathBuf {
        self.dir.path().join("purchases.txt")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
        cmd.env("SPENDBOOK_DATA_DIR", self.dir.path().join("config"))
            .env("SPENDBOOK_FILE", self.purchases_file())
            .env_remove("SPENDBOOK_LOG");
        cmd
    }
}

#[test]
fn menu_exit_says_bye() {
    let ws = Workspace::new();
    ws.command()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(contains("Choose your action:").and(contains("Bye!")));
}

#[test]
fn menu_save_writes_purchases_file() {
    let ws = Workspace::new();
    ws.command()
        .arg("menu")
        .write_stdin("1\n300\n2\n4\nBike lock\n24.99\n5\n5\n0\n")
        .assert()
        .success()
        .stdout(contains("Purchases were saved!"));

    let text = fs::read_to_string(ws.purchases_file()).unwrap();
    assert_eq!(
        text,
        "300.00\nFood\nEND\nClothes\nEND\nEntertainment\nEND\nOther\nBike lock $24.99\nEND\n"
    );
}

#[test]
fn one_shot_commands_share_the_file() {
    let ws = Workspace::new();

    ws.command()
        .args(["income", "1000"])
        .assert()
        .success()
        .stdout(contains("Income was added!"));

    ws.command()
        .args(["purchase", "food", "Groceries", "120.40"])
        .assert()
        .success()
        .stdout(contains("Purchase was added!"));

    ws.command()
        .args(["purchase", "3", "Board game", "45"])
        .assert()
        .success();

    ws.command()
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: $834.60"));

    ws.command()
        .args(["list", "all"])
        .assert()
        .success()
        .stdout(contains("Groceries $120.40").and(contains("Total sum: $165.40")));

    ws.command()
        .args(["analyze", "types"])
        .assert()
        .success()
        .stdout(contains("Types:\nFood - $120.40\nEntertainment - $45.00\n"));
}

#[test]
fn list_empty_category() {
    let ws = Workspace::new();
    ws.command()
        .args(["list", "clothes"])
        .assert()
        .success()
        .stdout(contains("Clothes\nThe purchase list is empty!"));
}

#[test]
fn corrupt_entry_is_reported_and_skipped() {
    let ws = Workspace::new();
    fs::write(
        ws.purchases_file(),
        "50\nFood\nSoda $notanumber\nChips $2.00\nEND\nClothes\nEND\nEntertainment\nEND\nOther\nEND\n",
    )
    .unwrap();

    ws.command()
        .args(["analyze", "food"])
        .assert()
        .success()
        .stderr(contains("Purchase \"Soda\" is skipped"))
        .stdout(contains("Food:\nChips $2.00\n"));
}

#[test]
fn corrupt_balance_fails_without_touching_file() {
    let ws = Workspace::new();
    fs::write(ws.purchases_file(), "abc\n").unwrap();

    ws.command()
        .args(["income", "5"])
        .assert()
        .failure()
        .stderr(contains("Balance in file is a wrong number"));

    assert_eq!(fs::read_to_string(ws.purchases_file()).unwrap(), "abc\n");
}

#[test]
fn invalid_amount_rejected_by_parser() {
    let ws = Workspace::new();
    ws.command()
        .args(["income", "lots"])
        .assert()
        .failure()
        .stderr(contains("Wrong number format"));
    assert!(!ws.purchases_file().exists());
}

#[test]
fn config_shows_purchases_file() {
    let ws = Workspace::new();
    ws.command()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Purchases file:").and(contains("purchases.txt")));
}

#[test]
fn config_set_file_is_used_by_later_runs() {
    let ws = Workspace::new();
    let remembered = ws.dir.path().join("books").join("home.txt");

    ws.command()
        .env_remove("SPENDBOOK_FILE")
        .current_dir(ws.dir.path())
        .args(["config", "--set-file"])
        .arg(&remembered)
        .assert()
        .success()
        .stdout(contains("Settings were saved!").and(contains("home.txt")));
    assert!(ws.dir.path().join("config").join("config.json").exists());

    ws.command()
        .env_remove("SPENDBOOK_FILE")
        .current_dir(ws.dir.path())
        .args(["income", "12"])
        .assert()
        .success();
    assert!(fs::read_to_string(&remembered).unwrap().starts_with("12.00\n"));
    assert!(!ws.purchases_file().exists());

    ws.command()
        .env_remove("SPENDBOOK_FILE")
        .current_dir(ws.dir.path())
        .args(["config", "--reset-file"])
        .assert()
        .success()
        .stdout(contains("Purchases file: (default)"));
}

#[test]
fn oversized_income_is_reported_not_a_crash() {
    let ws = Workspace::new();
    ws.command().args(["income", "90000000000000000"]).assert().success();

    ws.command()
        .args(["income", "90000000000000000"])
        .assert()
        .failure()
        .stderr(contains("amount too large"));

    ws.command()
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: $90000000000000000.00"));
}
