use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs
use std::fs;

/// load address plus pointer chain for `10 PRINT"HI"`
const HI_PRG: [u8;14] = [0x01,0x08,0x0B,0x08,0x0A,0x00,0x99,0x22,0xC8,0xC9,0x22,0x00,0x00,0x00];

#[test]
fn detokenize_program_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("hi.prg"),HI_PRG)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.arg("detokenize")
        .arg(dir.path().join("hi.prg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("start tok64 hi.prg\n10 PRINT\"HI\"\nstop tok64"));
    Ok(())
}

#[test]
fn detokenize_rejects_unknown_address() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut prg = HI_PRG.to_vec();
    prg[0] = 0x00; // load address 0x0800
    fs::write(dir.path().join("odd.prg"),prg)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.arg("detokenize")
        .arg(dir.path().join("odd.prg"))
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid BASIC start address"));
    Ok(())
}

#[test]
fn detokenize_all_overrides_address_check() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut prg = HI_PRG.to_vec();
    prg[0] = 0x00;
    prg[2] = 0x0A; // keep the chain consistent with 0x0800
    fs::write(dir.path().join("odd.prg"),prg)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.arg("detokenize").arg("-a")
        .arg(dir.path().join("odd.prg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("start bastext 2048"));
    Ok(())
}

#[test]
fn detokenize_to_destination_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("hi.prg"),HI_PRG)?;
    let dest = dir.path().join("listing.bas");
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.arg("detokenize")
        .arg("-d").arg(&dest)
        .arg(dir.path().join("hi.prg"))
        .assert()
        .success();
    let text = fs::read_to_string(&dest)?;
    assert!(text.contains("10 PRINT\"HI\""));
    Ok(())
}

#[test]
fn tokenize_writes_program_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let listing = "start tok64 hi.prg\n10 print\"HI\"\nstop tok64\n";
    fs::write(dir.path().join("listing.bas"),listing)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.current_dir(dir.path())
        .arg("tokenize")
        .arg("listing.bas")
        .assert()
        .success();
    assert_eq!(fs::read(dir.path().join("hi.prg"))?,HI_PRG);
    Ok(())
}

#[test]
fn tokenize_forced_dialect() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let listing = "start tok64 g.prg\n10 plot\nstop tok64\n";
    fs::write(dir.path().join("listing.bas"),listing)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.current_dir(dir.path())
        .arg("tokenize")
        .arg("-m").arg("graphics52")
        .arg("listing.bas")
        .assert()
        .success();
    let prg = fs::read(dir.path().join("g.prg"))?;
    assert_eq!(prg,vec![0x01,0x08,0x07,0x08,0x0A,0x00,0xCE,0x00,0x00,0x00]);
    Ok(())
}

#[test]
fn t64_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let listing = "start tok64 hi.prg\n10 print\"HI\"\nstop tok64\n";
    fs::write(dir.path().join("listing.bas"),listing)?;
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.current_dir(dir.path())
        .arg("tokenize").arg("-t")
        .arg("listing.bas")
        .assert()
        .success();
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.current_dir(dir.path())
        .arg("detokenize").arg("-t")
        .arg("bastok.t64")
        .assert()
        .success()
        .stdout(predicate::str::contains("start tok64 HI.prg\n10 PRINT\"HI\"\nstop tok64"));
    Ok(())
}

#[test]
fn bad_dialect_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bastok")?;
    cmd.arg("tokenize")
        .arg("-m").arg("basic99")
        .arg("listing.bas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("basic99"));
    Ok(())
}
