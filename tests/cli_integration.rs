//! Integration tests that run the CLI binary.

fn bin() -> (std::process::Command, tempfile::TempDir) {
    // Run from a temp dir so dotenvy won't pick up a .env with a real key
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_bimcheck"));
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY");
    (cmd, tmp)
}

#[test]
fn help_lists_the_options() {
    let (mut cmd, _tmp) = bin();
    let output = cmd.arg("--help").output().expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--no-ai"));
    assert!(stdout.contains("--json"));
}

#[test]
fn conforming_name_exits_zero() {
    let (mut cmd, _tmp) = bin();
    let output = cmd
        .args(["--no-ai", "PRJ-ORG-ZZ-XX-M3-AR-0001.rvt"])
        .output()
        .expect("binary runs");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("conforms"));
    assert!(stdout.contains("3D Model"));
    assert!(!stdout.contains("AI analysis"));
}

#[test]
fn one_bad_name_fails_the_run() {
    let (mut cmd, _tmp) = bin();
    let output = cmd
        .args([
            "--no-ai",
            "PRJ-ORG-ZZ-XX-M3-AR-0001.rvt",
            "PRJ-ORG-ZZ-XX-M3-AR.rvt",
        ])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("missing"));
    assert!(stdout.contains("does not conform"));
}

#[test]
fn json_output_is_one_object_per_name() {
    let (mut cmd, _tmp) = bin();
    let output = cmd
        .args(["--no-ai", "--json", "prj-org-zz-xx-m3-ar-0001.xyz", "A-B.RVT"])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json line"))
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["extension"], ".xyz");
    assert_eq!(lines[0]["isExtensionValid"], false);
    assert_eq!(lines[0]["overallValid"], false);
    assert_eq!(lines[0]["segments"][0]["errorMessage"], "wrong format");

    assert_eq!(lines[1]["extension"], ".rvt");
    assert_eq!(lines[1]["isExtensionValid"], true);
    assert_eq!(lines[1]["tokenCount"], 2);
    assert!(lines[1].get("aiFeedback").is_none());
}

#[test]
fn missing_key_still_reports_with_fallback_commentary() {
    let (mut cmd, _tmp) = bin();
    let output = cmd
        .args(["--json", "PRJ-ORG-ZZ-XX-M3-AR-0001.nwd"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json");
    assert_eq!(result["overallValid"], true);
    assert_eq!(
        result["aiFeedback"],
        "حدث خطأ أثناء الاتصال بالذكاء الاصطناعي لتحليل الملف."
    );
}

#[test]
fn guide_prints_codes_and_extensions() {
    let (mut cmd, _tmp) = bin();
    let output = cmd.args(["--guide", "--lang", "ar"]).output().expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".nwf"));
    assert!(stdout.contains("معماري"));
    assert!(stdout.contains("iso.org"));
}

#[test]
fn blank_name_is_rejected() {
    let (mut cmd, _tmp) = bin();
    let output = cmd.args(["--no-ai", "  "]).output().expect("binary runs");
    assert!(!output.status.success());
}
