use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

fn write_script(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn read_png(path: &std::path::Path) -> cairo::ImageSurface {
    let mut file = std::fs::File::open(path).unwrap();
    cairo::ImageSurface::create_from_png(&mut file).unwrap()
}

#[test]
fn sketchpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Raster paint canvas driven by recorded page events",
        ));
}

#[test]
fn script_is_required() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn print_config_shows_defaults() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expand_step = 600"))
        .stdout(predicate::str::contains("language = \"en-US\""));
}

#[test]
fn print_config_reads_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nwidth = 320\n").unwrap();
    sketchpad_cmd(&temp)
        .args(["--print-config", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("width = 320"));
}

#[test]
fn malformed_config_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[canvas\n").unwrap();
    sketchpad_cmd(&temp)
        .args(["--print-config", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn script_renders_filled_rectangle_to_output() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r##"[
            {"type": "select_tool", "id": "filledRectangle"},
            {"type": "set_color", "value": "#0000ff"},
            {"type": "pointer", "event": {"type": "mouse_down", "x": 10, "y": 10}},
            {"type": "pointer", "event": {"type": "mouse_move", "x": 50, "y": 40}},
            {"type": "pointer", "event": {"type": "mouse_up"}}
        ]"##,
    );
    let output = temp.path().join("out/paint.png");

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--width", "120", "--height", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filled rectangle"))
        .stdout(predicate::str::contains("undo 1 / redo 0"));

    let mut surface = read_png(&output);
    assert_eq!(surface.width(), 120);
    assert_eq!(surface.height(), 80);
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let at = |x: usize, y: usize| {
        let i = y * stride + x * 4;
        u32::from_ne_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]) & 0x00ff_ffff
    };
    assert_eq!(at(30, 25), 0x0000_00ff);
    assert_eq!(at(5, 5), 0x00ff_ffff);
}

#[test]
fn expand_grows_exported_image() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, r#"{"events": [{"type": "expand"}]}"#);
    let output = temp.path().join("tall.png");

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--width", "50", "--height", "100"])
        .assert()
        .success();

    assert_eq!(read_png(&output).height(), 700);
}

#[test]
fn voice_failure_prints_notice() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r#"[{"type": "voice_start"}, {"type": "voice_failure", "reason": "no-speech"}]"#,
    );
    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("v.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "notice: Speech recognition error! Try again.",
        ));
}

#[test]
fn save_event_uses_export_directory() {
    let temp = TempDir::new().unwrap();
    let export_dir = temp.path().join("exports");
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[export]\ndirectory = \"{}\"\nfilename_template = \"sketch\"\n",
            export_dir.display()
        ),
    )
    .unwrap();
    let script = write_script(&temp, r#"[{"type": "save"}]"#);

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .args(["--width", "40", "--height", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved: "))
        .stdout(predicate::str::contains("sketch.png"));

    assert!(export_dir.join("sketch.png").exists());
}

#[test]
fn invalid_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, r#"[{"type": "warp"}]"#);
    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}
