use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn nblk(xdg: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nblk"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn render_prints_wrapped_notice() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("page.liquid");
    fs::write(&page, "{% warning %}Disk almost full{% endwarning %}").unwrap();

    nblk(tmp.path())
        .args(["render", page.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<aside class=\"notice warning\" markdown=\"1\">\n Disk almost full\n</aside>\n");
}

#[test]
fn render_reads_stdin() {
    let tmp = tempdir().unwrap();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nblk"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .args(["render", "-"])
        .write_stdin("{% error %}{% enderror %}")
        .assert()
        .success()
        .stdout("<aside class=\"notice error\" markdown=\"1\">\n \n</aside>\n");
}

#[test]
fn render_vars_override_config_globals() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(
        &cfg_path,
        "version = 1\n\n[globals]\nwho = \"config\"\nwhat = \"build\"\n",
    )
    .unwrap();
    let page = tmp.path().join("page.liquid");
    fs::write(&page, "{% info %}{{ who }} {{ what }}{% endinfo %}").unwrap();

    nblk(tmp.path())
        .args([
            "--config",
            cfg_path.to_str().unwrap(),
            "render",
            page.to_str().unwrap(),
            "--var",
            "who=cli",
        ])
        .assert()
        .success()
        .stdout("<aside class=\"notice info\" markdown=\"1\">\n cli build\n</aside>\n");
}

#[test]
fn render_markdown_flag_converts_bodies() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("page.liquid");
    fs::write(&page, "{% success %}*Done*{% endsuccess %}").unwrap();

    nblk(tmp.path())
        .args(["render", page.to_str().unwrap(), "--markdown"])
        .assert()
        .success()
        .stdout("<aside class=\"notice success\">\n<p><em>Done</em></p>\n</aside>\n");
}

#[test]
fn render_writes_output_file() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("page.liquid");
    let out = tmp.path().join("out/page.html");
    fs::create_dir_all(out.parent().unwrap()).unwrap();
    fs::write(&page, "{% standard %}Note{% endstandard %}").unwrap();

    nblk(tmp.path())
        .args(["render", page.to_str().unwrap(), "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("OK   nblk render"));

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, "<aside class=\"notice standard\" markdown=\"1\">\n Note\n</aside>\n");
}

#[test]
fn render_unknown_tag_fails() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("page.liquid");
    fs::write(&page, "{% danger %}x{% enddanger %}").unwrap();

    nblk(tmp.path())
        .args(["render", page.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicates::str::contains("FAIL nblk render"))
        .stdout(predicates::str::contains("failed to parse template"));
}

#[test]
fn render_missing_file_fails() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("missing.liquid");

    nblk(tmp.path())
        .args(["render", page.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicates::str::contains("failed to read template"));
}
