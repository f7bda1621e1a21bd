use std::process::Command;

#[test]
fn kinds_lists_every_tag() {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("nblk"))
        .arg("kinds")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    standard	{% standard %}...{% endstandard %}
    info	{% info %}...{% endinfo %}
    warning	{% warning %}...{% endwarning %}
    success	{% success %}...{% endsuccess %}
    error	{% error %}...{% enderror %}
    ");
}
