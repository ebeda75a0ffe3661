use assert_cmd::Command;

/// Helper to get a Command for the artidec binary.
#[allow(deprecated)]
fn artidec_cmd() -> Command {
    Command::cargo_bin("artidec").unwrap()
}

#[test]
fn help_works() {
    artidec_cmd().arg("--help").assert().success();
}

#[test]
fn subcommand_help_works() {
    artidec_cmd().args(["decode", "--help"]).assert().success();
    artidec_cmd().args(["validate", "--help"]).assert().success();
    artidec_cmd().args(["legend", "--help"]).assert().success();
}
