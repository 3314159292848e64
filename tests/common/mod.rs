use assert_cmd::Command;

pub fn reflectwell_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reflectwell").unwrap();
    cmd.env_remove("REFLECTWELL_ROOT");
    cmd.env_remove("REFLECTWELL_LOG");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
