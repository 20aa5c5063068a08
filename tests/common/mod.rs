use assert_cmd::Command;

pub fn headtags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("headtags").unwrap();
    cmd.env_remove("HEADTAGS_LOG");
    cmd
}
