use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// adhocnet with a config directory that holds no config file
pub fn adhocnet() -> Command {
    let mut cmd = cargo_bin_cmd!("adhocnet");
    cmd.env(
        "ADHOCNET_CONFIG_DIR",
        std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("adhocnet-no-config"),
    )
    .env_remove("ADHOCNET_CONFIG")
    .env_remove("ADHOCNET_LOG");
    cmd
}
