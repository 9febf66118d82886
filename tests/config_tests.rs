// Startup option parsing and validation.

use sysmon::config::Config;

#[test]
fn defaults_match_the_documented_options() {
    let config = Config::from_args(["sysmond"]).unwrap();
    assert_eq!(config.db_path, "/usr/share/sysmon.db");
    assert!(!config.drop_db);
    assert_eq!(config.frequency_secs, 60);
    assert!(!config.log_to_stdout);
}

#[test]
fn short_flags_parse() {
    let config =
        Config::from_args(["sysmond", "-p", "/tmp/m.db", "-d", "-f", "5", "-s"]).unwrap();
    assert_eq!(config.db_path, "/tmp/m.db");
    assert!(config.drop_db);
    assert_eq!(config.frequency_secs, 5);
    assert!(config.log_to_stdout);
}

#[test]
fn long_flags_parse() {
    let config = Config::from_args([
        "sysmond",
        "--path",
        "/var/lib/sysmon.db",
        "--frequency",
        "120",
        "--stdout",
    ])
    .unwrap();
    assert_eq!(config.db_path, "/var/lib/sysmon.db");
    assert_eq!(config.frequency_secs, 120);
    assert!(config.log_to_stdout);
}

#[test]
fn zero_frequency_is_allowed_for_tight_sampling() {
    let config = Config::from_args(["sysmond", "-f", "0"]).unwrap();
    assert_eq!(config.frequency_secs, 0);
}

#[test]
fn empty_database_path_is_rejected() {
    assert!(Config::from_args(["sysmond", "-p", ""]).is_err());
}

#[test]
fn non_numeric_frequency_is_rejected() {
    assert!(Config::from_args(["sysmond", "-f", "often"]).is_err());
}
