use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sleeplog"))
}

struct Env {
    config: PathBuf,
    data: PathBuf,
    store: PathBuf,
}

impl Env {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!(
            "sleeplog_{}_{}_{}",
            prefix,
            std::process::id(),
            nanos
        ));
        let config = base.join("config");
        let data = base.join("data");
        std::fs::create_dir_all(&config).expect("create config dir");
        std::fs::create_dir_all(&data).expect("create data dir");
        let store = base.join("store").join("sleep.db");
        Self {
            config,
            data,
            store,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", &self.config)
            .env("XDG_DATA_HOME", &self.data)
            .env("SLEEPLOG_PATH", &self.store)
            .env_remove("SLEEPLOG_CONFIG")
            .env_remove("SLEEPLOG_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run sleeplog")
    }

    fn write_config(&self, contents: &str) {
        let dir = self.config.join("sleeplog");
        std::fs::create_dir_all(&dir).expect("create sleeplog config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("write config");
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

fn json(output: &Output) -> serde_json::Value {
    assert_ok(output);
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn log(env: &Env, date: &str, bed: &str, wake: &str, quality: &str) -> String {
    let value = json(&env.run(&[
        "log", "--date", date, "--bed", bed, "--wake", wake, "--quality", quality, "--json",
    ]));
    value["id"].as_str().expect("id").to_string()
}

#[test]
fn test_log_creates_store_and_computes_duration() {
    let env = Env::new("log");
    let output = env.run(&[
        "log", "--date", "2024-03-01", "--bed", "23:15", "--wake", "06:45", "--quality", "4",
        "--notes", "quiet", "--json",
    ]);
    let value = json(&output);
    assert_eq!(value["duration_minutes"], 450);
    assert_eq!(value["duration"], "7h 30m");
    assert_eq!(value["notes"], "quiet");
    assert!(env.store.exists());
}

#[test]
fn test_plain_log_receipt() {
    let env = Env::new("receipt");
    let output = env.run(&[
        "log", "--date", "2024-03-01", "--bed", "22:00", "--wake", "06:00", "--quality", "3",
    ]);
    assert_ok(&output);
    let out = stdout(&output);
    assert!(out.contains("status=ok"));
    assert!(out.contains("duration=8h 0m"));
    assert!(out.contains("quality=3"));
}

#[test]
fn test_invalid_inputs_exit_with_code_4() {
    let env = Env::new("invalid");
    let bad_time = env.run(&["log", "--bed", "11pm", "--wake", "07:00", "--quality", "3"]);
    assert_eq!(bad_time.status.code(), Some(4));
    assert!(stderr(&bad_time).contains("HH:MM"));

    let bad_quality = env.run(&["log", "--bed", "23:00", "--wake", "07:00", "--quality", "6"]);
    assert_eq!(bad_quality.status.code(), Some(4));

    let bad_window = env.run(&["list", "--last", "soon"]);
    assert_eq!(bad_window.status.code(), Some(4));

    for window in ["7é", "9223372036854775807w", "100000000d"] {
        let output = env.run(&["stats", "--last", window]);
        assert_eq!(output.status.code(), Some(4), "window {}", window);
    }
}

#[test]
fn test_list_is_newest_first_and_windowed() {
    let env = Env::new("list");
    log(&env, "2024-03-01", "23:00", "07:00", "3");
    log(&env, "2024-03-03", "23:00", "07:00", "4");
    log(&env, "2024-03-02", "23:00", "07:00", "5");

    let output = env.run(&["list", "--format", "plain"]);
    assert_ok(&output);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("2024-03-03"));
    assert!(lines[1].contains("2024-03-02"));
    assert!(lines[2].contains("2024-03-01"));

    let value = json(&env.run(&["list", "--since", "2024-03-02", "--until", "2024-03-02", "--json"]));
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["quality"], 5);
}

#[test]
fn test_list_limit_keeps_latest_dates_after_backfill() {
    let env = Env::new("backfill");
    log(&env, "2024-03-10", "23:00", "07:00", "3");
    log(&env, "2024-03-11", "23:00", "07:00", "3");
    log(&env, "2024-02-01", "23:00", "07:00", "3");

    let output = env.run(&["list", "--limit", "2", "--format", "plain"]);
    assert_ok(&output);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("2024-03-11"));
    assert!(lines[1].contains("2024-03-10"));
}

#[test]
fn test_show_edit_delete_by_prefix() {
    let env = Env::new("edit");
    let id = log(&env, "2024-03-01", "23:00", "07:00", "3");
    let prefix = &id[..8];

    let shown = json(&env.run(&["show", prefix, "--json"]));
    assert_eq!(shown["id"], id.as_str());

    let edited = json(&env.run(&["edit", prefix, "--wake", "06:00", "--json"]));
    assert_eq!(edited["duration_minutes"], 420);
    assert_eq!(edited["wake_time"], "06:00");

    let deleted = env.run(&["delete", prefix, "--yes"]);
    assert_ok(&deleted);
    assert!(stdout(&deleted).contains(&id));

    let missing = env.run(&["show", &id]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr(&missing).contains("Entry not found"));
}

#[test]
fn test_edit_without_changes_is_rejected() {
    let env = Env::new("noedit");
    let id = log(&env, "2024-03-01", "23:00", "07:00", "3");
    let output = env.run(&["edit", &id]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_stats_and_recommendations() {
    let env = Env::new("stats");
    log(&env, "2024-03-01", "23:00", "05:00", "2");
    log(&env, "2024-03-02", "23:00", "05:00", "2");

    let recs = json(&env.run(&["recommend", "--json"]));
    assert_eq!(recs.as_array().expect("array").len(), 1);
    assert_eq!(recs[0]["kind"], "need_more_data");

    log(&env, "2024-03-03", "23:00", "05:00", "2");
    let stats = json(&env.run(&["stats", "--json"]));
    assert_eq!(stats["entry_count"], 3);
    assert_eq!(stats["stats"]["average_sleep_duration"], 360.0);
    assert_eq!(stats["stats"]["consistency_score"], 100);
    assert_eq!(stats["streak_days"], 3);
    assert_eq!(stats["goal_attainment"], 75);

    let recs = json(&env.run(&["recommend", "--json"]));
    let kinds: Vec<&str> = recs
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(kinds, vec!["sleep_more", "improve_quality"]);
    assert!(recs[0]["message"]
        .as_str()
        .expect("message")
        .starts_with("You're averaging less than 7 hours"));
}

#[test]
fn test_thresholds_come_from_config() {
    let env = Env::new("thresh");
    env.write_config("[analysis]\nmin_entries = 1\nmin_average_duration = 300.0\n");
    log(&env, "2024-03-01", "23:00", "05:00", "4");

    let recs = json(&env.run(&["recommend", "--json"]));
    assert_eq!(recs[0]["kind"], "keep_it_up");
}

#[test]
fn test_goal_set_recomputes_duration() {
    let env = Env::new("goal");
    let goal = json(&env.run(&["goal", "show", "--json"]));
    assert_eq!(goal["target_bed_time"], "22:30");
    assert_eq!(goal["target_duration_minutes"], 480);

    let goal = json(&env.run(&["goal", "set", "--bed", "23:00", "--json"]));
    assert_eq!(goal["target_bed_time"], "23:00");
    assert_eq!(goal["target_wake_time"], "06:30");
    assert_eq!(goal["target_duration_minutes"], 450);

    let goal = json(&env.run(&["goal", "set", "--duration", "500", "--json"]));
    assert_eq!(goal["target_bed_time"], "23:00");
    assert_eq!(goal["target_duration_minutes"], 500);
}

#[test]
fn test_chat_one_shot_and_history() {
    let env = Env::new("chat");
    log(&env, "2024-03-01", "23:00", "07:00", "4");

    let reply = json(&env.run(&["chat", "show me my stats", "--json"]));
    let pair = reply.as_array().expect("array");
    assert_eq!(pair[0]["sender"], "user");
    assert_eq!(pair[1]["sender"], "assistant");
    assert!(pair[1]["text"]
        .as_str()
        .expect("text")
        .starts_with("Based on your sleep data:"));

    let history = json(&env.run(&["chat", "--history", "--json"]));
    let history = history.as_array().expect("array");
    assert_eq!(history.len(), 3);
    assert!(history[0]["text"]
        .as_str()
        .expect("text")
        .starts_with("Hello! I'm your sleep assistant."));

    let cleared = json(&env.run(&["chat", "--clear", "--json"]));
    assert_eq!(cleared.as_array().expect("array").len(), 1);
    let history = json(&env.run(&["chat", "--history", "--json"]));
    assert_eq!(history.as_array().expect("array").len(), 1);
}

#[test]
fn test_chat_without_message_off_tty_fails() {
    let env = Env::new("chattty");
    let output = env.run(&["chat"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_tips_json() {
    let env = Env::new("tips");
    let tips = json(&env.run(&["tips", "--json"]));
    let tips = tips.as_array().expect("array");
    assert_eq!(tips.len(), 6);
    assert_eq!(tips[0]["title"], "Maintain a Consistent Schedule");
}

#[test]
fn test_export_to_file_and_stdout() {
    let env = Env::new("export");
    log(&env, "2024-03-01", "23:00", "07:00", "4");
    log(&env, "2024-03-02", "22:30", "06:30", "5");

    let lines = env.run(&["export", "--format", "jsonl"]);
    assert_ok(&lines);
    assert_eq!(stdout(&lines).lines().count(), 2);

    let target = env.data.join("out").join("sleep.json");
    std::fs::create_dir_all(target.parent().expect("parent")).expect("create out dir");
    let output = env.run(&["export", "--output", target.to_str().expect("utf8 path")]);
    assert_ok(&output);
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&target).expect("read export"))
            .expect("valid json");
    assert_eq!(exported.as_array().expect("array").len(), 2);

    let bad = env.run(&["export", "--format", "csv"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_check_passes_then_detects_tampering() {
    let env = Env::new("check");
    log(&env, "2024-03-01", "23:00", "07:00", "4");

    let output = env.run(&["check"]);
    assert_ok(&output);
    assert!(stdout(&output).contains("status=ok"));

    tamper(&env.store);
    let output = env.run(&["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("status=failed"));

    // Analysis keeps working and leaves the unreadable night out.
    let stats = json(&env.run(&["stats", "--json"]));
    assert_eq!(stats["entry_count"], 0);
}

fn tamper(store: &Path) {
    let conn = Connection::open(store).expect("open store");
    conn.execute("UPDATE entries SET duration_minutes = 1", [])
        .expect("tamper");
}

#[test]
fn test_default_store_under_xdg_data() {
    let env = Env::new("xdg");
    let output = env
        .command()
        .env_remove("SLEEPLOG_PATH")
        .args(["goal", "show"])
        .output()
        .expect("run sleeplog");
    assert_ok(&output);
    assert!(env.data.join("sleeplog").join("sleep.db").exists());
}

#[test]
fn test_completions() {
    let env = Env::new("compl");
    let output = env.run(&["completions", "bash"]);
    assert_ok(&output);
    assert!(stdout(&output).contains("sleeplog"));
}
