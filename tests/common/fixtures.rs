//! Seed rows for the tool tables
//!
//! Sequence numbers are inserted out of order so listings prove their sorting.

use cmdtools_rs::storage::database::entities::{cmd_tool, prompt_tool, web_site, win_program};
use sea_orm::ActiveValue::Set;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn cmd_tools() -> Vec<cmd_tool::ActiveModel> {
    vec![
        cmd_tool::ActiveModel {
            seq_no: Set(2),
            cmd: Set(text("docker ps -a")),
            example: Set(text("docker ps -a --filter status=exited")),
            remark1: Set(text("List containers")),
            remark2: Set(None),
            kind: Set(text("docker")),
        },
        cmd_tool::ActiveModel {
            seq_no: Set(1),
            cmd: Set(text("git log --oneline")),
            example: Set(text("git log --oneline -n 20")),
            remark1: Set(text("Show History")),
            remark2: Set(text("compact")),
            kind: Set(text("git")),
        },
        cmd_tool::ActiveModel {
            seq_no: Set(3),
            cmd: Set(text("kubectl get pods")),
            example: Set(None),
            remark1: Set(text("List pods")),
            remark2: Set(None),
            kind: Set(text("k8s")),
        },
    ]
}

pub fn prompt_tools() -> Vec<prompt_tool::ActiveModel> {
    vec![
        prompt_tool::ActiveModel {
            seq_no: Set(1),
            prompt: Set(text("請摘要以下內容")),
            prompt_eng: Set(text("Summarize the following text")),
            classification: Set(text("writing")),
        },
        prompt_tool::ActiveModel {
            seq_no: Set(2),
            prompt: Set(text("請檢查程式碼")),
            prompt_eng: Set(text("Review this code")),
            classification: Set(None),
        },
    ]
}

/// Five program shortcuts; number 4 has no command line
pub fn win_programs() -> Vec<win_program::ActiveModel> {
    [
        (1, Some("notepad.exe"), "Notepad"),
        (2, Some("calc.exe"), "Calculator"),
        (3, Some("mspaint.exe"), "Paint"),
        (4, None, "Broken shortcut"),
        (5, Some("explorer.exe"), "Explorer"),
    ]
    .into_iter()
    .rev()
    .map(|(seq_no, path, remark)| win_program::ActiveModel {
        seq_no: Set(seq_no),
        remark1: Set(text(remark)),
        program_path_and_name: Set(path.map(str::to_string)),
        click_end_run: Set(Some(0)),
    })
    .collect()
}

pub fn web_sites() -> Vec<web_site::ActiveModel> {
    vec![
        web_site::ActiveModel {
            seq_no: Set(1),
            remark: Set(text("GitHub")),
            classification: Set(text("dev")),
            website: Set(text("github.com")),
            account: Set(text("octocat")),
            account_webid: Set(text("login_field")),
            password: Set(text("hunter2")),
            password_webid: Set(text("password")),
        },
        web_site::ActiveModel {
            seq_no: Set(2),
            remark: Set(text("Team Wiki")),
            classification: Set(text("docs")),
            website: Set(text("https://intranet.example/wiki")),
            account: Set(None),
            account_webid: Set(None),
            password: Set(None),
            password_webid: Set(None),
        },
        web_site::ActiveModel {
            seq_no: Set(3),
            remark: Set(text("No address yet")),
            classification: Set(None),
            website: Set(None),
            account: Set(None),
            account_webid: Set(None),
            password: Set(None),
            password_webid: Set(None),
        },
    ]
}
