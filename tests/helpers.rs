#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use agent_loop::cli::init::InitEnv;
use agent_loop::models::config::Config;
use agent_loop::ui::prompt::{is_non_blank, Prompter};

pub fn bundled_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn config_with_templates(root: &Path) -> Config {
    let mut config = Config::default();
    config.templates.dir = Some(root.to_string_lossy().into_owned());
    config
}

pub fn env_in(cwd: &Path, locale: Option<&str>) -> InitEnv {
    InitEnv {
        cwd: cwd.to_path_buf(),
        locale: locale.map(str::to_string),
        config: config_with_templates(&bundled_templates()),
    }
}

/// Relative path -> file bytes for every file under `root`.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

pub fn expected_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = [
        "CLAUDE.md",
        "agent-loop/CLAUDE-INIT.md",
        "agent-loop/CLAUDE-CODING.md",
        "agent-loop/feature_list.json",
        "agent-loop/claude-progress.txt",
        "agent-loop/init.sh",
        "agent-loop/run-agent-loop.ps1",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    files.sort();
    files
}

/// Canned answer for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(usize),
    Confirm(bool),
    Input(String),
}

/// Replays canned answers in order and records every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    select_defaults: Vec<usize>,
}

impl ScriptedPrompter {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Default index offered by each select prompt, in order.
    pub fn select_defaults(&self) -> &[usize] {
        &self.select_defaults
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> anyhow::Result<Answer> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for prompt: {}", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> anyhow::Result<usize> {
        self.select_defaults.push(default);
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            other => anyhow::bail!("Unexpected answer {:?} for select: {}", other, prompt),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> anyhow::Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(answer) => Ok(answer),
            other => anyhow::bail!("Unexpected answer {:?} for confirm: {}", other, prompt),
        }
    }

    fn input(&mut self, prompt: &str, _invalid_msg: &str) -> anyhow::Result<String> {
        loop {
            match self.next(prompt)? {
                Answer::Input(value) if is_non_blank(&value) => return Ok(value.trim().to_string()),
                Answer::Input(_) => continue,
                other => anyhow::bail!("Unexpected answer {:?} for input: {}", other, prompt),
            }
        }
    }
}
