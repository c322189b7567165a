mod helpers;

use std::fs;
use std::path::PathBuf;

use agent_loop::cli::init::{run_init, InitArgs, InitEnv, InitOutcome};
use agent_loop::models::config::Config;
use agent_loop::models::error::InitError;
use helpers::{bundled_templates, env_in, expected_files, snapshot, Answer, ScriptedPrompter};

fn args(lang: Option<&str>, dir: &str) -> InitArgs {
    InitArgs {
        lang: lang.map(str::to_string),
        dir: PathBuf::from(dir),
    }
}

#[test]
fn lang_flag_installs_without_prompts() {
    let cwd = tempfile::tempdir().unwrap();
    let env = env_in(cwd.path(), Some("en_US"));
    let mut prompter = ScriptedPrompter::default();

    let outcome = run_init(&args(Some("zh"), "./out"), &env, &mut prompter).unwrap();

    let out = cwd.path().join("out");
    assert_eq!(outcome, InitOutcome::Installed { target_dir: out.clone() });
    assert!(prompter.asked().is_empty());

    let copied = snapshot(&out);
    let files: Vec<_> = copied.keys().cloned().collect();
    assert_eq!(files, expected_files());
    assert_eq!(
        copied[&PathBuf::from("CLAUDE.md")],
        fs::read(bundled_templates().join("zh/CLAUDE.md")).unwrap()
    );
}

#[test]
fn invalid_lang_flags_fail_without_touching_disk() {
    for raw in ["fr", "", "   ", "ZH", "english"] {
        let cwd = tempfile::tempdir().unwrap();
        let env = env_in(cwd.path(), None);
        let mut prompter = ScriptedPrompter::default();

        let err = run_init(&args(Some(raw), "./out"), &env, &mut prompter).unwrap_err();

        match err.downcast_ref::<InitError>() {
            Some(InitError::InvalidLanguage(value)) => assert_eq!(value, raw),
            other => panic!("unexpected error for {:?}: {:?}", raw, other),
        }
        assert!(prompter.asked().is_empty());
        assert!(snapshot(cwd.path()).is_empty());
        assert!(!cwd.path().join("out").exists());
    }
}

#[test]
fn invalid_lang_wins_over_missing_templates() {
    let cwd = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.templates.dir = Some(cwd.path().join("missing").to_string_lossy().into_owned());
    let env = InitEnv {
        cwd: cwd.path().to_path_buf(),
        locale: None,
        config,
    };

    let err = run_init(&args(Some("xx"), "."), &env, &mut ScriptedPrompter::default()).unwrap_err();
    assert!(matches!(err.downcast_ref::<InitError>(), Some(InitError::InvalidLanguage(_))));
}

#[test]
fn missing_templates_is_reported() {
    let cwd = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.templates.dir = Some(cwd.path().join("missing").to_string_lossy().into_owned());
    let env = InitEnv {
        cwd: cwd.path().to_path_buf(),
        locale: None,
        config,
    };

    let err = run_init(&args(Some("en"), "./out"), &env, &mut ScriptedPrompter::default()).unwrap_err();
    assert!(matches!(err.downcast_ref::<InitError>(), Some(InitError::TemplatesNotFound(_))));
    assert!(!cwd.path().join("out").exists());
}

#[test]
fn locale_only_preselects_the_language() {
    let cases = [
        (Some("zh_CN"), 0, "选择语言"),
        (Some("zh-Hans"), 0, "选择语言"),
        (Some("en_US"), 1, "Select language"),
        (Some("de_DE"), 1, "Select language"),
        (None, 1, "Select language"),
    ];

    for (locale, default_index, first_prompt) in cases {
        let cwd = tempfile::tempdir().unwrap();
        let env = env_in(cwd.path(), locale);
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(1),
            Answer::Select(0),
            Answer::Confirm(false),
        ]);

        let outcome = run_init(&args(None, "."), &env, &mut prompter).unwrap();

        assert_eq!(outcome, InitOutcome::Cancelled);
        assert_eq!(prompter.select_defaults()[0], default_index, "{:?}", locale);
        assert_eq!(prompter.asked()[0], first_prompt);
        assert_eq!(prompter.asked().len(), 3);
    }
}

#[test]
fn declining_confirmation_has_no_side_effects() {
    let cwd = tempfile::tempdir().unwrap();
    let env = env_in(cwd.path(), Some("en_US"));
    let mut prompter = ScriptedPrompter::new([
        Answer::Select(1),
        Answer::Select(0),
        Answer::Confirm(false),
    ]);

    let outcome = run_init(&args(None, "./never"), &env, &mut prompter).unwrap();

    assert_eq!(outcome, InitOutcome::Cancelled);
    assert_eq!(prompter.remaining(), 0);
    assert!(!cwd.path().join("never").exists());
}

#[test]
fn interactive_install_then_declined_rerun_is_unchanged() {
    let cwd = tempfile::tempdir().unwrap();
    let env = env_in(cwd.path(), Some("en_US"));

    let mut first = ScriptedPrompter::new([Answer::Select(1), Answer::Select(0), Answer::Confirm(true)]);
    let outcome = run_init(&args(None, "./proj"), &env, &mut first).unwrap();
    let target = cwd.path().join("proj");
    assert_eq!(outcome, InitOutcome::Installed { target_dir: target.clone() });
    let after_first = snapshot(&target);
    assert_eq!(after_first.keys().cloned().collect::<Vec<_>>(), expected_files());

    let mut second = ScriptedPrompter::new([
        Answer::Select(1),
        Answer::Select(0),
        Answer::Confirm(true),
        Answer::Confirm(false),
    ]);
    let outcome = run_init(&args(None, "./proj"), &env, &mut second).unwrap();

    assert_eq!(outcome, InitOutcome::Cancelled);
    assert_eq!(second.asked().last().unwrap(), "agent-loop/ directory exists, overwrite?");
    assert_eq!(snapshot(&target), after_first);
}

#[test]
fn custom_directory_is_collected_but_flag_dir_is_used() {
    let cwd = tempfile::tempdir().unwrap();
    let env = env_in(cwd.path(), Some("en_US"));
    let mut prompter = ScriptedPrompter::new([
        Answer::Select(1),
        Answer::Select(1),
        Answer::Input("./custom".to_string()),
        Answer::Confirm(true),
    ]);

    let outcome = run_init(&args(None, "./flagged"), &env, &mut prompter).unwrap();

    assert_eq!(
        outcome,
        InitOutcome::Installed { target_dir: cwd.path().join("flagged") }
    );
    assert!(cwd.path().join("flagged/agent-loop").is_dir());
    assert!(!cwd.path().join("custom").exists());
}
