// ============================================================================
// Agent Loop - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Init flow
    ("init.welcome", "\nAgent Loop Scaffold Initialization\n"),
    (
        "init.subtitle",
        "Based on Anthropic paper \"Effective Harnesses for Long-Running Agents\"",
    ),
    ("init.select_language", "Select language"),
    ("init.target_directory", "Which directory to install?"),
    ("init.current_dir", "Current directory (./)"),
    ("init.custom_dir", "Custom directory"),
    ("init.enter_path", "Enter directory path:"),
    ("init.path_required", "Please enter a valid directory path"),
    (
        "init.custom_dir_ignored",
        "Custom directory {} is not applied, installing into: {} (use --dir to change it)",
    ),
    ("init.confirm_install", "Confirm installation?"),
    ("init.cancelled", "Installation cancelled"),
    ("init.success", "\nInitialization complete!\n"),
    (
        "init.next_steps",
        "\nNext steps:\n  cd <dir>\n  claude\n  Then tell Claude: \"Please read CLAUDE.md and agent-loop/feature_list.json\"\n",
    ),
    ("init.invalid_lang", "Invalid language option: {}"),
    ("init.use_lang", "Please use: --lang zh or --lang en"),
    // Installation
    ("install.template", "Using template: {}"),
    ("install.target", "Target: {}"),
    ("install.dir_not_exist", "Directory not exist, will create: {}"),
    ("install.exists", "agent-loop/ directory exists, overwrite?"),
    ("install.copying", "Copying files...\n"),
    ("install.done", "\nAll files copied!\n"),
    ("install.created", "Created structure:"),
    // Errors
    ("error.prefix", "Error"),
];
