// ============================================================================
// Agent Loop - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 初始化流程
    ("init.welcome", "\nAgent Loop 脚手架初始化\n"),
    (
        "init.subtitle",
        "基于 Anthropic 官方论文 \"Effective Harnesses for Long-Running Agents\"",
    ),
    ("init.select_language", "选择语言"),
    ("init.target_directory", "安装到哪个目录?"),
    ("init.current_dir", "当前目录 (./)"),
    ("init.custom_dir", "指定目录"),
    ("init.enter_path", "请输入目录路径:"),
    ("init.path_required", "请输入有效的目录路径"),
    (
        "init.custom_dir_ignored",
        "指定目录 {} 不会被使用，仍将安装到: {} (如需更换请使用 --dir)",
    ),
    ("init.confirm_install", "确认安装?"),
    ("init.cancelled", "安装已取消"),
    ("init.success", "\n初始化完成!\n"),
    (
        "init.next_steps",
        "\n下一步:\n  cd <dir>\n  claude\n  然后告诉 Claude: \"请读取 CLAUDE.md 和 agent-loop/feature_list.json\"\n",
    ),
    ("init.invalid_lang", "无效的语言选项: {}"),
    ("init.use_lang", "请使用: --lang zh 或 --lang en"),
    // 安装过程
    ("install.template", "使用模板: {}"),
    ("install.target", "目标目录: {}"),
    ("install.dir_not_exist", "目录不存在，将创建: {}"),
    ("install.exists", "agent-loop/ 目录已存在，是否覆盖?"),
    ("install.copying", "正在复制文件...\n"),
    ("install.done", "\n所有文件复制完成!\n"),
    ("install.created", "已创建文件结构:"),
    // 错误信息
    ("error.prefix", "错误"),
];
