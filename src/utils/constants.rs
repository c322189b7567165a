// ============================================================================
// Agent Loop - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 模板目录与文件名常量
//   - ✅ 静态安装结构清单
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "agent-loop";

/// 配置文件名（在当前工作目录中查找）
pub const CONFIG_FILE_NAME: &str = "agent-loop.toml";

/// 覆盖模板根目录的环境变量
pub const TEMPLATES_ENV_VAR: &str = "AGENT_LOOP_TEMPLATES";

/// 随 crate 一起分发的模板根目录
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// 目标目录下的脚手架子目录
pub const AGENT_LOOP_DIR: &str = "agent-loop";

/// 复制到目标根目录的单个模板文件
pub const ROOT_TEMPLATE_FILE: &str = "CLAUDE.md";

/// 下一步提示中的目录占位符
pub const DIR_PLACEHOLDER: &str = "<dir>";

/// agent-loop/ 中预期存在的文件，按展示顺序排列
pub const AGENT_LOOP_FILES: &[&str] = &[
    "CLAUDE-INIT.md",
    "CLAUDE-CODING.md",
    "feature_list.json",
    "claude-progress.txt",
    "init.sh",
    "run-agent-loop.ps1",
];

/// 复制后单独报告 [OK] 的 agent-loop/ 文件
pub const REPORTED_AGENT_LOOP_FILES: &[&str] = &["CLAUDE-INIT.md", "CLAUDE-CODING.md"];
