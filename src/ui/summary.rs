// ============================================================================
// Agent Loop - 结果展示组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 欢迎横幅、安装结构清单和下一步提示的渲染
// 边界:
//   - ✅ 欢迎横幅显示
//   - ✅ 静态文件结构清单
//   - ✅ 下一步提示（目录占位符替换）
//   - ❌ 不应包含安装逻辑
//   - ❌ 不应读取已复制的文件树
//
// ============================================================================

use std::path::Path;

use crate::i18n::MessageCatalog;
use crate::t;
use crate::utils::constants::{AGENT_LOOP_DIR, AGENT_LOOP_FILES, DIR_PLACEHOLDER, ROOT_TEMPLATE_FILE};
use crate::utils::logger::Logger;

/// 渲染欢迎横幅
pub fn render_welcome(msg: &MessageCatalog) {
    Logger::info(t!(msg, "init.welcome"));
    Logger::detail(format!("{}\n", t!(msg, "init.subtitle")));
}

/// 单个复制项的完成标记
pub fn render_copied(item: &str) {
    Logger::detail(format!("  [OK] {}", item));
}

/// 生成安装后的文件结构清单
///
/// 清单来自模板设计本身，不回读目标目录。
pub fn structure_lines(target_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        format!("  {}/", target_dir.display()),
        format!("  +-- {}", ROOT_TEMPLATE_FILE),
        format!("  +-- {}/", AGENT_LOOP_DIR),
    ];
    lines.extend(AGENT_LOOP_FILES.iter().map(|file| format!("      +-- {}", file)));
    lines
}

/// 渲染文件结构清单
pub fn render_structure(msg: &MessageCatalog, target_dir: &Path) {
    Logger::info(t!(msg, "install.created"));
    for line in structure_lines(target_dir) {
        Logger::detail(line);
    }
    Logger::detail("");
}

/// 下一步提示，`<dir>` 替换为目标目录
pub fn next_steps(msg: &MessageCatalog, target_dir: &Path) -> String {
    t!(msg, "init.next_steps").replace(DIR_PLACEHOLDER, &target_dir.display().to_string())
}

/// 渲染成功横幅与下一步提示
pub fn render_success(msg: &MessageCatalog, target_dir: &Path) {
    Logger::success(t!(msg, "init.success"));
    Logger::info(next_steps(msg, target_dir));
}
