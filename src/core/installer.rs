// ============================================================================
// Agent Loop - 安装器
// ============================================================================
//
// 文件: src/core/installer.rs
// 职责: 按安装计划把模板写入目标目录
// 边界:
//   - ✅ 目标目录创建
//   - ✅ agent-loop/ 覆盖确认
//   - ✅ 模板目录与根级文件复制
//   - ✅ 安装过程状态输出
//   - ❌ 不应包含语言选择
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含复制失败后的回滚
//
// ============================================================================

use anyhow::{Context, Result};
use std::fs;

use crate::core::copier::{copy_file, copy_tree};
use crate::i18n::MessageCatalog;
use crate::models::plan::{InstallOutcome, InstallPlan};
use crate::ui::prompt::Prompter;
use crate::ui::summary::{render_copied, render_structure};
use crate::utils::constants::{AGENT_LOOP_DIR, REPORTED_AGENT_LOOP_FILES, ROOT_TEMPLATE_FILE};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 执行安装
///
/// 每一步失败都会中止后续步骤；用户拒绝覆盖时不写入任何文件并返回 `Cancelled`。
pub fn install(
    plan: &InstallPlan,
    msg: &MessageCatalog,
    prompter: &mut dyn Prompter,
) -> Result<InstallOutcome> {
    tracing::debug!(?plan, language = %msg.language(), "starting install");

    Logger::detail(tf!(msg, "install.template", msg.language().native_name()));
    Logger::detail(format!("{}\n", tf!(msg, "install.target", plan.target_dir.display())));

    // 1. 目标目录不存在时创建
    if !plan.target_dir.exists() {
        Logger::warn(tf!(msg, "install.dir_not_exist", plan.target_dir.display()));
        fs::create_dir_all(&plan.target_dir).with_context(|| {
            format!("Failed to create directory {}", plan.target_dir.display())
        })?;
    }

    // 2. agent-loop/ 已存在时确认覆盖
    if plan.agent_loop_dir.exists() && !prompter.confirm(&t!(msg, "install.exists"), false)? {
        Logger::warn(format!("\n{}\n", t!(msg, "init.cancelled")));
        return Ok(InstallOutcome::Cancelled);
    }

    // 3. 复制模板
    Logger::info(t!(msg, "install.copying"));

    let template_agent_loop = plan.template_agent_loop_dir();
    if template_agent_loop.is_dir() {
        let copied = copy_tree(&template_agent_loop, &plan.agent_loop_dir)?;
        tracing::debug!(copied, "copied agent-loop template");
        render_copied(&format!("{}/", AGENT_LOOP_DIR));
    }

    let template_root_file = plan.template_root_file();
    if template_root_file.is_file() {
        copy_file(&template_root_file, &plan.target_root_file())?;
        render_copied(ROOT_TEMPLATE_FILE);
    }

    for file in REPORTED_AGENT_LOOP_FILES {
        if template_agent_loop.join(file).is_file() {
            render_copied(&format!("{}/{}", AGENT_LOOP_DIR, file));
        }
    }

    Logger::success(t!(msg, "install.done"));

    // 4. 展示文件结构
    render_structure(msg, &plan.target_dir);

    Ok(InstallOutcome::Installed)
}
