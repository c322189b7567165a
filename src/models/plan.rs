// ============================================================================
// Agent Loop - 安装计划模型
// ============================================================================
//
// 文件: src/models/plan.rs
// 职责: 单次安装所需路径的推导
// 边界:
//   - ✅ 安装计划数据结构
//   - ✅ 目标路径与模板路径推导
//   - ✅ 安装结果定义
//   - ❌ 不应包含文件系统写操作
//   - ❌ 不应包含用户交互
//
// ============================================================================

use std::path::{Path, PathBuf};

use crate::models::language::Language;
use crate::utils::constants::{AGENT_LOOP_DIR, ROOT_TEMPLATE_FILE};

/// 单次调用的安装计划，用完即弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// 目标目录（绝对路径）
    pub target_dir: PathBuf,
    /// 目标目录下的 agent-loop/
    pub agent_loop_dir: PathBuf,
    /// 所选语言的模板目录
    pub template_source_dir: PathBuf,
}

impl InstallPlan {
    pub fn new(target_dir: &Path, language: Language, templates_root: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            agent_loop_dir: target_dir.join(AGENT_LOOP_DIR),
            template_source_dir: templates_root.join(language.as_str()),
        }
    }

    /// 模板中的 agent-loop/ 目录
    pub fn template_agent_loop_dir(&self) -> PathBuf {
        self.template_source_dir.join(AGENT_LOOP_DIR)
    }

    /// 模板中的根级 CLAUDE.md
    pub fn template_root_file(&self) -> PathBuf {
        self.template_source_dir.join(ROOT_TEMPLATE_FILE)
    }

    /// 目标目录下的 CLAUDE.md
    pub fn target_root_file(&self) -> PathBuf {
        self.target_dir.join(ROOT_TEMPLATE_FILE)
    }
}

/// 安装器的正常结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// 模板已复制
    Installed,
    /// 用户拒绝覆盖已有的 agent-loop/
    Cancelled,
}
