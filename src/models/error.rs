// ============================================================================
// Agent Loop - 错误类型定义
// ============================================================================
//
// 文件: src/models/error.rs
// 职责: 入口层需要识别的类型化错误
// 边界:
//   - ✅ 错误种类枚举
//   - ✅ 错误消息格式
//   - ❌ 不应包含错误输出逻辑
//   - ❌ 不应包含本地化文本
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// 初始化过程中的类型化错误
///
/// 文件系统错误不在此列，它们以 `anyhow::Error` 携带上下文直接向上传播。
#[derive(Debug, Error)]
pub enum InitError {
    /// `--lang` 的值不在 {zh, en} 之内
    #[error("Invalid language option: {0}")]
    InvalidLanguage(String),

    /// 找不到任何模板根目录
    #[error("Template directory not found: {}", .0.display())]
    TemplatesNotFound(PathBuf),
}
