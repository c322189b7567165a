// ============================================================================
// Agent Loop - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 主题颜色管理
//   - ✅ 颜色开关控制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::Colorize;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 全局开启或关闭彩色输出
    pub fn set_enabled(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> String {
        text.cyan().to_string()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> String {
        text.yellow().to_string()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    /// 次要信息颜色 (灰色)
    pub fn muted(text: &str) -> String {
        text.bright_black().to_string()
    }
}
