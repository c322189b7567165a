// ============================================================================
// Agent Loop - 系统语言检测
// ============================================================================
//
// 文件: src/core/locale.rs
// 职责: 由系统区域设置推导默认语言
// 边界:
//   - ✅ 区域字符串到语言的映射
//   - ✅ 系统区域设置读取
//   - ❌ 不应决定最终语言（仅作为选择列表的默认项）
//   - ❌ 不应包含用户交互
//
// ============================================================================

use crate::models::language::Language;

/// 读取当前系统区域设置，例如 `zh-CN`、`en-US`
pub fn system_locale() -> Option<String> {
    let locale = sys_locale::get_locale();
    tracing::debug!(locale = ?locale, "read system locale");
    locale
}

/// 由区域字符串推导默认语言
///
/// 以 `zh` 开头或包含 `Chinese` 的区域映射为中文，其余（包括无法检测）均为英文。
pub fn detect_default_language(locale: Option<&str>) -> Language {
    match locale {
        Some(locale) if locale.starts_with("zh") || locale.contains("Chinese") => Language::Zh,
        _ => Language::En,
    }
}
