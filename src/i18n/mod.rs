// ============================================================================
// Agent Loop - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 消息目录选择和翻译查找
// 边界:
//   - ✅ 按语言选择翻译表
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use crate::models::language::Language;

/// 消息目录，按语言一次性选定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    language: Language,
}

impl MessageCatalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// 当前语言的翻译表
    pub fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self.language {
            Language::Zh => zh_cn::TRANSLATIONS,
            Language::En => en_us::TRANSLATIONS,
        }
    }

    /// 获取翻译文本
    pub fn get(&self, key: &str) -> String {
        for &(k, v) in self.table() {
            if k == key {
                return v.to_string();
            }
        }

        format!("Unknown translation key: {}", key)
    }
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($catalog:expr, $key:expr) => {
        $catalog.get($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    for arg in args.iter() {
        // 替换第一个 {} 占位符
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($catalog:expr, $key:expr, $($arg:expr),*) => {{
        let template = $catalog.get($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
