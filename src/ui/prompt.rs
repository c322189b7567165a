// ============================================================================
// Agent Loop - 交互提示组件
// ============================================================================
//
// 文件: src/ui/prompt.rs
// 职责: 单选、确认、文本输入三种提示能力
// 边界:
//   - ✅ 提示能力抽象 (Prompter)
//   - ✅ 基于 dialoguer 的终端实现
//   - ❌ 不应包含提示顺序编排
//   - ❌ 不应包含翻译内容
//   - ❌ 不应包含文件操作
//
// ============================================================================

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// 判断文本输入是否有效（非空且不全为空白）
pub fn is_non_blank(input: &str) -> bool {
    !input.trim().is_empty()
}

/// 交互提示能力
///
/// 每次调用都阻塞直到用户给出一个回答。
pub trait Prompter {
    /// 从 `items` 中单选，返回所选下标
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// 是/否确认
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// 非空文本输入，空白输入以 `invalid_msg` 拒绝并重新询问
    fn input(&mut self, prompt: &str, invalid_msg: &str) -> Result<String>;
}

/// 终端交互实现
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .with_context(|| format!("Failed to read answer for \"{}\"", prompt))?;
        Ok(index)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .with_context(|| format!("Failed to read answer for \"{}\"", prompt))?;
        Ok(answer)
    }

    fn input(&mut self, prompt: &str, invalid_msg: &str) -> Result<String> {
        let invalid_msg = invalid_msg.to_string();
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(move |input: &String| -> Result<(), String> {
                if is_non_blank(input) {
                    Ok(())
                } else {
                    Err(invalid_msg.clone())
                }
            })
            .interact_text()
            .with_context(|| format!("Failed to read answer for \"{}\"", prompt))?;
        Ok(value.trim().to_string())
    }
}
