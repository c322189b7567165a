// ============================================================================
// Agent Loop - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块树声明
// 边界:
//   - ✅ 子模块声明
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;
