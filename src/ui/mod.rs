// ============================================================================
// Agent Loop - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端交互与展示子模块导出
// 边界:
//   - ✅ 子模块导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod prompt;
pub mod summary;
