// ============================================================================
// Agent Loop - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
// 边界:
//   - ✅ 子模块导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod config;
pub mod error;
pub mod language;
pub mod plan;
