// ============================================================================
// Agent Loop - 模板复制
// ============================================================================
//
// 文件: src/core/copier.rs
// 职责: 目录树与单文件的逐字节复制
// 边界:
//   - ✅ 递归目录复制（保持结构，合并覆盖）
//   - ✅ 单文件复制（自动创建父目录）
//   - ❌ 不应包含内容替换或过滤
//   - ❌ 不应包含用户交互
//   - ❌ 不应包含回滚逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 将 `src` 目录树复制到 `dst`，返回复制的文件数
///
/// 已存在的同名文件被覆盖，`dst` 中多余的文件保持不变。中途失败时不回滚。
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Unexpected path outside {}", src.display()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// 复制单个文件，覆盖已存在的目标
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::copy(src, dst).with_context(|| {
        format!("Failed to copy {} to {}", src.display(), dst.display())
    })?;
    tracing::debug!(from = %src.display(), to = %dst.display(), "copied file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, bytes: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn copies_nested_tree_byte_for_byte() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("a.md"), b"# title\r\n");
        write(&src.path().join("nested/deep/b.bin"), &[0u8, 159, 146, 150, 255]);
        fs::create_dir_all(src.path().join("empty")).unwrap();

        let out = dst.path().join("out");
        let copied = copy_tree(src.path(), &out).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(out.join("a.md")).unwrap(), b"# title\r\n");
        assert_eq!(
            fs::read(out.join("nested/deep/b.bin")).unwrap(),
            vec![0u8, 159, 146, 150, 255]
        );
        assert!(out.join("empty").is_dir());
    }

    #[test]
    fn merges_into_existing_destination() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("keep.txt"), b"new");
        write(&dst.path().join("keep.txt"), b"old");
        write(&dst.path().join("extra.txt"), b"user file");

        copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(fs::read(dst.path().join("keep.txt")).unwrap(), b"new");
        assert_eq!(fs::read(dst.path().join("extra.txt")).unwrap(), b"user file");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dst = tempfile::tempdir().unwrap();
        assert!(copy_tree(&dst.path().join("nope"), &dst.path().join("out")).is_err());
    }
}
