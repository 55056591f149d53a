use alloc::{string::String, vec::Vec};

use crate::{
    dir::{DirId, DirTable},
    error::{FsError, FsResult},
};

/// 以 '/' 切分路径并丢弃空段。
/// 前导、结尾以及重复的斜杠都不产生段，"/a//b/" 与 "a/b" 等价
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

/// 路径解析：从根目录出发逐段行走目录树。
/// 只读解析在第一个缺失的段上报 DirectoryNotFound，
/// 创建式解析则就地补出缺失的目录。
impl DirTable {
    /// 把路径整体解析为一个目录
    pub fn resolve_dir(&self, path: &str) -> FsResult<DirId> {
        let mut current = DirTable::ROOT;
        for part in segments(path) {
            current = self
                .get_subdir(current, part)
                .ok_or_else(|| FsError::DirectoryNotFound(String::from(part)))?;
        }
        Ok(current)
    }

    /// 把最后一段拆出来作为目标名，其余段解析为所在目录。
    /// 没有任何段的路径无法命名一个目标，按目录缺失处理
    pub fn resolve_containing(&self, path: &str) -> FsResult<(DirId, String)> {
        let mut parts: Vec<&str> = segments(path).collect();
        let name = match parts.pop() {
            Some(last) => String::from(last),
            None => return Err(FsError::DirectoryNotFound(String::from(path))),
        };
        let mut current = DirTable::ROOT;
        for part in parts {
            current = self
                .get_subdir(current, part)
                .ok_or_else(|| FsError::DirectoryNotFound(String::from(part)))?;
        }
        Ok((current, name))
    }

    /// 同样的行走，但缺失的段（含最后一段）都补建为空目录，
    /// 已存在的段原样复用，重复调用是幂等的
    pub fn create_path(&mut self, path: &str) -> DirId {
        let mut current = DirTable::ROOT;
        for part in segments(path) {
            current = match self.get_subdir(current, part) {
                Some(next) => next,
                None => self.add_subdir(current, part),
            };
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundant_slashes_resolve_identically() {
        let mut table = DirTable::new();
        let b = table.create_path("a/b");
        assert_eq!(table.resolve_dir("/a//b/").unwrap(), b);
        assert_eq!(table.resolve_dir("a/b").unwrap(), b);
    }

    #[test]
    fn resolve_dir_reports_first_missing_segment() {
        let mut table = DirTable::new();
        table.create_path("/a");
        assert_eq!(
            table.resolve_dir("/a/x/y"),
            Err(FsError::DirectoryNotFound(String::from("x")))
        );
    }

    #[test]
    fn resolve_containing_splits_off_target_name() {
        let mut table = DirTable::new();
        let (dir, name) = table.resolve_containing("/demo.txt").unwrap();
        assert_eq!(dir, DirTable::ROOT);
        assert_eq!(name, "demo.txt");

        let a = table.create_path("/a");
        let (dir, name) = table.resolve_containing("/a/x.txt").unwrap();
        assert_eq!(dir, a);
        assert_eq!(name, "x.txt");
    }

    #[test]
    fn empty_target_is_directory_not_found() {
        let table = DirTable::new();
        assert_eq!(
            table.resolve_containing("/"),
            Err(FsError::DirectoryNotFound(String::from("/")))
        );
    }

    #[test]
    fn create_path_is_idempotent_and_reuses_existing() {
        let mut table = DirTable::new();
        let b = table.create_path("/a/b");
        assert_eq!(table.create_path("/a/b"), b);
        // 中间段已存在时原样复用
        let c = table.create_path("/a/c");
        assert_eq!(table.parent(c), table.parent(b));
    }

    #[test]
    fn create_path_of_root_is_the_root() {
        let mut table = DirTable::new();
        assert_eq!(table.create_path("/"), DirTable::ROOT);
        assert_eq!(table.create_path(""), DirTable::ROOT);
    }
}
