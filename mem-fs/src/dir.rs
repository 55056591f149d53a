use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::inode::Inode;

/// 目录表中一个目录结点的句柄，即它在表内的下标。
/// 目录之间只通过句柄互相引用而不持有所有权，
/// 因此 parent 回边不会构成所有权环。
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DirId(usize);

/// 命名空间结点：文件名到 inode、子目录名到目录句柄的两张映射。
/// 两张映射互相独立，同一目录下允许文件与子目录同名。
struct Directory {
    /// 文件名到 inode 的映射，键唯一
    files: BTreeMap<String, Inode>,
    /// 子目录名到目录句柄的映射，键唯一
    subdirs: BTreeMap<String, DirId>,
    /// 父目录句柄，根目录的父目录约定为其自身
    parent: DirId,
}

impl Directory {
    fn new(parent: DirId) -> Self {
        Self {
            files: BTreeMap::new(),
            subdirs: BTreeMap::new(),
            parent,
        }
    }
}

/// 目录树。所有目录结点集中存放在一张线性表里，树形结构完全由句柄表达，
/// 所有权始终是表到结点的单向关系。
/// 本层的插入是无条件覆盖，查询以 Option 表达缺失，删除缺失项是空操作，
/// 排他性等错误语义由上层存储引擎负责。
pub struct DirTable {
    nodes: Vec<Directory>,
}

impl DirTable {
    /// 根目录句柄，命名空间的起点
    pub const ROOT: DirId = DirId(0);

    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Directory::new(Self::ROOT));
        Self { nodes }
    }

    fn node(&self, id: DirId) -> &Directory {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: DirId) -> &mut Directory {
        &mut self.nodes[id.0]
    }

    /// 登记文件。同名文件会被直接覆盖，需要排他时先用 get_file 查询
    pub fn add_file(&mut self, dir: DirId, name: &str, inode: Inode) {
        self.node_mut(dir).files.insert(String::from(name), inode);
    }

    /// 新建一个空目录并在 dir 下登记，返回新目录的句柄。
    /// 同名子目录项会被直接覆盖
    pub fn add_subdir(&mut self, dir: DirId, name: &str) -> DirId {
        let child = DirId(self.nodes.len());
        self.nodes.push(Directory::new(dir));
        self.node_mut(dir).subdirs.insert(String::from(name), child);
        child
    }

    pub fn get_file(&self, dir: DirId, name: &str) -> Option<&Inode> {
        self.node(dir).files.get(name)
    }

    pub fn get_file_mut(&mut self, dir: DirId, name: &str) -> Option<&mut Inode> {
        self.node_mut(dir).files.get_mut(name)
    }

    pub fn get_subdir(&self, dir: DirId, name: &str) -> Option<DirId> {
        self.node(dir).subdirs.get(name).copied()
    }

    /// 摘除文件项并交回其 inode，项不存在时为空操作
    pub fn delete_file(&mut self, dir: DirId, name: &str) -> Option<Inode> {
        self.node_mut(dir).files.remove(name)
    }

    /// 摘除子目录项，项不存在时为空操作。
    /// 结点本身留在表中，本设计不提供目录销毁
    pub fn delete_subdir(&mut self, dir: DirId, name: &str) -> Option<DirId> {
        self.node_mut(dir).subdirs.remove(name)
    }

    pub fn parent(&self, dir: DirId) -> DirId {
        self.node(dir).parent
    }

    /// dir 下所有文件名，按字典序
    pub fn file_names(&self, dir: DirId) -> Vec<String> {
        self.node(dir).files.keys().cloned().collect()
    }

    /// dir 下所有子目录名，按字典序
    pub fn subdir_names(&self, dir: DirId) -> Vec<String> {
        self.node(dir).subdirs.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn add_file_is_an_upsert() {
        let mut table = DirTable::new();
        table.add_file(DirTable::ROOT, "a.txt", Inode::new(Vec::new(), 0, 0));
        let mut blocks = Vec::new();
        blocks.push(5);
        table.add_file(DirTable::ROOT, "a.txt", Inode::new(blocks, 3, 0));
        // 同名登记直接覆盖旧项
        let inode = table.get_file(DirTable::ROOT, "a.txt").unwrap();
        assert_eq!(inode.size(), 3);
        assert_eq!(table.file_names(DirTable::ROOT).len(), 1);
    }

    #[test]
    fn lookup_miss_is_none_and_delete_miss_is_noop() {
        let mut table = DirTable::new();
        assert!(table.get_file(DirTable::ROOT, "ghost").is_none());
        assert!(table.get_subdir(DirTable::ROOT, "ghost").is_none());
        assert!(table.delete_file(DirTable::ROOT, "ghost").is_none());
        assert!(table.delete_subdir(DirTable::ROOT, "ghost").is_none());
    }

    #[test]
    fn parent_links_point_upward_and_root_to_itself() {
        let mut table = DirTable::new();
        let a = table.add_subdir(DirTable::ROOT, "a");
        let b = table.add_subdir(a, "b");
        assert_eq!(table.parent(b), a);
        assert_eq!(table.parent(a), DirTable::ROOT);
        assert_eq!(table.parent(DirTable::ROOT), DirTable::ROOT);
    }

    #[test]
    fn names_are_listed_in_sorted_order() {
        let mut table = DirTable::new();
        table.add_subdir(DirTable::ROOT, "zoo");
        table.add_subdir(DirTable::ROOT, "bar");
        table.add_file(DirTable::ROOT, "b.txt", Inode::new(Vec::new(), 0, 0));
        table.add_file(DirTable::ROOT, "a.txt", Inode::new(Vec::new(), 0, 0));
        assert_eq!(table.file_names(DirTable::ROOT), ["a.txt", "b.txt"]);
        assert_eq!(table.subdir_names(DirTable::ROOT), ["bar", "zoo"]);
    }

    #[test]
    fn file_and_subdir_namespaces_are_independent() {
        let mut table = DirTable::new();
        table.add_file(DirTable::ROOT, "same", Inode::new(Vec::new(), 0, 0));
        let child = table.add_subdir(DirTable::ROOT, "same");
        assert!(table.get_file(DirTable::ROOT, "same").is_some());
        assert_eq!(table.get_subdir(DirTable::ROOT, "same"), Some(child));
    }
}
