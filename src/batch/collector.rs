//! # 条目文件收集器
//!
//! 根据输入路径和模式收集待处理的条目 JSON 文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{EncorrError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 条目文件收集器
pub struct EntryCollector {
    /// 输入路径列表（文件或目录）
    inputs: Vec<PathBuf>,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl EntryCollector {
    /// 创建新的收集器，默认匹配 *.json
    pub fn new(inputs: Vec<PathBuf>) -> Result<Self> {
        Self::with_pattern(inputs, "*.json")
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(inputs: Vec<PathBuf>, pattern: &str) -> Result<Self> {
        let patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s)
                    .map_err(|e| EncorrError::InvalidArgument(format!("bad pattern {}: {}", s, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(EncorrError::InvalidArgument(
                "empty file pattern".to_string(),
            ));
        }

        Ok(Self {
            inputs,
            patterns,
            recursive: false,
        })
    }

    /// 设置是否递归搜索目录
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 显式给出的单文件不做模式过滤；目录输入按模式筛选。
    /// 一个文件都没找到时报错，带上模式方便排查。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                files.push(input.clone());
                continue;
            }

            if !input.is_dir() {
                return Err(EncorrError::FileNotFound {
                    path: input.display().to_string(),
                });
            }

            let max_depth = if self.recursive { usize::MAX } else { 1 };
            let mut matched: Vec<PathBuf> = WalkDir::new(input)
                .max_depth(max_depth)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| self.matches(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect();
            matched.sort();
            files.extend(matched);
        }

        if files.is_empty() {
            return Err(EncorrError::NoFilesFound {
                pattern: self
                    .patterns
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            });
        }

        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };
        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        let collector = EntryCollector::new(vec![]).unwrap();
        assert!(collector.matches(Path::new("entries.json")));
        assert!(collector.matches(Path::new("dir/mp-1234.json")));
        assert!(!collector.matches(Path::new("entries.csv")));
    }

    #[test]
    fn test_multi_pattern() {
        let collector =
            EntryCollector::with_pattern(vec![], "*.json, mp-*.dat").unwrap();
        assert!(collector.matches(Path::new("a.json")));
        assert!(collector.matches(Path::new("mp-42.dat")));
        assert!(!collector.matches(Path::new("b.dat")));
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        assert!(EntryCollector::with_pattern(vec![], "[").is_err());
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let collector = EntryCollector::new(vec![]).unwrap();
        assert!(matches!(
            collector.collect(),
            Err(EncorrError::NoFilesFound { .. })
        ));
    }
}
