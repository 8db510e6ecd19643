//! 输出写入服务 - 业务能力层
//!
//! 只负责"把 Bundle 写成 JSON 文件"能力，不关心文档怎么组装

use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppResult, FileError};
use crate::models::Bundle;

/// 输出写入服务
///
/// 职责：
/// - 序列化 Bundle 为 UTF-8 JSON（pretty 格式）
/// - 按需创建父目录
/// - 每次整体覆盖旧文件，不做版本化、不追加
pub struct BundleWriter {
    output_path: String,
}

impl BundleWriter {
    /// 创建新的输出写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            output_path: config.output_path.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 写出 Bundle
    ///
    /// # 参数
    /// - `bundle`: 组装完成的输出文档
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write(&self, bundle: &Bundle) -> AppResult<()> {
        let json = serde_json::to_string_pretty(bundle).map_err(FileError::from)?;

        let path = Path::new(&self.output_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FileError::create_dir_failed(parent.display().to_string(), e))?;
            }
        }

        fs::write(path, json.as_bytes())
            .await
            .map_err(|e| FileError::write_failed(&self.output_path, e))?;

        debug!(
            "已写出 {} 行数据到 {}",
            bundle.total_rows(),
            self.output_path
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceStatus;
    use std::collections::BTreeMap;

    fn temp_output_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("pts_night_scrape_test_{}", name))
            .join("public")
            .join("pts.json")
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs_and_overwrites() {
        let path = temp_output_path("writer");
        let writer = BundleWriter::with_path(&path);

        let bundle = Bundle::new(
            "2025-08-04 23:10:00 JST".to_string(),
            "2025-08-04".to_string(),
            vec![SourceStatus {
                key: "night_up".to_string(),
                url: "https://example.invalid/up".to_string(),
                error: None,
            }],
            BTreeMap::new(),
        );

        writer.write(&bundle).await.unwrap();

        // 第二次写入必须整体覆盖
        let bundle2 = Bundle::new(
            "2025-08-04 23:15:00 JST".to_string(),
            "2025-08-04".to_string(),
            Vec::new(),
            BTreeMap::new(),
        );
        writer.write(&bundle2).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: Bundle = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.generated_at, "2025-08-04 23:15:00 JST");
        assert!(parsed.sources.is_empty());

        let _ = tokio::fs::remove_dir_all(
            std::env::temp_dir().join("pts_night_scrape_test_writer"),
        )
        .await;
    }
}
