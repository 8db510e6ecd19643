use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 抓取相关错误
    #[error("抓取错误: {0}")]
    Fetch(#[from] FetchError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 抓取相关错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应状态码异常
    #[error("响应状态异常 ({url}): HTTP {status}")]
    BadStatus { url: String, status: u16 },
    /// 响应正文读取失败
    #[error("读取响应正文失败 ({url}): {source}")]
    BodyReadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// CSS 选择器解析失败
    #[error("选择器解析失败: {selector}")]
    SelectorInvalid { selector: String },
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {source}")]
    ClientBuildFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {source}")]
    SerializeFailed {
        #[from]
        source: serde_json::Error,
    },
}

// ========== 便捷构造函数 ==========

impl FetchError {
    /// 创建网络请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::RequestFailed {
            url: url.into(),
            source,
        }
    }

    /// 创建状态码异常错误
    pub fn bad_status(url: impl Into<String>, status: u16) -> Self {
        FetchError::BadStatus {
            url: url.into(),
            status,
        }
    }

    /// 创建选择器解析失败错误
    pub fn selector_invalid(selector: impl Into<String>) -> Self {
        FetchError::SelectorInvalid {
            selector: selector.into(),
        }
    }
}

impl FileError {
    /// 创建目录创建失败错误
    pub fn create_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::CreateDirFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入失败错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
