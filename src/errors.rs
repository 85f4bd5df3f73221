//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_authgate_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AuthGateError {
            $($variant(String),)*
        }

        impl AuthGateError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AuthGateError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AuthGateError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AuthGateError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AuthGateError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AuthGateError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_authgate_errors! {
    Configuration("E001", "Configuration Error"),
    Validation("E002", "Validation Error"),
    PayloadFormat("E003", "Payload Format Error"),
}

impl AuthGateError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AuthGateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AuthGateError {}

// 为常见的错误类型实现 From trait
impl From<config::ConfigError> for AuthGateError {
    fn from(err: config::ConfigError) -> Self {
        AuthGateError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AuthGateError>;
