use serde::Deserialize;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 调用方自报的认证标志，缺失或非布尔值在反序列化层被拒绝
    pub is_authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"is_authenticated": true}"#).unwrap();
        assert!(request.is_authenticated);
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(serde_json::from_str::<LoginRequest>("{}").is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(serde_json::from_str::<LoginRequest>(r#"{"is_authenticated": "yes"}"#).is_err());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"is_authenticated": false, "username": "ghost"}"#).unwrap();
        assert!(!request.is_authenticated);
    }
}
