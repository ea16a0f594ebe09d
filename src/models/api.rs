use serde::Serialize;

// 统一API响应结构
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: u16, message: &str, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    fn single_error(code: u16, error_code: &str, message: &str) -> Self {
        Self::error(
            code,
            message,
            vec![ErrorDetail {
                field: None,
                code: error_code.to_string(),
                message: message.to_string(),
            }],
        )
    }

    pub fn bad_request(message: &str) -> Self {
        Self::single_error(400, "BAD_REQUEST", message)
    }

    pub fn bad_gateway(message: &str) -> Self {
        Self::single_error(502, "BAD_GATEWAY", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::single_error(500, "INTERNAL_ERROR", message)
    }
}
