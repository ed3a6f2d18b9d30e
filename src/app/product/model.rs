//! 产品数据模型

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateLength, ValidationError};

use crate::core::error::FieldError;

/// 目录内部保存的产品记录
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// 创建产品请求，缺省字段交给校验处理
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// 产品响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// 空白名称只报告必填错误，不再检查长度
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Product name is required"));
        return Err(error);
    }
    if !name.validate_length(Some(3), Some(50), None) {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Borrowed(
            "Product name must be between 3 and 50 characters",
        ));
        return Err(error);
    }
    Ok(())
}

/// 校验请求，返回按字段名排序的错误列表
pub fn validate_request(request: &ProductRequest) -> Result<(), Vec<FieldError>> {
    match request.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut fields: Vec<FieldError> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| FieldError {
                        field: field.to_string(),
                        message: error
                            .message
                            .as_ref()
                            .map(|msg| msg.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                    })
                })
                .collect();
            fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
            Err(fields)
        }
    }
}
