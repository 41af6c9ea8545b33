use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 客户端提交的原始收据 (未校验)
///
/// 字段保持为原始 JSON 值，类型错误交给校验器处理而不是在反序列化阶段失败。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: Option<Value>,
    pub purchase_date: Option<Value>,
    pub purchase_time: Option<Value>,
    pub items: Option<Value>,
    pub total: Option<Value>,
}

impl ReceiptSubmission {
    /// 从任意 JSON 请求体构造
    ///
    /// 非对象 (数组、字符串、数字等) 视为五个字段全部缺失。
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// 收集缺失的必填字段 (按声明顺序)
    ///
    /// null、false、0 和空字符串都视为缺失；空的 items 数组不算缺失。
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("retailer", &self.retailer),
            ("purchaseDate", &self.purchase_date),
            ("purchaseTime", &self.purchase_time),
            ("items", &self.items),
            ("total", &self.total),
        ]
        .into_iter()
        .filter(|&(_, value)| is_blank(value.as_ref()))
        .map(|(name, _)| name)
        .collect()
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// 校验通过的收据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<LineItem>,
    pub total: BigDecimal,
}

/// 收据明细行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub short_description: String,
    pub price: BigDecimal,
}
