use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ReceiptError;
use crate::models::{LineItem, Receipt, ReceiptSubmission};

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").unwrap());
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// 校验原始收据并转换为强类型收据
///
/// 检查顺序固定，第一个失败项即返回：
/// retailer → total → items → 各明细 (描述、价格) → purchaseDate → purchaseTime
pub fn validate(submission: &ReceiptSubmission) -> Result<Receipt, ReceiptError> {
    // 1. 商户名
    let retailer = match &submission.retailer {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => return Err(ReceiptError::InvalidRetailer),
    };

    // 2. 总金额
    let total = submission
        .total
        .as_ref()
        .and_then(amount_from_value)
        .ok_or(ReceiptError::InvalidTotal)?;

    // 3. 明细数组 (允许为空)
    let raw_items = match &submission.items {
        Some(Value::Array(items)) => items,
        _ => return Err(ReceiptError::InvalidItems),
    };

    // 4-5. 逐条校验明细
    let items = raw_items
        .iter()
        .map(validate_item)
        .collect::<Result<Vec<_>, _>>()?;

    // 6. 日期
    let purchase_date = submission
        .purchase_date
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_date)
        .ok_or(ReceiptError::InvalidDate)?;

    // 7. 时间
    let purchase_time = submission
        .purchase_time
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_time)
        .ok_or(ReceiptError::InvalidTime)?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn validate_item(item: &Value) -> Result<LineItem, ReceiptError> {
    let short_description = item
        .get("shortDescription")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ReceiptError::InvalidItemDescription)?;

    let price = item
        .get("price")
        .and_then(amount_from_value)
        .ok_or(ReceiptError::InvalidItemPrice)?;

    Ok(LineItem {
        short_description: short_description.to_string(),
        price,
    })
}

/// 解析金额文本：可选符号、数字、可选小数点
///
/// 例如 "35.35"、"-1.25"、"+3"、".5"、"5."；其他形式返回 None。
pub fn parse_amount(text: &str) -> Option<BigDecimal> {
    let text = text.trim();
    if !AMOUNT_RE.is_match(text) {
        return None;
    }

    let (negative, digits) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };

    let mut normalized = String::with_capacity(digits.len() + 3);
    if negative {
        normalized.push('-');
    }
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits);
    if digits.ends_with('.') {
        normalized.push('0');
    }

    BigDecimal::from_str(&normalized).ok()
}

/// 金额字段既可以是字符串也可以是 JSON 数字
fn amount_from_value(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::String(s) => parse_amount(s),
        Value::Number(n) => parse_amount(&n.to_string()),
        _ => None,
    }
}

/// 解析 YYYY-MM-DD，并要求是真实存在的公历日期
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 解析 24 小时制 HH:MM (小时允许一位数)
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
