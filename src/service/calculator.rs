use bigdecimal::{BigDecimal, One, Signed, ToPrimitive, Zero};
use chrono::{Datelike, Timelike};

use crate::error::ReceiptError;
use crate::models::{Receipt, ReceiptSubmission};
use crate::service::validator;

/// 整数金额 (无零头) 奖励
pub const ROUND_DOLLAR_POINTS: i64 = 50;
/// 0.25 倍数奖励
pub const MULTIPLE_OF_QUARTER_POINTS: i64 = 25;
/// 每两件商品奖励
pub const PAIR_OF_ITEMS_POINTS: i64 = 5;
/// 日期为奇数日奖励
pub const ODD_DAY_POINTS: i64 = 6;
/// 下午 14:00-16:00 奖励
pub const AFTERNOON_POINTS: i64 = 10;

const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// 计算收据积分 (纯函数，前置条件：收据已通过校验)
///
/// 规则按固定顺序累加，总金额为 0 时直接返回 0。
/// 金额判断全部使用十进制精确运算，不经过浮点数。
pub fn calculate(receipt: &Receipt) -> i64 {
    let mut points = 0i64;

    // 1. 商户名中的字母和数字
    points += receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as i64;

    // 2. 总金额为 0 时不再计算其他规则
    let total = &receipt.total;
    if total.is_zero() {
        return 0;
    }

    // 3. 整数金额
    if is_integral(total) {
        points += ROUND_DOLLAR_POINTS;
    }

    // 4. 0.25 的倍数 (total * 4 为整数)
    if is_integral(&(total * BigDecimal::from(4))) {
        points += MULTIPLE_OF_QUARTER_POINTS;
    }

    // 5. 每两件商品
    points += (receipt.items.len() / 2) as i64 * PAIR_OF_ITEMS_POINTS;

    // 6. 描述长度为 3 的倍数时，加 ceil(price * 0.2)
    //    逐项取整后以十进制累加，最后一次性换算，价格再大也不会溢出
    let mut description_points = BigDecimal::zero();
    for item in &receipt.items {
        let len = item.short_description.trim().chars().count();
        if len > 0 && len % 3 == 0 {
            description_points += ceil(&(&item.price * description_multiplier()));
        }
    }
    points = points.saturating_add(clamp_to_i64(&description_points));

    // 7. 奇数日
    if receipt.purchase_date.day() % 2 == 1 {
        points = points.saturating_add(ODD_DAY_POINTS);
    }

    // 8. 下午 2 点 (含) 到 4 点 (不含)
    let hour = receipt.purchase_time.hour();
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        points = points.saturating_add(AFTERNOON_POINTS);
    }

    points
}

/// 校验 + 计算：校验失败时返回对应错误，不产生部分积分
pub fn score(submission: &ReceiptSubmission) -> Result<i64, ReceiptError> {
    let receipt = validator::validate(submission)?;
    Ok(calculate(&receipt))
}

/// 0.2 (十进制精确表示)
fn description_multiplier() -> BigDecimal {
    BigDecimal::new(2.into(), 1)
}

fn is_integral(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

/// 向上取整 (with_scale 向零截断)
fn ceil(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if truncated < *value {
        truncated + BigDecimal::one()
    } else {
        truncated
    }
}

/// 超出 i64 范围时按符号取边界值
fn clamp_to_i64(value: &BigDecimal) -> i64 {
    value.to_i64().unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
