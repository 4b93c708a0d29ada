//! 范围条件：`min <= x <= max`，端点是否包含由 [`Boundary`] 控制。

use crate::value::SqlValue;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// 范围边界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// 包含左边界：`>= min AND < max`。
    Left,
    /// 包含右边界：`> min AND <= max`。
    Right,
    /// 两端都包含。
    #[default]
    Both,
    /// 两端都不包含。
    Neither,
}

impl Boundary {
    pub fn includes_min(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    pub fn includes_max(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }

    pub(crate) fn min_operator(self) -> &'static str {
        if self.includes_min() { ">=" } else { ">" }
    }

    pub(crate) fn max_operator(self) -> &'static str {
        if self.includes_max() { "<=" } else { "<" }
    }
}

/// 可作为范围端点的类型。
pub trait SegmentBound: PartialOrd + Clone + Into<SqlValue> {
    /// 生成 SQL 前对上限的调整，默认不变。
    fn adjust_max(self, _boundary: Boundary) -> Self {
        self
    }
}

impl SegmentBound for i32 {}
impl SegmentBound for i64 {}
impl SegmentBound for f64 {}
impl SegmentBound for Decimal {}
impl SegmentBound for PrimitiveDateTime {}
impl SegmentBound for OffsetDateTime {}

impl SegmentBound for Date {
    // 不含右边界时上限顺延一天，使按天查询覆盖最后一整天
    fn adjust_max(self, boundary: Boundary) -> Self {
        if boundary.includes_max() {
            return self;
        }
        self.next_day().unwrap_or(self)
    }
}

/// 范围：`min > max` 时自动交换，任一端为空则不生成该端条件。
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<T> {
    min: Option<T>,
    max: Option<T>,
    boundary: Boundary,
}

impl<T: SegmentBound> Segment<T> {
    pub fn new(min: Option<T>, max: Option<T>, boundary: Boundary) -> Self {
        let (min, max) = match (min, max) {
            (Some(min), Some(max)) if min.partial_cmp(&max) == Some(Ordering::Greater) => {
                (Some(max), Some(min))
            }
            pair => pair,
        };
        Self { min, max, boundary }
    }

    /// 两端都包含的范围。
    pub fn inclusive(min: Option<T>, max: Option<T>) -> Self {
        Self::new(min, max, Boundary::Both)
    }

    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// 实际参与比较的上限（经过 [`SegmentBound::adjust_max`]）。
    pub fn effective_max(&self) -> Option<T> {
        self.max.clone().map(|m| m.adjust_max(self.boundary))
    }

    /// 与生成的 SQL 谓词等价的内存判断。
    pub fn contains(&self, value: &T) -> bool {
        let above_min = match &self.min {
            None => true,
            Some(min) if self.boundary.includes_min() => value >= min,
            Some(min) => value > min,
        };
        let below_max = match self.effective_max() {
            None => true,
            Some(max) if self.boundary.includes_max() => *value <= max,
            Some(max) => *value < max,
        };
        above_min && below_max
    }
}

impl Segment<Date> {
    /// 按天查询：`>= min AND < max + 1 天`。
    pub fn days(min: Option<Date>, max: Option<Date>) -> Self {
        Self::new(min, max, Boundary::Left)
    }
}
