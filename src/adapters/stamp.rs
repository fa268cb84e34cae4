use crate::domain::ports::PackStamper;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// 每次輸出都產生新的 UUID 與當天日期
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl PackStamper for SystemStamper {
    fn package_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
