use yew::prelude::*;

use super::use_real_time_data::{RealTimeHandle, use_real_time_data};
use crate::models::exam::ExamListItem;
use crate::polling::sources::ExamListSource;

/// Most recent exams for `user_id`, polled every 15 seconds.
#[hook]
pub fn use_exam_list(user_id: AttrValue, limit: usize) -> RealTimeHandle<Vec<ExamListItem>> {
    use_real_time_data((user_id, limit), |(user_id, limit)| {
        ExamListSource::create(user_id.as_str(), *limit)
    })
}
