//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为正整数 i64，非法值直接返回 400，
//! 避免在每个处理函数里重复校验。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_id_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(ErrorBadRequest(serde_json::to_string(
                        &ApiResponse::<()>::error_empty(
                            ErrorCode::BadRequest,
                            format!("Invalid path parameter: {}", $param),
                        ),
                    )
                    .unwrap_or_default())),
                })
            }
        }
    };
}

define_id_extractor!(
    /// 通用 ID 提取器（路径参数名 `id`）
    SafeIDI64, "id"
);
define_id_extractor!(SafeGroupIdI64, "group_id");
define_id_extractor!(SafeSubjectIdI64, "subject_id");
define_id_extractor!(SafeStudentIdI64, "student_id");
define_id_extractor!(SafeDisciplineGroupIdI64, "discipline_group_id");
define_id_extractor!(SafeScheduleItemIdI64, "schedule_item_id");
