// API 业务错误码
//
// 约定：0 表示成功；4xxxx 对应客户端错误；5xxxx 对应服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationFailed = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,

    PermissionDenied = 40300,

    UserNotFound = 40401,
    GroupNotFound = 40402,
    SubjectNotFound = 40403,
    StudentNotFound = 40404,
    DisciplineGroupNotFound = 40405,
    ScheduleItemNotFound = 40406,
    GradeNotFound = 40407,
    AttendanceNotFound = 40408,

    GroupAlreadyExists = 40901,
    SubjectAlreadyExists = 40902,
    UserAlreadyExists = 40903,

    InternalServerError = 50000,
    GroupDeleteFailed = 50001,
    SubjectDeleteFailed = 50002,
}
