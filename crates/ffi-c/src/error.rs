#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArg = 1,
    InvalidState = 2,
    UnknownHash = 3,
    Internal = 4,
}

impl ErrorCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

pub const EDH_OK: i32 = ErrorCode::Ok.code();
pub const EDH_ERR_INVALID_ARG: i32 = ErrorCode::InvalidArg.code();
pub const EDH_ERR_INVALID_STATE: i32 = ErrorCode::InvalidState.code();
pub const EDH_ERR_UNKNOWN_HASH: i32 = ErrorCode::UnknownHash.code();
pub const EDH_ERR_INTERNAL: i32 = ErrorCode::Internal.code();
