// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use windows::Win32::Foundation::{GetLastError, WIN32_ERROR};

pub(crate) fn get_last_error_as_win32_error() -> WIN32_ERROR {
    unsafe { GetLastError() }
}

/// Null-terminated UTF-16 copy of `value` for PCWSTR parameters; keep it alive for the duration of the call.
pub(crate) fn to_utf16_null_terminated(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}
