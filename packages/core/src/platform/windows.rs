//! Known-folder lookup through the Windows shell

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;
use std::ptr;

use windows_sys::Win32::Foundation::{MAX_PATH, S_OK};
use windows_sys::Win32::System::Com::CoTaskMemFree;
use windows_sys::Win32::UI::Shell::{
    CSIDL_APPDATA, CSIDL_COMMON_APPDATA, CSIDL_LOCAL_APPDATA, FOLDERID_LocalAppData,
    FOLDERID_ProgramData, FOLDERID_RoamingAppData, KF_FLAG_DEFAULT, SHGetFolderPathW,
    SHGetKnownFolderPath,
};
use windows_sys::core::{GUID, PWSTR};

use super::KnownFolder;

/// Resolve a known folder, preferring `SHGetKnownFolderPath` over the legacy CSIDL API
pub(super) fn known_folder(folder: KnownFolder) -> Option<PathBuf> {
    let (rfid, csidl) = match folder {
        KnownFolder::RoamingAppData => (&FOLDERID_RoamingAppData, CSIDL_APPDATA),
        KnownFolder::LocalAppData => (&FOLDERID_LocalAppData, CSIDL_LOCAL_APPDATA),
        KnownFolder::ProgramData => (&FOLDERID_ProgramData, CSIDL_COMMON_APPDATA),
    };

    known_folder_path(rfid).or_else(|| {
        tracing::warn!(?folder, "SHGetKnownFolderPath failed, trying SHGetFolderPathW");
        legacy_folder_path(csidl as i32)
    })
}

fn known_folder_path(rfid: &GUID) -> Option<PathBuf> {
    let mut raw: PWSTR = ptr::null_mut();

    // SAFETY: rfid points at a static GUID and raw receives a CoTaskMem allocation.
    let hr = unsafe { SHGetKnownFolderPath(rfid, KF_FLAG_DEFAULT, ptr::null_mut(), &mut raw) };

    let path = if hr == S_OK && !raw.is_null() {
        // SAFETY: on success raw is a NUL-terminated UTF-16 string.
        Some(unsafe { wide_to_path(raw) })
    } else {
        None
    };

    // SAFETY: raw is either null or the buffer the shell allocated for us.
    unsafe { CoTaskMemFree(raw as *const _) };

    path.filter(|p| !p.as_os_str().is_empty())
}

fn legacy_folder_path(csidl: i32) -> Option<PathBuf> {
    let mut buf = [0u16; MAX_PATH as usize];

    // SAFETY: buf holds MAX_PATH wide chars as SHGetFolderPathW requires.
    let hr = unsafe {
        SHGetFolderPathW(
            ptr::null_mut(),
            csidl,
            ptr::null_mut(),
            0,
            buf.as_mut_ptr(),
        )
    };
    if hr != S_OK || buf[0] == 0 {
        return None;
    }

    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    Some(PathBuf::from(OsString::from_wide(&buf[..len])))
}

/// # Safety
///
/// `ptr` must point at a NUL-terminated UTF-16 string.
unsafe fn wide_to_path(ptr: *const u16) -> PathBuf {
    let mut len = 0;
    // SAFETY: the caller guarantees a terminator before the end of the allocation.
    while unsafe { *ptr.add(len) } != 0 {
        len += 1;
    }
    // SAFETY: the first len elements were just read.
    let wide = unsafe { std::slice::from_raw_parts(ptr, len) };
    PathBuf::from(OsString::from_wide(wide))
}
