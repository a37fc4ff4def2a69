//! Fuzz target for `git ls-files -z` output decoding.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ls_files_output
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let paths = sizeguard_repo::parse_ls_files_output(data);
    for listed in &paths {
        assert!(!listed.path.as_str().is_empty());
        assert!(!listed.path.as_str().contains('\0'));
        assert!(!listed.raw.as_os_str().is_empty());
    }
});
