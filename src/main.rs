//! Minimal Cortex-M3 checksum firmware for emulation fuzzing
//!
//! On `thumbv7m-none-eabi` this builds the image that runs on QEMU's
//! lm3s6965evb machine (or any emulator mapping the same memory layout). The
//! fuzzer calls `calculate_checksum` directly with `r0 = data` and
//! `r1 = length`, then reads `r0` and the `LAST_*` statics.
//!
//! On a hosted target the same binary is a small CLI that prints the
//! reference checksum for hex input.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(not(target_os = "none"))]
mod host;

#[cfg(not(target_os = "none"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

#[cfg(target_os = "none")]
mod firmware {
    use core::sync::atomic::AtomicU8;

    use checksum_fw::Report;
    use cortex_m::asm;
    use cortex_m_rt::entry;
    use panic_halt as _;

    /// Value returned by the most recent call
    #[no_mangle]
    pub static LAST_CHECKSUM: AtomicU8 = AtomicU8::new(0);

    /// `checksum_fw::Branch` discriminant of the most recent call
    #[no_mangle]
    pub static LAST_BRANCH: AtomicU8 = AtomicU8::new(0);

    /// 0 on success, otherwise `ChecksumError::status_code`
    #[no_mangle]
    pub static LAST_STATUS: AtomicU8 = AtomicU8::new(0);

    static REPORT: Report<'static> = Report {
        checksum: &LAST_CHECKSUM,
        branch: &LAST_BRANCH,
        status: &LAST_STATUS,
    };

    static SELF_TEST_INPUT: [u8; 5] = [0x01, 0x02, 0x03, 0x04, 0x05];

    #[entry]
    fn main() -> ! {
        // Keeps the export linked and leaves a known result for the debugger.
        unsafe {
            calculate_checksum(SELF_TEST_INPUT.as_ptr(), SELF_TEST_INPUT.len() as u32);
        }

        loop {
            asm::wfi();
        }
    }

    /// Fuzzing entry point.
    ///
    /// Returns 0 and sets `LAST_STATUS` when `data` is null but `length`
    /// is not zero.
    ///
    /// # Safety
    ///
    /// A non-null `data` must point to `length` readable bytes.
    #[no_mangle]
    #[inline(never)]
    pub unsafe extern "C" fn calculate_checksum(data: *const u8, length: u32) -> u8 {
        unsafe { REPORT.record_raw(data, length) }
    }
}
