#![no_main]

use checksum_fw::{checksum_with_branch, compute_checksum, Branch, Input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let result = checksum_with_branch(Input::from(data));

    // Branch selection only ever looks at the first two bytes
    let expected_branch = match data {
        [0xDE, ..] => Branch::MagicHeader,
        [_, 0xAD, ..] => Branch::MagicSecond,
        _ => Branch::Default,
    };
    assert_eq!(result.branch, expected_branch);

    let wide: u32 = match result.branch {
        Branch::MagicHeader => data.iter().take(4).map(|&b| u32::from(b)).sum::<u32>() + 0x10,
        Branch::MagicSecond => data.iter().fold(0, |acc, &b| acc ^ u32::from(b)) + 0x20,
        Branch::Default => data
            .iter()
            .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b))),
    };
    assert_eq!(u32::from(result.value), wide & 0xFF);

    // Every prefix is a valid input; one byte more than the buffer never is
    if let Ok(length) = u32::try_from(data.len()) {
        assert_eq!(compute_checksum(data, length), Ok(result.value));
        if let Some(past_end) = length.checked_add(1) {
            assert!(compute_checksum(data, past_end).is_err());
        }
    }
});
