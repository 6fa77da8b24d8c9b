//! Fuzz target: arbitrary enroll/unenroll sequences on the seeded directory.
//!
//! After every operation each roster must stay duplicate-free, and failed
//! operations must leave the directory untouched.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use mergington_core::ActivityDirectory;

const EXTRA_NAMES: &[&str] = &["Nonexistent Club", "chess club", ""];

fuzz_target!(|data: &[u8]| {
    let dir = ActivityDirectory::seeded();
    let mut names: Vec<String> = dir.list().keys().cloned().collect();
    names.extend(EXTRA_NAMES.iter().map(|s| (*s).to_owned()));

    for op in data.chunks_exact(3) {
        let name = &names[usize::from(op[0]) % names.len()];
        let participant = format!("p{}@mergington.edu", op[1] % 8);
        let before = dir.list();

        let result = if op[2] % 2 == 0 {
            dir.enroll(name, participant.as_str())
        } else {
            dir.unenroll(name, participant.as_str())
        };

        if result.is_err() {
            assert_eq!(dir.list(), before, "failed operation mutated the directory");
        }

        for (activity, record) in dir.list() {
            let unique: HashSet<_> = record.participants.iter().collect();
            assert_eq!(unique.len(), record.participants.len(), "{activity} has duplicates");
        }
    }
});
