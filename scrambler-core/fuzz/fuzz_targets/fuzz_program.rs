#![no_main]

use libfuzzer_sys::fuzz_target;
use scrambler_core::Program;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let mut parts = input.splitn(2, '\n');
    let password: String = parts.next().unwrap_or_default().chars().take(16).collect();
    let ops: String = parts
        .next()
        .unwrap_or_default()
        .lines()
        .take(50)
        .collect::<Vec<_>>()
        .join("\n");

    let Ok(program) = Program::parse(&ops) else {
        return;
    };

    // Errors are fine; panics are not.
    if let Ok(scrambled) = program.scramble(&password) {
        let _ = program.unscramble(&scrambled);
    }
    let _ = program.unscramble(&password);
});
