#![no_main]

use libfuzzer_sys::fuzz_target;

use su2run_orchestration::get_efficiency;
use su2run_orchestration::results::parse_forces_breakdown;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let fc = parse_forces_breakdown(&text);
    // CL/CD is never computed from a zero drag.
    if get_efficiency(&fc).is_some() {
        assert!(fc.cl_cd.is_some() || fc.cd.is_some_and(|cd| cd != 0.0));
    }
});
