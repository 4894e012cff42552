#![no_main]

use libfuzzer_sys::fuzz_target;

use su2run_core::su2_config::Su2Config;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = Su2Config::parse(text) else {
        return;
    };

    // Writing then re-reading keeps every key and value.
    let reparsed = Su2Config::parse(&cfg.to_string()).expect("written config must parse");
    assert_eq!(cfg.len(), reparsed.len());
    for (key, value) in cfg.iter() {
        assert_eq!(reparsed.get(key), Some(value), "value of {key} changed");
    }
});
