#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed documents must fail with an error, never a panic
    if let Ok((library, _stats)) = mslibquant::library::load_library(data) {
        let _ = mslibquant::method::QuantitationDataSet::synthesize(&library)
            .and_then(|method| method.render());
        let _ = mslibquant::export::score_library(&library);
    }
});
