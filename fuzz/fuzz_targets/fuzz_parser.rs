#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_cli::BlockReader;

fuzz_target!(|data: &[u8]| {
    // Should not panic on any input, and every block must be well formed
    for block in BlockReader::new(data) {
        let Ok(block) = block else { break };
        assert_eq!(block.a.rows(), block.order);
        assert_eq!(block.a.cols(), block.order);
        assert_eq!(block.b.rows(), block.order);
        assert_eq!(block.b.cols(), block.order);
    }
});
