//! Re-parse cost of a growing streamed reply. The renderer reparses the
//! whole message on every appended chunk, so parse time on realistic
//! transcripts is the budget that matters.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fhevm_tutor::ui::content::parse_blocks;

const REPLY: &str = "\
**Encrypted Counter** keeps its tally as an `euint32` so observers only see ciphertext.\n\
\n\
```solidity\n\
contract Counter {\n\
    euint32 private total;\n\
    function add(bytes calldata amount) public {\n\
        total = TFHE.add(total, TFHE.asEuint32(amount));\n\
    }\n\
}\n\
```\n\
Key points:\n\
- _Inputs_ arrive encrypted via [fhevmjs](https://docs.zama.ai/fhevm)\n\
- **State** never leaves the contract in plaintext\n\
1. Deploy the contract\n\
2. Encrypt a value client-side\n\
[FHEVM_DATA_FLOW_VISUALIZATION]\n\
Ready to continue?\n\
[BUTTON:Show the test|Write a Hardhat test for this contract]\n\
[BUTTON:Explain reencrypt|Explain FHE.reencrypt]\n";

fn full_reply(c: &mut Criterion) {
    c.bench_function("parse_blocks/full_reply", |b| {
        b.iter(|| parse_blocks(std::hint::black_box(REPLY), true))
    });
}

/// Simulates streaming: parse every prefix that ends on a chunk boundary.
fn streaming_prefixes(c: &mut Criterion) {
    let boundaries: Vec<usize> = REPLY
        .char_indices()
        .map(|(i, ch)| i + ch.len_utf8())
        .step_by(24)
        .collect();
    c.bench_function("parse_blocks/streaming_prefixes", |b| {
        b.iter_batched(
            || boundaries.clone(),
            |bounds| {
                for end in bounds {
                    parse_blocks(std::hint::black_box(&REPLY[..end]), true);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, full_reply, streaming_prefixes);
criterion_main!(benches);
