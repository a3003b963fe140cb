//! Submodule for fuzzing the directed temporal edgelist parser against
//! arbitrary UTF-8 text.

use dagtime::io::read_directed_temporal_edgelist;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|text: String| {
            let _ = read_directed_temporal_edgelist::<u64, i64>(&text);
        });
    }
}
