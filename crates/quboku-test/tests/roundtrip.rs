//! Decode is the left inverse of encode for any in-range board.

use proptest::prelude::*;

use quboku_core::{decode_assignment, grid::min_encoding_bits, GridSpec};
use quboku_test::board_to_assignment;

fn board_strategy() -> impl Strategy<Value = (GridSpec, Vec<Vec<u32>>)> {
    (1usize..=4, 1usize..=4, 0usize..=2).prop_flat_map(|(rows, cols, extra_bits)| {
        let qpc = min_encoding_bits(rows.max(cols)) + extra_bits;
        let max_value = (1u32 << qpc) - 1;
        let spec = GridSpec::new(rows, cols, qpc, 1, 1, 1.0).expect("strategy builds valid specs");
        prop::collection::vec(prop::collection::vec(0..=max_value, cols), rows)
            .prop_map(move |board| (spec.clone(), board))
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode((spec, board) in board_strategy()) {
        let bits = board_to_assignment(&spec, &board, 0).unwrap();
        prop_assert_eq!(bits.len(), spec.total_vars());
        let decoded = decode_assignment(&spec, &bits, 0).unwrap();
        prop_assert_eq!(decoded, board);
    }

    #[test]
    fn value_offset_shifts_roundtrip((spec, board) in board_strategy()) {
        let shifted: Vec<Vec<u32>> =
            board.iter().map(|row| row.iter().map(|v| v + 1).collect()).collect();
        let bits = board_to_assignment(&spec, &shifted, 1).unwrap();
        let decoded = decode_assignment(&spec, &bits, 1).unwrap();
        prop_assert_eq!(decoded, shifted);
    }
}
