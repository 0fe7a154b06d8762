//! All-vs-all alignment of a set of sequences on a pool of worker threads.

use std::num::NonZeroUsize;
use std::thread;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info};

use crate::aligner::{align, AlignmentMode, AlignmentResult};
use crate::errors::AlignError;
use crate::io::fasta::SequenceRecord;

/// Alignment result for one pair of input records
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PairwiseRecord {
    pub first_name: String,
    pub second_name: String,

    #[serde(flatten)]
    pub result: AlignmentResult,
}

/// Align every unordered pair of records.
///
/// Pairs are distributed over `num_threads` workers; the output is ordered by the position of
/// both records in the input, regardless of the number of threads used.
pub fn align_all_pairs(
    records: &[SequenceRecord],
    mode: AlignmentMode,
    max_align_length: usize,
    num_threads: NonZeroUsize,
) -> Result<Vec<PairwiseRecord>, AlignError> {
    if records.len() < 2 {
        return Err(AlignError::TooFewSequences(records.len()));
    }

    let num_pairs = records.len() * (records.len() - 1) / 2;
    info!(num_records = records.len(), num_pairs, ?mode, "Aligning all pairs");

    let (tx, rx) = crossbeam_channel::unbounded();
    let (tx_out, rx_out) = crossbeam_channel::unbounded();

    for pair in (0..records.len()).tuple_combinations::<(usize, usize)>() {
        // The receiver is still in scope, so sending can't fail
        let _ = tx.send(pair);
    }
    drop(tx);

    thread::scope(|scope| {
        for worker in 0..num_threads.get() {
            let thread_rx = rx.clone();
            let tx_out_thread = tx_out.clone();

            scope.spawn(move || {
                let mut num_aligned = 0usize;
                while let Ok((i, j)) = thread_rx.recv() {
                    let result = align(&records[i].sequence, &records[j].sequence, mode, max_align_length);
                    if tx_out_thread.send((i, j, result)).is_err() {
                        break;
                    }

                    num_aligned += 1;
                }

                debug!(worker, num_aligned, "Worker done");
            });
        }
    });

    drop(tx_out);

    let output = rx_out.iter()
        .sorted_by_key(|(i, j, _)| (*i, *j))
        .map(|(i, j, result)| PairwiseRecord {
            first_name: records[i].name.clone(),
            second_name: records[j].name.clone(),
            result,
        })
        .collect();

    Ok(output)
}


#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::align_all_pairs;
    use crate::aligner::{align, AlignmentMode};
    use crate::errors::AlignError;
    use crate::io::fasta::SequenceRecord;

    fn test_records() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("s1", b"GATTACAGATTACA".to_vec()),
            SequenceRecord::new("s2", b"GATTACCGATTAC".to_vec()),
            SequenceRecord::new("s3", b"CATTAGAGA".to_vec()),
            SequenceRecord::new("s4", b"GATTACAGATTACAGG".to_vec()),
        ]
    }

    #[test]
    fn test_all_pairs_order() {
        let records = test_records();
        let output = align_all_pairs(&records, AlignmentMode::Full, 100, NonZeroUsize::MIN).unwrap();

        let names: Vec<_> = output.iter()
            .map(|r| (r.first_name.as_str(), r.second_name.as_str()))
            .collect();

        assert_eq!(names, vec![
            ("s1", "s2"), ("s1", "s3"), ("s1", "s4"),
            ("s2", "s3"), ("s2", "s4"),
            ("s3", "s4"),
        ]);

        assert_eq!(output[0].result, align(&records[0].sequence, &records[1].sequence, AlignmentMode::Full, 100));
    }

    #[test]
    fn test_thread_count_independent() {
        let records = test_records();

        for mode in [AlignmentMode::Full, AlignmentMode::Banded] {
            let single = align_all_pairs(&records, mode, 100, NonZeroUsize::MIN).unwrap();
            let multi = align_all_pairs(&records, mode, 100, NonZeroUsize::new(4).unwrap()).unwrap();
            assert_eq!(single, multi);
        }

        // s1 vs s3 differ in length by 5, which the band can't cover
        let banded = align_all_pairs(&records, AlignmentMode::Banded, 100, NonZeroUsize::MIN).unwrap();
        assert!(!banded[1].result.is_aligned());
    }

    #[test]
    fn test_too_few_sequences() {
        let records = vec![SequenceRecord::new("s1", b"ACGT".to_vec())];
        let result = align_all_pairs(&records, AlignmentMode::Full, 100, NonZeroUsize::MIN);

        assert!(matches!(result, Err(AlignError::TooFewSequences(1))));
    }
}
