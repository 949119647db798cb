use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::MAX_TAKE;

/// Number of pile sizes with a learned bucket (sizes `1..=TRACKED_PILE_MAX`).
pub const TRACKED_PILE_MAX: usize = 20;

/// Seed contents of every bucket: each move equally likely.
pub const DEFAULT_BUCKET: [u32; 3] = [1, 2, 3];

/// The fresh bucket table: every tracked pile size seeded with `[1, 2, 3]`.
pub fn default_buckets() -> Vec<Vec<u32>> {
    vec![DEFAULT_BUCKET.to_vec(); TRACKED_PILE_MAX]
}

/// Per-pile-size move distributions plus the per-match record of which
/// move was chosen at each pile size.
///
/// `buckets[i]` holds the candidate moves for pile size `i + 1`, kept
/// sorted; more copies of a value mean a higher probability of choosing
/// it. `recorded[i]` is the move made this match at pile size `i + 1`, or
/// 0 if that pile size was not visited. Buckets are seeded with
/// `[1, 2, 3]` and only ever appended to, so they are never empty.
pub struct BucketModel {
    buckets: Vec<Vec<u32>>,
    recorded: [u32; TRACKED_PILE_MAX],
    rng: StdRng,
}

impl BucketModel {
    pub fn new(buckets: Vec<Vec<u32>>) -> Self {
        Self::with_rng(buckets, StdRng::from_os_rng())
    }

    /// Deterministic sampling for tests.
    pub fn seeded(buckets: Vec<Vec<u32>>, seed: u64) -> Self {
        Self::with_rng(buckets, StdRng::seed_from_u64(seed))
    }

    fn with_rng(buckets: Vec<Vec<u32>>, rng: StdRng) -> Self {
        assert_eq!(
            buckets.len(),
            TRACKED_PILE_MAX,
            "bucket table must cover pile sizes 1..={TRACKED_PILE_MAX}"
        );
        assert!(
            buckets.iter().all(|b| !b.is_empty()),
            "every bucket must hold at least one move"
        );
        BucketModel {
            buckets,
            recorded: [0; TRACKED_PILE_MAX],
            rng,
        }
    }

    /// Choose a move for the given pile size.
    ///
    /// Piles above the tracked range always take 3 to shrink quickly into
    /// the learned range, and a pile of 1 forces the only legal move;
    /// neither is recorded. Anything else samples uniformly from the
    /// pile's bucket — moves reinforced by past wins appear more often in
    /// the bucket, so they are proportionally more likely — and records
    /// the choice for end-of-match reinforcement.
    pub fn choose_move(&mut self, pile: u32) -> u32 {
        assert!(pile >= 1, "no sticks left to take");

        if pile as usize > TRACKED_PILE_MAX {
            return MAX_TAKE;
        }
        if pile == 1 {
            return 1;
        }

        let index = (pile - 1) as usize;
        let bucket = &self.buckets[index];
        let choice = bucket[self.rng.random_range(0..bucket.len())];
        self.recorded[index] = choice;
        choice
    }

    /// Forget the current match's move record. Called when a match starts.
    pub fn clear_recorded(&mut self) {
        self.recorded = [0; TRACKED_PILE_MAX];
    }

    /// Insert every move recorded this match back into its bucket, keeping
    /// the bucket sorted. Called only after a win; losses leave the
    /// buckets untouched.
    pub fn reinforce_recorded(&mut self) {
        for (bucket, &take) in self.buckets.iter_mut().zip(self.recorded.iter()) {
            if take > 0 {
                let pos = bucket.partition_point(|&m| m <= take);
                bucket.insert(pos, take);
            }
        }
    }

    pub fn buckets(&self) -> &[Vec<u32>] {
        &self.buckets
    }

    /// Bucket contents for one pile size.
    pub fn bucket(&self, pile: u32) -> &[u32] {
        &self.buckets[(pile - 1) as usize]
    }

    /// Move recorded at the given pile size this match, if any.
    pub fn recorded_move(&self, pile: u32) -> Option<u32> {
        match self.recorded[(pile - 1) as usize] {
            0 => None,
            take => Some(take),
        }
    }
}
