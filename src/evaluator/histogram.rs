use crate::cards::Rank;

/// Rank multiplicities of a hand, grouped by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankHistogram {
    counts: [u8; 15],
    groups: Vec<(Rank, u8)>,
}

impl RankHistogram {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|r| (r, counts[r.value() as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts, groups }
    }

    /// Number of cards holding `rank`.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// True if some rank occurs exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.groups.iter().any(|(_, count)| *count == n)
    }

    #[cfg(test)]
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Ranks occurring exactly `n` times, highest first.
    pub fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == n).map(|(rank, _)| *rank).collect()
    }

    pub fn quad(&self) -> Option<Rank> {
        self.ranks_with_count(4).first().copied()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.ranks_with_count(3).first().copied()
    }

    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with_count(2)
    }

    /// Singleton ranks, highest first.
    #[cfg(test)]
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with_count(1)
    }

    /// Every distinct rank except `excluded`, highest first.
    pub fn ranks_except(&self, excluded: &[Rank]) -> Vec<Rank> {
        let mut rest: Vec<Rank> =
            self.groups.iter().map(|(rank, _)| *rank).filter(|r| !excluded.contains(r)).collect();
        rest.sort_by(|a, b| b.cmp(a));
        rest
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
