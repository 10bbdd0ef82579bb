use crate::haptics::Haptics;
use crate::score::Score;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreNotice {
    pub seq: u64,
    pub score: Score,
    pub pulse: bool,
}

/// FIFO of score notices waiting to be handed to the host.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: VecDeque<ScoreNotice>,
    next_seq: u64,
}

impl Outbox {
    pub fn push(&mut self, score: Score, pulse: bool) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back(ScoreNotice { seq, score, pulse });
        seq
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ScoreNotice> + '_ {
        self.queue.drain(..)
    }

    /// Hands every queued notice to `set_score` in order, pulsing `haptics`
    /// first for notices that ask for it.
    pub fn deliver(
        &mut self,
        haptics: &impl Haptics,
        pulse: Duration,
        mut set_score: impl FnMut(Score),
    ) -> usize {
        let mut delivered = 0;
        for notice in self.queue.drain(..) {
            if notice.pulse {
                haptics.pulse(pulse);
            }
            set_score(notice.score);
            delivered += 1;
        }
        delivered
    }
}
