use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use trailhound_types::{ConditionKey, TrainingSession};

use crate::histogram::{DEFAULT_BIN_COUNT, SplitHistogram, split_histogram};
use crate::summary::{NumericSummary, numeric_summary};

fn rate_pct(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}

/// Totals across the whole session set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalCounts {
    pub total_sessions: usize,
    pub distinct_dogs: usize,
    pub success: usize,
    pub fail: usize,
    pub success_rate_pct: u32,
}

/// Per-dog tally, kept in the order the dog was first encountered so that
/// rank ties stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogTally {
    pub dog_id: Uuid,
    pub total: usize,
    pub success: usize,
    pub fail: usize,
    pub success_rate_pct: u32,
    pub fail_rate_pct: u32,
}

/// Per-scent-category tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScentTally {
    pub scent: String,
    pub total: usize,
    pub success: usize,
    pub fail: usize,
    pub success_rate_pct: u32,
}

/// Tally for one exact observed value of a condition. A series of these,
/// sorted ascending by value, is the success-rate-vs-condition curve —
/// deliberately unbinned, unlike the per-dog histograms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionGroup {
    pub value: f64,
    pub total: usize,
    pub success: usize,
    pub fail: usize,
    pub success_rate_pct: u32,
}

/// Sort key for the per-dog ranking; the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogRanking {
    SuccessCount,
    SuccessRate,
}

/// Everything the aggregate-statistics view renders, produced by one
/// traversal of the session list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub global: GlobalCounts,
    pub per_dog: Vec<DogTally>,
    pub per_scent: Vec<ScentTally>,
    pub per_condition: Vec<(ConditionKey, Vec<ConditionGroup>)>,
}

impl Report {
    /// Aggregate the full session set. `None` when there are no sessions.
    pub fn build(sessions: &[TrainingSession]) -> Option<Report> {
        if sessions.is_empty() {
            return None;
        }

        let mut success_total = 0;
        let mut per_dog: Vec<DogTally> = Vec::new();
        let mut dog_index: HashMap<Uuid, usize> = HashMap::new();
        let mut per_scent: Vec<ScentTally> = Vec::new();
        let mut scent_index: HashMap<String, usize> = HashMap::new();
        // Group by the exact bit pattern; values are finite after the
        // boundary filter, so bits are a faithful key.
        let mut condition_groups: Vec<(Vec<ConditionGroup>, HashMap<u64, usize>)> =
            ConditionKey::ALL
                .iter()
                .map(|_| (Vec::new(), HashMap::new()))
                .collect();

        for session in sessions {
            let hit = session.is_success();
            if hit {
                success_total += 1;
            }

            let dog_slot = *dog_index.entry(session.dog_id).or_insert_with(|| {
                per_dog.push(DogTally {
                    dog_id: session.dog_id,
                    total: 0,
                    success: 0,
                    fail: 0,
                    success_rate_pct: 0,
                    fail_rate_pct: 0,
                });
                per_dog.len() - 1
            });
            let dog = &mut per_dog[dog_slot];
            dog.total += 1;
            if hit {
                dog.success += 1;
            } else {
                dog.fail += 1;
            }

            let scent = session.scent();
            let scent_slot = *scent_index.entry(scent.clone()).or_insert_with(|| {
                per_scent.push(ScentTally {
                    scent,
                    total: 0,
                    success: 0,
                    fail: 0,
                    success_rate_pct: 0,
                });
                per_scent.len() - 1
            });
            let tally = &mut per_scent[scent_slot];
            tally.total += 1;
            if hit {
                tally.success += 1;
            } else {
                tally.fail += 1;
            }

            for (slot, key) in ConditionKey::ALL.iter().enumerate() {
                let Some(value) = session.condition_value(*key) else {
                    continue;
                };
                // -0.0 + 0.0 is +0.0, so both zeros land in one group.
                let value = value + 0.0;
                let (groups, index) = &mut condition_groups[slot];
                let group_slot = *index.entry(value.to_bits()).or_insert_with(|| {
                    groups.push(ConditionGroup {
                        value,
                        total: 0,
                        success: 0,
                        fail: 0,
                        success_rate_pct: 0,
                    });
                    groups.len() - 1
                });
                let group = &mut groups[group_slot];
                group.total += 1;
                if hit {
                    group.success += 1;
                } else {
                    group.fail += 1;
                }
            }
        }

        for dog in &mut per_dog {
            dog.success_rate_pct = rate_pct(dog.success, dog.total);
            dog.fail_rate_pct = rate_pct(dog.fail, dog.total);
        }
        for tally in &mut per_scent {
            tally.success_rate_pct = rate_pct(tally.success, tally.total);
        }

        let per_condition = ConditionKey::ALL
            .iter()
            .zip(condition_groups)
            .map(|(key, (mut groups, _))| {
                for group in &mut groups {
                    group.success_rate_pct = rate_pct(group.success, group.total);
                }
                groups.sort_by(|a, b| a.value.total_cmp(&b.value));
                (*key, groups)
            })
            .collect();

        let total = sessions.len();
        Some(Report {
            global: GlobalCounts {
                total_sessions: total,
                distinct_dogs: per_dog.len(),
                success: success_total,
                fail: total - success_total,
                success_rate_pct: rate_pct(success_total, total),
            },
            per_dog,
            per_scent,
            per_condition,
        })
    }

    /// Dogs ordered for display. Stable sort: ties keep encounter order.
    pub fn ranked_dogs(&self, ranking: DogRanking) -> Vec<&DogTally> {
        let mut dogs: Vec<&DogTally> = self.per_dog.iter().collect();
        match ranking {
            DogRanking::SuccessCount => dogs.sort_by(|a, b| b.success.cmp(&a.success)),
            DogRanking::SuccessRate => {
                dogs.sort_by(|a, b| b.success_rate_pct.cmp(&a.success_rate_pct))
            }
        }
        dogs
    }
}

/// Summary plus cohort histogram for one measured quantity on the per-dog
/// view. Either part may be absent independently of the session count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub summary: Option<NumericSummary>,
    pub histogram: Option<SplitHistogram>,
}

impl Distribution {
    fn build(sessions: &[TrainingSession], value_of: impl Fn(&TrainingSession) -> Option<f64>) -> Self {
        let mut success = Vec::new();
        let mut failure = Vec::new();
        let mut all = Vec::new();
        for session in sessions {
            let Some(value) = value_of(session) else {
                continue;
            };
            all.push(value);
            if session.is_success() {
                success.push(value);
            } else {
                failure.push(value);
            }
        }
        Distribution {
            summary: numeric_summary(&all),
            histogram: split_histogram(&success, &failure, DEFAULT_BIN_COUNT),
        }
    }
}

/// Everything the per-dog detail view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DogReport {
    pub total: usize,
    pub success: usize,
    pub fail: usize,
    pub success_rate_pct: u32,
    pub duration: Distribution,
    pub conditions: Vec<(ConditionKey, Distribution)>,
}

impl DogReport {
    /// Derive the detail view from one dog's sessions. `None` when the dog
    /// has no sessions at all.
    pub fn build(sessions: &[TrainingSession]) -> Option<DogReport> {
        if sessions.is_empty() {
            return None;
        }

        let success = sessions.iter().filter(|s| s.is_success()).count();
        let total = sessions.len();

        Some(DogReport {
            total,
            success,
            fail: total - success,
            success_rate_pct: rate_pct(success, total),
            duration: Distribution::build(sessions, TrainingSession::duration_secs),
            conditions: ConditionKey::ALL
                .iter()
                .map(|key| (*key, Distribution::build(sessions, |s| s.condition_value(*key))))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_pct_rounds_to_nearest() {
        assert_eq!(rate_pct(1, 3), 33);
        assert_eq!(rate_pct(2, 3), 67);
        assert_eq!(rate_pct(0, 0), 0);
        assert_eq!(rate_pct(1, 2), 50);
    }

    #[test]
    fn test_empty_session_set_has_no_report() {
        assert_eq!(Report::build(&[]), None);
        assert_eq!(DogReport::build(&[]), None);
    }
}
