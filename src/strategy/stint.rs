// Stint segmentation: turns a driver's lap sequence into compound runs

use log::warn;

use super::types::{Compound, LapRecord, Stint};

enum SegmenterState {
    NoOpenStint,
    OpenStint { compound: Compound, start_lap: u32 },
}

/// Collapses consecutive records that share a lap number. The later record wins.
fn dedup_laps<'a, I>(laps: I) -> Vec<(u32, &'a Compound)>
where
    I: IntoIterator<Item = &'a LapRecord>,
{
    let mut deduped: Vec<(u32, &Compound)> = Vec::new();
    for lap in laps {
        match deduped.last_mut() {
            Some((lap_number, compound)) if *lap_number == lap.lap_number => {
                if *compound != &lap.compound {
                    warn!(
                        "{}: lap {} reported as both {} and {}, keeping {}",
                        lap.driver_code, lap.lap_number, compound, lap.compound, lap.compound
                    );
                }
                *compound = &lap.compound;
            }
            _ => deduped.push((lap.lap_number, &lap.compound)),
        }
    }
    deduped
}

/// Splits one driver's laps, ordered by lap number, into stints.
///
/// A new stint starts on the first lap and on every compound change; the
/// previous stint then ends on the lap before. The final stint ends on the
/// highest lap number seen. No laps means no stints.
pub fn segment_stints<'a, I>(laps: I) -> Vec<Stint>
where
    I: IntoIterator<Item = &'a LapRecord>,
{
    let mut stints = Vec::new();
    let mut state = SegmenterState::NoOpenStint;
    let mut last_lap = 0;

    for (lap_number, compound) in dedup_laps(laps) {
        last_lap = last_lap.max(lap_number);

        if let SegmenterState::OpenStint {
            compound: current, ..
        } = &state
            && current == compound
        {
            continue;
        }

        let next = SegmenterState::OpenStint {
            compound: compound.clone(),
            start_lap: lap_number,
        };
        if let SegmenterState::OpenStint {
            compound: previous,
            start_lap,
        } = std::mem::replace(&mut state, next)
        {
            stints.push(Stint {
                compound: previous,
                start_lap,
                end_lap: lap_number.saturating_sub(1).max(start_lap),
            });
        }
    }

    if let SegmenterState::OpenStint {
        compound,
        start_lap,
    } = state
    {
        stints.push(Stint {
            compound,
            start_lap,
            end_lap: last_lap.max(start_lap),
        });
    }

    stints
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn laps(driver: &str, records: &[(u32, &str)]) -> Vec<LapRecord> {
        records
            .iter()
            .map(|(lap, compound)| LapRecord::new(driver, *lap, *compound))
            .collect()
    }

    #[test]
    fn test_two_stint_race() {
        let laps = laps(
            "VER",
            &[
                (1, "SOFT"),
                (2, "SOFT"),
                (3, "MEDIUM"),
                (4, "MEDIUM"),
                (5, "MEDIUM"),
            ],
        );
        assert_eq!(
            segment_stints(&laps),
            vec![Stint::new("SOFT", 1, 2), Stint::new("MEDIUM", 3, 5)]
        );
    }

    #[test]
    fn test_single_lap() {
        let laps = laps("HAM", &[(1, "HARD")]);
        assert_eq!(segment_stints(&laps), vec![Stint::new("HARD", 1, 1)]);
    }

    #[test]
    fn test_no_laps() {
        let laps: Vec<LapRecord> = Vec::new();
        assert!(segment_stints(&laps).is_empty());
    }

    #[test]
    fn test_one_lap_stint_in_the_middle() {
        let laps = laps("ALB", &[(1, "MEDIUM"), (2, "WET"), (3, "MEDIUM")]);
        assert_eq!(
            segment_stints(&laps),
            vec![
                Stint::new("MEDIUM", 1, 1),
                Stint::new("WET", 2, 2),
                Stint::new("MEDIUM", 3, 3),
            ]
        );
    }

    #[test]
    fn test_unknown_compound_is_its_own_stint() {
        let laps = laps(
            "GAS",
            &[(1, "UNKNOWN"), (2, "UNKNOWN"), (3, "HARD"), (4, "HARD")],
        );
        assert_eq!(
            segment_stints(&laps),
            vec![Stint::new("UNKNOWN", 1, 2), Stint::new("HARD", 3, 4)]
        );
    }

    #[test]
    fn test_differently_cased_labels_are_separate_stints() {
        let laps = laps("BEA", &[(1, "SOFT"), (2, "soft")]);
        assert_eq!(
            segment_stints(&laps),
            vec![Stint::new("SOFT", 1, 1), Stint::new("soft", 2, 2)]
        );
    }

    #[test]
    fn test_missing_laps_do_not_leave_gaps() {
        let laps = laps("SAI", &[(3, "SOFT"), (4, "SOFT"), (9, "HARD"), (12, "HARD")]);
        assert_eq!(
            segment_stints(&laps),
            vec![Stint::new("SOFT", 3, 8), Stint::new("HARD", 9, 12)]
        );
    }

    #[test]
    fn test_duplicate_lap_number_last_record_wins() {
        let laps = laps(
            "OCO",
            &[(1, "SOFT"), (2, "SOFT"), (2, "MEDIUM"), (3, "MEDIUM")],
        );
        assert_eq!(
            segment_stints(&laps),
            vec![Stint::new("SOFT", 1, 1), Stint::new("MEDIUM", 2, 3)]
        );

        let laps = laps_with_trailing_duplicate();
        assert_eq!(segment_stints(&laps), vec![Stint::new("HARD", 1, 2)]);
    }

    fn laps_with_trailing_duplicate() -> Vec<LapRecord> {
        laps("TSU", &[(1, "HARD"), (2, "SOFT"), (2, "HARD")])
    }

    fn compound_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["SOFT", "MEDIUM", "HARD", "INTERMEDIATE", "WET", "UNKNOWN"])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // For any lap sequence the stints partition the first-to-last lap span
        // into ordered, contiguous ranges that agree with every lap's compound.
        #[test]
        fn prop_stints_partition_lap_range(
            first_lap in 1u32..5,
            steps in prop::collection::vec((1u32..3, compound_strategy()), 1..80),
        ) {
            let mut lap_number = first_lap;
            let mut records = Vec::new();
            for (step, compound) in &steps {
                records.push(LapRecord::new("LEC", lap_number, *compound));
                lap_number += step;
            }
            let max_lap = records.last().unwrap().lap_number;

            let stints = segment_stints(&records);

            prop_assert!(!stints.is_empty());
            prop_assert_eq!(stints.first().unwrap().start_lap, first_lap);
            prop_assert_eq!(stints.last().unwrap().end_lap, max_lap);

            for pair in stints.windows(2) {
                prop_assert_eq!(pair[0].end_lap + 1, pair[1].start_lap);
                prop_assert_ne!(&pair[0].compound, &pair[1].compound);
            }
            for stint in &stints {
                prop_assert!(stint.start_lap <= stint.end_lap);
            }

            for lap in &records {
                let containing: Vec<&Stint> = stints
                    .iter()
                    .filter(|s| s.contains_lap(lap.lap_number))
                    .collect();
                prop_assert_eq!(containing.len(), 1);
                prop_assert_eq!(&containing[0].compound, &lap.compound);
            }
        }
    }
}
